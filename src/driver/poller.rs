// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Status polling.
//!
//! Two loops feed the mirrored state: the regular refresh loop at the
//! configured interval, and a 1 s movement tick that only polls while a
//! cover is sliding. Both stand down while a push is in flight, and the
//! refresh loop additionally skips one full cycle after a successful push so
//! a stale backend read cannot undo the optimistic state.

use std::sync::Arc;
use std::sync::atomic::Ordering;

use chrono::Utc;
use tokio::time::MissedTickBehavior;

use crate::error::Result;

use super::DriverInner;

/// Regular status refresh at the configured interval.
///
/// The first tick fires immediately, seeding the mirrored state right after
/// startup.
pub(crate) async fn run_poll_loop(inner: Arc<DriverInner>) {
    let mut ticker = tokio::time::interval(inner.options.refresh_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;

        if inner.busy.load(Ordering::SeqCst) {
            tracing::debug!(
                device_id = %inner.descriptor.id,
                "Push in flight, skipping poll tick",
            );
            continue;
        }
        if inner.suppress_polls.swap(false, Ordering::SeqCst) {
            tracing::debug!(
                device_id = %inner.descriptor.id,
                "Skipping one poll cycle after push",
            );
            continue;
        }

        if let Err(error) = refresh_status(&inner).await {
            tracing::warn!(
                device_id = %inner.descriptor.id,
                error = %error,
                "Status refresh failed",
            );
        }
    }
}

/// Fast tick that keeps positions fresh while a cover is moving.
pub(crate) async fn run_movement_loop(inner: Arc<DriverInner>) {
    let mut ticker = tokio::time::interval(inner.options.movement_poll_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;

        let moving = inner.state.lock().local.movement.is_moving();
        if !moving || inner.busy.load(Ordering::SeqCst) {
            continue;
        }

        if let Err(error) = refresh_status(&inner).await {
            tracing::debug!(
                device_id = %inner.descriptor.id,
                error = %error,
                "Movement tick failed",
            );
        }
    }
}

/// Fetches the device status once and merges it into the mirrored state.
///
/// A successful poll becomes the new confirmed state and is projected to the
/// host.
pub(crate) async fn refresh_status(inner: &DriverInner) -> Result<()> {
    let status = inner.client.device_status(&inner.descriptor.id).await?;

    let snapshot = {
        let mut guard = inner.state.lock();
        let state_options = inner.options.state_options();
        guard
            .local
            .apply_status(inner.descriptor.kind, &status, &state_options, Utc::now());
        guard.confirmed = guard.local.clone();
        inner.project(&guard.local)
    };
    inner.sink.update(&snapshot);

    Ok(())
}
