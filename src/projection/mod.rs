// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State projection seam between drivers and the host adapter.
//!
//! Drivers never talk to host characteristics directly. After every state
//! mutation they project a [`StateSnapshot`](crate::state::StateSnapshot) and
//! hand it to the [`StateSink`] the host registered. Sinks must be cheap and
//! non-blocking; they are called from the driver's async tasks.

use crate::state::StateSnapshot;

/// Receives state projections from a driver.
pub trait StateSink: Send + Sync {
    /// Called with a fresh snapshot after every state mutation.
    fn update(&self, snapshot: &StateSnapshot);
}

/// Adapts a closure into a [`StateSink`].
///
/// # Examples
///
/// ```
/// use switchbot_cloud::projection::{FnSink, StateSink};
/// use switchbot_cloud::state::{LocalState, StateSnapshot};
///
/// let sink = FnSink::new(|snapshot: &StateSnapshot| {
///     println!("position: {}", snapshot.current_position);
/// });
/// sink.update(&StateSnapshot::project(&LocalState::new()));
/// ```
pub struct FnSink<F> {
    callback: F,
}

impl<F> FnSink<F>
where
    F: Fn(&StateSnapshot) + Send + Sync,
{
    /// Wraps a closure.
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<F> StateSink for FnSink<F>
where
    F: Fn(&StateSnapshot) + Send + Sync,
{
    fn update(&self, snapshot: &StateSnapshot) {
        (self.callback)(snapshot);
    }
}

/// A sink that discards every snapshot. Useful for headless operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl StateSink for NullSink {
    fn update(&self, _snapshot: &StateSnapshot) {}
}
