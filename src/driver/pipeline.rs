// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Debounced command push pipeline.
//!
//! Write methods signal this pipeline instead of POSTing directly. Signals
//! are coalesced: the push fires once the signal stream has been quiet for
//! the debounce window, carrying whatever state accumulated by then. A burst
//! of slider events therefore produces exactly one command.

use std::sync::Arc;
use std::sync::atomic::Ordering;

use tokio::sync::mpsc::UnboundedReceiver;

use crate::command::CommandRequest;
use crate::error::Result;
use crate::state::LocalState;
use crate::types::{DeviceKind, HumidifierTarget};

use super::{DriverInner, DriverOptions};

/// Consumes push signals until the driver drops its sender.
pub(crate) async fn run_push_loop(inner: Arc<DriverInner>, mut rx: UnboundedReceiver<()>) {
    while rx.recv().await.is_some() {
        // Keep restarting the quiet window while signals arrive.
        loop {
            match tokio::time::timeout(inner.options.debounce_window, rx.recv()).await {
                Ok(Some(())) => {}
                Ok(None) => return,
                Err(_) => break,
            }
        }
        push_changes(&inner).await;
    }
}

/// Pushes the accumulated state as one command.
async fn push_changes(inner: &DriverInner) {
    if inner.busy.swap(true, Ordering::SeqCst) {
        tracing::debug!(
            device_id = %inner.descriptor.id,
            "Push already in flight, dropping this one",
        );
        return;
    }

    let request = {
        let guard = inner.state.lock();
        build_request(
            inner.descriptor.kind,
            &guard.local,
            &guard.confirmed,
            &inner.options,
        )
    };

    let result = match &request {
        Some(request) => inner.client.send_command(&inner.descriptor.id, request).await,
        None => Ok(()),
    };

    match result {
        Ok(()) => {
            if request.is_some() {
                let snapshot = {
                    let mut guard = inner.state.lock();
                    guard.confirmed = guard.local.clone();
                    inner.project(&guard.local)
                };
                inner.sink.update(&snapshot);
                inner.suppress_polls.store(true, Ordering::SeqCst);
            }
        }
        Err(error) => {
            tracing::warn!(
                device_id = %inner.descriptor.id,
                error = %error,
                "Push failed, rolling back",
            );
            let snapshot = {
                let mut guard = inner.state.lock();
                guard.local = guard.confirmed.clone();
                inner.project(&guard.local)
            };
            inner.sink.update(&snapshot);
        }
    }

    // Cleared on every path, including failure.
    inner.busy.store(false, Ordering::SeqCst);
}

/// Sends a momentary command immediately, skipping the debounce window.
///
/// Returns `Ok(false)` when another push holds the busy flag; momentary
/// commands are dropped rather than queued.
pub(crate) async fn push_now(inner: &DriverInner, request: CommandRequest) -> Result<bool> {
    if inner.busy.swap(true, Ordering::SeqCst) {
        tracing::debug!(
            device_id = %inner.descriptor.id,
            command = %request.command,
            "Push already in flight, dropping momentary command",
        );
        return Ok(false);
    }

    let result = inner.client.send_command(&inner.descriptor.id, &request).await;
    inner.busy.store(false, Ordering::SeqCst);

    result.map(|()| true)
}

/// Derives the command a push should carry from the accumulated state.
///
/// Pure; `confirmed` is the last acknowledged state and disambiguates
/// transitions (a humidifier power-on with unchanged regulation settings
/// sends `turnOn`, not a mode write).
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn build_request(
    kind: DeviceKind,
    local: &LocalState,
    confirmed: &LocalState,
    options: &DriverOptions,
) -> Option<CommandRequest> {
    match kind {
        DeviceKind::Meter => None,
        DeviceKind::Bot
        | DeviceKind::SmartFan
        | DeviceKind::Fan
        | DeviceKind::Light
        | DeviceKind::Speaker
        | DeviceKind::Tv => Some(CommandRequest::set_power(local.power)),
        DeviceKind::Curtain => {
            let target = local
                .target_position
                .value()
                .clamp(options.position_min, options.position_max);
            // The wire speaks slide positions; invert the host position the
            // same way the poll mapping does.
            let slide = options.position_max - target;
            Some(CommandRequest::set_position(slide))
        }
        DeviceKind::Humidifier => {
            if !local.power.is_on() {
                return Some(CommandRequest::turn_off());
            }
            let regulation_unchanged = local.humidifier_target == confirmed.humidifier_target
                && local.humidity_threshold == confirmed.humidity_threshold;
            if !confirmed.power.is_on() && regulation_unchanged {
                return Some(CommandRequest::turn_on());
            }
            match local.humidifier_target {
                HumidifierTarget::Auto => Some(CommandRequest::set_mode_auto()),
                HumidifierTarget::Manual => {
                    Some(CommandRequest::set_threshold(local.humidity_threshold))
                }
            }
        }
        DeviceKind::AirConditioner => {
            if !local.power.is_on() {
                return Some(CommandRequest::turn_off());
            }
            Some(CommandRequest::set_all(
                local.target_temperature.round() as i32,
                local.climate_mode,
                local.power,
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ClimateMode, Position, PowerState};

    fn options() -> DriverOptions {
        DriverOptions::default()
    }

    #[test]
    fn meter_never_pushes() {
        let state = LocalState::new();
        assert!(build_request(DeviceKind::Meter, &state, &state, &options()).is_none());
    }

    #[test]
    fn bot_pushes_power() {
        let mut state = LocalState::new();
        state.power = PowerState::On;
        let request = build_request(DeviceKind::Bot, &state, &LocalState::new(), &options());
        assert_eq!(request.unwrap().command, "turnOn");
    }

    #[test]
    fn curtain_inverts_target_into_slide_position() {
        let mut state = LocalState::new();
        state.target_position = Position::clamped(70);
        let request =
            build_request(DeviceKind::Curtain, &state, &LocalState::new(), &options()).unwrap();
        assert_eq!(request.command, "setPosition");
        assert_eq!(request.parameter, "0,ff,30");
    }

    #[test]
    fn curtain_target_is_clamped_to_configured_range() {
        let mut state = LocalState::new();
        state.target_position = Position::clamped(100);
        let narrowed = DriverOptions {
            position_max: 90,
            ..DriverOptions::default()
        };
        let request =
            build_request(DeviceKind::Curtain, &state, &LocalState::new(), &narrowed).unwrap();
        assert_eq!(request.parameter, "0,ff,0");
    }

    #[test]
    fn humidifier_off_sends_turn_off() {
        let state = LocalState::new();
        let request =
            build_request(DeviceKind::Humidifier, &state, &state, &options()).unwrap();
        assert_eq!(request.command, "turnOff");
    }

    #[test]
    fn humidifier_plain_power_on_sends_turn_on() {
        let mut state = LocalState::new();
        state.power = PowerState::On;
        let request =
            build_request(DeviceKind::Humidifier, &state, &LocalState::new(), &options()).unwrap();
        assert_eq!(request.command, "turnOn");
    }

    #[test]
    fn humidifier_manual_threshold_sends_set_mode() {
        let mut state = LocalState::new();
        state.power = PowerState::On;
        state.humidifier_target = HumidifierTarget::Manual;
        state.humidity_threshold = 45;
        let request =
            build_request(DeviceKind::Humidifier, &state, &LocalState::new(), &options()).unwrap();
        assert_eq!(request.command, "setMode");
        assert_eq!(request.parameter, "45");
    }

    #[test]
    fn air_conditioner_off_sends_plain_turn_off() {
        let state = LocalState::new();
        let request = build_request(
            DeviceKind::AirConditioner,
            &state,
            &LocalState::new(),
            &options(),
        )
        .unwrap();
        assert_eq!(request.command, "turnOff");
        assert_eq!(request.parameter, "default");
    }

    #[test]
    fn air_conditioner_sends_full_state() {
        let mut state = LocalState::new();
        state.power = PowerState::On;
        state.target_temperature = 30.0;
        state.climate_mode = ClimateMode::Cool;
        let request = build_request(
            DeviceKind::AirConditioner,
            &state,
            &LocalState::new(),
            &options(),
        )
        .unwrap();
        assert_eq!(request.command, "setAll");
        assert_eq!(request.parameter, "30,2,1,on");
    }
}
