// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Host-visible state projection.

use crate::types::{
    ClimateMode, HumidifierTarget, HumidifierWorkingState, MovementState, PowerState,
    TemperatureUnit,
};

use super::LocalState;

/// An immutable projection of [`LocalState`] for the host adapter.
///
/// Produced after every state mutation and handed to the registered
/// [`StateSink`](crate::projection::StateSink). Temperatures are always in
/// Celsius; [`Self::display_unit`] tells the host how to render them.
///
/// # Examples
///
/// ```
/// use switchbot_cloud::state::{LocalState, StateSnapshot};
///
/// let state = LocalState::new();
/// let snapshot = StateSnapshot::project(&state);
/// assert!(!snapshot.active);
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateSnapshot {
    /// Whether the device is on.
    pub active: bool,
    /// Current cover position in percent.
    pub current_position: u8,
    /// Requested cover position in percent.
    pub target_position: u8,
    /// Movement direction.
    pub movement: MovementState,
    /// Ambient temperature in Celsius, when the device reports one.
    pub current_temperature: Option<f64>,
    /// Relative humidity in percent, when the device reports one.
    pub current_humidity: Option<f64>,
    /// Climate setpoint in Celsius.
    pub target_temperature: f64,
    /// Preferred display unit for temperatures.
    pub display_unit: TemperatureUnit,
    /// Climate operating mode.
    pub climate_mode: ClimateMode,
    /// Requested humidifier regulation mode.
    pub humidifier_target: HumidifierTarget,
    /// Manual nebulization threshold in percent.
    pub humidity_threshold: u8,
    /// Derived humidifier working state.
    pub working_state: HumidifierWorkingState,
    /// Swing flag.
    pub swinging: bool,
    /// Mute flag.
    pub muted: bool,
    /// Fan speed step.
    pub fan_speed: u8,
}

impl StateSnapshot {
    /// Projects the mirrored state into a snapshot. Pure.
    #[must_use]
    pub fn project(state: &LocalState) -> Self {
        Self {
            active: state.power == PowerState::On,
            current_position: state.current_position.value(),
            target_position: state.target_position.value(),
            movement: state.movement,
            current_temperature: state.temperature,
            current_humidity: state.humidity,
            target_temperature: state.target_temperature,
            display_unit: state.display_unit,
            climate_mode: state.climate_mode,
            humidifier_target: state.humidifier_target,
            humidity_threshold: state.humidity_threshold,
            working_state: state.working_state,
            swinging: state.swinging,
            muted: state.muted,
            fan_speed: state.fan_speed,
        }
    }
}
