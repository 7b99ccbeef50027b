// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The driver's mirrored device state.

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::response::DeviceStatus;
use crate::types::{
    ClimateMode, DeviceKind, HumidifierTarget, HumidifierWorkingState, MovementState, Position,
    PowerState, TemperatureUnit,
};

/// Default Celsius setpoint used before the user picks one.
pub(crate) const DEFAULT_TARGET_TEMPERATURE: f64 = 26.0;

/// How long a user-set position target stays authoritative after a write.
///
/// The backend reports `moving: false` for short slides, so the poll mapping
/// would otherwise snap the target back to the current position immediately.
pub(crate) const DEFAULT_TARGET_HOLD: Duration = Duration::from_secs(10);

// ============================================================================
// StateOptions - Knobs that influence the status mapping
// ============================================================================

/// Options consulted when mapping a polled status into [`LocalState`].
#[derive(Debug, Clone)]
pub struct StateOptions {
    /// Lower position clamp in percent.
    pub position_min: u8,
    /// Upper position clamp in percent. Reported slide positions are
    /// inverted against this maximum.
    pub position_max: u8,
    /// How long a freshly written position target stays pinned.
    pub target_hold: Duration,
}

impl Default for StateOptions {
    fn default() -> Self {
        Self {
            position_min: Position::MIN,
            position_max: Position::MAX,
            target_hold: DEFAULT_TARGET_HOLD,
        }
    }
}

// ============================================================================
// LocalState - Mirrored readings and pending targets
// ============================================================================

/// Per-device mirrored state.
///
/// Holds the last polled readings together with the user's pending targets.
/// Never persisted; a fresh driver starts from defaults and converges on the
/// first poll.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocalState {
    /// On/off state (target for stateful kinds, last sent for remotes).
    pub power: PowerState,
    /// Requested cover position.
    pub target_position: Position,
    /// Last reported cover position, inverted against the position maximum.
    pub current_position: Position,
    /// Derived movement direction.
    pub movement: MovementState,
    /// While set and in the future, the user target overrides poll snapping.
    pub target_pinned_until: Option<DateTime<Utc>>,
    /// Last reported ambient temperature in Celsius.
    pub temperature: Option<f64>,
    /// Last reported relative humidity in percent.
    pub humidity: Option<f64>,
    /// Climate setpoint in Celsius.
    pub target_temperature: f64,
    /// Display unit for temperatures; conversion happens at the API boundary.
    pub display_unit: TemperatureUnit,
    /// Climate operating mode.
    pub climate_mode: ClimateMode,
    /// Requested humidifier regulation mode.
    pub humidifier_target: HumidifierTarget,
    /// Manual nebulization threshold in percent.
    pub humidity_threshold: u8,
    /// Derived humidifier working state.
    pub working_state: HumidifierWorkingState,
    /// Swing flag (fans).
    pub swinging: bool,
    /// Mute flag (speakers, TVs).
    pub muted: bool,
    /// Fan speed step.
    pub fan_speed: u8,
}

impl LocalState {
    /// Creates the initial state for a freshly discovered device.
    #[must_use]
    pub fn new() -> Self {
        Self {
            target_temperature: DEFAULT_TARGET_TEMPERATURE,
            ..Self::default()
        }
    }

    /// Records a user-requested slide and pins the target.
    ///
    /// The pin keeps [`Self::apply_status`] from snapping the target back to
    /// the reported position while the device has not started moving yet.
    pub fn begin_slide(&mut self, target: Position, now: DateTime<Utc>, hold: Duration) {
        self.target_position = target;
        self.movement = MovementState::towards(target, self.current_position);
        self.target_pinned_until =
            chrono::Duration::from_std(hold).ok().map(|hold| now + hold);
    }

    /// Merges a polled status snapshot into this state.
    ///
    /// Pure with respect to time: `now` is passed in so the pin deadline can
    /// be tested without sleeping. Remote kinds carry no pollable status and
    /// are left untouched.
    pub fn apply_status(
        &mut self,
        kind: DeviceKind,
        status: &DeviceStatus,
        options: &StateOptions,
        now: DateTime<Utc>,
    ) {
        match kind {
            DeviceKind::Bot => {
                self.power = PowerState::from_bool(status.is_powered_on());
            }
            DeviceKind::Curtain => self.apply_curtain(status, options, now),
            DeviceKind::Meter => {
                self.temperature = status.temperature;
                self.humidity = status.humidity;
            }
            DeviceKind::Humidifier => self.apply_humidifier(status),
            DeviceKind::SmartFan => {
                self.power = PowerState::from_bool(status.is_powered_on());
                self.swinging = status.shaking.unwrap_or(false);
                if let Some(speed) = status.speed {
                    self.fan_speed = speed;
                }
            }
            // Infrared remotes are fire-and-forget; the cloud reports no
            // status for them.
            DeviceKind::AirConditioner
            | DeviceKind::Fan
            | DeviceKind::Light
            | DeviceKind::Speaker
            | DeviceKind::Tv => {}
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn apply_curtain(&mut self, status: &DeviceStatus, options: &StateOptions, now: DateTime<Utc>) {
        let slide = status
            .slide_position
            .unwrap_or(0.0)
            .clamp(0.0, f64::from(Position::MAX))
            .round() as u8;
        self.current_position =
            Position::clamped(options.position_max.saturating_sub(slide));

        let pinned = self
            .target_pinned_until
            .is_some_and(|deadline| now < deadline);
        if !pinned {
            self.target_pinned_until = None;
        }

        if status.moving.unwrap_or(false) || pinned {
            self.movement = MovementState::towards(self.target_position, self.current_position);
        } else {
            // No movement reported and no recent user write: the reported
            // position is authoritative.
            self.target_position = self.current_position;
            self.movement = MovementState::Stopped;
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn apply_humidifier(&mut self, status: &DeviceStatus) {
        let active = status.is_powered_on();
        self.power = PowerState::from_bool(active);
        self.temperature = status.temperature;
        self.humidity = status.humidity;
        self.humidifier_target = if status.auto.unwrap_or(false) {
            HumidifierTarget::Auto
        } else {
            HumidifierTarget::Manual
        };

        if let Some(efficiency) = status.nebulization_efficiency {
            self.humidity_threshold =
                efficiency.clamp(0.0, 100.0).round() as u8;
        }

        self.refresh_working_state();
    }

    /// Re-derives the humidifier working state from power, humidity, and
    /// threshold. Called after polls and after optimistic writes.
    pub fn refresh_working_state(&mut self) {
        let active = self.power.is_on();
        self.working_state = match self.humidifier_target {
            HumidifierTarget::Auto => {
                if active {
                    HumidifierWorkingState::Humidifying
                } else {
                    HumidifierWorkingState::Inactive
                }
            }
            HumidifierTarget::Manual => HumidifierWorkingState::derive_manual(
                active,
                self.humidity.unwrap_or(0.0),
                f64::from(self.humidity_threshold),
            ),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curtain_status(slide: f64, moving: bool) -> DeviceStatus {
        DeviceStatus {
            device_id: "C1".to_string(),
            device_type: "Curtain".to_string(),
            slide_position: Some(slide),
            moving: Some(moving),
            ..DeviceStatus::default()
        }
    }

    fn now() -> DateTime<Utc> {
        Utc::now()
    }

    #[test]
    fn curtain_position_is_inverted_against_max() {
        let mut state = LocalState::new();
        state.apply_status(
            DeviceKind::Curtain,
            &curtain_status(30.0, false),
            &StateOptions::default(),
            now(),
        );
        assert_eq!(state.current_position.value(), 70);
    }

    #[test]
    fn curtain_without_movement_snaps_target_to_current() {
        let mut state = LocalState::new();
        state.target_position = Position::clamped(90);
        state.apply_status(
            DeviceKind::Curtain,
            &curtain_status(60.0, false),
            &StateOptions::default(),
            now(),
        );
        assert_eq!(state.target_position.value(), 40);
        assert_eq!(state.movement, MovementState::Stopped);
    }

    #[test]
    fn curtain_moving_derives_direction_from_target() {
        let mut state = LocalState::new();
        state.target_position = Position::clamped(90);
        state.apply_status(
            DeviceKind::Curtain,
            &curtain_status(60.0, true),
            &StateOptions::default(),
            now(),
        );
        assert_eq!(state.target_position.value(), 90);
        assert_eq!(state.movement, MovementState::Opening);
    }

    #[test]
    fn pinned_target_survives_a_non_moving_poll() {
        let mut state = LocalState::new();
        let start = now();
        state.current_position = Position::clamped(40);
        state.begin_slide(Position::clamped(90), start, Duration::from_secs(10));

        // Backend reports moving: false right after a short slide.
        state.apply_status(
            DeviceKind::Curtain,
            &curtain_status(60.0, false),
            &StateOptions::default(),
            start + chrono::Duration::seconds(2),
        );
        assert_eq!(state.target_position.value(), 90);
        assert_eq!(state.movement, MovementState::Opening);
    }

    #[test]
    fn pin_expires_after_the_hold_window() {
        let mut state = LocalState::new();
        let start = now();
        state.current_position = Position::clamped(40);
        state.begin_slide(Position::clamped(90), start, Duration::from_secs(10));

        state.apply_status(
            DeviceKind::Curtain,
            &curtain_status(60.0, false),
            &StateOptions::default(),
            start + chrono::Duration::seconds(11),
        );
        assert_eq!(state.target_position.value(), 40);
        assert_eq!(state.movement, MovementState::Stopped);
        assert!(state.target_pinned_until.is_none());
    }

    #[test]
    fn narrowed_position_max_shifts_the_inversion() {
        let mut state = LocalState::new();
        let options = StateOptions {
            position_max: 90,
            ..StateOptions::default()
        };
        state.apply_status(DeviceKind::Curtain, &curtain_status(30.0, false), &options, now());
        assert_eq!(state.current_position.value(), 60);
    }

    #[test]
    fn meter_maps_readings() {
        let mut state = LocalState::new();
        let status = DeviceStatus {
            temperature: Some(21.5),
            humidity: Some(52.0),
            ..DeviceStatus::default()
        };
        state.apply_status(DeviceKind::Meter, &status, &StateOptions::default(), now());
        assert_eq!(state.temperature, Some(21.5));
        assert_eq!(state.humidity, Some(52.0));
    }

    #[test]
    fn humidifier_auto_on_is_humidifying() {
        let mut state = LocalState::new();
        let status = DeviceStatus {
            power: Some("on".to_string()),
            auto: Some(true),
            humidity: Some(80.0),
            ..DeviceStatus::default()
        };
        state.apply_status(DeviceKind::Humidifier, &status, &StateOptions::default(), now());
        assert_eq!(state.humidifier_target, HumidifierTarget::Auto);
        assert_eq!(state.working_state, HumidifierWorkingState::Humidifying);
    }

    #[test]
    fn humidifier_manual_above_threshold_is_idle() {
        let mut state = LocalState::new();
        let status = DeviceStatus {
            power: Some("on".to_string()),
            auto: Some(false),
            humidity: Some(60.0),
            nebulization_efficiency: Some(45.0),
            ..DeviceStatus::default()
        };
        state.apply_status(DeviceKind::Humidifier, &status, &StateOptions::default(), now());
        assert_eq!(state.humidity_threshold, 45);
        assert_eq!(state.working_state, HumidifierWorkingState::Idle);
    }

    #[test]
    fn humidifier_off_is_inactive() {
        let mut state = LocalState::new();
        let status = DeviceStatus {
            power: Some("off".to_string()),
            auto: Some(false),
            humidity: Some(30.0),
            nebulization_efficiency: Some(45.0),
            ..DeviceStatus::default()
        };
        state.apply_status(DeviceKind::Humidifier, &status, &StateOptions::default(), now());
        assert_eq!(state.working_state, HumidifierWorkingState::Inactive);
        assert!(!state.power.is_on());
    }

    #[test]
    fn smart_fan_maps_power_swing_and_speed() {
        let mut state = LocalState::new();
        let status = DeviceStatus {
            power: Some("on".to_string()),
            shaking: Some(true),
            speed: Some(3),
            ..DeviceStatus::default()
        };
        state.apply_status(DeviceKind::SmartFan, &status, &StateOptions::default(), now());
        assert!(state.power.is_on());
        assert!(state.swinging);
        assert_eq!(state.fan_speed, 3);
    }

    #[test]
    fn remote_kinds_ignore_status() {
        let mut state = LocalState::new();
        let before = state.clone();
        state.apply_status(
            DeviceKind::Tv,
            &curtain_status(30.0, true),
            &StateOptions::default(),
            now(),
        );
        assert_eq!(state, before);
    }
}
