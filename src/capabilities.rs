// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device capability flags.
//!
//! A single parameterized [driver](crate::driver) replaces the per-category
//! accessory classes of a classic integration; capability flags describe what
//! a given device category can do, and drivers check them before accepting a
//! write.

use crate::types::DeviceKind;

/// Capabilities of a SwitchBot device category.
///
/// # Examples
///
/// ```
/// use switchbot_cloud::Capabilities;
/// use switchbot_cloud::types::DeviceKind;
///
/// let curtain = Capabilities::for_kind(DeviceKind::Curtain);
/// assert!(curtain.position);
/// assert!(curtain.status_polling);
///
/// let tv = Capabilities::for_kind(DeviceKind::Tv);
/// assert!(tv.remote_keys);
/// assert!(!tv.status_polling);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
// Each boolean represents an independent device feature flag that cannot be
// meaningfully combined into an enum or state machine.
#[allow(clippy::struct_excessive_bools)]
pub struct Capabilities {
    /// The cloud exposes a status endpoint for this device; the driver polls.
    pub status_polling: bool,
    /// Supports on/off power control.
    pub power: bool,
    /// Supports target/current position (covers).
    pub position: bool,
    /// Reports or regulates temperature.
    pub temperature: bool,
    /// Reports or regulates relative humidity.
    pub humidity: bool,
    /// Accepts a temperature setpoint and an operating mode.
    pub climate_control: bool,
    /// Accepts a humidity regulation mode and threshold.
    pub humidity_control: bool,
    /// Supports a swing/oscillation toggle.
    pub swing: bool,
    /// Supports volume/mute control.
    pub volume: bool,
    /// Accepts momentary remote key presses.
    pub remote_keys: bool,
}

impl Capabilities {
    /// Returns the capabilities of a device category.
    #[must_use]
    pub fn for_kind(kind: DeviceKind) -> Self {
        match kind {
            DeviceKind::Bot => Self {
                status_polling: true,
                power: true,
                ..Self::default()
            },
            DeviceKind::Curtain => Self {
                status_polling: true,
                position: true,
                ..Self::default()
            },
            DeviceKind::Meter => Self {
                status_polling: true,
                temperature: true,
                humidity: true,
                ..Self::default()
            },
            DeviceKind::Humidifier => Self {
                status_polling: true,
                power: true,
                temperature: true,
                humidity: true,
                humidity_control: true,
                ..Self::default()
            },
            DeviceKind::SmartFan => Self {
                status_polling: true,
                power: true,
                swing: true,
                ..Self::default()
            },
            DeviceKind::AirConditioner => Self {
                power: true,
                temperature: true,
                climate_control: true,
                ..Self::default()
            },
            DeviceKind::Fan => Self {
                power: true,
                swing: true,
                ..Self::default()
            },
            DeviceKind::Light => Self {
                power: true,
                ..Self::default()
            },
            DeviceKind::Speaker => Self {
                power: true,
                volume: true,
                ..Self::default()
            },
            DeviceKind::Tv => Self {
                power: true,
                volume: true,
                remote_keys: true,
                ..Self::default()
            },
        }
    }
}
