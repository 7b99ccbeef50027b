// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device category classification.

use std::fmt;

/// Category of a SwitchBot device.
///
/// Physical devices are enumerated from the vendor `deviceList` and support
/// status polling; infrared remotes come from the `infraredRemoteList` and
/// are write-only (the cloud has no status endpoint for them).
///
/// # Examples
///
/// ```
/// use switchbot_cloud::types::DeviceKind;
///
/// assert_eq!(DeviceKind::from_device_type("Curtain"), Some(DeviceKind::Curtain));
/// assert_eq!(
///     DeviceKind::from_remote_type("DIY Air Conditioner"),
///     Some(DeviceKind::AirConditioner),
/// );
/// assert_eq!(DeviceKind::from_device_type("Color Bulb"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum DeviceKind {
    /// SwitchBot Bot (mechanical switch presser).
    Bot,
    /// SwitchBot Curtain (window covering).
    Curtain,
    /// SwitchBot Meter (temperature/humidity sensor).
    Meter,
    /// SwitchBot Humidifier.
    Humidifier,
    /// SwitchBot Smart Fan.
    SmartFan,
    /// Infrared air conditioner remote.
    AirConditioner,
    /// Infrared fan remote.
    Fan,
    /// Infrared light remote.
    Light,
    /// Infrared speaker remote.
    Speaker,
    /// Infrared TV remote.
    Tv,
}

impl DeviceKind {
    /// Maps a physical `deviceType` string from the device list.
    ///
    /// Returns `None` for unsupported types; callers log and skip those,
    /// they are never an error.
    #[must_use]
    pub fn from_device_type(device_type: &str) -> Option<Self> {
        match device_type {
            "Bot" => Some(Self::Bot),
            "Curtain" => Some(Self::Curtain),
            "Meter" => Some(Self::Meter),
            "Humidifier" => Some(Self::Humidifier),
            "Smart Fan" => Some(Self::SmartFan),
            _ => None,
        }
    }

    /// Maps a `remoteType` string from the infrared remote list.
    ///
    /// User-trained remotes carry a `DIY ` prefix and map to the same kind
    /// as their factory counterpart.
    #[must_use]
    pub fn from_remote_type(remote_type: &str) -> Option<Self> {
        let base = remote_type.strip_prefix("DIY ").unwrap_or(remote_type);
        match base {
            "Air Conditioner" => Some(Self::AirConditioner),
            "Fan" => Some(Self::Fan),
            "Light" => Some(Self::Light),
            "Speaker" => Some(Self::Speaker),
            "TV" => Some(Self::Tv),
            _ => None,
        }
    }

    /// Returns `true` for infrared remote categories.
    ///
    /// Remotes have no vendor status endpoint; drivers for them never poll.
    #[must_use]
    pub fn is_remote(self) -> bool {
        matches!(
            self,
            Self::AirConditioner | Self::Fan | Self::Light | Self::Speaker | Self::Tv
        )
    }

    /// Returns the vendor-facing name of this category.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bot => "Bot",
            Self::Curtain => "Curtain",
            Self::Meter => "Meter",
            Self::Humidifier => "Humidifier",
            Self::SmartFan => "Smart Fan",
            Self::AirConditioner => "Air Conditioner",
            Self::Fan => "Fan",
            Self::Light => "Light",
            Self::Speaker => "Speaker",
            Self::Tv => "TV",
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
