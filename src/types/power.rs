// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power state type.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// On/off state as reported and accepted by the vendor API.
///
/// The cloud reports power as the lowercase strings `"on"` / `"off"`.
///
/// # Examples
///
/// ```
/// use switchbot_cloud::types::PowerState;
///
/// let state: PowerState = "on".parse().unwrap();
/// assert_eq!(state, PowerState::On);
/// assert!(state.is_on());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerState {
    /// Device is powered on.
    On,
    /// Device is powered off.
    #[default]
    Off,
}

impl PowerState {
    /// Returns `true` if the state is [`PowerState::On`].
    #[must_use]
    pub fn is_on(self) -> bool {
        matches!(self, Self::On)
    }

    /// Creates a power state from a boolean.
    #[must_use]
    pub fn from_bool(on: bool) -> Self {
        if on { Self::On } else { Self::Off }
    }

    /// Returns the vendor wire string (`"on"` / `"off"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
        }
    }
}

impl FromStr for PowerState {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "on" | "ON" => Ok(Self::On),
            "off" | "OFF" => Ok(Self::Off),
            other => Err(ValueError::InvalidPowerState(other.to_string())),
        }
    }
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
