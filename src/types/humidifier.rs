// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Humidifier target and working states.

/// Requested humidifier regulation mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HumidifierTarget {
    /// The device regulates humidity itself.
    #[default]
    Auto,
    /// The device holds a user-set nebulization threshold.
    Manual,
}

/// Observed working state, derived from the raw auto flag, power, and the
/// threshold comparison (never reported directly by the vendor).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HumidifierWorkingState {
    /// Powered off.
    #[default]
    Inactive,
    /// Powered on but the ambient humidity already meets the threshold.
    Idle,
    /// Actively humidifying.
    Humidifying,
}

impl HumidifierWorkingState {
    /// Derives the working state for manual mode.
    ///
    /// In auto mode the device is always considered humidifying while on.
    #[must_use]
    pub fn derive_manual(active: bool, humidity: f64, threshold: f64) -> Self {
        if humidity > threshold {
            Self::Idle
        } else if !active {
            Self::Inactive
        } else {
            Self::Humidifying
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_above_threshold_is_idle() {
        assert_eq!(
            HumidifierWorkingState::derive_manual(true, 60.0, 45.0),
            HumidifierWorkingState::Idle
        );
    }

    #[test]
    fn manual_inactive_when_off() {
        assert_eq!(
            HumidifierWorkingState::derive_manual(false, 40.0, 45.0),
            HumidifierWorkingState::Inactive
        );
    }

    #[test]
    fn manual_humidifying_when_on_below_threshold() {
        assert_eq!(
            HumidifierWorkingState::derive_manual(true, 40.0, 45.0),
            HumidifierWorkingState::Humidifying
        );
    }
}
