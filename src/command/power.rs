// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power commands, shared by every powered category.

use crate::types::PowerState;

use super::CommandRequest;

impl CommandRequest {
    /// `turnOn` with the default parameter.
    #[must_use]
    pub fn turn_on() -> Self {
        Self::new("turnOn")
    }

    /// `turnOff` with the default parameter.
    #[must_use]
    pub fn turn_off() -> Self {
        Self::new("turnOff")
    }

    /// Power command matching a [`PowerState`].
    #[must_use]
    pub fn set_power(state: PowerState) -> Self {
        match state {
            PowerState::On => Self::turn_on(),
            PowerState::Off => Self::turn_off(),
        }
    }

    /// `press` (Bot momentary actuation).
    #[must_use]
    pub fn press() -> Self {
        Self::new("press")
    }
}
