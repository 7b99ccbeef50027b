// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Humidifier commands.

use super::CommandRequest;

impl CommandRequest {
    /// `setMode` with a nebulization threshold in percent.
    #[must_use]
    pub fn set_threshold(threshold: u8) -> Self {
        Self::with_parameter("setMode", threshold.to_string())
    }

    /// `setMode auto` (device-regulated humidity).
    #[must_use]
    pub fn set_mode_auto() -> Self {
        Self::with_parameter("setMode", "auto")
    }
}
