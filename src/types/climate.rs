// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Climate (air conditioner) operating mode.

/// Operating mode of an infrared air conditioner remote.
///
/// The numeric values are the vendor codes used in the `setAll` command
/// parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClimateMode {
    /// Automatic mode selection.
    #[default]
    Auto,
    /// Cooling.
    Cool,
    /// Dehumidify.
    Dry,
    /// Fan only.
    Fan,
    /// Heating.
    Heat,
}

impl ClimateMode {
    /// Returns the vendor mode code (1-5).
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Auto => 1,
            Self::Cool => 2,
            Self::Dry => 3,
            Self::Fan => 4,
            Self::Heat => 5,
        }
    }
}
