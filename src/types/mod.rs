// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core value types for SwitchBot devices.
//!
//! This module provides strongly-typed representations of device categories,
//! power states, positions, temperatures, and operating modes, replacing the
//! loose strings and magic numbers of the vendor wire format.

mod climate;
mod humidifier;
mod kind;
mod position;
mod power;
mod remote_key;
mod temperature;

pub use climate::ClimateMode;
pub use humidifier::{HumidifierTarget, HumidifierWorkingState};
pub use kind::DeviceKind;
pub use position::{MovementState, Position};
pub use power::PowerState;
pub use remote_key::RemoteKey;
pub use temperature::TemperatureUnit;
