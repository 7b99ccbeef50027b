// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Air conditioner commands.

use crate::types::{ClimateMode, PowerState};

use super::CommandRequest;

impl CommandRequest {
    /// `setAll` for an infrared air conditioner.
    ///
    /// The parameter is `<temperature>,<mode>,<fan speed>,<power>` with the
    /// temperature in whole degrees Celsius and the vendor mode code. Fan
    /// speed 1 is "auto".
    #[must_use]
    pub fn set_all(temperature_c: i32, mode: ClimateMode, power: PowerState) -> Self {
        Self::with_parameter(
            "setAll",
            format!("{temperature_c},{},1,{power}", mode.code()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_all_parameter_encoding() {
        let request = CommandRequest::set_all(30, ClimateMode::Cool, PowerState::On);
        assert_eq!(request.command, "setAll");
        assert_eq!(request.parameter, "30,2,1,on");
    }

    #[test]
    fn set_all_off() {
        let request = CommandRequest::set_all(26, ClimateMode::Auto, PowerState::Off);
        assert_eq!(request.parameter, "26,1,1,off");
    }
}
