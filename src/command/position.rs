// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cover position command.

use super::CommandRequest;

impl CommandRequest {
    /// `setPosition` for a curtain.
    ///
    /// The parameter is `<index>,<mode>,<position>`; index 0 and mode `ff`
    /// ("default mode") are fixed, `position` is the vendor slide position
    /// (0 = open side) already adjusted by the caller against the configured
    /// maximum.
    #[must_use]
    pub fn set_position(slide_position: u8) -> Self {
        Self::with_parameter("setPosition", format!("0,ff,{slide_position}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_position_parameter_encoding() {
        let request = CommandRequest::set_position(30);
        assert_eq!(request.command, "setPosition");
        assert_eq!(request.parameter, "0,ff,30");
    }

    #[test]
    fn set_position_extremes() {
        assert_eq!(CommandRequest::set_position(0).parameter, "0,ff,0");
        assert_eq!(CommandRequest::set_position(100).parameter, "0,ff,100");
    }
}
