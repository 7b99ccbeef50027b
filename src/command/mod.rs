// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Vendor command definitions.
//!
//! Every outbound command is a `{commandType, command, parameter}` triple
//! POSTed to `/devices/{id}/commands`. This module provides typed
//! constructors per device category so drivers never assemble raw strings.
//!
//! # Available Commands
//!
//! | Constructor | Command | Parameter |
//! |-------------|---------|-----------|
//! | [`CommandRequest::turn_on`] | `turnOn` | `default` |
//! | [`CommandRequest::turn_off`] | `turnOff` | `default` |
//! | [`CommandRequest::press`] | `press` | `default` |
//! | [`CommandRequest::set_position`] | `setPosition` | `0,ff,<position>` |
//! | [`CommandRequest::set_threshold`] | `setMode` | `<threshold>` |
//! | [`CommandRequest::set_mode_auto`] | `setMode` | `auto` |
//! | [`CommandRequest::set_all`] | `setAll` | `<temp>,<mode>,<fan>,<on\|off>` |
//! | [`CommandRequest::swing`] | `swing` | `default` |
//! | [`CommandRequest::set_mute`] | `setMute` | `default` |
//! | [`CommandRequest::remote_key`] | per key | `default` |

mod climate;
mod humidifier;
mod position;
mod power;
mod remote;

/// Default parameter for commands that do not carry a value.
pub const DEFAULT_PARAMETER: &str = "default";

/// A command payload for the vendor commands endpoint.
///
/// # Examples
///
/// ```
/// use switchbot_cloud::command::CommandRequest;
///
/// let request = CommandRequest::turn_on();
/// let json = serde_json::to_value(&request).unwrap();
/// assert_eq!(json["commandType"], "command");
/// assert_eq!(json["command"], "turnOn");
/// assert_eq!(json["parameter"], "default");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandRequest {
    /// Always `"command"` for user-initiated writes.
    pub command_type: String,
    /// The vendor command name.
    pub command: String,
    /// Command-specific parameter string, or `"default"`.
    pub parameter: String,
}

impl CommandRequest {
    /// Creates a command with the default parameter.
    #[must_use]
    pub fn new(command: impl Into<String>) -> Self {
        Self::with_parameter(command, DEFAULT_PARAMETER)
    }

    /// Creates a command with an explicit parameter.
    #[must_use]
    pub fn with_parameter(command: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self {
            command_type: "command".to_string(),
            command: command.into(),
            parameter: parameter.into(),
        }
    }
}
