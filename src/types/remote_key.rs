// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Remote control keys for infrared TV remotes.

/// A momentary key press on a TV remote.
///
/// Each key maps 1:1 onto a vendor command; all of them carry the
/// `"default"` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemoteKey {
    /// Directional pad up.
    Up,
    /// Directional pad down.
    Down,
    /// Directional pad left.
    Left,
    /// Directional pad right.
    Right,
    /// Confirm / OK.
    Ok,
    /// Back.
    Back,
    /// Menu.
    Menu,
    /// Volume up.
    VolumeUp,
    /// Volume down.
    VolumeDown,
    /// Next channel.
    ChannelUp,
    /// Previous channel.
    ChannelDown,
}

impl RemoteKey {
    /// Returns the vendor command name for this key.
    #[must_use]
    pub fn command(self) -> &'static str {
        match self {
            Self::Up => "Up",
            Self::Down => "Down",
            Self::Left => "Left",
            Self::Right => "Right",
            Self::Ok => "Ok",
            Self::Back => "Back",
            Self::Menu => "Menu",
            Self::VolumeUp => "volumeAdd",
            Self::VolumeDown => "volumeSub",
            Self::ChannelUp => "channelAdd",
            Self::ChannelDown => "channelSub",
        }
    }
}
