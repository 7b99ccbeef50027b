// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Momentary commands for infrared remotes.

use crate::types::RemoteKey;

use super::CommandRequest;

impl CommandRequest {
    /// A momentary remote key press.
    #[must_use]
    pub fn remote_key(key: RemoteKey) -> Self {
        Self::new(key.command())
    }

    /// `swing` toggle for fan remotes.
    #[must_use]
    pub fn swing() -> Self {
        Self::new("swing")
    }

    /// `setMute` toggle for speaker remotes.
    #[must_use]
    pub fn set_mute() -> Self {
        Self::new("setMute")
    }
}
