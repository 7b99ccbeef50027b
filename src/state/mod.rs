// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mirrored device state and its host-visible projection.
//!
//! [`LocalState`] is the driver's in-memory mirror of a device: the last
//! polled readings plus the user's pending targets. It is updated in two
//! places only, by [`LocalState::apply_status`] after a successful poll and
//! by the driver's write methods. [`StateSnapshot`] is the immutable
//! projection handed to the host after every mutation.

mod local;
mod snapshot;

pub use local::{LocalState, StateOptions};
pub use snapshot::StateSnapshot;
