// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cover position and movement types.

use std::fmt;

use crate::error::ValueError;

/// Cover position in percent, where 0 is fully closed and 100 fully open.
///
/// # Examples
///
/// ```
/// use switchbot_cloud::types::Position;
///
/// let pos = Position::new(70).unwrap();
/// assert_eq!(pos.value(), 70);
///
/// // Out-of-range values are rejected...
/// assert!(Position::new(150).is_err());
/// // ...or clamped when coming from the wire.
/// assert_eq!(Position::clamped(150).value(), 100);
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash,
    serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct Position(u8);

impl Position {
    /// Minimum position (fully closed).
    pub const MIN: u8 = 0;
    /// Maximum position (fully open).
    pub const MAX: u8 = 100;

    /// Creates a new position.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::OutOfRange`] if `value` exceeds 100.
    pub fn new(value: u8) -> Result<Self, ValueError> {
        if value > Self::MAX {
            return Err(ValueError::OutOfRange {
                min: Self::MIN,
                max: Self::MAX,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    /// Creates a position, clamping to the valid range.
    #[must_use]
    pub fn clamped(value: u8) -> Self {
        Self(value.min(Self::MAX))
    }

    /// Returns the position in percent.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Movement state of a cover, derived from target vs current position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementState {
    /// Position is increasing (cover opening).
    Opening,
    /// Position is decreasing (cover closing).
    Closing,
    /// Cover is not moving.
    #[default]
    Stopped,
}

impl MovementState {
    /// Derives the movement direction towards `target` from `current`.
    #[must_use]
    pub fn towards(target: Position, current: Position) -> Self {
        match target.cmp(&current) {
            std::cmp::Ordering::Greater => Self::Opening,
            std::cmp::Ordering::Less => Self::Closing,
            std::cmp::Ordering::Equal => Self::Stopped,
        }
    }

    /// Returns `true` unless the state is [`MovementState::Stopped`].
    #[must_use]
    pub fn is_moving(self) -> bool {
        !matches!(self, Self::Stopped)
    }
}
