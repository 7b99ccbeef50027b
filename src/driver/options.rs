// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Driver timing and mapping options.

use std::time::Duration;

use crate::config::PlatformConfig;
use crate::state::StateOptions;
use crate::types::Position;

/// Default debounce window for coalescing writes into one push.
pub const DEFAULT_DEBOUNCE_WINDOW: Duration = Duration::from_millis(100);

/// Default interval of the movement tick while a cover is sliding.
pub const DEFAULT_MOVEMENT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Per-driver options.
///
/// [`DriverOptions::from_config`] derives them from a validated
/// [`PlatformConfig`]; the raw struct is public so tests can shorten the
/// timing windows. The minimum refresh rate is enforced at config
/// validation, not here.
#[derive(Debug, Clone)]
pub struct DriverOptions {
    /// Status poll interval.
    pub refresh_interval: Duration,
    /// Quiet window after the last write before a push fires.
    pub debounce_window: Duration,
    /// Interval of the extra poll tick while a cover is moving.
    pub movement_poll_interval: Duration,
    /// How long a freshly written position target stays pinned.
    pub target_hold: Duration,
    /// Lower position clamp in percent.
    pub position_min: u8,
    /// Upper position clamp in percent.
    pub position_max: u8,
    /// Drop the temperature reading from projections.
    pub hide_temperature: bool,
}

impl Default for DriverOptions {
    fn default() -> Self {
        Self {
            refresh_interval: Duration::from_secs(PlatformConfig::DEFAULT_REFRESH_RATE_SECS),
            debounce_window: DEFAULT_DEBOUNCE_WINDOW,
            movement_poll_interval: DEFAULT_MOVEMENT_POLL_INTERVAL,
            target_hold: StateOptions::default().target_hold,
            position_min: Position::MIN,
            position_max: Position::MAX,
            hide_temperature: false,
        }
    }
}

impl DriverOptions {
    /// Derives driver options from a validated platform configuration.
    #[must_use]
    pub fn from_config(config: &PlatformConfig) -> Self {
        Self {
            refresh_interval: config.refresh_interval(),
            position_min: config.curtain.set_min,
            position_max: config.curtain.set_max,
            hide_temperature: config.humidifier.hide_temperature,
            ..Self::default()
        }
    }

    /// Returns the subset consulted by the status mapping.
    #[must_use]
    pub fn state_options(&self) -> StateOptions {
        StateOptions {
            position_min: self.position_min,
            position_max: self.position_max,
            target_hold: self.target_hold,
        }
    }
}
