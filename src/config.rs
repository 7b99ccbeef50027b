// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Platform configuration.
//!
//! Hosts load this from their own configuration surface (typically JSON) and
//! must call [`PlatformConfig::validate`] before running discovery. Invalid
//! configuration is fatal at startup; the platform never degrades partially.

use std::time::Duration;

use crate::error::ConfigError;

/// Top-level configuration for the platform.
///
/// # Examples
///
/// ```
/// use switchbot_cloud::config::PlatformConfig;
///
/// let config: PlatformConfig = serde_json::from_str(
///     r#"{ "credentials": { "openToken": "secret" }, "refreshRate": 300 }"#,
/// ).unwrap();
/// config.validate().unwrap();
/// assert_eq!(config.refresh_interval().as_secs(), 300);
/// ```
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlatformConfig {
    /// Cloud API credentials.
    pub credentials: Option<Credentials>,
    /// Polling interval in seconds. Minimum 120, default 120.
    pub refresh_rate: Option<u64>,
    /// Names of devices to skip during discovery.
    pub hide_devices: Vec<String>,
    /// Log the full vendor inventory during discovery.
    pub device_discovery: bool,
    /// Curtain-specific options.
    pub curtain: CurtainOptions,
    /// Humidifier-specific options.
    pub humidifier: HumidifierOptions,
}

/// Cloud API credentials.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    /// Open token attached to every request as the `Authorization` header.
    pub open_token: Option<String>,
}

/// Options for curtain devices.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CurtainOptions {
    /// Lower position clamp in percent.
    pub set_min: u8,
    /// Upper position clamp in percent. Reported positions are computed
    /// against this maximum.
    pub set_max: u8,
}

impl Default for CurtainOptions {
    fn default() -> Self {
        Self {
            set_min: 0,
            set_max: 100,
        }
    }
}

/// Options for humidifier devices.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HumidifierOptions {
    /// Do not expose the built-in temperature sensor.
    pub hide_temperature: bool,
}

impl PlatformConfig {
    /// Minimum allowed refresh rate in seconds.
    pub const MIN_REFRESH_RATE_SECS: u64 = 120;
    /// Default refresh rate in seconds, used when none is configured.
    pub const DEFAULT_REFRESH_RATE_SECS: u64 = 120;

    /// Verifies the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if credentials or the open token are missing, or if
    /// the refresh rate is below [`Self::MIN_REFRESH_RATE_SECS`]. An unset
    /// refresh rate is valid and falls back to the default.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match &self.credentials {
            None => return Err(ConfigError::MissingCredentials),
            Some(creds) => match creds.open_token.as_deref() {
                None | Some("") => return Err(ConfigError::MissingToken),
                Some(_) => {}
            },
        }

        if let Some(rate) = self.refresh_rate
            && rate < Self::MIN_REFRESH_RATE_SECS
        {
            return Err(ConfigError::RefreshRateTooLow(rate));
        }

        if self.refresh_rate.is_none() {
            tracing::warn!("no refresh rate configured, using the default");
        }

        Ok(())
    }

    /// Returns the configured open token.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Self::validate`] for missing credentials.
    pub fn token(&self) -> Result<&str, ConfigError> {
        self.credentials
            .as_ref()
            .ok_or(ConfigError::MissingCredentials)?
            .open_token
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or(ConfigError::MissingToken)
    }

    /// Returns the effective polling interval.
    #[must_use]
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_rate.unwrap_or(Self::DEFAULT_REFRESH_RATE_SECS))
    }

    /// Returns `true` if the named device is on the hide list.
    #[must_use]
    pub fn is_hidden(&self, device_name: &str) -> bool {
        self.hide_devices.iter().any(|n| n == device_name)
    }
}
