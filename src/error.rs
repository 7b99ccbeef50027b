// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `switchbot_cloud` library.
//!
//! This module provides a comprehensive error hierarchy for handling failures
//! across the library: configuration validation, cloud API communication,
//! JSON parsing, and value constraints.

use thiserror::Error;

/// The main error type for this library.
///
/// This enum encompasses all possible errors that can occur when interacting
/// with the SwitchBot cloud API.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during configuration validation.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Error occurred during cloud API communication.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while parsing a response.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Device does not support the requested capability.
    #[error("device does not support this capability")]
    CapabilityNotSupported,
}

/// Errors related to platform configuration.
///
/// Any of these is fatal at startup: discovery must not run with an invalid
/// configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No credentials block was provided.
    #[error("missing credentials")]
    MissingCredentials,

    /// The open token is missing or empty.
    #[error("missing openToken")]
    MissingToken,

    /// The configured refresh rate is below the allowed minimum.
    #[error("refresh rate {0} is below the minimum of 120 seconds")]
    RefreshRateTooLow(u64),
}

/// Errors related to cloud API communication.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The vendor API answered with a non-success envelope.
    #[error("API request failed with status {status_code}: {message}")]
    Api {
        /// The vendor status code (100 means success).
        status_code: i64,
        /// The vendor message.
        message: String,
    },

    /// The server answered with an unexpected HTTP status.
    #[error("unexpected HTTP status {0}")]
    UnexpectedStatus(u16),

    /// Authentication failed (invalid or expired token).
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Invalid base URL.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// Errors related to parsing cloud API responses.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Expected field is missing from the response.
    #[error("missing field in response: {0}")]
    MissingField(String),

    /// Unexpected response format.
    #[error("unexpected response format: {0}")]
    UnexpectedFormat(String),
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u8,
        /// Maximum allowed value.
        max: u8,
        /// The actual value that was provided.
        actual: u8,
    },

    /// An invalid power state string was provided.
    #[error("invalid power state: {0}")]
    InvalidPowerState(String),

    /// An unknown device type string was provided.
    #[error("unknown device type: {0}")]
    UnknownDeviceType(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::RefreshRateTooLow(60);
        assert_eq!(
            err.to_string(),
            "refresh rate 60 is below the minimum of 120 seconds"
        );
    }

    #[test]
    fn error_from_config_error() {
        let err: Error = ConfigError::MissingToken.into();
        assert!(matches!(err, Error::Config(ConfigError::MissingToken)));
    }

    #[test]
    fn api_error_display() {
        let err = ProtocolError::Api {
            status_code: 151,
            message: "device type error".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "API request failed with status 151: device type error"
        );
    }

    #[test]
    fn value_error_display() {
        let err = ValueError::OutOfRange {
            min: 0,
            max: 100,
            actual: 150,
        };
        assert_eq!(err.to_string(), "value 150 is out of range [0, 100]");
    }

    #[test]
    fn parse_error_display() {
        let err = ParseError::MissingField("slidePosition".to_string());
        assert_eq!(err.to_string(), "missing field in response: slidePosition");
    }
}
