// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Vendor API response types.
//!
//! Every endpoint wraps its payload in a `{statusCode, message, body}`
//! envelope; `message` is `"success"` (status code 100) on the happy path.

mod devices;
mod status;

pub use devices::{DeviceInventory, DeviceRecord, RemoteRecord};
pub use status::DeviceStatus;

use crate::error::ProtocolError;

/// Vendor status code signalling success.
pub const SUCCESS_STATUS_CODE: i64 = 100;

/// Generic response envelope around a typed body.
///
/// # Examples
///
/// ```
/// use switchbot_cloud::response::{ApiResponse, DeviceStatus};
///
/// let response: ApiResponse<DeviceStatus> = serde_json::from_str(
///     r#"{ "statusCode": 100, "message": "success", "body": { "deviceId": "C1" } }"#,
/// ).unwrap();
/// let status = response.into_body().unwrap();
/// assert_eq!(status.device_id, "C1");
/// ```
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    /// Vendor status code; 100 means success.
    #[serde(default)]
    pub status_code: i64,
    /// Vendor message; `"success"` on the happy path.
    #[serde(default)]
    pub message: String,
    /// The typed payload.
    pub body: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Returns `true` if the envelope signals success.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.message == "success"
    }

    /// Unwraps the body, turning a non-success envelope into an error.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::Api`] when the vendor message is not
    /// `"success"` or the body is missing.
    pub fn into_body(self) -> Result<T, ProtocolError> {
        if !self.is_success() {
            return Err(ProtocolError::Api {
                status_code: self.status_code,
                message: self.message,
            });
        }
        self.body.ok_or(ProtocolError::Api {
            status_code: self.status_code,
            message: "missing response body".to_string(),
        })
    }
}
