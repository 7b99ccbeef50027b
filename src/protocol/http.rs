// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP client for the SwitchBot cloud API.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};

use crate::command::CommandRequest;
use crate::error::{Error, ProtocolError};
use crate::response::{ApiResponse, DeviceInventory, DeviceStatus};

// ============================================================================
// CloudConfig - Connection parameters for the cloud API
// ============================================================================

/// Configuration for the cloud API connection.
///
/// # Examples
///
/// ```
/// use switchbot_cloud::protocol::CloudConfig;
/// use std::time::Duration;
///
/// // Production endpoint
/// let config = CloudConfig::new("token");
///
/// // Custom endpoint and timeout (useful for tests)
/// let config = CloudConfig::new("token")
///     .with_base_url("http://localhost:8080/v1.0")
///     .with_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct CloudConfig {
    base_url: String,
    token: String,
    timeout: Duration,
}

impl CloudConfig {
    /// Default API base URL.
    pub const DEFAULT_BASE_URL: &'static str = "https://api.switch-bot.com/v1.0";
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a configuration for the production endpoint.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            token: token.into(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Overrides the API base URL. A trailing slash is stripped.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let url: String = base_url.into();
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Creates a [`CloudClient`] from this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL has no HTTP scheme or the underlying
    /// HTTP client cannot be created.
    pub fn into_client(self) -> Result<CloudClient, ProtocolError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ProtocolError::InvalidAddress(self.base_url));
        }

        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(CloudClient {
            base_url: self.base_url,
            token: self.token,
            client,
        })
    }
}

// ============================================================================
// CloudClient - Authenticated API access
// ============================================================================

/// Authenticated client for the SwitchBot cloud API.
///
/// The open token is attached as the `Authorization` header of every request.
/// The client is cheap to clone; clones share the connection pool.
///
/// # Examples
///
/// ```no_run
/// use switchbot_cloud::protocol::{CloudClient, CloudConfig};
///
/// # async fn example() -> switchbot_cloud::Result<()> {
/// let client = CloudConfig::new("token").into_client()?;
/// let status = client.device_status("C12345").await?;
/// println!("moving: {:?}", status.moving);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CloudClient {
    base_url: String,
    token: String,
    client: Client,
}

impl CloudClient {
    /// Returns the base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the full device inventory.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, a non-success envelope, or an
    /// unparseable response.
    pub async fn devices(&self) -> Result<DeviceInventory, Error> {
        let url = format!("{}/devices", self.base_url);
        tracing::debug!(url = %url, "Fetching device inventory");

        let response: ApiResponse<DeviceInventory> = self.get_json(&url).await?;
        response.into_body().map_err(Error::Protocol)
    }

    /// Fetches the current status snapshot of a device.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, a non-success envelope, or an
    /// unparseable response.
    pub async fn device_status(&self, device_id: &str) -> Result<DeviceStatus, Error> {
        let url = format!("{}/devices/{device_id}/status", self.base_url);
        tracing::debug!(url = %url, "Reading device status");

        let response: ApiResponse<DeviceStatus> = self.get_json(&url).await?;
        response.into_body().map_err(Error::Protocol)
    }

    /// Sends a command to a device.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure or a non-success envelope.
    pub async fn send_command(
        &self,
        device_id: &str,
        request: &CommandRequest,
    ) -> Result<(), Error> {
        let url = format!("{}/devices/{device_id}/commands", self.base_url);

        tracing::info!(
            device_id,
            command = %request.command,
            parameter = %request.parameter,
            command_type = %request.command_type,
            "Sending request to SwitchBot API",
        );

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, &self.token)
            .header(CONTENT_TYPE, "application/json; charset=utf8")
            .json(request)
            .send()
            .await
            .map_err(|e| Error::Protocol(ProtocolError::Http(e)))?;

        let response = Self::check_http_status(response)?;

        let envelope: ApiResponse<serde_json::Value> = response
            .json()
            .await
            .map_err(|e| Error::Protocol(ProtocolError::Http(e)))?;

        if !envelope.is_success() {
            return Err(Error::Protocol(ProtocolError::Api {
                status_code: envelope.status_code,
                message: envelope.message,
            }));
        }

        tracing::debug!(device_id, "Changes pushed");
        Ok(())
    }

    /// Performs an authenticated GET and deserializes the JSON body.
    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, Error> {
        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, &self.token)
            .header(CONTENT_TYPE, "application/json; charset=utf8")
            .send()
            .await
            .map_err(|e| Error::Protocol(ProtocolError::Http(e)))?;

        let response = Self::check_http_status(response)?;

        response
            .json()
            .await
            .map_err(|e| Error::Protocol(ProtocolError::Http(e)))
    }

    fn check_http_status(response: reqwest::Response) -> Result<reqwest::Response, Error> {
        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Err(Error::Protocol(ProtocolError::AuthenticationFailed));
        }
        if !response.status().is_success() {
            return Err(Error::Protocol(ProtocolError::UnexpectedStatus(
                response.status().as_u16(),
            )));
        }
        Ok(response)
    }
}
