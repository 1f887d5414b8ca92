// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP client for the thermostat's embedded web API.

use std::time::Duration;

use reqwest::Client;

use crate::command::Command;
use crate::error::ProtocolError;
use crate::protocol::{CommandResponse, Protocol};

/// The fixed resource path of the thermostat API.
const TSTAT_RESOURCE: &str = "/tstat";

// ============================================================================
// HttpConfig - Connection parameters
// ============================================================================

/// Configuration for a thermostat's HTTP endpoint.
///
/// The device speaks plain HTTP with no authentication; the only knobs
/// are host, port and the per-request timeout.
///
/// # Examples
///
/// ```
/// use radiotherm_lib::protocol::HttpConfig;
/// use std::time::Duration;
///
/// // Simple configuration
/// let config = HttpConfig::new("192.168.1.120");
///
/// // With all options
/// let config = HttpConfig::new("192.168.1.120")
///     .with_port(8080)
///     .with_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    host: String,
    port: u16,
    timeout: Duration,
}

impl HttpConfig {
    /// Default HTTP port.
    pub const DEFAULT_PORT: u16 = 80;
    /// Default request timeout.
    ///
    /// The CT50's embedded server is slow; requests regularly take a
    /// few seconds.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a new configuration for the specified host.
    ///
    /// # Arguments
    ///
    /// * `host` - The hostname or IP address of the thermostat
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: Self::DEFAULT_PORT,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Builds the base URL from this configuration.
    #[must_use]
    pub fn base_url(&self) -> String {
        if self.port == Self::DEFAULT_PORT {
            format!("http://{}", self.host)
        } else {
            format!("http://{}:{}", self.host, self.port)
        }
    }

    /// Creates an [`HttpClient`] from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn into_client(self) -> Result<HttpClient, ProtocolError> {
        let endpoint = format!("{}{TSTAT_RESOURCE}", self.base_url());

        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(HttpClient { endpoint, client })
    }
}

// ============================================================================
// HttpClient - Request execution
// ============================================================================

/// HTTP client for a single thermostat.
///
/// Holds only the immutable endpoint URL and a `reqwest` client; every
/// call is independent and safe to issue concurrently.
///
/// # Examples
///
/// ```no_run
/// use radiotherm_lib::protocol::{HttpClient, Protocol};
/// use radiotherm_lib::command::StatusCommand;
///
/// # async fn example() -> radiotherm_lib::Result<()> {
/// let client = HttpClient::new("192.168.1.120")?;
/// let response = client.send_command(&StatusCommand).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    endpoint: String,
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client for the specified host.
    ///
    /// # Arguments
    ///
    /// * `host` - The hostname or IP address of the thermostat
    ///
    /// # Errors
    ///
    /// Returns error if the host is empty or the client cannot be
    /// created.
    pub fn new(host: impl Into<String>) -> Result<Self, ProtocolError> {
        let host = host.into();
        if host.is_empty() {
            return Err(ProtocolError::InvalidAddress(
                "host must not be empty".to_string(),
            ));
        }

        let base_url = if host.starts_with("http://") {
            host.trim_end_matches('/').to_string()
        } else {
            format!("http://{host}")
        };

        let client = Client::builder()
            .timeout(HttpConfig::DEFAULT_TIMEOUT)
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(Self {
            endpoint: format!("{base_url}{TSTAT_RESOURCE}"),
            client,
        })
    }

    /// Returns the thermostat resource URL.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Builds the URL for a command path suffix.
    fn build_url(&self, path: &str) -> String {
        format!("{}{path}", self.endpoint)
    }

    async fn read_body(response: reqwest::Response) -> Result<CommandResponse, ProtocolError> {
        if !response.status().is_success() {
            return Err(ProtocolError::ConnectionFailed(format!(
                "HTTP {} - {}",
                response.status().as_u16(),
                response.status().canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body = response.text().await.map_err(ProtocolError::Http)?;

        tracing::debug!(body = %body, "Received HTTP response");

        Ok(CommandResponse::new(body))
    }
}

impl Protocol for HttpClient {
    async fn send_command<C: Command + Sync>(
        &self,
        command: &C,
    ) -> Result<CommandResponse, ProtocolError> {
        let url = self.build_url(&command.path());

        let response = match command.payload() {
            Some(body) => {
                tracing::debug!(url = %url, body = %body, "Sending HTTP POST");
                self.client
                    .post(&url)
                    .json(&body)
                    .send()
                    .await
                    .map_err(ProtocolError::Http)?
            }
            None => {
                tracing::debug!(url = %url, "Sending HTTP GET");
                self.client
                    .get(&url)
                    .send()
                    .await
                    .map_err(ProtocolError::Http)?
            }
        };

        Self::read_body(response).await
    }
}
