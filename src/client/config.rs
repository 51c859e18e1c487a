//! Configuration for the Semaphore client

use std::time::Duration;

use compact_str::CompactString;

use super::error::{ClientError, Result};

/// API base of the hosted Semaphore service.
pub const DEFAULT_API_BASE: &str = "http://semaphoreci.com/api/v1";

/// Connection settings for [`SemaphoreApi`](super::api::SemaphoreApi)
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL, without a trailing slash
    pub base_url: CompactString,
    /// Account authentication token, sent as the `auth_token` query parameter
    pub auth_token: CompactString,
    /// Request timeout
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a configuration for the hosted service from an auth token
    pub fn new(auth_token: impl Into<CompactString>) -> Self {
        Self {
            base_url: DEFAULT_API_BASE.into(),
            auth_token: auth_token.into(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Point the client at a different API base
    pub fn with_base_url(mut self, base_url: impl Into<CompactString>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.auth_token.is_empty() {
            return Err(ClientError::config("Auth token cannot be empty"));
        }

        if self.base_url.is_empty() {
            return Err(ClientError::config("Base URL cannot be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ClientError::config("Base URL must start with http:// or https://"));
        }

        if self.timeout.is_zero() {
            return Err(ClientError::config("Timeout must be greater than zero"));
        }

        Ok(())
    }
}
