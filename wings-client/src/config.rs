//! Client configuration
//!
//! Connection settings for the manager that serves the webhook endpoints.

use std::time::Duration;

use crate::error::{ClientError, Result};

const DEFAULT_MANAGER_URL: &str = "http://localhost:9090";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Webhook client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Manager base URL (e.g., "http://localhost:9090")
    pub base_url: String,

    /// Sent as `X-Api-Key` when set
    pub api_key: Option<String>,

    /// Per-request timeout
    pub timeout: Duration,
}

impl ClientConfig {
    /// Creates a new configuration with defaults
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - WINGS_MANAGER_URL (optional, default: http://localhost:9090)
    /// - WINGS_API_KEY (optional)
    /// - WINGS_HTTP_TIMEOUT (optional, seconds, default: 30)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let base_url = lookup("WINGS_MANAGER_URL").unwrap_or_else(|| DEFAULT_MANAGER_URL.to_string());

        let api_key = lookup("WINGS_API_KEY").filter(|key| !key.is_empty());

        let timeout = match lookup("WINGS_HTTP_TIMEOUT") {
            Some(raw) => raw
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| {
                    ClientError::InvalidRequest(format!("WINGS_HTTP_TIMEOUT is not a number: {raw}"))
                })?,
            None => DEFAULT_TIMEOUT,
        };

        let config = Self {
            base_url,
            api_key,
            timeout,
        };
        config.validate()?;
        Ok(config)
    }

    /// Sets the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Sets the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(ClientError::InvalidRequest("base_url cannot be empty".into()));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ClientError::InvalidRequest(
                "base_url must start with http:// or https://".into(),
            ));
        }

        if self.timeout.is_zero() {
            return Err(ClientError::InvalidRequest(
                "timeout must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MANAGER_URL)
    }
}
