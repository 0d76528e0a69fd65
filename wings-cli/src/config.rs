//! Configuration module
//!
//! Handles CLI configuration including the manager URL and credentials.

use std::time::Duration;

use wings_client::ClientConfig;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the manager service
    pub manager_url: String,
    /// API key for webhook requests
    pub api_key: Option<String>,
    /// HTTP timeout in seconds
    pub timeout_secs: u64,
}

impl Config {
    /// Client settings derived from the command line
    pub fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::new(self.manager_url.clone())
            .with_timeout(Duration::from_secs(self.timeout_secs));
        match &self.api_key {
            Some(key) => config.with_api_key(key.clone()),
            None => config,
        }
    }
}
