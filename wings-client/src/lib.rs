//! Wings HTTP Client
//!
//! A small, typed HTTP client for the manager's webhook trigger endpoints.
//!
//! Request and response bodies are the beans from `wings-beans`, so the JSON
//! on the wire is the same JSON every other service produces.
//!
//! # Example
//!
//! ```no_run
//! use wings_client::{WebhookApi, WebhookClient};
//! use wings_beans::dto::webhook::WebHookRequest;
//!
//! # async fn example() -> wings_client::Result<()> {
//! let client = WebhookClient::new("http://localhost:9090");
//!
//! let request = WebHookRequest::new("checkout")?;
//! let response = client.trigger("tok-123", &request).await?;
//!
//! println!("Triggered: {:?}", response.request_id);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
mod webhooks;

pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use webhooks::WebhookApi;

use reqwest::Client;
use serde::de::DeserializeOwned;
use wings_beans::dto::webhook::WebHookResponse;

/// HTTP client for the manager's webhook endpoints
#[derive(Debug, Clone)]
pub struct WebhookClient {
    /// Base URL of the manager (e.g., "http://localhost:9090")
    base_url: String,
    /// HTTP client instance
    client: Client,
    /// Sent as `X-Api-Key` on every request when set
    api_key: Option<String>,
}

impl WebhookClient {
    /// Create a new webhook client
    ///
    /// # Example
    /// ```
    /// use wings_client::WebhookClient;
    ///
    /// let client = WebhookClient::new("http://localhost:9090");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new webhook client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            api_key: None,
        }
    }

    /// Create a client from a validated configuration
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder().timeout(config.timeout).build()?;
        let mut webhook_client = Self::with_client(config.base_url.clone(), client);
        webhook_client.api_key = config.api_key.clone();
        Ok(webhook_client)
    }

    /// Sets the API key sent with every request
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Get the base URL of the manager
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => request.header("X-Api-Key", key),
            None => request,
        }
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle a trigger response
    ///
    /// Trigger endpoints answer with a `WebHookResponse` body on failure as
    /// well as on success, so the body is read before the status decides.
    async fn handle_trigger_response(&self, response: reqwest::Response) -> Result<WebHookResponse> {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        tracing::debug!(status, bytes = body.len(), "Webhook trigger answered");
        interpret(status, &body)
    }

    /// Handle an API response and deserialize JSON
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}

/// Turns a trigger endpoint's status and body into a response or an error
///
/// - 2xx with a `WebHookResponse` body is returned as is
/// - 2xx with any other body is a parse error
/// - non-2xx with a `WebHookResponse` body is `Rejected`
/// - non-2xx with any other body is an API error carrying the text
pub fn interpret(status: u16, body: &str) -> Result<WebHookResponse> {
    let parsed = serde_json::from_str::<WebHookResponse>(body);

    if (200..300).contains(&status) {
        return parsed
            .map_err(|e| ClientError::ParseError(format!("Failed to parse webhook response: {}", e)));
    }

    match parsed {
        Ok(response) => Err(ClientError::Rejected {
            status,
            response: Box::new(response),
        }),
        Err(_) => Err(ClientError::api_error(status, body)),
    }
}
