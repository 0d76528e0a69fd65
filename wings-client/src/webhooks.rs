//! Webhook trigger endpoints

use async_trait::async_trait;
use reqwest::Url;
use serde_json::Value;
use wings_beans::Validate;
use wings_beans::dto::webhook::{ExecutionStatusReport, WebHookRequest, WebHookResponse, WebhookSource};

use crate::WebhookClient;
use crate::error::{ClientError, Result};

/// Operations against the manager's webhook endpoints
///
/// The CLI depends on this trait rather than on [`WebhookClient`] so commands
/// can run against an in-memory fake.
#[async_trait]
pub trait WebhookApi: Send + Sync {
    /// Fires the trigger behind `token` with a manual request body
    async fn trigger(&self, token: &str, request: &WebHookRequest) -> Result<WebHookResponse>;

    /// Forwards a git provider event to the trigger behind `token`
    ///
    /// `event` travels in the provider's event header. Sources without one
    /// (`AZURE_DEVOPS`, `CUSTOM`) identify the event inside the payload, so
    /// `event` is not sent for them.
    async fn trigger_git_event(
        &self,
        token: &str,
        source: WebhookSource,
        event: &str,
        payload: &Value,
    ) -> Result<WebHookResponse>;

    /// Reads the execution status served at a response's `apiUrl`
    async fn fetch_status(&self, api_url: &str) -> Result<ExecutionStatusReport>;
}

fn require_token(token: &str) -> Result<()> {
    if token.trim().is_empty() {
        return Err(ClientError::InvalidRequest("webhook token cannot be empty".into()));
    }
    if token == "." || token == ".." {
        return Err(ClientError::InvalidRequest(format!(
            "webhook token is not a valid path segment: {token}"
        )));
    }
    Ok(())
}

/// `{base}/api/webhooks/{token}` plus `extra` segments
///
/// The token is pushed as a single percent-encoded path segment, so `/`, `?`
/// or `#` inside it never leave the webhooks path.
fn webhook_url(base_url: &str, token: &str, extra: &[&str]) -> Result<Url> {
    require_token(token)?;

    let mut url = Url::parse(base_url)
        .map_err(|e| ClientError::InvalidRequest(format!("invalid base_url {base_url}: {e}")))?;
    url.path_segments_mut()
        .map_err(|_| ClientError::InvalidRequest(format!("base_url cannot take a path: {base_url}")))?
        .pop_if_empty()
        .extend(["api", "webhooks", token])
        .extend(extra);
    Ok(url)
}

/// Header name and value carrying `event` for `source`, if it has one
fn event_header(source: WebhookSource, event: &str) -> Option<(&'static str, &str)> {
    source.event_header().map(|header| (header, event))
}

#[async_trait]
impl WebhookApi for WebhookClient {
    async fn trigger(&self, token: &str, request: &WebHookRequest) -> Result<WebHookResponse> {
        request.validate()?;

        let url = webhook_url(&self.base_url, token, &[])?;
        tracing::debug!(application = %request.application, "Triggering webhook");

        let response = self
            .authorize(self.client.post(url))
            .json(request)
            .send()
            .await?;

        self.handle_trigger_response(response).await
    }

    async fn trigger_git_event(
        &self,
        token: &str,
        source: WebhookSource,
        event: &str,
        payload: &Value,
    ) -> Result<WebHookResponse> {
        let url = webhook_url(&self.base_url, token, &["git"])?;
        tracing::debug!(source = %source, event, "Forwarding git event");

        let mut builder = self.authorize(self.client.post(url)).json(payload);
        match event_header(source, event) {
            Some((header, value)) => builder = builder.header(header, value),
            None => tracing::debug!(source = %source, "Source has no event header; event not sent"),
        }

        let response = builder.send().await?;
        self.handle_trigger_response(response).await
    }

    async fn fetch_status(&self, api_url: &str) -> Result<ExecutionStatusReport> {
        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            return Err(ClientError::InvalidRequest(format!(
                "apiUrl is not an http(s) URL: {api_url}"
            )));
        }

        let response = self.authorize(self.client.get(api_url)).send().await?;
        self.handle_response(response).await
    }
}
