//! Webhook command handlers
//!
//! Fires manual and git-event triggers and follows the resulting execution.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use wings_beans::domain::execution::ExecutionStatus;
use wings_beans::dto::webhook::{WebHookRequest, WebHookResponse, WebhookSource};
use wings_client::{WebhookApi, WebhookClient};

use super::bean::read_input;
use crate::config::Config;

/// Webhook subcommands
#[derive(Subcommand)]
pub enum WebhookCommands {
    /// Trigger a deployment through a webhook token
    Trigger {
        /// Webhook token
        #[arg(short, long)]
        token: String,

        /// Application name
        #[arg(long)]
        application: String,

        /// Workflow variables as key=value pairs (e.g., -p env=qa -p region=eu)
        #[arg(short, long, value_parser = parse_key_val)]
        param: Vec<(String, String)>,

        /// Artifact selectors as comma-separated key=value pairs (e.g., service=web,buildNumber=12)
        #[arg(short, long, value_parser = parse_key_vals)]
        artifact: Vec<BTreeMap<String, String>>,

        /// Manifest selectors as comma-separated key=value pairs (e.g., service=web,versionNumber=3)
        #[arg(short, long, value_parser = parse_key_vals)]
        manifest: Vec<BTreeMap<String, String>>,
    },
    /// Forward a git provider event payload to a webhook token
    Git {
        /// Webhook token
        #[arg(short, long)]
        token: String,

        /// Provider that sent the event (GITHUB, GITLAB, BITBUCKET, AZURE_DEVOPS, CUSTOM)
        #[arg(short, long, default_value = "GITHUB")]
        source: WebhookSource,

        /// Provider event name (e.g., push); not sent for AZURE_DEVOPS and CUSTOM
        #[arg(short, long, default_value = "push")]
        event: String,

        /// Path to the JSON event payload, or `-` for stdin
        payload: String,
    },
    /// Show the execution status behind a trigger's API URL
    Status {
        /// API URL returned by a trigger
        api_url: String,
    },
}

/// Parse a single key=value pair
fn parse_key_val(s: &str) -> Result<(String, String)> {
    let pos = s
        .find('=')
        .ok_or_else(|| anyhow::anyhow!("invalid KEY=value: no `=` found in `{}`", s))?;
    let key = s[..pos].trim();
    if key.is_empty() {
        anyhow::bail!("invalid KEY=value: empty key in `{}`", s);
    }
    Ok((key.to_string(), s[pos + 1..].to_string()))
}

/// Parse comma-separated key=value pairs into one selector
fn parse_key_vals(s: &str) -> Result<BTreeMap<String, String>> {
    s.split(',')
        .filter(|part| !part.trim().is_empty())
        .map(parse_key_val)
        .collect()
}

/// Handle webhook commands
///
/// Routes webhook subcommands to their respective handlers.
pub async fn handle_webhook_command(command: WebhookCommands, config: &Config) -> Result<()> {
    let client = WebhookClient::from_config(&config.client_config())
        .context("Invalid manager connection settings")?;

    run(command, &client).await
}

async fn run(command: WebhookCommands, api: &dyn WebhookApi) -> Result<()> {
    match command {
        WebhookCommands::Trigger {
            token,
            application,
            param,
            artifact,
            manifest,
        } => {
            let request = build_request(application, param, artifact, manifest)?;
            trigger(api, &token, &request).await
        }
        WebhookCommands::Git {
            token,
            source,
            event,
            payload,
        } => {
            let payload: serde_json::Value = serde_json::from_str(&read_input(&payload)?)
                .context("Event payload is not valid JSON")?;
            trigger_git_event(api, &token, source, &event, &payload).await
        }
        WebhookCommands::Status { api_url } => show_status(api, &api_url).await,
    }
}

fn build_request(
    application: String,
    params: Vec<(String, String)>,
    artifacts: Vec<BTreeMap<String, String>>,
    manifests: Vec<BTreeMap<String, String>>,
) -> Result<WebHookRequest> {
    let mut request = WebHookRequest::new(application)?;
    request.parameters = params.into_iter().collect();
    request.artifacts = artifacts;
    request.manifests = manifests;
    Ok(request)
}

/// Trigger a deployment
async fn trigger(api: &dyn WebhookApi, token: &str, request: &WebHookRequest) -> Result<()> {
    tracing::info!(application = %request.application, "Triggering webhook");

    let response = api
        .trigger(token, request)
        .await
        .context("Webhook trigger failed")?;

    print_response(&response);
    Ok(())
}

/// Forward a git event
async fn trigger_git_event(
    api: &dyn WebhookApi,
    token: &str,
    source: WebhookSource,
    event: &str,
    payload: &serde_json::Value,
) -> Result<()> {
    tracing::info!(source = %source, event, "Forwarding git event");

    let response = api
        .trigger_git_event(token, source, event, payload)
        .await
        .context("Git event trigger failed")?;

    print_response(&response);
    Ok(())
}

/// Show an execution status
async fn show_status(api: &dyn WebhookApi, api_url: &str) -> Result<()> {
    let report = api
        .fetch_status(api_url)
        .await
        .with_context(|| format!("Failed to fetch status from {}", api_url))?;

    println!("  Status: {}", colorize_status(report.status));
    Ok(())
}

/// Print a trigger response
fn print_response(response: &WebHookResponse) {
    if let Some(error) = &response.error {
        println!("{}", format!("✗ Trigger answered with an error: {}", error).red().bold());
        return;
    }

    println!("{}", "✓ Webhook triggered successfully!".green().bold());
    if let Some(request_id) = &response.request_id {
        println!("  Request ID: {}", request_id.cyan());
    }
    match (response.execution_status(), &response.status) {
        (Some(status), _) => println!("  Status:     {}", colorize_status(status)),
        (None, Some(status)) => println!("  Status:     {}", status.yellow()),
        (None, None) => {}
    }
    if let Some(ui_url) = &response.ui_url {
        println!("  UI:         {}", ui_url.dimmed());
    }
    if let Some(api_url) = &response.api_url {
        println!("  API:        {}", api_url.dimmed());
    }
    if let Some(message) = &response.message {
        println!("  Message:    {}", message);
    }
}

/// Colorize execution status for display
fn colorize_status(status: ExecutionStatus) -> ColoredString {
    let status_str = status.to_string();
    match status {
        ExecutionStatus::Success => status_str.green(),
        _ if status.is_final() => status_str.red(),
        _ => status_str.yellow(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use wings_beans::dto::webhook::ExecutionStatusReport;
    use wings_client::ClientError;

    #[derive(Default)]
    struct FakeApi {
        triggered: Mutex<Vec<(String, WebHookRequest)>>,
        git_events: Mutex<Vec<(String, WebhookSource, String)>>,
        reject: bool,
    }

    #[async_trait]
    impl WebhookApi for FakeApi {
        async fn trigger(
            &self,
            token: &str,
            request: &WebHookRequest,
        ) -> wings_client::Result<WebHookResponse> {
            if self.reject {
                return Err(ClientError::Rejected {
                    status: 400,
                    response: Box::new(WebHookResponse::rejected("Application not found")),
                });
            }
            self.triggered
                .lock()
                .unwrap()
                .push((token.to_string(), request.clone()));
            Ok(WebHookResponse {
                request_id: Some("r1".to_string()),
                status: Some("RUNNING".to_string()),
                api_url: Some("http://manager/api/executions/r1".to_string()),
                ..WebHookResponse::default()
            })
        }

        async fn trigger_git_event(
            &self,
            token: &str,
            source: WebhookSource,
            event: &str,
            _payload: &serde_json::Value,
        ) -> wings_client::Result<WebHookResponse> {
            self.git_events
                .lock()
                .unwrap()
                .push((token.to_string(), source, event.to_string()));
            Ok(WebHookResponse::default())
        }

        async fn fetch_status(&self, _api_url: &str) -> wings_client::Result<ExecutionStatusReport> {
            Ok(ExecutionStatusReport {
                status: ExecutionStatus::Success,
            })
        }
    }

    #[test]
    fn test_parse_key_val() {
        assert_eq!(
            parse_key_val("env=qa").unwrap(),
            ("env".to_string(), "qa".to_string())
        );
        assert_eq!(
            parse_key_val("url=a=b").unwrap(),
            ("url".to_string(), "a=b".to_string())
        );
        assert!(parse_key_val("novalue").is_err());
        assert!(parse_key_val("=qa").is_err());
    }

    #[test]
    fn test_parse_key_vals() {
        let selector = parse_key_vals("service=web,buildNumber=12").unwrap();
        assert_eq!(selector.get("service").map(String::as_str), Some("web"));
        assert_eq!(selector.get("buildNumber").map(String::as_str), Some("12"));
        assert!(parse_key_vals("service=web,broken").is_err());
    }

    #[test]
    fn test_build_request_requires_application() {
        assert!(build_request(" ".to_string(), vec![], vec![], vec![]).is_err());
    }

    #[tokio::test]
    async fn test_trigger_sends_request() {
        let api = FakeApi::default();
        let command = WebhookCommands::Trigger {
            token: "tok".to_string(),
            application: "checkout".to_string(),
            param: vec![("env".to_string(), "qa".to_string())],
            artifact: vec![parse_key_vals("service=web,buildNumber=12").unwrap()],
            manifest: vec![],
        };

        run(command, &api).await.unwrap();

        let triggered = api.triggered.lock().unwrap();
        assert_eq!(triggered.len(), 1);
        let (token, request) = &triggered[0];
        assert_eq!(token, "tok");
        assert_eq!(request.application, "checkout");
        assert_eq!(request.parameters.get("env").map(String::as_str), Some("qa"));
        assert_eq!(request.artifacts.len(), 1);
        assert!(request.manifests.is_empty());
    }

    #[tokio::test]
    async fn test_trigger_surfaces_rejection() {
        let api = FakeApi {
            reject: true,
            ..FakeApi::default()
        };
        let request = WebHookRequest::new("checkout").unwrap();

        let err = trigger(&api, "tok", &request).await.unwrap_err();
        assert!(format!("{:#}", err).contains("Application not found"));
    }

    #[tokio::test]
    async fn test_git_event_forwards_source() {
        let api = FakeApi::default();
        let payload = serde_json::json!({"ref": "refs/heads/main"});

        trigger_git_event(&api, "tok", WebhookSource::Gitlab, "Push Hook", &payload)
            .await
            .unwrap();

        let events = api.git_events.lock().unwrap();
        assert_eq!(
            events[0],
            ("tok".to_string(), WebhookSource::Gitlab, "Push Hook".to_string())
        );
    }

    #[tokio::test]
    async fn test_show_status() {
        let api = FakeApi::default();
        assert!(show_status(&api, "http://manager/api/executions/r1").await.is_ok());
    }
}
