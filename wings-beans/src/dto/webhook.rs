//! Webhook trigger DTOs

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::execution::ExecutionStatus;
use crate::error::Result;
use crate::validate::{Validate, require_text};

symbol_enum! {
    pub enum HttpMethod: "http-method" {
        Get => "GET",
        Post => "POST",
        Put => "PUT",
        Delete => "DELETE",
        Patch => "PATCH",
    }
}

symbol_enum! {
    /// Provider that sent a git webhook event
    pub enum WebhookSource: "webhook-source" {
        Github => "GITHUB" ("GitHub"),
        Gitlab => "GITLAB" ("GitLab"),
        Bitbucket => "BITBUCKET" ("Bitbucket"),
        AzureDevops => "AZURE_DEVOPS" ("Azure DevOps"),
        Custom => "CUSTOM",
    }
}

impl WebhookSource {
    /// HTTP header carrying the provider's event name
    pub fn event_header(&self) -> Option<&'static str> {
        match self {
            WebhookSource::Github => Some("X-GitHub-Event"),
            WebhookSource::Gitlab => Some("X-Gitlab-Event"),
            WebhookSource::Bitbucket => Some("X-Event-Key"),
            WebhookSource::AzureDevops | WebhookSource::Custom => None,
        }
    }
}

/// Token identifying the trigger a webhook fires
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebHookToken {
    pub web_hook_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_method: Option<HttpMethod>,
    /// Sample request body shown to users configuring the webhook
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,
}

impl WebHookToken {
    pub fn new(web_hook_token: impl Into<String>, http_method: HttpMethod) -> Result<Self> {
        let token = Self {
            web_hook_token: web_hook_token.into(),
            http_method: Some(http_method),
            payload: None,
        };
        token.validate()?;
        Ok(token)
    }
}

impl Validate for WebHookToken {
    fn validate(&self) -> Result<()> {
        require_text("WebHookToken", "webHookToken", &self.web_hook_token)
    }
}

/// Body of a manual webhook trigger
///
/// `artifacts` entries carry keys such as `service` and `buildNumber`;
/// `manifests` entries carry `service` and `versionNumber`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebHookRequest {
    pub application: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub parameters: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub artifacts: Vec<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub manifests: Vec<BTreeMap<String, String>>,
}

impl WebHookRequest {
    pub fn new(application: impl Into<String>) -> Result<Self> {
        let request = Self {
            application: application.into(),
            ..Self::default()
        };
        request.validate()?;
        Ok(request)
    }
}

impl Validate for WebHookRequest {
    fn validate(&self) -> Result<()> {
        require_text("WebHookRequest", "application", &self.application)
    }
}

/// Reply to a webhook trigger
///
/// On success `requestId`, `status`, `uiUrl` and `apiUrl` are set; on
/// rejection only `error` is. Absent fields are left out of the JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebHookResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ui_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl WebHookResponse {
    /// Response for a rejected trigger
    pub fn rejected(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::default()
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.as_deref().is_some_and(|error| !error.is_empty())
    }

    /// `status` parsed as an execution status, when it is one
    pub fn execution_status(&self) -> Option<ExecutionStatus> {
        self.status.as_deref().and_then(|status| status.parse().ok())
    }
}

impl Validate for WebHookResponse {}

/// Body served at a webhook response's `apiUrl`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExecutionStatusReport {
    pub status: ExecutionStatus,
}

impl Validate for ExecutionStatusReport {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::{decode, encode};

    #[test]
    fn test_response_omits_null_fields() {
        let response = WebHookResponse {
            request_id: Some("r1".to_string()),
            status: Some("SUCCESS".to_string()),
            error: None,
            ..WebHookResponse::default()
        };

        let json = encode(&response).unwrap();
        assert_eq!(json, r#"{"requestId":"r1","status":"SUCCESS"}"#);

        let back: WebHookResponse = decode(&json).unwrap();
        assert_eq!(back, response);
    }

    #[test]
    fn test_response_accepts_explicit_nulls() {
        let response: WebHookResponse =
            serde_json::from_str(r#"{"requestId":"r1","error":null,"uiUrl":null}"#).unwrap();
        assert_eq!(response.request_id.as_deref(), Some("r1"));
        assert!(response.error.is_none());
        assert!(!response.is_error());
    }

    #[test]
    fn test_rejected_response() {
        let response = WebHookResponse::rejected("Trigger rejected");
        assert!(response.is_error());
        assert!(response.status.is_none());
        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"error":"Trigger rejected"}"#
        );
    }

    #[test]
    fn test_response_execution_status() {
        let mut response = WebHookResponse {
            status: Some("RUNNING".to_string()),
            ..WebHookResponse::default()
        };
        assert_eq!(response.execution_status(), Some(ExecutionStatus::Running));

        response.status = Some("running".to_string());
        assert_eq!(response.execution_status(), None);
    }

    #[test]
    fn test_request_wire_shape() {
        let mut request = WebHookRequest::new("app-1").unwrap();
        request
            .parameters
            .insert("branch".to_string(), "main".to_string());
        request.artifacts.push(BTreeMap::from([
            ("buildNumber".to_string(), "42".to_string()),
            ("service".to_string(), "api".to_string()),
        ]));

        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"application":"app-1","parameters":{"branch":"main"},"artifacts":[{"buildNumber":"42","service":"api"}]}"#
        );
    }

    #[test]
    fn test_request_requires_application() {
        assert!(WebHookRequest::new("").unwrap_err().is_missing_field());
        assert!(decode::<WebHookRequest>(r#"{"application":" "}"#).is_err());
        assert!(decode::<WebHookRequest>(r#"{"parameters":{}}"#).is_err());
    }

    #[test]
    fn test_token_requires_value() {
        let token = WebHookToken::new("tok-1", HttpMethod::Post).unwrap();
        assert_eq!(
            serde_json::to_string(&token).unwrap(),
            r#"{"webHookToken":"tok-1","httpMethod":"POST"}"#
        );
        assert!(WebHookToken::new("", HttpMethod::Post).is_err());
    }

    #[test]
    fn test_event_headers() {
        assert_eq!(WebhookSource::Github.event_header(), Some("X-GitHub-Event"));
        assert_eq!(WebhookSource::Bitbucket.event_header(), Some("X-Event-Key"));
        assert_eq!(WebhookSource::Custom.event_header(), None);
    }

    #[test]
    fn test_status_report_rejects_unknown_status() {
        let report: ExecutionStatusReport = serde_json::from_str(r#"{"status":"SUCCESS"}"#).unwrap();
        assert_eq!(report.status, ExecutionStatus::Success);
        assert!(serde_json::from_str::<ExecutionStatusReport>(r#"{"status":"DONE"}"#).is_err());
    }
}
