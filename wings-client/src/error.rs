//! Error types for the webhook client

use thiserror::Error;
use wings_beans::dto::webhook::WebHookResponse;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when using the webhook client
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// The trigger answered with an error status and a webhook response body
    #[error("Webhook rejected (status {status}): {}", .response.error.as_deref().unwrap_or("no reason given"))]
    Rejected {
        /// HTTP status code
        status: u16,
        /// Response body as sent by the server
        response: Box<WebHookResponse>,
    },

    /// API returned an error status code with an unstructured body
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Invalid request or configuration
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// HTTP status carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } | Self::ApiError { status, .. } => Some(*status),
            Self::RequestFailed(err) => err.status().map(|status| status.as_u16()),
            Self::ParseError(_) | Self::InvalidRequest(_) => None,
        }
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        self.status().is_some_and(|status| (400..500).contains(&status))
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        self.status().is_some_and(|status| status >= 500)
    }
}

impl From<wings_beans::BeanError> for ClientError {
    fn from(err: wings_beans::BeanError) -> Self {
        Self::InvalidRequest(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_message_uses_response_error() {
        let err = ClientError::Rejected {
            status: 503,
            response: Box::new(WebHookResponse::rejected("Trigger rejected")),
        };
        assert_eq!(err.to_string(), "Webhook rejected (status 503): Trigger rejected");
        assert!(err.is_server_error());
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_api_error_classification() {
        let err = ClientError::api_error(404, "not found");
        assert_eq!(err.status(), Some(404));
        assert!(err.is_client_error());
        assert!(ClientError::ParseError("x".into()).status().is_none());
    }

    #[test]
    fn test_bean_error_becomes_invalid_request() {
        let err: ClientError = wings_beans::BeanError::missing("WebHookRequest", "application").into();
        assert!(matches!(err, ClientError::InvalidRequest(_)));
    }
}
