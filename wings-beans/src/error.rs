//! Error types for bean construction and decoding

use thiserror::Error;

/// Result type alias for bean operations
pub type Result<T> = std::result::Result<T, BeanError>;

/// Errors raised while building, validating or decoding beans
#[derive(Debug, Error)]
pub enum BeanError {
    /// A field declared as required is absent or blank
    #[error("missing required field `{field}` on {bean}")]
    MissingField {
        /// Bean type name
        bean: &'static str,
        /// Wire name of the field
        field: &'static str,
    },

    /// A symbol outside the closed set of an enumeration
    #[error("unknown {kind} symbol: {value}")]
    UnknownSymbol {
        /// Enumeration kind
        kind: &'static str,
        /// Rejected input
        value: String,
    },

    /// Catalog lookup by a name that is not registered
    #[error("unknown kind: {0}")]
    UnknownKind(String),

    /// Malformed JSON or a shape mismatch
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl BeanError {
    /// Create a missing-field error
    pub fn missing(bean: &'static str, field: &'static str) -> Self {
        Self::MissingField { bean, field }
    }

    /// Check if this error reports a missing required field
    pub fn is_missing_field(&self) -> bool {
        matches!(self, Self::MissingField { .. })
    }
}
