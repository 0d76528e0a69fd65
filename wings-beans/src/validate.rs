//! Presence constraints and the JSON codec
//!
//! Records declare their required fields by implementing [`Validate`]. The
//! codec functions run validation on both sides of the wire so a payload
//! missing a required field never leaves or enters a service silently.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{BeanError, Result};

/// Presence checks for a record
pub trait Validate {
    /// Fails with [`BeanError::MissingField`] when a required field is absent
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(&self) -> Result<()> {
        self.iter().try_for_each(Validate::validate)
    }
}

impl<T: Validate> Validate for Option<T> {
    fn validate(&self) -> Result<()> {
        match self {
            Some(inner) => inner.validate(),
            None => Ok(()),
        }
    }
}

/// Require a non-blank string
pub fn require_text(bean: &'static str, field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BeanError::missing(bean, field));
    }
    Ok(())
}

/// Require an optional value to be present
pub fn require_some<T>(bean: &'static str, field: &'static str, value: &Option<T>) -> Result<()> {
    if value.is_none() {
        return Err(BeanError::missing(bean, field));
    }
    Ok(())
}

/// Decode a record from JSON and check its required fields
pub fn decode<T>(json: &str) -> Result<T>
where
    T: DeserializeOwned + Validate,
{
    let value: T = serde_json::from_str(json)?;
    value.validate()?;
    Ok(value)
}

/// Decode a record from an already parsed JSON value
pub fn decode_value<T>(json: serde_json::Value) -> Result<T>
where
    T: DeserializeOwned + Validate,
{
    let value: T = serde_json::from_value(json)?;
    value.validate()?;
    Ok(value)
}

/// Validate then serialize a record to compact JSON
pub fn encode<T>(value: &T) -> Result<String>
where
    T: Serialize + Validate,
{
    value.validate()?;
    Ok(serde_json::to_string(value)?)
}

/// Validate then serialize a record to indented JSON
pub fn encode_pretty<T>(value: &T) -> Result<String>
where
    T: Serialize + Validate,
{
    value.validate()?;
    Ok(serde_json::to_string_pretty(value)?)
}
