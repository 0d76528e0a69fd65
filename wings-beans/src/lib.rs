//! Wings Beans
//!
//! Value types exchanged between the services of the deployment platform.
//!
//! This crate contains:
//! - Domain types: reference records, enumerations and aggregates
//! - DTOs: webhook and delegate broadcast message shapes
//! - Validation of required fields and a validating JSON codec
//! - A catalog addressing every type by name

#[macro_use]
pub mod symbol;

pub mod catalog;
pub mod domain;
pub mod dto;
pub mod error;
pub mod validate;

pub use catalog::{BeanKind, EnumKind};
pub use error::{BeanError, Result};
pub use symbol::Symbol;
pub use validate::{Validate, decode, encode, encode_pretty};
