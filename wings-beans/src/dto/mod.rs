//! Data Transfer Objects for inter-service communication
//!
//! Message shapes exchanged over HTTP and the delegate broadcast channel.
//! Field names are the camelCase names the counterpart services expect.

pub mod broadcast;
pub mod webhook;
