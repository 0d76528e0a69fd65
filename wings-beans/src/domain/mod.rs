//! Domain value types
//!
//! Reference records, enumerations and aggregates shared by the services of
//! the platform. These types are structure only: whatever creates, stores or
//! acts on them lives in the consuming service.

pub mod account;
pub mod aws;
pub mod azure;
pub mod delegate;
pub mod execution;
pub mod pipeline;
pub mod sample_app;
pub mod workflow;
