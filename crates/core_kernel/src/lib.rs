//! Core Kernel - Foundational types shared by the customer registry
//!
//! This crate provides the building blocks used by every other crate:
//! - Strongly-typed identifiers
//! - Port infrastructure for swappable storage adapters
//! - Common error types

pub mod identifiers;
pub mod ports;
pub mod error;

pub use identifiers::CustomerId;
pub use ports::{PortError, DomainPort, HealthCheckable, HealthCheckResult, AdapterHealth};
pub use error::CoreError;
