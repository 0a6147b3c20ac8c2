//! Customer domain errors
//!
//! This module defines every error the customer service can surface:
//! lookups of missing customers, email collisions, no-op updates,
//! malformed stored data, and failures of the underlying store.

use thiserror::Error;

use core_kernel::{CustomerId, PortError};

/// Errors that can occur in the customer domain
#[derive(Debug, Error)]
pub enum CustomerError {
    /// Customer with the given ID was not found
    #[error("customer with id [{0}] not found")]
    NotFound(CustomerId),

    /// The request collides with an existing customer
    #[error("{0}")]
    DuplicateResource(String),

    /// The update request would not change anything
    #[error("no data changes found")]
    NoChanges,

    /// Stored data could not be turned into a customer
    #[error("Mapping error: {0}")]
    Mapping(String),

    /// The underlying store failed
    #[error("Storage error: {0}")]
    Storage(PortError),
}

impl CustomerError {
    /// Creates a NotFound error
    pub fn not_found(id: CustomerId) -> Self {
        CustomerError::NotFound(id)
    }

    /// Creates the DuplicateResource error raised on email collisions
    pub fn email_taken() -> Self {
        CustomerError::DuplicateResource("email already taken".to_string())
    }

    /// Creates a Mapping error with a message
    pub fn mapping(message: impl Into<String>) -> Self {
        CustomerError::Mapping(message.into())
    }
}

impl From<PortError> for CustomerError {
    fn from(error: PortError) -> Self {
        match error {
            PortError::Transformation { message } => CustomerError::Mapping(message),
            other => CustomerError::Storage(other),
        }
    }
}
