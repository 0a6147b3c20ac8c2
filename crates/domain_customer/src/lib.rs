//! Customer Domain
//!
//! This crate holds the customer entity, the storage port every persistence
//! adapter implements, and the service that enforces the registry's rules.
//!
//! # Partial Updates
//!
//! Updates are partial: only the fields present in a
//! [`CustomerUpdateRequest`] are considered, and only those that differ from
//! the stored value count as changes. A request that changes nothing is
//! rejected instead of silently succeeding.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use domain_customer::{CustomerService, CustomerRegistrationRequest, CustomerUpdateRequest};
//!
//! let service = CustomerService::new(port);
//!
//! let customer = service
//!     .add_customer(CustomerRegistrationRequest::new("German", "g@x.com", 20))
//!     .await?;
//!
//! let updated = service
//!     .update_customer(customer.id, CustomerUpdateRequest::default().age(30))
//!     .await?;
//! assert_eq!(updated.name, "German");
//! ```

pub mod customer;
pub mod error;
pub mod request;
pub mod ports;
pub mod service;

pub use customer::{Customer, NewCustomer, Gender};
pub use error::CustomerError;
pub use request::{
    CustomerRegistrationRequest, CustomerUpdateRequest,
    CustomerField, ReconciledUpdate,
};
pub use ports::CustomerPort;
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::MockCustomerPort;
pub use service::CustomerService;
