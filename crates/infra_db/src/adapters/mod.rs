//! Customer Storage Adapters
//!
//! Two interchangeable implementations of `CustomerPort`, both backed by
//! the same PostgreSQL pool:
//!
//! - [`PostgresCustomerAdapter`]: explicit SQL through `CustomerRepository`
//!   and the record mapper
//! - [`SeaOrmCustomerAdapter`]: the SeaORM `customer` entity, no hand-written SQL
//!
//! # Usage
//!
//! ```rust,ignore
//! use infra_db::adapters::{PostgresCustomerAdapter, SeaOrmCustomerAdapter};
//! use domain_customer::CustomerPort;
//!
//! let port: Arc<dyn CustomerPort> = Arc::new(PostgresCustomerAdapter::new(pool.clone()));
//! let port: Arc<dyn CustomerPort> = Arc::new(SeaOrmCustomerAdapter::from_pool(pool));
//! ```

pub mod orm;
pub mod sql;

pub use orm::SeaOrmCustomerAdapter;
pub use sql::PostgresCustomerAdapter;
