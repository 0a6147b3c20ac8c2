//! Infrastructure Database Layer
//!
//! This crate provides the PostgreSQL infrastructure for the customer
//! registry: the connection pool, schema migrations, the record mapper and
//! the two interchangeable implementations of `CustomerPort`.
//!
//! # Architecture
//!
//! ```text
//! PostgresCustomerAdapter ──► CustomerRepository ──► mapper ──► PgPool
//! SeaOrmCustomerAdapter   ──► entity::customer   ─────────────► PgPool
//! ```
//!
//! Both adapters translate `DatabaseError` into `PortError`, so callers
//! cannot tell which one is behind the port.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{DatabaseConfig, create_pool, run_migrations, PostgresCustomerAdapter};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/customers")).await?;
//! run_migrations(&pool).await?;
//! let adapter = PostgresCustomerAdapter::new(pool);
//! ```

pub mod pool;
pub mod error;
pub mod migrate;
pub mod mapper;
pub mod repositories;
pub mod entity;
pub mod adapters;

pub use pool::{DatabasePool, create_pool, DatabaseConfig};
pub use error::{DatabaseError, db_to_port_error};
pub use migrate::{run_migrations, MIGRATOR};
pub use mapper::{map_customer, ColumnSource, MappingError};
pub use repositories::CustomerRepository;
pub use adapters::{PostgresCustomerAdapter, SeaOrmCustomerAdapter};
