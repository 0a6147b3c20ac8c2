//! PostgreSQL Customer Adapter
//!
//! The direct-query implementation of `CustomerPort`. Every statement lives
//! in `CustomerRepository`; this adapter only translates ids and errors.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use core_kernel::{CustomerId, DomainPort, HealthCheckResult, HealthCheckable, PortError};
use domain_customer::{Customer, CustomerPort, NewCustomer};

use crate::error::db_to_port_error;
use crate::repositories::CustomerRepository;

const ADAPTER_ID: &str = "postgres-customer-adapter";

/// PostgreSQL-backed implementation of the CustomerPort trait
///
/// # Error Handling
///
/// Database errors are translated to `PortError` variants:
/// - `DatabaseError::DuplicateEntry` -> `PortError::Conflict`
/// - `DatabaseError::ConstraintViolation` -> `PortError::Validation`
/// - `DatabaseError::Mapping` -> `PortError::Transformation`
/// - Connection and pool errors -> `PortError::Connection`
/// - Other errors -> `PortError::Internal`
#[derive(Debug, Clone)]
pub struct PostgresCustomerAdapter {
    repository: CustomerRepository,
    pool: PgPool,
}

impl PostgresCustomerAdapter {
    /// Creates a new PostgreSQL customer adapter
    ///
    /// # Arguments
    ///
    /// * `pool` - The PostgreSQL connection pool
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CustomerRepository::new(pool.clone()),
            pool,
        }
    }
}

impl DomainPort for PostgresCustomerAdapter {}

#[async_trait]
impl HealthCheckable for PostgresCustomerAdapter {
    /// Checks database connectivity with a `SELECT 1` probe
    async fn health_check(&self) -> HealthCheckResult {
        let start = std::time::Instant::now();

        let result = sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await;

        let latency_ms = start.elapsed().as_millis() as u64;

        match result {
            Ok(_) => HealthCheckResult::healthy(ADAPTER_ID, latency_ms),
            Err(e) => HealthCheckResult::unhealthy(ADAPTER_ID, latency_ms, format!("Database error: {}", e)),
        }
    }
}

#[async_trait]
impl CustomerPort for PostgresCustomerAdapter {
    #[instrument(skip(self))]
    async fn list_all(&self) -> Result<Vec<Customer>, PortError> {
        debug!("Selecting all customers");
        self.repository.find_all().await.map_err(db_to_port_error)
    }

    #[instrument(skip(self), fields(customer_id = %id))]
    async fn get_by_id(&self, id: CustomerId) -> Result<Option<Customer>, PortError> {
        debug!("Selecting customer by id");
        self.repository
            .find_by_id(id.value())
            .await
            .map_err(db_to_port_error)
    }

    #[instrument(skip(self, email))]
    async fn exists_by_email(&self, email: &str) -> Result<bool, PortError> {
        let count = self
            .repository
            .count_by_email(email)
            .await
            .map_err(db_to_port_error)?;
        Ok(count > 0)
    }

    #[instrument(skip(self), fields(customer_id = %id))]
    async fn exists_by_id(&self, id: CustomerId) -> Result<bool, PortError> {
        let count = self
            .repository
            .count_by_id(id.value())
            .await
            .map_err(db_to_port_error)?;
        Ok(count > 0)
    }

    #[instrument(skip(self, customer))]
    async fn insert(&self, customer: NewCustomer) -> Result<Customer, PortError> {
        let inserted = self
            .repository
            .insert(&customer)
            .await
            .map_err(db_to_port_error)?;

        debug!(customer_id = %inserted.id, "Inserted customer row");
        Ok(inserted)
    }

    #[instrument(skip(self), fields(customer_id = %id))]
    async fn delete_by_id(&self, id: CustomerId) -> Result<(), PortError> {
        let deleted = self
            .repository
            .delete(id.value())
            .await
            .map_err(db_to_port_error)?;

        debug!(rows = deleted, "Deleted customer row");
        Ok(())
    }

    #[instrument(skip(self, customer), fields(customer_id = %customer.id))]
    async fn update(&self, customer: &Customer) -> Result<(), PortError> {
        let updated = self
            .repository
            .update(customer)
            .await
            .map_err(db_to_port_error)?;

        debug!(rows = updated, "Updated customer row");
        Ok(())
    }
}
