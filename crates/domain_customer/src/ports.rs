//! Customer Domain Ports
//!
//! This module defines the storage port for the customer domain, enabling
//! swappable persistence implementations.
//!
//! # Architecture
//!
//! The `CustomerPort` trait is the complete capability set the customer
//! service needs from a store. Adapters implementing it:
//!
//! - **Direct-SQL Adapter**: explicit statements via sqlx (infra_db)
//! - **Object-Mapping Adapter**: SeaORM entity (infra_db)
//! - **Mock Adapter**: in-memory, for tests without a database
//!
//! # Configuration
//!
//! The adapter is chosen once, at application startup:
//!
//! ```rust,ignore
//! let port: Arc<dyn CustomerPort> = match config.storage_backend {
//!     StorageBackend::Sql => Arc::new(PostgresCustomerAdapter::new(pool)),
//!     StorageBackend::Orm => Arc::new(SeaOrmCustomerAdapter::from_pool(pool)),
//! };
//! let service = CustomerService::new(port);
//! ```

use async_trait::async_trait;

use core_kernel::{CustomerId, DomainPort, HealthCheckable, PortError};

use crate::customer::{Customer, NewCustomer};

/// The storage port for customers
///
/// Every adapter must produce the same externally observable behavior for
/// each operation. Adapters never enforce business rules; the service checks
/// existence and uniqueness before calling the mutating operations.
#[async_trait]
pub trait CustomerPort: DomainPort + HealthCheckable {
    /// Returns all customers in store order
    async fn list_all(&self) -> Result<Vec<Customer>, PortError>;

    /// Retrieves a customer by ID, `None` if no row matches
    async fn get_by_id(&self, id: CustomerId) -> Result<Option<Customer>, PortError>;

    /// Returns true if a customer with this email exists
    async fn exists_by_email(&self, email: &str) -> Result<bool, PortError>;

    /// Returns true if a customer with this ID exists
    async fn exists_by_id(&self, id: CustomerId) -> Result<bool, PortError>;

    /// Persists a new customer and returns it with its store-assigned ID
    ///
    /// Fails with `PortError::Conflict` if the store rejects a duplicate email.
    async fn insert(&self, customer: NewCustomer) -> Result<Customer, PortError>;

    /// Removes a customer; absent IDs are a no-op
    async fn delete_by_id(&self, id: CustomerId) -> Result<(), PortError>;

    /// Overwrites every mutable field of the row matching `customer.id`
    ///
    /// Affecting zero rows is not an error.
    async fn update(&self, customer: &Customer) -> Result<(), PortError>;
}

/// Mock implementation of CustomerPort for testing
///
/// This adapter stores customers in memory and counts every mutating call,
/// so tests can assert that a rejected request never reached the store.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicBool, AtomicI32, AtomicUsize, Ordering};
    use tokio::sync::RwLock;

    use core_kernel::HealthCheckResult;

    /// In-memory mock implementation of CustomerPort
    #[derive(Debug)]
    pub struct MockCustomerPort {
        customers: RwLock<BTreeMap<CustomerId, Customer>>,
        next_id: AtomicI32,
        inserts: AtomicUsize,
        updates: AtomicUsize,
        deletes: AtomicUsize,
        offline: AtomicBool,
    }

    impl Default for MockCustomerPort {
        fn default() -> Self {
            Self {
                customers: RwLock::new(BTreeMap::new()),
                next_id: AtomicI32::new(1),
                inserts: AtomicUsize::new(0),
                updates: AtomicUsize::new(0),
                deletes: AtomicUsize::new(0),
                offline: AtomicBool::new(false),
            }
        }
    }

    impl MockCustomerPort {
        /// Creates a new mock port
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates with customers for testing
        ///
        /// Seeding does not count as an insert.
        pub async fn with_customers(customers: Vec<Customer>) -> Self {
            let port = Self::new();
            {
                let mut stored = port.customers.write().await;
                for customer in customers {
                    stored.insert(customer.id, customer);
                }
                let next = stored.keys().last().map(|id| id.value() + 1).unwrap_or(1);
                port.next_id.store(next, Ordering::SeqCst);
            }
            port
        }

        /// Makes every subsequent call fail with a connection error
        pub fn set_offline(&self, offline: bool) {
            self.offline.store(offline, Ordering::SeqCst);
        }

        /// Number of `insert` calls that reached the store
        pub fn insert_count(&self) -> usize {
            self.inserts.load(Ordering::SeqCst)
        }

        /// Number of `update` calls that reached the store
        pub fn update_count(&self) -> usize {
            self.updates.load(Ordering::SeqCst)
        }

        /// Number of `delete_by_id` calls that reached the store
        pub fn delete_count(&self) -> usize {
            self.deletes.load(Ordering::SeqCst)
        }

        fn ensure_online(&self) -> Result<(), PortError> {
            if self.offline.load(Ordering::SeqCst) {
                return Err(PortError::connection("mock store is offline"));
            }
            Ok(())
        }
    }

    impl DomainPort for MockCustomerPort {}

    #[async_trait]
    impl HealthCheckable for MockCustomerPort {
        async fn health_check(&self) -> HealthCheckResult {
            match self.ensure_online() {
                Ok(()) => HealthCheckResult::healthy("mock-customer-port", 0),
                Err(e) => HealthCheckResult::unhealthy("mock-customer-port", 0, e.to_string()),
            }
        }
    }

    #[async_trait]
    impl CustomerPort for MockCustomerPort {
        async fn list_all(&self) -> Result<Vec<Customer>, PortError> {
            self.ensure_online()?;
            Ok(self.customers.read().await.values().cloned().collect())
        }

        async fn get_by_id(&self, id: CustomerId) -> Result<Option<Customer>, PortError> {
            self.ensure_online()?;
            Ok(self.customers.read().await.get(&id).cloned())
        }

        async fn exists_by_email(&self, email: &str) -> Result<bool, PortError> {
            self.ensure_online()?;
            Ok(self.customers.read().await.values().any(|c| c.email == email))
        }

        async fn exists_by_id(&self, id: CustomerId) -> Result<bool, PortError> {
            self.ensure_online()?;
            Ok(self.customers.read().await.contains_key(&id))
        }

        async fn insert(&self, customer: NewCustomer) -> Result<Customer, PortError> {
            self.ensure_online()?;
            self.inserts.fetch_add(1, Ordering::SeqCst);

            let mut customers = self.customers.write().await;
            if customers.values().any(|c| c.email == customer.email) {
                return Err(PortError::conflict(format!(
                    "duplicate key value violates unique constraint on email '{}'",
                    customer.email
                )));
            }

            let id = CustomerId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
            let persisted = Customer::from_new(id, customer);
            customers.insert(id, persisted.clone());
            Ok(persisted)
        }

        async fn delete_by_id(&self, id: CustomerId) -> Result<(), PortError> {
            self.ensure_online()?;
            self.deletes.fetch_add(1, Ordering::SeqCst);
            self.customers.write().await.remove(&id);
            Ok(())
        }

        async fn update(&self, customer: &Customer) -> Result<(), PortError> {
            self.ensure_online()?;
            self.updates.fetch_add(1, Ordering::SeqCst);

            let mut customers = self.customers.write().await;
            if customers
                .values()
                .any(|c| c.id != customer.id && c.email == customer.email)
            {
                return Err(PortError::conflict(format!(
                    "duplicate key value violates unique constraint on email '{}'",
                    customer.email
                )));
            }
            if let Some(stored) = customers.get_mut(&customer.id) {
                *stored = customer.clone();
            }
            Ok(())
        }
    }
}
