//! Storage adapter selection

use std::sync::Arc;

use sqlx::PgPool;
use tracing::info;

use domain_customer::CustomerPort;
use infra_db::{PostgresCustomerAdapter, SeaOrmCustomerAdapter};

use crate::config::StorageBackend;

/// Builds the configured `CustomerPort` over a shared pool
pub fn build_customer_port(backend: StorageBackend, pool: PgPool) -> Arc<dyn CustomerPort> {
    info!(%backend, "Selecting customer storage adapter");

    match backend {
        StorageBackend::Sql => Arc::new(PostgresCustomerAdapter::new(pool)),
        StorageBackend::Orm => Arc::new(SeaOrmCustomerAdapter::from_pool(pool)),
    }
}
