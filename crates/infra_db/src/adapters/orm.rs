//! SeaORM Customer Adapter
//!
//! The object-mapping implementation of `CustomerPort`. All access goes
//! through the `customer` entity; existence checks fetch at most one id
//! instead of counting rows.

use async_trait::async_trait;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, SqlxPostgresConnector,
};
use sqlx::PgPool;
use tracing::{debug, instrument};

use core_kernel::{CustomerId, DomainPort, HealthCheckResult, HealthCheckable, PortError};
use domain_customer::{Customer, CustomerPort, NewCustomer};

use crate::entity::customer;
use crate::error::{db_to_port_error, DatabaseError};
use crate::mapper::{parse_gender, MappingError};

const ADAPTER_ID: &str = "sea-orm-customer-adapter";

impl customer::Model {
    /// Convert a `SeaORM` row model into a domain `Customer`.
    fn into_customer(self) -> Result<Customer, MappingError> {
        let gender = self.gender.as_deref().map(parse_gender).transpose()?;

        Ok(Customer {
            id: CustomerId::new(self.id),
            name: self.name,
            email: self.email,
            age: self.age,
            gender,
        })
    }
}

/// SeaORM-backed implementation of the CustomerPort trait
#[derive(Debug, Clone)]
pub struct SeaOrmCustomerAdapter {
    db: DatabaseConnection,
}

impl SeaOrmCustomerAdapter {
    /// Creates an adapter over an existing SeaORM connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an adapter sharing an existing sqlx pool
    pub fn from_pool(pool: PgPool) -> Self {
        Self::new(SqlxPostgresConnector::from_sqlx_postgres_pool(pool))
    }
}

fn orm_err(e: DbErr) -> PortError {
    db_to_port_error(DatabaseError::from(e))
}

fn to_domain(model: customer::Model) -> Result<Customer, PortError> {
    model.into_customer().map_err(PortError::from)
}

impl DomainPort for SeaOrmCustomerAdapter {}

#[async_trait]
impl HealthCheckable for SeaOrmCustomerAdapter {
    async fn health_check(&self) -> HealthCheckResult {
        let start = std::time::Instant::now();
        let result = self.db.ping().await;
        let latency_ms = start.elapsed().as_millis() as u64;

        match result {
            Ok(()) => HealthCheckResult::healthy(ADAPTER_ID, latency_ms),
            Err(e) => HealthCheckResult::unhealthy(ADAPTER_ID, latency_ms, format!("Database error: {}", e)),
        }
    }
}

#[async_trait]
impl CustomerPort for SeaOrmCustomerAdapter {
    #[instrument(skip(self))]
    async fn list_all(&self) -> Result<Vec<Customer>, PortError> {
        debug!("Loading all customer entities");

        let models = customer::Entity::find()
            .order_by_asc(customer::Column::Id)
            .all(&self.db)
            .await
            .map_err(orm_err)?;

        models.into_iter().map(to_domain).collect()
    }

    #[instrument(skip(self), fields(customer_id = %id))]
    async fn get_by_id(&self, id: CustomerId) -> Result<Option<Customer>, PortError> {
        debug!("Loading customer entity");

        customer::Entity::find_by_id(id.value())
            .one(&self.db)
            .await
            .map_err(orm_err)?
            .map(to_domain)
            .transpose()
    }

    #[instrument(skip(self, email))]
    async fn exists_by_email(&self, email: &str) -> Result<bool, PortError> {
        let found = customer::Entity::find()
            .select_only()
            .column(customer::Column::Id)
            .filter(customer::Column::Email.eq(email))
            .into_tuple::<i32>()
            .one(&self.db)
            .await
            .map_err(orm_err)?;
        Ok(found.is_some())
    }

    #[instrument(skip(self), fields(customer_id = %id))]
    async fn exists_by_id(&self, id: CustomerId) -> Result<bool, PortError> {
        let found = customer::Entity::find()
            .select_only()
            .column(customer::Column::Id)
            .filter(customer::Column::Id.eq(id.value()))
            .into_tuple::<i32>()
            .one(&self.db)
            .await
            .map_err(orm_err)?;
        Ok(found.is_some())
    }

    #[instrument(skip(self, new_customer))]
    async fn insert(&self, new_customer: NewCustomer) -> Result<Customer, PortError> {
        let active_model = customer::ActiveModel {
            id: NotSet,
            name: Set(new_customer.name),
            email: Set(new_customer.email),
            age: Set(new_customer.age),
            gender: Set(new_customer.gender.map(|g| g.as_code().to_string())),
        };

        let model = active_model.insert(&self.db).await.map_err(orm_err)?;
        debug!(customer_id = model.id, "Inserted customer entity");
        to_domain(model)
    }

    #[instrument(skip(self), fields(customer_id = %id))]
    async fn delete_by_id(&self, id: CustomerId) -> Result<(), PortError> {
        let result = customer::Entity::delete_by_id(id.value())
            .exec(&self.db)
            .await
            .map_err(orm_err)?;

        debug!(rows = result.rows_affected, "Deleted customer entity");
        Ok(())
    }

    #[instrument(skip(self, updated), fields(customer_id = %updated.id))]
    async fn update(&self, updated: &Customer) -> Result<(), PortError> {
        let changes = customer::ActiveModel {
            id: NotSet,
            name: Set(updated.name.clone()),
            email: Set(updated.email.clone()),
            age: Set(updated.age),
            gender: Set(updated.gender.map(|g| g.as_code().to_string())),
        };

        // update_many reports zero affected rows instead of RecordNotUpdated
        let result = customer::Entity::update_many()
            .set(changes)
            .filter(customer::Column::Id.eq(updated.id.value()))
            .exec(&self.db)
            .await
            .map_err(orm_err)?;

        debug!(rows = result.rows_affected, "Updated customer entity");
        Ok(())
    }
}
