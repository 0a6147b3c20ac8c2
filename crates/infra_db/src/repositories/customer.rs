//! Customer repository implementation
//!
//! Explicit, parameterized statements against the `customer` table. Queries
//! are checked at runtime rather than with the `query!` macros, so building
//! the crate never needs a live database.

use sqlx::postgres::PgArguments;
use sqlx::query::Query;
use sqlx::{PgPool, Postgres};

use domain_customer::{Customer, Gender, NewCustomer};

use crate::error::DatabaseError;
use crate::mapper::map_customer;

const SELECT_ALL: &str = r#"
    SELECT id, name, email, age, gender
    FROM customer
    ORDER BY id
"#;

const SELECT_BY_ID: &str = r#"
    SELECT id, name, email, age, gender
    FROM customer
    WHERE id = $1
"#;

const COUNT_BY_EMAIL: &str = "SELECT count(id) FROM customer WHERE email = $1";

const COUNT_BY_ID: &str = "SELECT count(id) FROM customer WHERE id = $1";

const INSERT: &str = r#"
    INSERT INTO customer (name, email, age, gender)
    VALUES ($1, $2, $3, $4)
    RETURNING id, name, email, age, gender
"#;

const UPDATE: &str = r#"
    UPDATE customer
    SET name = $1, email = $2, age = $3, gender = $4
    WHERE id = $5
"#;

const DELETE_BY_ID: &str = "DELETE FROM customer WHERE id = $1";

/// A value bound into `INSERT` or `UPDATE`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldValue<'a> {
    Text(&'a str),
    Int(i32),
    NullableText(Option<&'a str>),
}

/// The written columns paired with their values, in placeholder order
fn write_fields<'a>(
    name: &'a str,
    email: &'a str,
    age: i32,
    gender: Option<Gender>,
) -> [(&'static str, FieldValue<'a>); 4] {
    [
        ("name", FieldValue::Text(name)),
        ("email", FieldValue::Text(email)),
        ("age", FieldValue::Int(age)),
        ("gender", FieldValue::NullableText(gender.map(|g| g.as_code()))),
    ]
}

fn bind_fields<'q>(
    mut query: Query<'q, Postgres, PgArguments>,
    fields: [(&'static str, FieldValue<'q>); 4],
) -> Query<'q, Postgres, PgArguments> {
    for (_, value) in fields {
        query = match value {
            FieldValue::Text(v) => query.bind(v),
            FieldValue::Int(v) => query.bind(v),
            FieldValue::NullableText(v) => query.bind(v),
        };
    }
    query
}

/// Repository for customer rows
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: PgPool,
}

impl CustomerRepository {
    /// Creates a repository over the given pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns every customer ordered by id
    pub async fn find_all(&self) -> Result<Vec<Customer>, DatabaseError> {
        let rows = sqlx::query(SELECT_ALL).fetch_all(&self.pool).await?;

        let customers = rows
            .iter()
            .map(|row| map_customer(row))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(customers)
    }

    /// Retrieves a customer by id
    ///
    /// # Returns
    ///
    /// The customer, or `None` if no row has this id
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Customer>, DatabaseError> {
        let row = sqlx::query(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(|row| map_customer(row)).transpose()?)
    }

    /// Counts the customers registered with an email
    pub async fn count_by_email(&self, email: &str) -> Result<i64, DatabaseError> {
        let count = sqlx::query_scalar::<_, i64>(COUNT_BY_EMAIL)
            .bind(email)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Counts the customers with an id (zero or one)
    pub async fn count_by_id(&self, id: i32) -> Result<i64, DatabaseError> {
        let count = sqlx::query_scalar::<_, i64>(COUNT_BY_ID)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Inserts a new customer
    ///
    /// # Returns
    ///
    /// The inserted customer with its database-assigned id
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::DuplicateEntry` if the email is already taken
    pub async fn insert(&self, customer: &NewCustomer) -> Result<Customer, DatabaseError> {
        let fields = write_fields(&customer.name, &customer.email, customer.age, customer.gender);
        let row = bind_fields(sqlx::query(INSERT), fields)
            .fetch_one(&self.pool)
            .await?;

        Ok(map_customer(&row)?)
    }

    /// Overwrites every mutable column of the row with `customer.id`
    ///
    /// # Returns
    ///
    /// The number of rows updated
    pub async fn update(&self, customer: &Customer) -> Result<u64, DatabaseError> {
        let fields = write_fields(&customer.name, &customer.email, customer.age, customer.gender);
        let result = bind_fields(sqlx::query(UPDATE), fields)
            .bind(customer.id.value())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Deletes a customer by id
    ///
    /// # Returns
    ///
    /// The number of rows deleted
    pub async fn delete(&self, id: i32) -> Result<u64, DatabaseError> {
        let result = sqlx::query(DELETE_BY_ID)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
