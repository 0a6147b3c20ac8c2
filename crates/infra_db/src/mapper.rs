//! Record mapper
//!
//! Turns a raw result row into a domain `Customer`. Rows are read through the
//! `ColumnSource` trait, so the mapping logic can be exercised with an
//! in-memory row as well as a live `PgRow`.

use sqlx::postgres::PgRow;
use sqlx::{Column, Row};
use thiserror::Error;

use core_kernel::{CustomerId, PortError};
use domain_customer::{Customer, Gender};

/// Failure to map a row to a customer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    /// A column was missing or held an unexpected type
    #[error("column '{column}' could not be read: {reason}")]
    Column { column: String, reason: String },

    /// The gender column held a value outside the known codes
    #[error("unknown gender code '{0}'")]
    UnknownGender(String),
}

impl MappingError {
    /// Creates a column error
    pub fn column(column: &str, reason: impl std::fmt::Display) -> Self {
        MappingError::Column {
            column: column.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl From<MappingError> for PortError {
    fn from(error: MappingError) -> Self {
        PortError::transformation(error.to_string())
    }
}

/// A result row whose columns can be read by name
pub trait ColumnSource {
    /// Returns true if the row has a column with this name
    fn has_column(&self, column: &str) -> bool;

    /// Reads a non-null integer column
    fn int(&self, column: &str) -> Result<i32, MappingError>;

    /// Reads a non-null text column
    fn text(&self, column: &str) -> Result<String, MappingError>;

    /// Reads a nullable text column
    fn optional_text(&self, column: &str) -> Result<Option<String>, MappingError>;
}

impl ColumnSource for PgRow {
    fn has_column(&self, column: &str) -> bool {
        self.columns().iter().any(|c| c.name() == column)
    }

    fn int(&self, column: &str) -> Result<i32, MappingError> {
        self.try_get::<i32, _>(column)
            .map_err(|e| MappingError::column(column, e))
    }

    fn text(&self, column: &str) -> Result<String, MappingError> {
        self.try_get::<String, _>(column)
            .map_err(|e| MappingError::column(column, e))
    }

    fn optional_text(&self, column: &str) -> Result<Option<String>, MappingError> {
        self.try_get::<Option<String>, _>(column)
            .map_err(|e| MappingError::column(column, e))
    }
}

/// Parses a stored gender code
pub fn parse_gender(code: &str) -> Result<Gender, MappingError> {
    Gender::ALL
        .into_iter()
        .find(|g| g.as_code() == code)
        .ok_or_else(|| MappingError::UnknownGender(code.to_string()))
}

/// Maps one row to a customer
///
/// Reads `id`, `name`, `email` and `age`. The `gender` column is optional: a
/// row without it, or with a NULL in it, maps to a customer with no gender.
pub fn map_customer<R: ColumnSource + ?Sized>(row: &R) -> Result<Customer, MappingError> {
    let gender = if row.has_column("gender") {
        row.optional_text("gender")?
            .as_deref()
            .map(parse_gender)
            .transpose()?
    } else {
        None
    };

    Ok(Customer {
        id: CustomerId::new(row.int("id")?),
        name: row.text("name")?,
        email: row.text("email")?,
        age: row.int("age")?,
        gender,
    })
}
