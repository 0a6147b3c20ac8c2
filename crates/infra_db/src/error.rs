//! Database error types
//!
//! This module defines the error types that can occur during database operations,
//! and their translation into the adapter-neutral `PortError`.

use sea_orm::{ConnAcquireErr, DbErr, RuntimeErr};
use thiserror::Error;

use core_kernel::PortError;

use crate::mapper::MappingError;

/// Errors that can occur during database operations
///
/// Both storage adapters funnel their driver errors through this enum, so a
/// unique violation looks the same whether it came from sqlx or SeaORM.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Failed to establish a database connection
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Unique constraint violation
    #[error("Duplicate entry: {0}")]
    DuplicateEntry(String),

    /// Check or foreign key constraint violation
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// Migration error
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// A row could not be turned into a customer
    #[error("Mapping failed: {0}")]
    Mapping(#[from] MappingError),

    /// Pool exhaustion - no available connections
    #[error("Connection pool exhausted")]
    PoolExhausted,
}

impl DatabaseError {
    /// Checks if this error is a connection-related issue
    pub fn is_connection_error(&self) -> bool {
        matches!(
            self,
            DatabaseError::ConnectionFailed(_) | DatabaseError::PoolExhausted
        )
    }
}

/// Converts SQLx errors to more specific DatabaseError variants
///
/// This function analyzes the SQLx error and maps it to the appropriate
/// DatabaseError variant based on the PostgreSQL error code.
impl From<&sqlx::Error> for DatabaseError {
    fn from(error: &sqlx::Error) -> Self {
        match error {
            sqlx::Error::PoolTimedOut => DatabaseError::PoolExhausted,
            sqlx::Error::PoolClosed | sqlx::Error::Io(_) | sqlx::Error::Tls(_) => {
                DatabaseError::ConnectionFailed(error.to_string())
            }
            sqlx::Error::Database(db_err) => {
                // PostgreSQL error codes
                // https://www.postgresql.org/docs/current/errcodes-appendix.html
                match db_err.code().as_deref() {
                    Some("23505") => DatabaseError::DuplicateEntry(db_err.message().to_string()),
                    Some("23503") | Some("23514") => {
                        DatabaseError::ConstraintViolation(db_err.message().to_string())
                    }
                    _ => DatabaseError::QueryFailed(db_err.message().to_string()),
                }
            }
            _ => DatabaseError::QueryFailed(error.to_string()),
        }
    }
}

impl From<sqlx::Error> for DatabaseError {
    fn from(error: sqlx::Error) -> Self {
        DatabaseError::from(&error)
    }
}

impl From<DbErr> for DatabaseError {
    /// SeaORM wraps the driver error it got from sqlx; unwrap it so both
    /// adapters share one SQLSTATE and I/O classification.
    fn from(error: DbErr) -> Self {
        match &error {
            DbErr::Query(RuntimeErr::SqlxError(e))
            | DbErr::Exec(RuntimeErr::SqlxError(e))
            | DbErr::Conn(RuntimeErr::SqlxError(e)) => DatabaseError::from(e),
            DbErr::ConnectionAcquire(ConnAcquireErr::Timeout) => DatabaseError::PoolExhausted,
            DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => {
                DatabaseError::ConnectionFailed(error.to_string())
            }
            _ => DatabaseError::QueryFailed(error.to_string()),
        }
    }
}

/// Converts a database error to a port error
pub fn db_to_port_error(e: DatabaseError) -> PortError {
    match e {
        DatabaseError::DuplicateEntry(message) => PortError::conflict(message),
        DatabaseError::ConstraintViolation(message) => PortError::validation(message),
        DatabaseError::Mapping(mapping) => PortError::from(mapping),
        e if e.is_connection_error() => PortError::Connection {
            message: e.to_string(),
            source: Some(Box::new(e)),
        },
        _ => PortError::internal(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;
    use std::fmt;
    use std::io;

    use sqlx::error::ErrorKind;

    /// A server-side error carrying only a SQLSTATE
    #[derive(Debug)]
    struct PgState(&'static str);

    impl fmt::Display for PgState {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "violation {}", self.0)
        }
    }

    impl std::error::Error for PgState {}

    impl sqlx::error::DatabaseError for PgState {
        fn message(&self) -> &str {
            "violation"
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            Some(Cow::Borrowed(self.0))
        }

        fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    fn connection_reset() -> sqlx::Error {
        sqlx::Error::Io(io::Error::from(io::ErrorKind::ConnectionReset))
    }

    fn server_error(code: &'static str) -> sqlx::Error {
        sqlx::Error::Database(Box::new(PgState(code)))
    }

    fn via_orm(error: sqlx::Error) -> PortError {
        db_to_port_error(DatabaseError::from(DbErr::Query(RuntimeErr::SqlxError(error))))
    }

    fn via_sql(error: sqlx::Error) -> PortError {
        db_to_port_error(DatabaseError::from(error))
    }

    #[test]
    fn test_pool_timeout_is_connection_error() {
        let error = DatabaseError::from(sqlx::Error::PoolTimedOut);
        assert!(error.is_connection_error());
        assert!(db_to_port_error(error).is_transient());
    }

    #[test]
    fn test_io_failure_is_transient_for_both_drivers() {
        let sql = via_sql(connection_reset());
        let orm = via_orm(connection_reset());

        assert!(sql.is_transient());
        assert_eq!(orm.is_transient(), sql.is_transient());

        let exec = DbErr::Exec(RuntimeErr::SqlxError(connection_reset()));
        assert!(db_to_port_error(DatabaseError::from(exec)).is_transient());
    }

    #[test]
    fn test_sqlstate_classification_matches_for_both_drivers() {
        assert!(via_sql(server_error("23505")).is_conflict());
        assert!(via_orm(server_error("23505")).is_conflict());

        assert!(matches!(via_sql(server_error("23514")), PortError::Validation { .. }));
        assert!(matches!(via_orm(server_error("23514")), PortError::Validation { .. }));

        assert!(matches!(via_sql(server_error("42P01")), PortError::Internal { .. }));
        assert!(matches!(via_orm(server_error("42P01")), PortError::Internal { .. }));
    }

    #[test]
    fn test_orm_acquire_timeout_is_pool_exhaustion() {
        let error = DatabaseError::from(DbErr::ConnectionAcquire(ConnAcquireErr::Timeout));
        assert!(matches!(error, DatabaseError::PoolExhausted));
    }

    #[test]
    fn test_duplicate_becomes_conflict() {
        let error = DatabaseError::DuplicateEntry("email 'ana@x.com' is taken".to_string());

        let port = db_to_port_error(error);
        assert!(port.is_conflict());
        assert!(port.to_string().contains("ana@x.com"));
    }

    #[test]
    fn test_mapping_becomes_transformation() {
        let error = DatabaseError::from(MappingError::UnknownGender("OTHER".to_string()));
        assert!(matches!(
            db_to_port_error(error),
            PortError::Transformation { .. }
        ));
    }

    #[test]
    fn test_orm_generic_error_is_query_failure() {
        let error = DatabaseError::from(DbErr::Custom("boom".to_string()));
        assert!(matches!(error, DatabaseError::QueryFailed(_)));
    }
}
