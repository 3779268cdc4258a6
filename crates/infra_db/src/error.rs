//! Database error types
//!
//! This module classifies sqlx failures by PostgreSQL error code and converts
//! them into the persistence port's `StoreError`.

use std::fmt;

use thiserror::Error;

use core_kernel::StoreError;

/// Errors that can occur during database operations
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Failed to establish a database connection
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Entity not found in database
    #[error("Entity not found: {0}")]
    NotFound(String),

    /// Unique constraint violation
    #[error("Duplicate entry: {0}")]
    DuplicateEntry(String),

    /// Check constraint violation
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// A stored row could not be turned back into a domain record
    #[error("Invalid stored row: {0}")]
    InvalidRow(String),

    /// Migration error
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Pool exhaustion - no available connections
    #[error("Connection pool exhausted")]
    PoolExhausted,
}

impl DatabaseError {
    /// Converts into the port error for an operation on `entity` with `id`
    ///
    /// Duplicate keys and missing rows become the port's classified errors;
    /// everything else is reported as an unclassified backend fault.
    pub fn into_store_error(self, entity: &'static str, id: impl fmt::Display) -> StoreError {
        match self {
            DatabaseError::DuplicateEntry(_) => StoreError::already_exists(entity, id),
            DatabaseError::NotFound(_) => StoreError::not_found(entity, id),
            other => StoreError::backend_with_source(format!("{entity} storage failed"), other),
        }
    }
}

/// Converts SQLx errors to more specific DatabaseError variants
///
/// Database errors are mapped by PostgreSQL error code. Foreign keys are not
/// enforced, so 23503 never occurs and falls through to `QueryFailed`.
/// https://www.postgresql.org/docs/current/errcodes-appendix.html
impl From<sqlx::Error> for DatabaseError {
    fn from(error: sqlx::Error) -> Self {
        match &error {
            sqlx::Error::RowNotFound => DatabaseError::NotFound("Record not found".to_string()),
            sqlx::Error::PoolTimedOut => DatabaseError::PoolExhausted,
            sqlx::Error::Io(e) => DatabaseError::ConnectionFailed(e.to_string()),
            sqlx::Error::Database(db_err) => {
                let message = db_err.message().to_string();
                match db_err.code().as_deref() {
                    Some("23505") => DatabaseError::DuplicateEntry(message),
                    Some("23514") => DatabaseError::ConstraintViolation(message),
                    _ => DatabaseError::QueryFailed(message),
                }
            }
            _ => DatabaseError::QueryFailed(error.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DatabaseError {
    fn from(error: sqlx::migrate::MigrateError) -> Self {
        DatabaseError::MigrationFailed(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let error = DatabaseError::from(sqlx::Error::RowNotFound);
        assert!(matches!(error, DatabaseError::NotFound(_)));

        let store = error.into_store_error("Claim", 4);
        assert!(store.is_not_found());
    }

    #[test]
    fn test_pool_timeout_is_backend_fault() {
        let error = DatabaseError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(error, DatabaseError::PoolExhausted));
        assert!(matches!(
            error.into_store_error("Policy", 1),
            StoreError::Backend { .. }
        ));
    }

    #[test]
    fn test_duplicate_maps_to_already_exists() {
        let error = DatabaseError::DuplicateEntry("policyholders_pkey".to_string());

        let store = error.into_store_error("Policyholder", "PH-1");
        assert_eq!(store.to_string(), "Policyholder with id PH-1 already exists");
    }
}
