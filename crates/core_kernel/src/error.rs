//! Persistence error types shared by every storage backend

use std::fmt;
use thiserror::Error;

/// Error type for persistence port operations
///
/// Every backend reports failures through this type, so callers cannot tell
/// which store served the request from the error alone.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A record with the same identifier is already stored
    #[error("{entity} with id {id} already exists")]
    AlreadyExists {
        entity: &'static str,
        id: String,
    },

    /// The targeted identifier is not stored
    #[error("{entity} with id {id} not found")]
    NotFound {
        entity: &'static str,
        id: String,
    },

    /// Any fault the port contract does not classify (connectivity loss,
    /// unexpected constraint violations, decoding failures)
    #[error("Storage backend error: {message}")]
    Backend {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl StoreError {
    /// Creates an AlreadyExists error
    pub fn already_exists(entity: &'static str, id: impl fmt::Display) -> Self {
        StoreError::AlreadyExists {
            entity,
            id: id.to_string(),
        }
    }

    /// Creates a NotFound error
    pub fn not_found(entity: &'static str, id: impl fmt::Display) -> Self {
        StoreError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Creates a Backend error without an underlying source
    pub fn backend(message: impl Into<String>) -> Self {
        StoreError::Backend {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a Backend error wrapping the underlying cause
    pub fn backend_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        StoreError::Backend {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Returns true if this error indicates the record was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }

    /// Returns true if this error indicates a duplicate identifier
    pub fn is_already_exists(&self) -> bool {
        matches!(self, StoreError::AlreadyExists { .. })
    }
}
