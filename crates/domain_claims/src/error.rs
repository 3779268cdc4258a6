//! Claims domain errors
//!
//! This module defines the failures the integrity rules report. Every variant
//! except `Store` is an expected, caller-correctable condition.

use std::fmt;

use rust_decimal::Decimal;
use thiserror::Error;

use core_kernel::StoreError;
use crate::validation::ValidationError;

/// The kind of parent record a reference points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    Policyholder,
    Policy,
}

impl ReferenceKind {
    /// Lowercase name used in error payloads ("policyholder", "policy")
    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceKind::Policyholder => "policyholder",
            ReferenceKind::Policy => "policy",
        }
    }
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceKind::Policyholder => write!(f, "Policyholder"),
            ReferenceKind::Policy => write!(f, "Policy"),
        }
    }
}

/// Errors that can occur in the claims domain
#[derive(Debug, Error)]
pub enum ClaimsError {
    /// Create targeted an identifier that is already taken
    #[error("{entity} already exists")]
    AlreadyExists { entity: &'static str, id: String },

    /// Update, delete or lookup targeted an unknown identifier
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: String },

    /// A foreign identifier does not name an existing parent record
    #[error("{kind} does not exist")]
    ReferenceNotFound { kind: ReferenceKind, id: String },

    /// The claimed amount is above the policy's coverage
    #[error("Claim amount exceeds policy coverage")]
    CoverageExceeded { claimed: Decimal, coverage: Decimal },

    /// A structural field constraint was violated
    #[error("Malformed input: {0}")]
    Malformed(#[from] ValidationError),

    /// The storage backend failed in a way the rules do not classify
    #[error(transparent)]
    Store(StoreError),
}

impl ClaimsError {
    /// Creates a ReferenceNotFound error
    pub fn reference_not_found(kind: ReferenceKind, id: impl fmt::Display) -> Self {
        ClaimsError::ReferenceNotFound {
            kind,
            id: id.to_string(),
        }
    }

    /// Creates a NotFound error
    pub fn not_found(entity: &'static str, id: impl fmt::Display) -> Self {
        ClaimsError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Returns true for failures the caller caused and can correct
    pub fn is_client_error(&self) -> bool {
        !matches!(self, ClaimsError::Store(_))
    }

    /// Returns true if this error indicates the target record was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClaimsError::NotFound { .. })
    }
}

impl From<StoreError> for ClaimsError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::AlreadyExists { entity, id } => ClaimsError::AlreadyExists { entity, id },
            StoreError::NotFound { entity, id } => ClaimsError::NotFound { entity, id },
            other => ClaimsError::Store(other),
        }
    }
}
