//! Structural field validation
//!
//! Every entity constructor runs its fields through these checks, so a
//! malformed record is rejected before it can reach the integrity rules.
//!
//! # Field Rules
//!
//! - Text fields that carry meaning (policyholder name, policy type) must not
//!   be empty or whitespace-only
//! - Ages must not be negative
//! - Monetary amounts (coverage, claimed amount) must not be negative
//!
//! Claim status is stored as supplied and is not checked here.

use rust_decimal::Decimal;
use thiserror::Error;

/// A structural violation in caller-supplied input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required text field was empty
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    /// A numeric field was below zero
    #[error("{field} must not be negative, got {value}")]
    NegativeValue { field: &'static str, value: String },
}

impl ValidationError {
    /// Returns the name of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::EmptyField { field } => field,
            ValidationError::NegativeValue { field, .. } => field,
        }
    }
}

/// Rejects empty or whitespace-only text
pub fn require_non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(())
}

/// Rejects negative integers
pub fn require_non_negative(field: &'static str, value: i32) -> Result<(), ValidationError> {
    if value < 0 {
        return Err(ValidationError::NegativeValue {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Rejects negative monetary amounts
pub fn require_non_negative_amount(
    field: &'static str,
    value: Decimal,
) -> Result<(), ValidationError> {
    if value < Decimal::ZERO {
        return Err(ValidationError::NegativeValue {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}
