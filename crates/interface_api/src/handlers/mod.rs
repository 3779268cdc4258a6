//! HTTP request handlers
//!
//! One module per record type. Handlers parse the request, call the
//! integrity engine, and echo the stored record back.

pub mod policyholder;
pub mod policy;
pub mod claims;
pub mod health;

use serde::{Deserialize, Serialize};

/// Body returned by delete endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    /// Confirmation for a deleted record of `entity`
    pub fn deleted(entity: &str) -> Self {
        Self {
            message: format!("{entity} deleted successfully"),
        }
    }
}
