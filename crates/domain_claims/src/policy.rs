//! Policy entity
//!
//! A policy belongs to one policyholder and caps the claims filed against it
//! with its coverage amount. The policy type is an open category (Health,
//! Auto, Life, ...) and is only required to be non-empty.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{PolicyId, PolicyholderId, Record};
use crate::validation::{require_non_empty, require_non_negative_amount, ValidationError};

/// An insurance policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PolicyData")]
pub struct Policy {
    id: PolicyId,
    policyholder_id: PolicyholderId,
    #[serde(rename = "type")]
    policy_type: String,
    #[serde(with = "rust_decimal::serde::float")]
    coverage_amount: Decimal,
}

/// Unvalidated policy fields, as they arrive on the wire
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyData {
    pub id: PolicyId,
    pub policyholder_id: PolicyholderId,
    #[serde(rename = "type")]
    pub policy_type: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub coverage_amount: Decimal,
}

impl Policy {
    /// Creates a policy, rejecting an empty type or a negative coverage amount
    pub fn new(
        id: PolicyId,
        policyholder_id: PolicyholderId,
        policy_type: impl Into<String>,
        coverage_amount: Decimal,
    ) -> Result<Self, ValidationError> {
        let policy_type = policy_type.into();
        require_non_empty("type", &policy_type)?;
        require_non_negative_amount("coverage_amount", coverage_amount)?;

        Ok(Self {
            id,
            policyholder_id,
            policy_type,
            coverage_amount,
        })
    }

    pub fn id(&self) -> PolicyId {
        self.id
    }

    /// The policyholder that owns this policy
    pub fn policyholder_id(&self) -> PolicyholderId {
        self.policyholder_id
    }

    pub fn policy_type(&self) -> &str {
        &self.policy_type
    }

    /// Upper bound for any single claim against this policy
    pub fn coverage_amount(&self) -> Decimal {
        self.coverage_amount
    }

    /// Returns true if a claim of `amount` fits within the coverage.
    /// The bound is inclusive.
    pub fn covers(&self, amount: Decimal) -> bool {
        amount <= self.coverage_amount
    }
}

impl TryFrom<PolicyData> for Policy {
    type Error = ValidationError;

    fn try_from(data: PolicyData) -> Result<Self, Self::Error> {
        Policy::new(
            data.id,
            data.policyholder_id,
            data.policy_type,
            data.coverage_amount,
        )
    }
}

impl Record for Policy {
    type Id = PolicyId;
    const ENTITY: &'static str = "Policy";

    fn id(&self) -> PolicyId {
        self.id
    }
}
