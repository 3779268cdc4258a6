//! Claim entity

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{ClaimId, PolicyId, Record};
use crate::validation::{require_non_negative_amount, ValidationError};

/// A claim filed against a policy
///
/// `status` is free text (Pending, Approved, Rejected, ...) and is stored
/// exactly as supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ClaimData")]
pub struct Claim {
    id: ClaimId,
    policy_id: PolicyId,
    #[serde(with = "rust_decimal::serde::float")]
    amount_claimed: Decimal,
    status: String,
}

/// Unvalidated claim fields, as they arrive on the wire
#[derive(Debug, Clone, Deserialize)]
pub struct ClaimData {
    pub id: ClaimId,
    pub policy_id: PolicyId,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount_claimed: Decimal,
    pub status: String,
}

impl Claim {
    /// Creates a claim, rejecting a negative claimed amount
    pub fn new(
        id: ClaimId,
        policy_id: PolicyId,
        amount_claimed: Decimal,
        status: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        require_non_negative_amount("amount_claimed", amount_claimed)?;

        Ok(Self {
            id,
            policy_id,
            amount_claimed,
            status: status.into(),
        })
    }

    pub fn id(&self) -> ClaimId {
        self.id
    }

    pub fn policy_id(&self) -> PolicyId {
        self.policy_id
    }

    pub fn amount_claimed(&self) -> Decimal {
        self.amount_claimed
    }

    pub fn status(&self) -> &str {
        &self.status
    }
}

impl TryFrom<ClaimData> for Claim {
    type Error = ValidationError;

    fn try_from(data: ClaimData) -> Result<Self, Self::Error> {
        Claim::new(data.id, data.policy_id, data.amount_claimed, data.status)
    }
}

impl Record for Claim {
    type Id = ClaimId;
    const ENTITY: &'static str = "Claim";

    fn id(&self) -> ClaimId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_status_is_stored_as_is() {
        let claim = Claim::new(ClaimId::new(1), PolicyId::new(1), dec!(10), "  weird status ")
            .unwrap();
        assert_eq!(claim.status(), "  weird status ");
    }

    #[test]
    fn test_rejects_negative_amount() {
        let err = Claim::new(ClaimId::new(1), PolicyId::new(1), dec!(-5), "Pending").unwrap_err();
        assert_eq!(err.field(), "amount_claimed");
    }

    #[test]
    fn test_zero_amount_is_valid() {
        assert!(Claim::new(ClaimId::new(1), PolicyId::new(1), dec!(0), "Pending").is_ok());
    }

    #[test]
    fn test_deserialize_accepts_integer_amount() {
        let claim: Claim =
            serde_json::from_str(r#"{"id": 3, "policy_id": 1, "amount_claimed": 900, "status": "Pending"}"#)
                .unwrap();
        assert_eq!(claim.amount_claimed(), dec!(900));
    }
}
