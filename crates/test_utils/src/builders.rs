//! Test Data Builders
//!
//! Provides builder patterns for constructing test records with sensible
//! defaults. Tests set only the fields they care about.
//!
//! `build()` validates like the real constructors do and panics on invalid
//! input.

use core_kernel::{ClaimId, PolicyId, PolicyholderId};
use domain_claims::{
    Claim, ClaimData, Policy, PolicyData, Policyholder, PolicyholderData, ValidationError,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Builder for constructing test policyholders
pub struct TestPolicyholderBuilder {
    id: PolicyholderId,
    name: String,
    age: i32,
}

impl Default for TestPolicyholderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestPolicyholderBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            id: PolicyholderId::new(1),
            name: "Test Holder".to_string(),
            age: 40,
        }
    }

    /// Sets the policyholder ID
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = PolicyholderId::new(id);
        self
    }

    /// Sets the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the age
    pub fn with_age(mut self, age: i32) -> Self {
        self.age = age;
        self
    }

    /// Builds the unvalidated payload
    fn build_data(self) -> PolicyholderData {
        PolicyholderData {
            id: self.id,
            name: self.name,
            age: self.age,
        }
    }

    /// Builds a validated policyholder
    fn try_build(self) -> Result<Policyholder, ValidationError> {
        Policyholder::try_from(self.build_data())
    }

    /// Builds a validated policyholder, panicking on invalid input
    pub fn build(self) -> Policyholder {
        self.try_build().unwrap()
    }
}

/// Builder for constructing test policies
pub struct TestPolicyBuilder {
    id: PolicyId,
    policyholder_id: PolicyholderId,
    policy_type: String,
    coverage_amount: Decimal,
}

impl Default for TestPolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestPolicyBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            id: PolicyId::new(1),
            policyholder_id: PolicyholderId::new(1),
            policy_type: "Health".to_string(),
            coverage_amount: dec!(5000.00),
        }
    }

    /// Sets the policy ID
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = PolicyId::new(id);
        self
    }

    /// Sets the owning policyholder ID
    pub fn with_policyholder_id(mut self, id: i64) -> Self {
        self.policyholder_id = PolicyholderId::new(id);
        self
    }

    /// Sets the policy type
    pub fn with_type(mut self, policy_type: impl Into<String>) -> Self {
        self.policy_type = policy_type.into();
        self
    }

    /// Sets the coverage amount
    pub fn with_coverage(mut self, amount: Decimal) -> Self {
        self.coverage_amount = amount;
        self
    }

    /// Builds the unvalidated payload
    fn build_data(self) -> PolicyData {
        PolicyData {
            id: self.id,
            policyholder_id: self.policyholder_id,
            policy_type: self.policy_type,
            coverage_amount: self.coverage_amount,
        }
    }

    /// Builds a validated policy
    fn try_build(self) -> Result<Policy, ValidationError> {
        Policy::try_from(self.build_data())
    }

    /// Builds a validated policy, panicking on invalid input
    pub fn build(self) -> Policy {
        self.try_build().unwrap()
    }
}

/// Builder for constructing test claims
pub struct TestClaimBuilder {
    id: ClaimId,
    policy_id: PolicyId,
    amount_claimed: Decimal,
    status: String,
}

impl Default for TestClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClaimBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            id: ClaimId::new(1),
            policy_id: PolicyId::new(1),
            amount_claimed: dec!(250.00),
            status: "Pending".to_string(),
        }
    }

    /// Sets the claim ID
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = ClaimId::new(id);
        self
    }

    /// Sets the policy ID
    pub fn with_policy_id(mut self, id: i64) -> Self {
        self.policy_id = PolicyId::new(id);
        self
    }

    /// Sets the claimed amount
    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount_claimed = amount;
        self
    }

    /// Sets the status label
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds the unvalidated payload
    fn build_data(self) -> ClaimData {
        ClaimData {
            id: self.id,
            policy_id: self.policy_id,
            amount_claimed: self.amount_claimed,
            status: self.status,
        }
    }

    /// Builds a validated claim
    fn try_build(self) -> Result<Claim, ValidationError> {
        Claim::try_from(self.build_data())
    }

    /// Builds a validated claim, panicking on invalid input
    pub fn build(self) -> Claim {
        self.try_build().unwrap()
    }
}
