//! Pre-built Test Fixtures
//!
//! Provides ready-to-use records for the claims system. Identifiers are
//! fixed so tests can refer to them directly.

use core_kernel::{ClaimId, PolicyId, PolicyholderId};
use domain_claims::{Claim, ClaimsService, Policy, Policyholder};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Fixture for policyholder test data
pub struct PolicyholderFixtures;

impl PolicyholderFixtures {
    /// Policyholder 1, a working-age adult
    pub fn alice() -> Policyholder {
        Policyholder::new(PolicyholderId::new(1), "Alice Smith", 34).unwrap()
    }

    /// Policyholder 2, a retiree
    pub fn bob() -> Policyholder {
        Policyholder::new(PolicyholderId::new(2), "Bob Jones", 67).unwrap()
    }

    /// Policyholder 3, a newborn (age zero is allowed)
    pub fn newborn() -> Policyholder {
        Policyholder::new(PolicyholderId::new(3), "Baby Lee", 0).unwrap()
    }
}

/// Fixture for policy test data
pub struct PolicyFixtures;

impl PolicyFixtures {
    /// Standard coverage limit used across fixtures
    pub fn standard_coverage() -> Decimal {
        dec!(10000.00)
    }

    /// Policy 10, health cover for Alice
    pub fn alice_health() -> Policy {
        Policy::new(
            PolicyId::new(10),
            PolicyholderId::new(1),
            "Health",
            Self::standard_coverage(),
        )
        .unwrap()
    }

    /// Policy 20, auto cover for Bob
    pub fn bob_auto() -> Policy {
        Policy::new(PolicyId::new(20), PolicyholderId::new(2), "Auto", dec!(2500.00)).unwrap()
    }

    /// Policy 99, whose policyholder does not exist
    pub fn orphan() -> Policy {
        Policy::new(PolicyId::new(99), PolicyholderId::new(999), "Life", dec!(1000.00)).unwrap()
    }
}

/// Fixture for claim test data
pub struct ClaimFixtures;

impl ClaimFixtures {
    /// Claim 100 against Alice's health policy, well within coverage
    pub fn alice_pending() -> Claim {
        Claim::new(ClaimId::new(100), PolicyId::new(10), dec!(1200.50), "Pending").unwrap()
    }

    /// Claim 101 for exactly the coverage of Alice's health policy
    pub fn alice_at_limit() -> Claim {
        Claim::new(
            ClaimId::new(101),
            PolicyId::new(10),
            PolicyFixtures::standard_coverage(),
            "Approved",
        )
        .unwrap()
    }

    /// Claim 102 one cent over the coverage of Alice's health policy
    pub fn alice_over_limit() -> Claim {
        Claim::new(
            ClaimId::new(102),
            PolicyId::new(10),
            PolicyFixtures::standard_coverage() + dec!(0.01),
            "Pending",
        )
        .unwrap()
    }

    /// Claim 199, whose policy does not exist
    pub fn orphan() -> Claim {
        Claim::new(ClaimId::new(199), PolicyId::new(999), dec!(10.00), "Pending").unwrap()
    }
}

/// Creates Alice, Bob, their policies and Alice's pending claim
///
/// # Panics
///
/// Panics if any of the writes is rejected
pub async fn seed_portfolio(service: &ClaimsService) {
    service.create_policyholder(PolicyholderFixtures::alice()).await.unwrap();
    service.create_policyholder(PolicyholderFixtures::bob()).await.unwrap();
    service.create_policy(PolicyFixtures::alice_health()).await.unwrap();
    service.create_policy(PolicyFixtures::bob_auto()).await.unwrap();
    service.create_claim(ClaimFixtures::alice_pending()).await.unwrap();
}
