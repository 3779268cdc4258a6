//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating records that satisfy the
//! structural rules, plus raw amounts for probing the coverage boundary.

use core_kernel::{ClaimId, PolicyId, PolicyholderId};
use domain_claims::{Claim, Policy, Policyholder};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for generating identifiers in a small range so collisions happen
pub fn id_strategy() -> impl Strategy<Value = i64> {
    1i64..50i64
}

/// Strategy for generating non-negative amounts with cent precision
pub fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for generating names that pass validation
pub fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,11}( [A-Z][a-z]{1,11})?"
}

/// Strategy for generating policy types
pub fn policy_type_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Health".to_string()),
        Just("Auto".to_string()),
        Just("Life".to_string()),
        Just("Home".to_string()),
        Just("Travel".to_string()),
    ]
}

/// Strategy for generating claim status labels
pub fn status_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Pending".to_string()),
        Just("Approved".to_string()),
        Just("Rejected".to_string()),
        Just("Paid".to_string()),
    ]
}

/// Strategy for generating valid policyholders
pub fn policyholder_strategy() -> impl Strategy<Value = Policyholder> {
    (id_strategy(), name_strategy(), 0i32..120i32).prop_map(|(id, name, age)| {
        Policyholder::new(PolicyholderId::new(id), name, age).unwrap()
    })
}

/// Strategy for generating valid policies owned by `policyholder_id`
pub fn policy_strategy(policyholder_id: i64) -> impl Strategy<Value = Policy> {
    (id_strategy(), policy_type_strategy(), amount_strategy()).prop_map(
        move |(id, policy_type, coverage)| {
            Policy::new(
                PolicyId::new(id),
                PolicyholderId::new(policyholder_id),
                policy_type,
                coverage,
            )
            .unwrap()
        },
    )
}

/// Strategy for generating valid claims against `policy_id`
pub fn claim_strategy(policy_id: i64) -> impl Strategy<Value = Claim> {
    (id_strategy(), amount_strategy(), status_strategy()).prop_map(
        move |(id, amount, status)| {
            Claim::new(ClaimId::new(id), PolicyId::new(policy_id), amount, status).unwrap()
        },
    )
}
