//! Integrity rules
//!
//! Stateless checks the service composes around the persistence port. Each
//! takes the records it needs and either passes or returns the failure the
//! caller should see.

use tracing::warn;

use core_kernel::{EntityStore, Record};
use crate::claim::Claim;
use crate::error::{ClaimsError, ReferenceKind};
use crate::policy::Policy;

/// Fails with `AlreadyExists` if `id` is already stored
pub async fn ensure_absent<T: Record>(
    store: &dyn EntityStore<T>,
    id: T::Id,
) -> Result<(), ClaimsError> {
    if store.exists(id).await? {
        warn!(entity = T::ENTITY, %id, "Duplicate identifier rejected");
        return Err(ClaimsError::AlreadyExists {
            entity: T::ENTITY,
            id: id.to_string(),
        });
    }
    Ok(())
}

/// Fetches the record targeted by an update, failing with `NotFound`
pub async fn require_target<T: Record>(
    store: &dyn EntityStore<T>,
    id: T::Id,
) -> Result<T, ClaimsError> {
    store
        .get_by_id(id)
        .await?
        .ok_or_else(|| ClaimsError::not_found(T::ENTITY, id))
}

/// Resolves a foreign identifier, failing with `ReferenceNotFound`
pub async fn resolve_reference<T: Record>(
    store: &dyn EntityStore<T>,
    id: T::Id,
    kind: ReferenceKind,
) -> Result<T, ClaimsError> {
    match store.get_by_id(id).await? {
        Some(parent) => Ok(parent),
        None => {
            warn!(reference = kind.as_str(), %id, "Referenced record does not exist");
            Err(ClaimsError::reference_not_found(kind, id))
        }
    }
}

/// Fails with `CoverageExceeded` if the claim is above the policy's coverage.
/// A claim equal to the coverage is accepted.
pub fn ensure_within_coverage(claim: &Claim, policy: &Policy) -> Result<(), ClaimsError> {
    if !policy.covers(claim.amount_claimed()) {
        warn!(
            claim_id = %claim.id(),
            policy_id = %policy.id(),
            claimed = %claim.amount_claimed(),
            coverage = %policy.coverage_amount(),
            "Claim amount exceeds policy coverage"
        );
        return Err(ClaimsError::CoverageExceeded {
            claimed: claim.amount_claimed(),
            coverage: policy.coverage_amount(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::{ClaimId, PolicyId, PolicyholderId};
    use rust_decimal_macros::dec;

    use crate::adapters::InMemoryStore;

    fn policy(coverage: rust_decimal::Decimal) -> Policy {
        Policy::new(PolicyId::new(1), PolicyholderId::new(1), "Health", coverage).unwrap()
    }

    fn claim(amount: rust_decimal::Decimal) -> Claim {
        Claim::new(ClaimId::new(1), PolicyId::new(1), amount, "Pending").unwrap()
    }

    #[test]
    fn test_coverage_boundary_is_inclusive() {
        assert!(ensure_within_coverage(&claim(dec!(1000)), &policy(dec!(1000))).is_ok());
        assert!(matches!(
            ensure_within_coverage(&claim(dec!(1000.01)), &policy(dec!(1000))),
            Err(ClaimsError::CoverageExceeded { .. })
        ));
    }

    #[tokio::test]
    async fn test_ensure_absent() {
        let store = InMemoryStore::with_records(vec![policy(dec!(10))]).await;

        assert!(ensure_absent::<Policy>(&store, PolicyId::new(2)).await.is_ok());
        assert!(matches!(
            ensure_absent::<Policy>(&store, PolicyId::new(1)).await,
            Err(ClaimsError::AlreadyExists { entity: "Policy", .. })
        ));
    }

    #[tokio::test]
    async fn test_resolve_reference_missing() {
        let store: InMemoryStore<Policy> = InMemoryStore::new();

        let err = resolve_reference::<Policy>(&store, PolicyId::new(99), ReferenceKind::Policy)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ClaimsError::ReferenceNotFound { kind: ReferenceKind::Policy, .. }
        ));
    }

    #[tokio::test]
    async fn test_require_target_missing() {
        let store: InMemoryStore<Claim> = InMemoryStore::new();

        let err = require_target::<Claim>(&store, ClaimId::new(5)).await.unwrap_err();
        assert!(err.is_not_found());
    }
}
