//! Claims domain services
//!
//! `ClaimsService` is the integrity engine: it runs the existence and
//! coverage rules from `rules` before delegating each mutation to the
//! persistence port. It owns no state besides the injected `Stores` handle.

use std::sync::Arc;

use tracing::{info, instrument};

use core_kernel::{ClaimId, EntityStore, HealthCheckResult, PolicyId, PolicyholderId};
use crate::adapters::InMemoryStore;
use crate::claim::Claim;
use crate::error::{ClaimsError, ReferenceKind};
use crate::policy::Policy;
use crate::policyholder::Policyholder;
use crate::rules::{ensure_absent, ensure_within_coverage, require_target, resolve_reference};

/// The three entity collections, as one injectable handle
///
/// Any mix of backends can be plugged in, though the server always uses one
/// backend for all three.
#[derive(Clone)]
pub struct Stores {
    pub policyholders: Arc<dyn EntityStore<Policyholder>>,
    pub policies: Arc<dyn EntityStore<Policy>>,
    pub claims: Arc<dyn EntityStore<Claim>>,
}

impl Stores {
    /// Bundles the given collections
    pub fn new(
        policyholders: Arc<dyn EntityStore<Policyholder>>,
        policies: Arc<dyn EntityStore<Policy>>,
        claims: Arc<dyn EntityStore<Claim>>,
    ) -> Self {
        Self {
            policyholders,
            policies,
            claims,
        }
    }

    /// Fresh, empty process-local collections
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryStore::<Policyholder>::new()),
            Arc::new(InMemoryStore::<Policy>::new()),
            Arc::new(InMemoryStore::<Claim>::new()),
        )
    }

    /// Runs the health check of every collection
    pub async fn health_check(&self) -> Vec<HealthCheckResult> {
        vec![
            self.policyholders.health_check().await,
            self.policies.health_check().await,
            self.claims.health_check().await,
        ]
    }
}

/// Service enforcing referential integrity and coverage bounds
///
/// # Rules
///
/// - Identifiers are unique per collection; create never overwrites
/// - A policy's policyholder must exist when the policy is created or updated
/// - A claim's policy must exist, and the claimed amount must not exceed the
///   policy's coverage, when the claim is created or updated
/// - Deletes never cascade; children of a deleted parent stay as they are
///
/// # Example
///
/// ```rust,ignore
/// let service = ClaimsService::new(Stores::in_memory());
/// service.create_policyholder(holder).await?;
/// service.create_policy(policy).await?;
/// match service.create_claim(claim).await {
///     Err(ClaimsError::CoverageExceeded { .. }) => println!("claim too large"),
///     other => { other?; }
/// }
/// ```
#[derive(Clone)]
pub struct ClaimsService {
    stores: Stores,
}

impl ClaimsService {
    /// Creates a new claims service over the given stores
    pub fn new(stores: Stores) -> Self {
        Self { stores }
    }

    /// Returns the underlying stores
    pub fn stores(&self) -> &Stores {
        &self.stores
    }

    // ========================================================================
    // Policyholders
    // ========================================================================

    #[instrument(skip(self, holder), fields(policyholder_id = %holder.id()))]
    pub async fn create_policyholder(
        &self,
        holder: Policyholder,
    ) -> Result<Policyholder, ClaimsError> {
        ensure_absent(self.stores.policyholders.as_ref(), holder.id()).await?;

        let created = self.stores.policyholders.insert(holder).await?;
        info!("Policyholder created");
        Ok(created)
    }

    pub async fn list_policyholders(&self) -> Result<Vec<Policyholder>, ClaimsError> {
        Ok(self.stores.policyholders.get_all().await?)
    }

    pub async fn get_policyholder(&self, id: PolicyholderId) -> Result<Policyholder, ClaimsError> {
        require_target(self.stores.policyholders.as_ref(), id).await
    }

    /// Replaces a policyholder. Policyholders carry no references, so only
    /// the target's existence is checked.
    #[instrument(skip(self, holder), fields(policyholder_id = %id))]
    pub async fn update_policyholder(
        &self,
        id: PolicyholderId,
        holder: Policyholder,
    ) -> Result<Policyholder, ClaimsError> {
        let updated = self.stores.policyholders.replace(id, holder).await?;
        info!("Policyholder updated");
        Ok(updated)
    }

    #[instrument(skip(self), fields(policyholder_id = %id))]
    pub async fn delete_policyholder(&self, id: PolicyholderId) -> Result<(), ClaimsError> {
        self.stores.policyholders.delete(id).await?;
        info!("Policyholder deleted");
        Ok(())
    }

    // ========================================================================
    // Policies
    // ========================================================================

    #[instrument(skip(self, policy), fields(policy_id = %policy.id()))]
    pub async fn create_policy(&self, policy: Policy) -> Result<Policy, ClaimsError> {
        ensure_absent(self.stores.policies.as_ref(), policy.id()).await?;
        resolve_reference(
            self.stores.policyholders.as_ref(),
            policy.policyholder_id(),
            ReferenceKind::Policyholder,
        )
        .await?;

        let created = self.stores.policies.insert(policy).await?;
        info!("Policy created");
        Ok(created)
    }

    pub async fn list_policies(&self) -> Result<Vec<Policy>, ClaimsError> {
        Ok(self.stores.policies.get_all().await?)
    }

    pub async fn get_policy(&self, id: PolicyId) -> Result<Policy, ClaimsError> {
        require_target(self.stores.policies.as_ref(), id).await
    }

    /// Policies owned by a policyholder. The policyholder itself need not
    /// exist any more.
    pub async fn list_policies_for_policyholder(
        &self,
        policyholder_id: PolicyholderId,
    ) -> Result<Vec<Policy>, ClaimsError> {
        let policies = self.stores.policies.get_all().await?;
        Ok(policies
            .into_iter()
            .filter(|p| p.policyholder_id() == policyholder_id)
            .collect())
    }

    /// Replaces a policy after re-validating its policyholder reference
    #[instrument(skip(self, policy), fields(policy_id = %id))]
    pub async fn update_policy(&self, id: PolicyId, policy: Policy) -> Result<Policy, ClaimsError> {
        require_target(self.stores.policies.as_ref(), id).await?;
        resolve_reference(
            self.stores.policyholders.as_ref(),
            policy.policyholder_id(),
            ReferenceKind::Policyholder,
        )
        .await?;

        let updated = self.stores.policies.replace(id, policy).await?;
        info!("Policy updated");
        Ok(updated)
    }

    #[instrument(skip(self), fields(policy_id = %id))]
    pub async fn delete_policy(&self, id: PolicyId) -> Result<(), ClaimsError> {
        self.stores.policies.delete(id).await?;
        info!("Policy deleted");
        Ok(())
    }

    // ========================================================================
    // Claims
    // ========================================================================

    #[instrument(skip(self, claim), fields(claim_id = %claim.id(), policy_id = %claim.policy_id()))]
    pub async fn create_claim(&self, claim: Claim) -> Result<Claim, ClaimsError> {
        ensure_absent(self.stores.claims.as_ref(), claim.id()).await?;
        let policy = resolve_reference(
            self.stores.policies.as_ref(),
            claim.policy_id(),
            ReferenceKind::Policy,
        )
        .await?;
        ensure_within_coverage(&claim, &policy)?;

        let created = self.stores.claims.insert(claim).await?;
        info!(amount = %created.amount_claimed(), "Claim created");
        Ok(created)
    }

    pub async fn list_claims(&self) -> Result<Vec<Claim>, ClaimsError> {
        Ok(self.stores.claims.get_all().await?)
    }

    pub async fn get_claim(&self, id: ClaimId) -> Result<Claim, ClaimsError> {
        require_target(self.stores.claims.as_ref(), id).await
    }

    /// Claims filed against a policy. The policy itself need not exist any more.
    pub async fn list_claims_for_policy(&self, policy_id: PolicyId) -> Result<Vec<Claim>, ClaimsError> {
        let claims = self.stores.claims.get_all().await?;
        Ok(claims
            .into_iter()
            .filter(|c| c.policy_id() == policy_id)
            .collect())
    }

    /// Replaces a claim after checking the new policy reference and the new
    /// amount against that policy's coverage
    #[instrument(skip(self, claim), fields(claim_id = %id, policy_id = %claim.policy_id()))]
    pub async fn update_claim(&self, id: ClaimId, claim: Claim) -> Result<Claim, ClaimsError> {
        require_target(self.stores.claims.as_ref(), id).await?;
        let policy = resolve_reference(
            self.stores.policies.as_ref(),
            claim.policy_id(),
            ReferenceKind::Policy,
        )
        .await?;
        ensure_within_coverage(&claim, &policy)?;

        let updated = self.stores.claims.replace(id, claim).await?;
        info!(amount = %updated.amount_claimed(), "Claim updated");
        Ok(updated)
    }

    #[instrument(skip(self), fields(claim_id = %id))]
    pub async fn delete_claim(&self, id: ClaimId) -> Result<(), ClaimsError> {
        self.stores.claims.delete(id).await?;
        info!("Claim deleted");
        Ok(())
    }
}
