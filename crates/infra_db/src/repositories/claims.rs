//! Claim repository implementation

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use tracing::{debug, instrument};

use core_kernel::{
    ClaimId, DomainPort, EntityStore, HealthCheckResult, HealthCheckable, PolicyId, Record,
    StoreError,
};
use domain_claims::Claim;

use crate::error::DatabaseError;

/// A row of the `claims` table
#[derive(Debug, Clone, FromRow)]
pub struct ClaimRow {
    pub id: i64,
    pub policy_id: i64,
    pub amount_claimed: Decimal,
    pub status: String,
}

impl TryFrom<ClaimRow> for Claim {
    type Error = DatabaseError;

    fn try_from(row: ClaimRow) -> Result<Self, Self::Error> {
        Claim::new(
            ClaimId::new(row.id),
            PolicyId::new(row.policy_id),
            row.amount_claimed,
            row.status,
        )
        .map_err(|e| DatabaseError::InvalidRow(format!("claim {}: {}", row.id, e)))
    }
}

/// Durable `EntityStore<Claim>` over the `claims` table
///
/// Coverage is not enforced here; the integrity engine checks it before
/// any write reaches the table.
#[derive(Debug, Clone)]
pub struct ClaimRepository {
    pool: PgPool,
}

impl ClaimRepository {
    /// Creates a new ClaimRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn store_error(error: impl Into<DatabaseError>, id: impl std::fmt::Display) -> StoreError {
    error.into().into_store_error(Claim::ENTITY, id)
}

fn into_claim(row: ClaimRow) -> Result<Claim, StoreError> {
    let id = row.id;
    Claim::try_from(row).map_err(|e| store_error(e, ClaimId::new(id)))
}

impl DomainPort for ClaimRepository {}

#[async_trait]
impl HealthCheckable for ClaimRepository {
    async fn health_check(&self) -> HealthCheckResult {
        super::probe(&self.pool, "postgres-claims").await
    }
}

#[async_trait]
impl EntityStore<Claim> for ClaimRepository {
    #[instrument(skip(self, record), fields(claim_id = %record.id()))]
    async fn insert(&self, record: Claim) -> Result<Claim, StoreError> {
        let id = record.id();
        let row = sqlx::query_as::<_, ClaimRow>(
            r#"
            INSERT INTO claims (id, policy_id, amount_claimed, status)
            VALUES ($1, $2, $3, $4)
            RETURNING id, policy_id, amount_claimed, status
            "#,
        )
        .bind(id.value())
        .bind(record.policy_id().value())
        .bind(record.amount_claimed())
        .bind(record.status())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| store_error(e, id))?;

        debug!("Claim inserted");
        into_claim(row)
    }

    #[instrument(skip(self))]
    async fn get_all(&self) -> Result<Vec<Claim>, StoreError> {
        let rows = sqlx::query_as::<_, ClaimRow>(
            "SELECT id, policy_id, amount_claimed, status FROM claims ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| store_error(e, "*"))?;

        rows.into_iter().map(into_claim).collect()
    }

    #[instrument(skip(self), fields(claim_id = %id))]
    async fn get_by_id(&self, id: ClaimId) -> Result<Option<Claim>, StoreError> {
        let row = sqlx::query_as::<_, ClaimRow>(
            "SELECT id, policy_id, amount_claimed, status FROM claims WHERE id = $1",
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| store_error(e, id))?;

        row.map(into_claim).transpose()
    }

    #[instrument(skip(self, record), fields(claim_id = %id, new_id = %record.id()))]
    async fn replace(&self, id: ClaimId, record: Claim) -> Result<Claim, StoreError> {
        let new_id = record.id();
        let row = sqlx::query_as::<_, ClaimRow>(
            r#"
            UPDATE claims
            SET id = $2, policy_id = $3, amount_claimed = $4, status = $5
            WHERE id = $1
            RETURNING id, policy_id, amount_claimed, status
            "#,
        )
        .bind(id.value())
        .bind(new_id.value())
        .bind(record.policy_id().value())
        .bind(record.amount_claimed())
        .bind(record.status())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| store_error(e, new_id))?
        .ok_or_else(|| StoreError::not_found(Claim::ENTITY, id))?;

        debug!("Claim replaced");
        into_claim(row)
    }

    #[instrument(skip(self), fields(claim_id = %id))]
    async fn delete(&self, id: ClaimId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM claims WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(|e| store_error(e, id))?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found(Claim::ENTITY, id));
        }

        debug!("Claim deleted");
        Ok(())
    }
}
