//! Policy repository implementation
//!
//! The `type` column is a reserved word in SQL and is always quoted.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use tracing::{debug, instrument};

use core_kernel::{
    DomainPort, EntityStore, HealthCheckResult, HealthCheckable, PolicyId, PolicyholderId,
    Record, StoreError,
};
use domain_claims::Policy;

use crate::error::DatabaseError;

/// A row of the `policies` table
#[derive(Debug, Clone, FromRow)]
pub struct PolicyRow {
    pub id: i64,
    pub policyholder_id: i64,
    #[sqlx(rename = "type")]
    pub policy_type: String,
    pub coverage_amount: Decimal,
}

impl TryFrom<PolicyRow> for Policy {
    type Error = DatabaseError;

    fn try_from(row: PolicyRow) -> Result<Self, Self::Error> {
        Policy::new(
            PolicyId::new(row.id),
            PolicyholderId::new(row.policyholder_id),
            row.policy_type,
            row.coverage_amount,
        )
        .map_err(|e| DatabaseError::InvalidRow(format!("policy {}: {}", row.id, e)))
    }
}

/// Durable `EntityStore<Policy>` over the `policies` table
///
/// The policyholder reference is stored as given; checking that it resolves
/// is the integrity engine's job.
#[derive(Debug, Clone)]
pub struct PolicyRepository {
    pool: PgPool,
}

impl PolicyRepository {
    /// Creates a new PolicyRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn store_error(error: impl Into<DatabaseError>, id: impl std::fmt::Display) -> StoreError {
    error.into().into_store_error(Policy::ENTITY, id)
}

fn into_policy(row: PolicyRow) -> Result<Policy, StoreError> {
    let id = row.id;
    Policy::try_from(row).map_err(|e| store_error(e, PolicyId::new(id)))
}

impl DomainPort for PolicyRepository {}

#[async_trait]
impl HealthCheckable for PolicyRepository {
    async fn health_check(&self) -> HealthCheckResult {
        super::probe(&self.pool, "postgres-policies").await
    }
}

#[async_trait]
impl EntityStore<Policy> for PolicyRepository {
    #[instrument(skip(self, record), fields(policy_id = %record.id()))]
    async fn insert(&self, record: Policy) -> Result<Policy, StoreError> {
        let id = record.id();
        let row = sqlx::query_as::<_, PolicyRow>(
            r#"
            INSERT INTO policies (id, policyholder_id, "type", coverage_amount)
            VALUES ($1, $2, $3, $4)
            RETURNING id, policyholder_id, "type", coverage_amount
            "#,
        )
        .bind(id.value())
        .bind(record.policyholder_id().value())
        .bind(record.policy_type())
        .bind(record.coverage_amount())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| store_error(e, id))?;

        debug!("Policy inserted");
        into_policy(row)
    }

    #[instrument(skip(self))]
    async fn get_all(&self) -> Result<Vec<Policy>, StoreError> {
        let rows = sqlx::query_as::<_, PolicyRow>(
            r#"SELECT id, policyholder_id, "type", coverage_amount FROM policies ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| store_error(e, "*"))?;

        rows.into_iter().map(into_policy).collect()
    }

    #[instrument(skip(self), fields(policy_id = %id))]
    async fn get_by_id(&self, id: PolicyId) -> Result<Option<Policy>, StoreError> {
        let row = sqlx::query_as::<_, PolicyRow>(
            r#"SELECT id, policyholder_id, "type", coverage_amount FROM policies WHERE id = $1"#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| store_error(e, id))?;

        row.map(into_policy).transpose()
    }

    #[instrument(skip(self, record), fields(policy_id = %id, new_id = %record.id()))]
    async fn replace(&self, id: PolicyId, record: Policy) -> Result<Policy, StoreError> {
        let new_id = record.id();
        let row = sqlx::query_as::<_, PolicyRow>(
            r#"
            UPDATE policies
            SET id = $2, policyholder_id = $3, "type" = $4, coverage_amount = $5
            WHERE id = $1
            RETURNING id, policyholder_id, "type", coverage_amount
            "#,
        )
        .bind(id.value())
        .bind(new_id.value())
        .bind(record.policyholder_id().value())
        .bind(record.policy_type())
        .bind(record.coverage_amount())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| store_error(e, new_id))?
        .ok_or_else(|| StoreError::not_found(Policy::ENTITY, id))?;

        debug!("Policy replaced");
        into_policy(row)
    }

    #[instrument(skip(self), fields(policy_id = %id))]
    async fn delete(&self, id: PolicyId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM policies WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(|e| store_error(e, id))?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found(Policy::ENTITY, id));
        }

        debug!("Policy deleted");
        Ok(())
    }
}
