//! Policyholder repository implementation

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::{debug, instrument};

use core_kernel::{
    DomainPort, EntityStore, HealthCheckResult, HealthCheckable, PolicyholderId, Record,
    StoreError,
};
use domain_claims::Policyholder;

use crate::error::DatabaseError;

/// A row of the `policyholders` table
#[derive(Debug, Clone, FromRow)]
pub struct PolicyholderRow {
    pub id: i64,
    pub name: String,
    pub age: i32,
}

impl TryFrom<PolicyholderRow> for Policyholder {
    type Error = DatabaseError;

    fn try_from(row: PolicyholderRow) -> Result<Self, Self::Error> {
        Policyholder::new(PolicyholderId::new(row.id), row.name, row.age)
            .map_err(|e| DatabaseError::InvalidRow(format!("policyholder {}: {}", row.id, e)))
    }
}

/// Durable `EntityStore<Policyholder>` over the `policyholders` table
#[derive(Debug, Clone)]
pub struct PolicyholderRepository {
    pool: PgPool,
}

impl PolicyholderRepository {
    /// Creates a new PolicyholderRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn store_error(error: impl Into<DatabaseError>, id: impl std::fmt::Display) -> StoreError {
    error.into().into_store_error(Policyholder::ENTITY, id)
}

fn into_policyholder(row: PolicyholderRow) -> Result<Policyholder, StoreError> {
    let id = row.id;
    Policyholder::try_from(row).map_err(|e| store_error(e, PolicyholderId::new(id)))
}

impl DomainPort for PolicyholderRepository {}

#[async_trait]
impl HealthCheckable for PolicyholderRepository {
    async fn health_check(&self) -> HealthCheckResult {
        super::probe(&self.pool, "postgres-policyholders").await
    }
}

#[async_trait]
impl EntityStore<Policyholder> for PolicyholderRepository {
    #[instrument(skip(self, record), fields(policyholder_id = %record.id()))]
    async fn insert(&self, record: Policyholder) -> Result<Policyholder, StoreError> {
        let id = record.id();
        let row = sqlx::query_as::<_, PolicyholderRow>(
            r#"
            INSERT INTO policyholders (id, name, age)
            VALUES ($1, $2, $3)
            RETURNING id, name, age
            "#,
        )
        .bind(id.value())
        .bind(record.name())
        .bind(record.age())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| store_error(e, id))?;

        debug!("Policyholder inserted");
        into_policyholder(row)
    }

    #[instrument(skip(self))]
    async fn get_all(&self) -> Result<Vec<Policyholder>, StoreError> {
        let rows = sqlx::query_as::<_, PolicyholderRow>(
            "SELECT id, name, age FROM policyholders ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| store_error(e, "*"))?;

        rows.into_iter().map(into_policyholder).collect()
    }

    #[instrument(skip(self), fields(policyholder_id = %id))]
    async fn get_by_id(&self, id: PolicyholderId) -> Result<Option<Policyholder>, StoreError> {
        let row = sqlx::query_as::<_, PolicyholderRow>(
            "SELECT id, name, age FROM policyholders WHERE id = $1",
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| store_error(e, id))?;

        row.map(into_policyholder).transpose()
    }

    #[instrument(skip(self, record), fields(policyholder_id = %id, new_id = %record.id()))]
    async fn replace(&self, id: PolicyholderId, record: Policyholder) -> Result<Policyholder, StoreError> {
        let new_id = record.id();
        let row = sqlx::query_as::<_, PolicyholderRow>(
            r#"
            UPDATE policyholders
            SET id = $2, name = $3, age = $4
            WHERE id = $1
            RETURNING id, name, age
            "#,
        )
        .bind(id.value())
        .bind(new_id.value())
        .bind(record.name())
        .bind(record.age())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| store_error(e, new_id))?
        .ok_or_else(|| StoreError::not_found(Policyholder::ENTITY, id))?;

        debug!("Policyholder replaced");
        into_policyholder(row)
    }

    #[instrument(skip(self), fields(policyholder_id = %id))]
    async fn delete(&self, id: PolicyholderId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM policyholders WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(|e| store_error(e, id))?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found(Policyholder::ENTITY, id));
        }

        debug!("Policyholder deleted");
        Ok(())
    }
}
