//! PostgreSQL repositories for the claims records
//!
//! Each repository implements `EntityStore` for one table. Queries are bound
//! at runtime and rows are mapped through `FromRow` structs, then rebuilt into
//! validated domain records.
//!
//! All repositories share the same pool, so the health check is the same
//! `SELECT 1` probe for each of them.

pub mod policyholder;
pub mod policy;
pub mod claims;

pub use policyholder::PolicyholderRepository;
pub use policy::PolicyRepository;
pub use claims::ClaimRepository;

use chrono::Utc;
use sqlx::PgPool;

use core_kernel::{AdapterHealth, HealthCheckResult};

/// Checks database connectivity with a trivial query
pub(crate) async fn probe(pool: &PgPool, adapter_id: &str) -> HealthCheckResult {
    let start = std::time::Instant::now();

    let result = sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(pool)
        .await;

    let latency_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(_) => HealthCheckResult {
            adapter_id: adapter_id.to_string(),
            status: AdapterHealth::Healthy,
            latency_ms,
            message: None,
            checked_at: Utc::now(),
        },
        Err(e) => HealthCheckResult {
            adapter_id: adapter_id.to_string(),
            status: AdapterHealth::Unhealthy,
            latency_ms,
            message: Some(format!("Database error: {}", e)),
            checked_at: Utc::now(),
        },
    }
}
