//! Persistence Port
//!
//! This module defines the storage contract shared by every backend. The
//! integrity rules in `domain_claims` only ever see `EntityStore<T>`, so the
//! durable PostgreSQL repositories and the volatile in-memory store are
//! interchangeable at startup.
//!
//! ```text
//!            ┌──────────────────────────────┐
//!            │   ClaimsService (rules)      │
//!            └──────────────────────────────┘
//!                          │
//!                          ▼
//!            ┌──────────────────────────────┐
//!            │      EntityStore<T>          │
//!            └──────────────────────────────┘
//!                 ▲                  ▲
//!       ┌─────────┴──────┐   ┌───────┴─────────┐
//!       │ InMemoryStore  │   │ Postgres repos  │
//!       │ (process-local)│   │   (infra_db)    │
//!       └────────────────┘   └─────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! let store: Arc<dyn EntityStore<Policy>> = Arc::new(InMemoryStore::new());
//! store.insert(policy).await?;
//! let all = store.get_all().await?;
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

use crate::error::StoreError;

/// A record that can be kept in an `EntityStore`
///
/// Records are keyed by the identifier they carry. `ENTITY` names the
/// collection in errors and logs.
pub trait Record: Clone + Send + Sync + 'static {
    /// Identifier type of the record
    type Id: Copy + Eq + Ord + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static;

    /// Human-readable entity name ("Policyholder", "Policy", "Claim")
    const ENTITY: &'static str;

    /// Returns the identifier carried by this record
    fn id(&self) -> Self::Id;
}

/// Marker trait for all domain ports
///
/// All port traits extend this marker so they can be shared across async
/// request handlers.
pub trait DomainPort: Send + Sync + 'static {}

/// Storage contract for a single entity collection
///
/// Implementations must agree on observable behavior; only durability across
/// restarts may differ.
#[async_trait]
pub trait EntityStore<T: Record>: DomainPort + HealthCheckable {
    /// Stores a new record under its own identifier
    ///
    /// # Errors
    ///
    /// `StoreError::AlreadyExists` if the identifier is already present
    async fn insert(&self, record: T) -> Result<T, StoreError>;

    /// Returns every stored record
    async fn get_all(&self) -> Result<Vec<T>, StoreError>;

    /// Returns the record stored under `id`, if any
    async fn get_by_id(&self, id: T::Id) -> Result<Option<T>, StoreError>;

    /// Overwrites the record stored under `id`
    ///
    /// The identifier inside `record` is stored as given. When it differs
    /// from `id` the record moves to its own identifier.
    ///
    /// # Errors
    ///
    /// * `StoreError::NotFound` if `id` is absent
    /// * `StoreError::AlreadyExists` if the record moves onto an occupied identifier
    async fn replace(&self, id: T::Id, record: T) -> Result<T, StoreError>;

    /// Removes the record stored under `id`
    ///
    /// # Errors
    ///
    /// `StoreError::NotFound` if `id` is absent
    async fn delete(&self, id: T::Id) -> Result<(), StoreError>;

    /// Returns true if a record is stored under `id`
    async fn exists(&self, id: T::Id) -> Result<bool, StoreError> {
        Ok(self.get_by_id(id).await?.is_some())
    }
}

/// Health status for a storage adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdapterHealth {
    /// Adapter is healthy and operational
    Healthy,
    /// Adapter is unhealthy and not operational
    Unhealthy,
}

/// Health check result for an adapter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResult {
    /// Adapter identifier
    pub adapter_id: String,
    /// Current health status
    pub status: AdapterHealth,
    /// Latency of the health check in milliseconds
    pub latency_ms: u64,
    /// Optional message with additional details
    pub message: Option<String>,
    /// Timestamp of the health check
    pub checked_at: chrono::DateTime<chrono::Utc>,
}

impl HealthCheckResult {
    /// Returns true if the adapter reported itself healthy
    pub fn is_healthy(&self) -> bool {
        self.status == AdapterHealth::Healthy
    }
}

/// Trait for adapters that support health checks
#[async_trait]
pub trait HealthCheckable: Send + Sync {
    /// Performs a health check on the adapter
    async fn health_check(&self) -> HealthCheckResult;
}
