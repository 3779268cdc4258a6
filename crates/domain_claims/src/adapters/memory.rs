//! In-memory storage adapter
//!
//! `InMemoryStore<T>` keeps one entity collection in a process-local map.
//! Contents live as long as the process and are gone after a restart.
//!
//! The map sits behind a `tokio::sync::RwLock` so a single store can be shared
//! by concurrent request handlers. Each mutation checks and writes under one
//! write guard, which makes duplicate detection race-free within the process.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use core_kernel::{
    AdapterHealth, DomainPort, EntityStore, HealthCheckResult, HealthCheckable, Record,
    StoreError,
};

/// Volatile `EntityStore` implementation
///
/// Cloning the store yields another handle onto the same records.
pub struct InMemoryStore<T: Record> {
    records: Arc<RwLock<BTreeMap<T::Id, T>>>,
}

impl<T: Record> InMemoryStore<T> {
    /// Creates an empty store
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }

    /// Creates a store pre-populated with records, keyed by their own identifiers
    pub async fn with_records(records: impl IntoIterator<Item = T>) -> Self {
        let store = Self::new();
        {
            let mut guard = store.records.write().await;
            for record in records {
                guard.insert(record.id(), record);
            }
        }
        store
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Returns true if nothing is stored
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

impl<T: Record> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> Clone for InMemoryStore<T> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
        }
    }
}

impl<T: Record> fmt::Debug for InMemoryStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryStore")
            .field("entity", &T::ENTITY)
            .finish_non_exhaustive()
    }
}

impl<T: Record> DomainPort for InMemoryStore<T> {}

#[async_trait]
impl<T: Record> HealthCheckable for InMemoryStore<T> {
    async fn health_check(&self) -> HealthCheckResult {
        HealthCheckResult {
            adapter_id: format!("in-memory-{}", T::ENTITY.to_lowercase()),
            status: AdapterHealth::Healthy,
            latency_ms: 0,
            message: Some("In-memory store is process-local".to_string()),
            checked_at: Utc::now(),
        }
    }
}

#[async_trait]
impl<T: Record> EntityStore<T> for InMemoryStore<T> {
    async fn insert(&self, record: T) -> Result<T, StoreError> {
        let id = record.id();
        let mut records = self.records.write().await;

        match records.entry(id) {
            Entry::Occupied(_) => Err(StoreError::already_exists(T::ENTITY, id)),
            Entry::Vacant(slot) => {
                slot.insert(record.clone());
                debug!(entity = T::ENTITY, %id, "Inserted record");
                Ok(record)
            }
        }
    }

    async fn get_all(&self) -> Result<Vec<T>, StoreError> {
        Ok(self.records.read().await.values().cloned().collect())
    }

    async fn get_by_id(&self, id: T::Id) -> Result<Option<T>, StoreError> {
        Ok(self.records.read().await.get(&id).cloned())
    }

    async fn replace(&self, id: T::Id, record: T) -> Result<T, StoreError> {
        let new_id = record.id();
        let mut records = self.records.write().await;

        if !records.contains_key(&id) {
            return Err(StoreError::not_found(T::ENTITY, id));
        }
        if new_id != id && records.contains_key(&new_id) {
            return Err(StoreError::already_exists(T::ENTITY, new_id));
        }

        records.remove(&id);
        records.insert(new_id, record.clone());
        debug!(entity = T::ENTITY, %id, %new_id, "Replaced record");
        Ok(record)
    }

    async fn delete(&self, id: T::Id) -> Result<(), StoreError> {
        match self.records.write().await.remove(&id) {
            Some(_) => {
                debug!(entity = T::ENTITY, %id, "Deleted record");
                Ok(())
            }
            None => Err(StoreError::not_found(T::ENTITY, id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::PolicyholderId;

    use crate::policyholder::Policyholder;

    fn holder(id: i64, name: &str) -> Policyholder {
        Policyholder::new(PolicyholderId::new(id), name, 40).unwrap()
    }

    #[tokio::test]
    async fn test_insert_rejects_duplicate_without_overwriting() {
        let store: InMemoryStore<Policyholder> = InMemoryStore::new();
        store.insert(holder(1, "Ana")).await.unwrap();

        let err = store.insert(holder(1, "Bruno")).await.unwrap_err();
        assert!(err.is_already_exists());

        let kept = store.get_by_id(PolicyholderId::new(1)).await.unwrap().unwrap();
        assert_eq!(kept.name(), "Ana");
    }

    #[tokio::test]
    async fn test_get_all_is_ordered_by_id() {
        let store = InMemoryStore::with_records(vec![holder(3, "C"), holder(1, "A"), holder(2, "B")]).await;

        let names: Vec<String> = store
            .get_all()
            .await
            .unwrap()
            .iter()
            .map(|h| h.name().to_string())
            .collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn test_replace_missing_is_not_found() {
        let store: InMemoryStore<Policyholder> = InMemoryStore::new();
        let err = store
            .replace(PolicyholderId::new(1), holder(1, "Ana"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_replace_with_different_id_rekeys_record() {
        let store = InMemoryStore::with_records(vec![holder(1, "Ana")]).await;

        store.replace(PolicyholderId::new(1), holder(5, "Ana")).await.unwrap();

        assert!(store.get_by_id(PolicyholderId::new(1)).await.unwrap().is_none());
        assert!(store.get_by_id(PolicyholderId::new(5)).await.unwrap().is_some());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_replace_onto_occupied_id_is_rejected() {
        let store = InMemoryStore::with_records(vec![holder(1, "Ana"), holder(2, "Bruno")]).await;

        let err = store
            .replace(PolicyholderId::new(1), holder(2, "Ana"))
            .await
            .unwrap_err();
        assert!(err.is_already_exists());
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let store = InMemoryStore::with_records(vec![holder(1, "Ana")]).await;

        store.delete(PolicyholderId::new(1)).await.unwrap();
        assert!(store.delete(PolicyholderId::new(1)).await.unwrap_err().is_not_found());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_clones_share_records() {
        let store: InMemoryStore<Policyholder> = InMemoryStore::new();
        let other = store.clone();
        store.insert(holder(1, "Ana")).await.unwrap();

        assert_eq!(other.len().await, 1);
    }

    #[tokio::test]
    async fn test_concurrent_duplicate_inserts_admit_one() {
        let store: InMemoryStore<Policyholder> = InMemoryStore::new();

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.insert(holder(7, &format!("writer-{i}"))).await })
            })
            .collect();

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                successes += 1;
            }
        }
        assert_eq!(successes, 1);
    }
}
