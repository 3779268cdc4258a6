//! Storage Adapters for the Claims Domain
//!
//! The durable PostgreSQL adapters live in `infra_db`. This module holds the
//! process-local adapter that needs nothing beyond the domain itself.
//!
//! # Available Adapters
//!
//! - **InMemoryStore**: volatile store, one instance per entity collection
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_claims::adapters::InMemoryStore;
//! use domain_claims::Stores;
//!
//! let stores = Stores::in_memory();
//! // or, collection by collection:
//! let policies: Arc<dyn EntityStore<Policy>> = Arc::new(InMemoryStore::new());
//! ```

pub mod memory;

pub use memory::InMemoryStore;
