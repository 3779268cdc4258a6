//! Infrastructure Database Layer
//!
//! This crate provides the durable storage backend for the claims system on
//! PostgreSQL using SQLx.
//!
//! # Architecture
//!
//! The crate follows the repository pattern: one repository per table, each
//! implementing the `EntityStore` port from `core_kernel`. The integrity
//! engine never sees SQL, only the port.
//!
//! Relationships between tables are declared in the schema but not enforced,
//! so a deleted policyholder leaves its policies in place exactly as the
//! in-memory backend does.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, postgres_stores, run_migrations, DatabaseConfig};
//!
//! let pool = create_pool(DatabaseConfig::new(database_url)).await?;
//! run_migrations(&pool).await?;
//! let service = ClaimsService::new(postgres_stores(pool));
//! ```

pub mod pool;
pub mod error;
pub mod repositories;

use std::sync::Arc;

use domain_claims::Stores;

pub use pool::{create_pool, run_migrations, DatabaseConfig, DatabasePool};
pub use error::DatabaseError;
pub use repositories::{ClaimRepository, PolicyRepository, PolicyholderRepository};

/// Builds the three PostgreSQL-backed stores over one shared pool
pub fn postgres_stores(pool: DatabasePool) -> Stores {
    Stores::new(
        Arc::new(PolicyholderRepository::new(pool.clone())),
        Arc::new(PolicyRepository::new(pool.clone())),
        Arc::new(ClaimRepository::new(pool)),
    )
}
