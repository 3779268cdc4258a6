//! Core Kernel - Foundational types for the claims management system
//!
//! This crate provides the building blocks shared by the domain and the
//! storage backends:
//! - Integer identifiers for policyholders, policies, and claims
//! - The persistence port every backend implements
//! - The store error type those backends report

pub mod identifiers;
pub mod ports;
pub mod error;

pub use identifiers::{ClaimId, PolicyId, PolicyholderId};
pub use ports::{
    AdapterHealth, DomainPort, EntityStore, HealthCheckResult, HealthCheckable, Record,
};
pub use error::StoreError;
