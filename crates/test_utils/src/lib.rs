//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! claims system test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built records and a seeded service
//! - `builders`: Builder patterns for test data construction
//! - `database`: PostgreSQL container management for integration tests
//! - `assertions`: Assertion helpers for `ClaimsError` outcomes
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod database;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use database::*;
pub use assertions::*;
pub use generators::*;
