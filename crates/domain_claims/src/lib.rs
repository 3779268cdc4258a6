//! Claims Management Domain
//!
//! This crate holds the three records of the system and the rules that keep
//! them consistent:
//!
//! ```text
//! Policyholder 1 ──< Policy 1 ──< Claim
//!                    coverage_amount ≥ amount_claimed
//! ```
//!
//! - Entity model: `Policyholder`, `Policy`, `Claim`, each validated when built
//! - Integrity engine: `ClaimsService`, which checks references and coverage
//!   before writing through the persistence port
//! - In-memory backend: `adapters::InMemoryStore`

pub mod policyholder;
pub mod policy;
pub mod claim;
pub mod validation;
pub mod rules;
pub mod services;
pub mod adapters;
pub mod error;

pub use policyholder::{Policyholder, PolicyholderData};
pub use policy::{Policy, PolicyData};
pub use claim::{Claim, ClaimData};
pub use validation::ValidationError;
pub use services::{ClaimsService, Stores};
pub use error::{ClaimsError, ReferenceKind};
