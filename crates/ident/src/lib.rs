//! Identifier minting for generated entities.
//!
//! Every record in a dataset carries an opaque string identifier. Identifiers
//! minted by this crate use a *canonical* representation: **32 lowercase
//! hexadecimal characters** (no hyphens), the same value you would get from
//! `Uuid::new_v4().simple().to_string()`.
//!
//! Two allocation modes exist:
//! - **Random** ([`IdentityAllocator::allocate_random`]): a fresh v4 UUID.
//!   Used for duplicates of kinds that appear in exactly one table.
//! - **Deterministic** ([`IdentityAllocator::allocate_deterministic`]): a v5
//!   UUID derived from `(original identifier, namespace label)`. Requesting
//!   the same pair twice returns the same identifier, and different namespace
//!   labels for the same original yield different identifiers. Used for
//!   kinds whose rows are cross-referenced between tables (a person appearing
//!   both as `Person` and `HealthcarePersonnel`), so that variation does not
//!   tear the shared identity apart.
//!
//! The allocator caches every deterministic derivation; the cache doubles as
//! an audit log of original-to-duplicate identifier mappings.

mod allocator;

pub use allocator::{EntityId, IdentityAllocator};

/// Error type for identifier operations.
#[derive(Debug, thiserror::Error)]
pub enum IdentError {
    /// Input was not a canonical 32-lowercase-hex identifier.
    #[error("identifier must be 32 lowercase hex characters without hyphens, got: '{0}'")]
    NotCanonical(String),
}

/// Result type for identifier operations.
pub type IdentResult<T> = Result<T, IdentError>;
