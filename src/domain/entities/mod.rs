//! Core domain entities representing the case statistics data model.
//!
//! Entities form a three-level geographic hierarchy:
//!
//! - [`Country`] - Top-level aggregate owning an ordered set of provinces
//! - [`Province`] - Belongs to exactly one country, owns districts
//! - [`District`] - Leaf level (defined, but not persisted in current scope)
//!
//! # Preparation Pipeline
//!
//! Every entity exposes the same explicit, separately callable stages, applied
//! in order before any write:
//!
//! 1. `sanitize()` - trim and HTML-escape the name (idempotent)
//! 2. `assign_id()` - generate a v4 UUID; creation only, never on update
//! 3. `touch()` - stamp `updated_at` with the current time
//! 4. `validate()` - required-field check against the *sanitized* name
//!
//! Callers must sanitize before validating, and must not re-assign an
//! identifier on update paths or stored relations are orphaned.

pub mod country;
pub mod district;
pub mod province;

pub use country::Country;
pub use district::District;
pub use province::Province;

/// Validation failure raised by an entity's `validate()` stage.
///
/// Converted into [`crate::error::AppError::Validation`] at the service
/// boundary; no storage call is attempted once validation fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The sanitized name was empty. Carries the entity kind for the message,
    /// e.g. `"country: name is required"`.
    #[error("{0}: name is required")]
    NameRequired(&'static str),
}
