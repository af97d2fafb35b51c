//! Repository trait for the Country aggregate.

use crate::domain::entities::Country;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the Country aggregate.
///
/// The aggregate (a country plus its provinces) is one consistency boundary:
/// the initial save and the delete span both tables atomically, while the
/// read path reconstructs the aggregate with provinces ordered by descending
/// `total`. No method retries; storage errors propagate to the caller.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCountryRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CountryRepository: Send + Sync {
    /// Persists a country and all of its provinces in one transaction at
    /// repeatable-read isolation.
    ///
    /// Zero provinces is a valid no-op for the child insert. On any failure
    /// the transaction rolls back, leaving no partial state.
    ///
    /// Returns the persisted entity unchanged on success.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn save(&self, country: Country) -> Result<Country, AppError>;

    /// Updates the country's scalar row, keyed by identifier.
    ///
    /// Non-transactional single-row update; child provinces are untouched
    /// (callers update them via [`super::ProvinceRepository`]).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, country: Country) -> Result<Country, AppError>;

    /// Deletes the country row and every province row carrying its
    /// identifier, committing only if both deletes succeed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: &str) -> Result<(), AppError>;

    /// Fetches a country by identifier together with its provinces, ordered
    /// by `total` descending (empty collection when none exist).
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Country))` if found
    /// - `Ok(None)` if no row matches
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors; any province
    /// row-scan failure aborts the whole read.
    async fn find_by_id(&self, id: &str) -> Result<Option<Country>, AppError>;
}
