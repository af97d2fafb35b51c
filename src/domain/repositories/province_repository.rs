//! Repository trait for province data access.

use crate::domain::entities::Province;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for province rows.
///
/// Province inserts happen through the country aggregate save; this trait
/// covers the standalone update path used by the edit use cases.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgProvinceRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProvinceRepository: Send + Sync {
    /// Updates all mutable scalar fields plus timestamp, keyed by identifier.
    ///
    /// Returns the entity unchanged on success.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, province: Province) -> Result<Province, AppError>;
}
