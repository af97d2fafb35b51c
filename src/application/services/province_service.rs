//! Single-province update use case.

use std::sync::Arc;

use crate::domain::entities::Province;
use crate::domain::repositories::ProvinceRepository;
use crate::error::AppError;

/// Service for updating a province independently of its country.
pub struct ProvinceService<P: ProvinceRepository> {
    province_repository: Arc<P>,
}

impl<P: ProvinceRepository> ProvinceService<P> {
    /// Creates a new province service.
    pub fn new(province_repository: Arc<P>) -> Self {
        Self { province_repository }
    }

    /// Updates a province's mutable fields, keyed by its identifier.
    ///
    /// Runs sanitize, stamp, validate before the write; the identifier from
    /// the payload is preserved, never regenerated.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when the sanitized name is empty, or
    /// [`AppError::Internal`] on storage failure.
    pub async fn update_province(&self, mut province: Province) -> Result<Province, AppError> {
        province.sanitize();
        province.touch();
        province.validate()?;

        self.province_repository.update(province).await
    }
}
