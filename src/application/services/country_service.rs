//! Country aggregate use cases: create, full edit, fetch, delete.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::Country;
use crate::domain::repositories::{CountryRepository, ProvinceRepository};
use crate::error::AppError;

/// Service orchestrating validation and persistence for the country
/// aggregate.
///
/// Every use case runs the same request-scoped pipeline: sanitize, assign
/// identifier (creation only), stamp the update time, validate, then call the
/// repository. Validation failures short-circuit before any storage call.
pub struct CountryService<C: CountryRepository, P: ProvinceRepository> {
    country_repository: Arc<C>,
    province_repository: Arc<P>,
}

impl<C: CountryRepository, P: ProvinceRepository> CountryService<C, P> {
    /// Creates a new country service.
    pub fn new(country_repository: Arc<C>, province_repository: Arc<P>) -> Self {
        Self {
            country_repository,
            province_repository,
        }
    }

    /// Creates a country together with its provinces as one atomic write.
    ///
    /// The country and every province each get a fresh identifier and update
    /// timestamp. The first invalid province aborts the whole operation
    /// before anything touches storage.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when a sanitized name is empty, or
    /// [`AppError::Internal`] on storage failure.
    pub async fn create_country(&self, mut country: Country) -> Result<Country, AppError> {
        country.sanitize();
        country.assign_id();
        country.touch();
        country.validate()?;

        for province in &mut country.provinces {
            province.sanitize();
            province.assign_id();
            province.touch();
            province.validate()?;
        }

        self.country_repository.save(country).await
    }

    /// Edits a country and its provinces, preserving every identifier.
    ///
    /// All provinces are validated up front, so an invalid payload never
    /// triggers a write. The province updates themselves run as separate
    /// single-row statements: if one fails mid-sequence, updates already
    /// applied are not rolled back. Callers must tolerate that inconsistency
    /// window.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when a sanitized name is empty, or
    /// [`AppError::Internal`] on storage failure.
    pub async fn edit_country(&self, mut country: Country) -> Result<Country, AppError> {
        country.sanitize();
        country.touch();
        country.validate()?;

        for province in &mut country.provinces {
            province.sanitize();
            province.touch();
            province.validate()?;
        }

        for province in &country.provinces {
            self.province_repository.update(province.clone()).await?;
        }

        self.country_repository.update(country).await
    }

    /// Retrieves a country aggregate by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no country matches the identifier.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_country(&self, id: &str) -> Result<Country, AppError> {
        self.country_repository
            .find_by_id(id.trim())
            .await?
            .ok_or_else(|| AppError::not_found("country not found", json!({ "id": id })))
    }

    /// Deletes a country and all of its provinces together.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_country(&self, id: &str) -> Result<(), AppError> {
        self.country_repository.delete(id.trim()).await
    }
}
