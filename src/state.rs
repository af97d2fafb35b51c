//! Shared application state injected into all handlers.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{CountryService, ProvinceService};
use crate::infrastructure::persistence::{PgCountryRepository, PgProvinceRepository};

/// Shared per-process state.
///
/// Services are request-safe; the connection pool is the only shared mutable
/// resource and its concurrency discipline is delegated to the store.
#[derive(Clone)]
pub struct AppState {
    pub country_service: Arc<CountryService<PgCountryRepository, PgProvinceRepository>>,
    pub province_service: Arc<ProvinceService<PgProvinceRepository>>,
    /// Kept for the health check's connectivity probe.
    pub db: Arc<PgPool>,
}

impl AppState {
    /// Wires repositories and services around a connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        let country_repository = Arc::new(PgCountryRepository::new(pool.clone()));
        let province_repository = Arc::new(PgProvinceRepository::new(pool.clone()));

        let country_service = Arc::new(CountryService::new(
            country_repository,
            province_repository.clone(),
        ));
        let province_service = Arc::new(ProvinceService::new(province_repository));

        Self {
            country_service,
            province_service,
            db: pool,
        }
    }
}
