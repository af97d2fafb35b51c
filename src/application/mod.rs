//! Application layer services implementing business logic.
//!
//! Orchestrates the entity preparation pipeline and repository calls per use
//! case, translating outcomes into the [`crate::error::AppError`] taxonomy.
//!
//! # Available Services
//!
//! - [`services::country_service::CountryService`] - Country aggregate use cases
//! - [`services::province_service::ProvinceService`] - Single-province updates

pub mod services;
