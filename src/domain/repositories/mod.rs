//! Repository trait definitions for the domain layer.
//!
//! Traits abstract data access following the Repository pattern; concrete
//! implementations live in `crate::infrastructure::persistence`, and mockall
//! doubles are generated under `cfg(test)` for service unit tests.
//!
//! # Available Repositories
//!
//! - [`CountryRepository`] - Country aggregate persistence and retrieval
//! - [`ProvinceRepository`] - Single-province updates
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage against a real
//! database.

pub mod country_repository;
pub mod province_repository;

pub use country_repository::CountryRepository;
pub use province_repository::ProvinceRepository;

#[cfg(test)]
pub use country_repository::MockCountryRepository;
#[cfg(test)]
pub use province_repository::MockProvinceRepository;
