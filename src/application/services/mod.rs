//! Business logic services for the application layer.

pub mod country_service;
pub mod province_service;

pub use country_service::CountryService;
pub use province_service::ProvinceService;
