//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod country;
pub mod health;
pub mod province;

pub use country::{create_country_handler, edit_country_handler, get_country_handler};
pub use health::health_handler;
pub use province::update_province_handler;
