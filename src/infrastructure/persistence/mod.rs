//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx with
//! runtime-bound prepared statements.
//!
//! # Repositories
//!
//! - [`PgCountryRepository`] - Country aggregate storage and retrieval
//! - [`PgProvinceRepository`] - Province row updates

pub mod pg_country_repository;
pub mod pg_province_repository;

pub use pg_country_repository::PgCountryRepository;
pub use pg_province_repository::PgProvinceRepository;
