//! Utility functions shared across the application.
//!
//! - [`sanitize`] - Free-text trimming and HTML escaping

pub mod sanitize;
