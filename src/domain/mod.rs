//! Domain layer containing business entities and logic.
//!
//! This module implements the core domain logic following Clean Architecture
//! principles. It defines entities, repository interfaces, and the validation
//! rules applied before any write, independent of infrastructure concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures and their preparation pipeline
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by the infrastructure layer
//! - Use-case orchestration lives in services (see [`crate::application::services`])

pub mod entities;
pub mod repositories;
