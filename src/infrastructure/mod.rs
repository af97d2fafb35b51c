//! Infrastructure layer for external integrations.
//!
//! Implements interfaces defined by the domain layer against concrete
//! backing stores.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations

pub mod persistence;
