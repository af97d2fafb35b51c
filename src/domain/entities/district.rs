//! District entity, the leaf level of the geographic hierarchy.
//!
//! Districts share the preparation pipeline with countries and provinces but
//! have no persistence path yet; they exist so inbound payloads round-trip
//! without loss.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::ValidationError;
use crate::utils::sanitize::sanitize_name;

/// A district with its case counters, owned by exactly one province.
#[derive(Debug, Clone)]
pub struct District {
    pub id: String,
    pub name: String,
    pub total: i64,
    pub new_case: i64,
    pub treated: i64,
    pub decovering_case: i64,
    pub test_case: i64,
    pub dead: i64,
    pub negative_case: i64,
    pub updated_at: DateTime<Utc>,
}

impl District {
    /// Trims and HTML-escapes the name in place. Idempotent.
    pub fn sanitize(&mut self) {
        self.name = sanitize_name(&self.name);
    }

    /// Overwrites the identifier with a fresh v4 UUID. Creation only.
    pub fn assign_id(&mut self) {
        self.id = Uuid::new_v4().to_string();
    }

    /// Stamps `updated_at` with the current time.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Checks required fields against the post-sanitize state.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::NameRequired("district"));
        }
        Ok(())
    }
}
