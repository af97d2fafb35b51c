//! Province entity, the middle level of the geographic hierarchy.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::{District, ValidationError};
use crate::utils::sanitize::sanitize_name;

/// A province with its case counters and owned districts.
///
/// Always associated with exactly one country; persisted rows carry the
/// owning country's identifier as `country_id`. Districts are defined on the
/// entity but not persisted in the current scope.
#[derive(Debug, Clone)]
pub struct Province {
    pub id: String,
    pub name: String,
    pub total: i64,
    pub new_case: i64,
    pub treated: i64,
    pub decovering_case: i64,
    pub test_case: i64,
    pub dead: i64,
    pub negative_case: i64,
    pub districts: Vec<District>,
    pub updated_at: DateTime<Utc>,
}

impl Province {
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
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NameRequired`] when the sanitized name is
    /// empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::NameRequired("province"));
        }
        Ok(())
    }
}
