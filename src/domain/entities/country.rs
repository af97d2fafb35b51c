//! Country aggregate root.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::{Province, ValidationError};
use crate::utils::sanitize::sanitize_name;

/// A country with its case counters and owned provinces.
///
/// The country together with its provinces forms one consistency boundary for
/// the write path: the initial insert of both is atomic, and provinces always
/// carry the country's identifier as a foreign key.
///
/// Counters are plain `i64`s with no non-negativity or cross-field checks
/// (e.g. `dead <= total`); this mirrors the upstream data feed and is a known
/// gap, not an invariant to enforce here.
#[derive(Debug, Clone)]
pub struct Country {
    pub id: String,
    pub name: String,
    pub total: i64,
    pub new_case: i64,
    pub treated: i64,
    pub decovering_case: i64,
    pub test_case: i64,
    pub dead: i64,
    pub negative_case: i64,
    pub provinces: Vec<Province>,
    pub updated_at: DateTime<Utc>,
}

impl Country {
    /// Trims and HTML-escapes the name in place. Idempotent.
    ///
    /// Child provinces are not touched; the service pipeline sanitizes each
    /// one explicitly.
    pub fn sanitize(&mut self) {
        self.name = sanitize_name(&self.name);
    }

    /// Overwrites the identifier with a fresh v4 UUID.
    ///
    /// Called exactly once at creation time. Calling it again on an already
    /// persisted country silently changes the stored identifier and orphans
    /// its province rows.
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
            return Err(ValidationError::NameRequired("country"));
        }
        Ok(())
    }
}
