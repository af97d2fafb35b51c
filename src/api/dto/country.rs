//! DTOs for country payloads and responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::dto::province::{ProvinceBody, ProvincePayload};
use crate::domain::entities::{Country, Province};

/// Inbound country payload.
///
/// Every field defaults when absent. The identifier is only meaningful on the
/// edit path; create generates a fresh one regardless of what the payload
/// carries.
#[derive(Debug, Clone, Deserialize)]
pub struct CountryPayload {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub new_case: i64,
    #[serde(default)]
    pub treated: i64,
    #[serde(default)]
    pub decovering_case: i64,
    #[serde(default)]
    pub test_case: i64,
    #[serde(default)]
    pub dead: i64,
    #[serde(default)]
    pub negative_case: i64,
    #[serde(default)]
    pub provinces: Vec<ProvincePayload>,
}

impl From<CountryPayload> for Country {
    fn from(c: CountryPayload) -> Self {
        Country {
            id: c.id,
            name: c.name,
            total: c.total,
            new_case: c.new_case,
            treated: c.treated,
            decovering_case: c.decovering_case,
            test_case: c.test_case,
            dead: c.dead,
            negative_case: c.negative_case,
            provinces: c.provinces.into_iter().map(Province::from).collect(),
            updated_at: Utc::now(),
        }
    }
}

/// JSON representation of a country in responses, provinces in storage order
/// (descending `total` on the read path).
#[derive(Debug, Serialize)]
pub struct CountryBody {
    pub id: String,
    pub name: String,
    pub total: i64,
    pub new_case: i64,
    pub treated: i64,
    pub decovering_case: i64,
    pub test_case: i64,
    pub dead: i64,
    pub negative_case: i64,
    pub provinces: Vec<ProvinceBody>,
    pub updated_at: DateTime<Utc>,
}

impl From<Country> for CountryBody {
    fn from(c: Country) -> Self {
        CountryBody {
            id: c.id,
            name: c.name,
            total: c.total,
            new_case: c.new_case,
            treated: c.treated,
            decovering_case: c.decovering_case,
            test_case: c.test_case,
            dead: c.dead,
            negative_case: c.negative_case,
            provinces: c.provinces.into_iter().map(ProvinceBody::from).collect(),
            updated_at: c.updated_at,
        }
    }
}

/// Success envelope for country endpoints.
#[derive(Debug, Serialize)]
pub struct CountryResponse {
    pub country: CountryBody,
}
