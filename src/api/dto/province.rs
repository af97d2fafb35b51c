//! DTOs for province payloads and responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{District, Province};

/// Inbound province payload.
///
/// Every field defaults when absent; the service pipeline decides which ones
/// it overwrites (identifier on create, timestamp always).
#[derive(Debug, Clone, Deserialize)]
pub struct ProvincePayload {
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
    pub districts: Vec<DistrictPayload>,
}

/// Inbound district payload. Accepted for shape compatibility; districts are
/// not persisted in the current scope.
#[derive(Debug, Clone, Deserialize)]
pub struct DistrictPayload {
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
}

impl From<ProvincePayload> for Province {
    fn from(p: ProvincePayload) -> Self {
        Province {
            id: p.id,
            name: p.name,
            total: p.total,
            new_case: p.new_case,
            treated: p.treated,
            decovering_case: p.decovering_case,
            test_case: p.test_case,
            dead: p.dead,
            negative_case: p.negative_case,
            districts: p.districts.into_iter().map(District::from).collect(),
            updated_at: Utc::now(),
        }
    }
}

impl From<DistrictPayload> for District {
    fn from(d: DistrictPayload) -> Self {
        District {
            id: d.id,
            name: d.name,
            total: d.total,
            new_case: d.new_case,
            treated: d.treated,
            decovering_case: d.decovering_case,
            test_case: d.test_case,
            dead: d.dead,
            negative_case: d.negative_case,
            updated_at: Utc::now(),
        }
    }
}

/// JSON representation of a province in responses.
#[derive(Debug, Serialize)]
pub struct ProvinceBody {
    pub id: String,
    pub name: String,
    pub total: i64,
    pub new_case: i64,
    pub treated: i64,
    pub decovering_case: i64,
    pub test_case: i64,
    pub dead: i64,
    pub negative_case: i64,
    pub districts: Vec<DistrictBody>,
    pub updated_at: DateTime<Utc>,
}

/// JSON representation of a district in responses.
#[derive(Debug, Serialize)]
pub struct DistrictBody {
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

impl From<Province> for ProvinceBody {
    fn from(p: Province) -> Self {
        ProvinceBody {
            id: p.id,
            name: p.name,
            total: p.total,
            new_case: p.new_case,
            treated: p.treated,
            decovering_case: p.decovering_case,
            test_case: p.test_case,
            dead: p.dead,
            negative_case: p.negative_case,
            districts: p.districts.into_iter().map(DistrictBody::from).collect(),
            updated_at: p.updated_at,
        }
    }
}

impl From<District> for DistrictBody {
    fn from(d: District) -> Self {
        DistrictBody {
            id: d.id,
            name: d.name,
            total: d.total,
            new_case: d.new_case,
            treated: d.treated,
            decovering_case: d.decovering_case,
            test_case: d.test_case,
            dead: d.dead,
            negative_case: d.negative_case,
            updated_at: d.updated_at,
        }
    }
}

/// Success envelope for province endpoints.
#[derive(Debug, Serialize)]
pub struct ProvinceResponse {
    pub province: ProvinceBody,
}
