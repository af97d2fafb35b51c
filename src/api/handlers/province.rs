//! Handler for the single-province update endpoint.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};

use crate::api::dto::province::{ProvincePayload, ProvinceResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Updates a province independently of its country.
///
/// # Endpoint
///
/// `PUT /api/v1/province/{province_id}`
///
/// The identifier comes from the payload body; the path segment exists for
/// route-shape compatibility with API consumers.
///
/// # Errors
///
/// Returns 422 if the body cannot be parsed, 400 if validation fails,
/// 500 on storage failure.
pub async fn update_province_handler(
    Path(_province_id): Path<String>,
    State(state): State<AppState>,
    payload: Result<Json<ProvincePayload>, JsonRejection>,
) -> Result<Json<ProvinceResponse>, AppError> {
    let Json(payload) = payload?;

    let province = state
        .province_service
        .update_province(payload.into())
        .await?;

    Ok(Json(ProvinceResponse {
        province: province.into(),
    }))
}
