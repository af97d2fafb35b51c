//! Handlers for country aggregate endpoints (fetch, create, edit).

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};

use crate::api::dto::country::{CountryPayload, CountryResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Fetches a country aggregate by identifier.
///
/// # Endpoint
///
/// `GET /api/v1/country/{country_id}`
///
/// # Response
///
/// The country wrapped under a `"country"` key, provinces ordered by
/// descending `total`.
///
/// # Errors
///
/// Returns 404 Not Found if no country matches the identifier.
pub async fn get_country_handler(
    Path(country_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<CountryResponse>, AppError> {
    let country = state.country_service.get_country(&country_id).await?;

    Ok(Json(CountryResponse {
        country: country.into(),
    }))
}

/// Creates a country together with its provinces.
///
/// # Endpoint
///
/// `POST /api/v1/country`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Thailand",
///   "total": 100,
///   "provinces": [
///     { "name": "Bangkok", "total": 100 },
///     { "name": "Chiang Mai", "total": 50 }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns 422 if the body cannot be parsed, 400 if validation fails
/// (nothing is written), 500 on storage failure.
pub async fn create_country_handler(
    State(state): State<AppState>,
    payload: Result<Json<CountryPayload>, JsonRejection>,
) -> Result<Json<CountryResponse>, AppError> {
    let Json(payload) = payload?;

    let country = state.country_service.create_country(payload.into()).await?;

    Ok(Json(CountryResponse {
        country: country.into(),
    }))
}

/// Edits a country and its provinces, preserving all identifiers.
///
/// # Endpoint
///
/// `PUT /api/v1/country/{country_id}`
///
/// The authoritative identifiers come from the payload body; the path
/// segment exists for route-shape compatibility with API consumers.
///
/// # Errors
///
/// Returns 422 if the body cannot be parsed, 400 if validation fails,
/// 500 on storage failure. Province updates already applied before a
/// mid-sequence storage failure are not rolled back.
pub async fn edit_country_handler(
    Path(_country_id): Path<String>,
    State(state): State<AppState>,
    payload: Result<Json<CountryPayload>, JsonRejection>,
) -> Result<Json<CountryResponse>, AppError> {
    let Json(payload) = payload?;

    let country = state.country_service.edit_country(payload.into()).await?;

    Ok(Json(CountryResponse {
        country: country.into(),
    }))
}
