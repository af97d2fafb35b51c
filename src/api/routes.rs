//! API route configuration.

use crate::api::handlers::{
    create_country_handler, edit_country_handler, get_country_handler, update_province_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};

/// Versioned API routes.
///
/// # Endpoints
///
/// - `GET  /country/{country_id}`  - Fetch a country with its provinces
/// - `POST /country`               - Create a country aggregate
/// - `PUT  /country/{country_id}`  - Edit a country and its provinces
/// - `PUT  /province/{province_id}`- Update a single province
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/country", post(create_country_handler))
        .route(
            "/country/{country_id}",
            get(get_country_handler).put(edit_country_handler),
        )
        .route("/province/{province_id}", put(update_province_handler))
}
