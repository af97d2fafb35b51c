mod common;

use axum::{Router, routing::put};
use axum_test::TestServer;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use pandemic_stats::api::handlers::update_province_handler;
use pandemic_stats::domain::repositories::CountryRepository;
use pandemic_stats::infrastructure::persistence::PgCountryRepository;

fn test_app(state: pandemic_stats::state::AppState) -> Router {
    Router::new()
        .route("/api/v1/province/{province_id}", put(update_province_handler))
        .with_state(state)
}

async fn seed_province(pool: &PgPool) -> String {
    let repo = PgCountryRepository::new(Arc::new(pool.clone()));

    let mut country = common::test_country("Thailand", vec![common::test_province("Bangkok", 100)]);
    country.assign_id();
    country.provinces[0].assign_id();
    let saved = repo.save(country).await.unwrap();
    saved.provinces[0].id.clone()
}

#[sqlx::test]
async fn test_update_province_success(pool: PgPool) {
    let province_id = seed_province(&pool).await;

    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(test_app(state)).unwrap();

    let response = server
        .put(&format!("/api/v1/province/{province_id}"))
        .json(&json!({
            "id": province_id,
            "name": "  Greater Bangkok  ",
            "total": 140
        }))
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["province"]["id"], province_id.as_str());
    assert_eq!(body["province"]["name"], "Greater Bangkok");
    assert_eq!(body["province"]["total"], 140);

    let stored: String =
        sqlx::query_scalar::<_, String>("SELECT name FROM provinces WHERE id = $1")
            .bind(&province_id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(stored, "Greater Bangkok");
}

#[sqlx::test]
async fn test_update_province_empty_name_is_bad_request(pool: PgPool) {
    let province_id = seed_province(&pool).await;

    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(test_app(state)).unwrap();

    let response = server
        .put(&format!("/api/v1/province/{province_id}"))
        .json(&json!({ "id": province_id, "name": "" }))
        .await;

    response.assert_status_bad_request();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"], "province: name is required");

    // Stored row untouched.
    let stored: String =
        sqlx::query_scalar::<_, String>("SELECT name FROM provinces WHERE id = $1")
            .bind(&province_id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(stored, "Bangkok");
}

#[sqlx::test]
async fn test_update_province_unparsable_payload_is_unprocessable(pool: PgPool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(test_app(state)).unwrap();

    let response = server
        .put("/api/v1/province/some-id")
        .json(&json!("not an object"))
        .await;

    response.assert_status(axum::http::StatusCode::UNPROCESSABLE_ENTITY);
}
