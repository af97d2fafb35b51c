#![allow(dead_code)]

use chrono::Utc;
use sqlx::PgPool;
use std::sync::Arc;

use pandemic_stats::domain::entities::{Country, Province};
use pandemic_stats::state::AppState;

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool))
}

pub fn test_country(name: &str, provinces: Vec<Province>) -> Country {
    Country {
        id: String::new(),
        name: name.to_string(),
        total: 150,
        new_case: 10,
        treated: 30,
        decovering_case: 20,
        test_case: 1000,
        dead: 5,
        negative_case: 800,
        provinces,
        updated_at: Utc::now(),
    }
}

pub fn test_province(name: &str, total: i64) -> Province {
    Province {
        id: String::new(),
        name: name.to_string(),
        total,
        new_case: 1,
        treated: 2,
        decovering_case: 3,
        test_case: 50,
        dead: 0,
        negative_case: 40,
        districts: Vec::new(),
        updated_at: Utc::now(),
    }
}

pub async fn count_countries(pool: &PgPool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM country")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_provinces(pool: &PgPool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM provinces")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn fetch_country_name(pool: &PgPool, id: &str) -> Option<String> {
    sqlx::query_scalar::<_, String>("SELECT name FROM country WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
        .unwrap()
}
