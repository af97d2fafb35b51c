mod common;

use sqlx::PgPool;
use std::sync::Arc;

use pandemic_stats::domain::repositories::CountryRepository;
use pandemic_stats::infrastructure::persistence::PgCountryRepository;

#[sqlx::test]
async fn test_save_then_fetch_orders_provinces_by_total_desc(pool: PgPool) {
    let repo = PgCountryRepository::new(Arc::new(pool));

    // Insert in ascending order to prove the read path reorders.
    let mut country = common::test_country(
        "Thailand",
        vec![
            common::test_province("Chiang Mai", 50),
            common::test_province("Bangkok", 100),
        ],
    );
    country.assign_id();
    for p in &mut country.provinces {
        p.assign_id();
    }

    let saved = repo.save(country).await.unwrap();

    let fetched = repo.find_by_id(&saved.id).await.unwrap().unwrap();
    assert_eq!(fetched.name, "Thailand");
    assert_eq!(fetched.total, 150);

    let names: Vec<&str> = fetched.provinces.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Bangkok", "Chiang Mai"]);
    assert_eq!(fetched.provinces[0].total, 100);
}

#[sqlx::test]
async fn test_save_with_zero_provinces(pool: PgPool) {
    let repo = PgCountryRepository::new(Arc::new(pool.clone()));

    let mut country = common::test_country("Thailand", vec![]);
    country.assign_id();

    let saved = repo.save(country).await.unwrap();

    let fetched = repo.find_by_id(&saved.id).await.unwrap().unwrap();
    // Empty collection, never null.
    assert!(fetched.provinces.is_empty());
    assert_eq!(common::count_provinces(&pool).await, 0);
}

#[sqlx::test]
async fn test_find_by_id_missing_returns_none(pool: PgPool) {
    let repo = PgCountryRepository::new(Arc::new(pool));

    let found = repo.find_by_id("nonexistent").await.unwrap();
    assert!(found.is_none());
}

#[sqlx::test]
async fn test_save_rolls_back_both_tables_on_province_failure(pool: PgPool) {
    let repo = PgCountryRepository::new(Arc::new(pool.clone()));

    // Duplicate province ids violate the primary key during the bulk insert.
    let mut country = common::test_country(
        "Thailand",
        vec![
            common::test_province("Bangkok", 100),
            common::test_province("Chiang Mai", 50),
        ],
    );
    country.assign_id();
    country.provinces[0].id = "same-id".to_string();
    country.provinces[1].id = "same-id".to_string();

    assert!(repo.save(country).await.is_err());

    // The country insert preceding the failure must not be observable.
    assert_eq!(common::count_countries(&pool).await, 0);
    assert_eq!(common::count_provinces(&pool).await, 0);
}

#[sqlx::test]
async fn test_update_preserves_identifier_and_provinces(pool: PgPool) {
    let repo = PgCountryRepository::new(Arc::new(pool.clone()));

    let mut country = common::test_country("Thailand", vec![common::test_province("Bangkok", 100)]);
    country.assign_id();
    country.provinces[0].assign_id();
    let id = country.id.clone();
    let province_id = country.provinces[0].id.clone();

    let mut saved = repo.save(country).await.unwrap();

    saved.name = "Kingdom of Thailand".to_string();
    saved.total = 200;
    repo.update(saved).await.unwrap();

    let fetched = repo.find_by_id(&id).await.unwrap().unwrap();
    assert_eq!(fetched.id, id);
    assert_eq!(fetched.name, "Kingdom of Thailand");
    assert_eq!(fetched.total, 200);
    // Child rows are untouched by the scalar update.
    assert_eq!(fetched.provinces.len(), 1);
    assert_eq!(fetched.provinces[0].id, province_id);
    assert_eq!(fetched.provinces[0].name, "Bangkok");
}

#[sqlx::test]
async fn test_delete_removes_country_and_provinces(pool: PgPool) {
    let repo = PgCountryRepository::new(Arc::new(pool.clone()));

    let mut country = common::test_country(
        "Thailand",
        vec![
            common::test_province("Bangkok", 100),
            common::test_province("Chiang Mai", 50),
        ],
    );
    country.assign_id();
    for p in &mut country.provinces {
        p.assign_id();
    }
    let id = country.id.clone();

    repo.save(country).await.unwrap();
    assert_eq!(common::count_countries(&pool).await, 1);
    assert_eq!(common::count_provinces(&pool).await, 2);

    repo.delete(&id).await.unwrap();

    assert_eq!(common::count_countries(&pool).await, 0);
    assert_eq!(common::count_provinces(&pool).await, 0);
}
