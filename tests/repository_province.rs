mod common;

use sqlx::PgPool;
use std::sync::Arc;

use pandemic_stats::domain::repositories::{CountryRepository, ProvinceRepository};
use pandemic_stats::infrastructure::persistence::{PgCountryRepository, PgProvinceRepository};

#[sqlx::test]
async fn test_update_province_changes_row_by_id(pool: PgPool) {
    let country_repo = PgCountryRepository::new(Arc::new(pool.clone()));
    let province_repo = PgProvinceRepository::new(Arc::new(pool.clone()));

    let mut country = common::test_country("Thailand", vec![common::test_province("Bangkok", 100)]);
    country.assign_id();
    country.provinces[0].assign_id();
    let country_id = country.id.clone();
    let saved = country_repo.save(country).await.unwrap();

    let mut province = saved.provinces[0].clone();
    province.name = "Greater Bangkok".to_string();
    province.total = 140;
    province.new_case = 7;
    province_repo.update(province).await.unwrap();

    let fetched = country_repo.find_by_id(&country_id).await.unwrap().unwrap();
    assert_eq!(fetched.provinces.len(), 1);
    assert_eq!(fetched.provinces[0].id, saved.provinces[0].id);
    assert_eq!(fetched.provinces[0].name, "Greater Bangkok");
    assert_eq!(fetched.provinces[0].total, 140);
    assert_eq!(fetched.provinces[0].new_case, 7);
}

#[sqlx::test]
async fn test_update_unknown_province_is_a_no_op(pool: PgPool) {
    let province_repo = PgProvinceRepository::new(Arc::new(pool.clone()));

    let mut province = common::test_province("Bangkok", 100);
    province.id = "nonexistent".to_string();

    // Single-row update keyed by id; no matching row, no error.
    assert!(province_repo.update(province).await.is_ok());
    assert_eq!(common::count_provinces(&pool).await, 0);
}
