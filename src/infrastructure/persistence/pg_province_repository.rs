//! PostgreSQL implementation of the province repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Province;
use crate::domain::repositories::ProvinceRepository;
use crate::error::AppError;

/// PostgreSQL repository for province rows.
pub struct PgProvinceRepository {
    pool: Arc<PgPool>,
}

impl PgProvinceRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProvinceRepository for PgProvinceRepository {
    async fn update(&self, province: Province) -> Result<Province, AppError> {
        sqlx::query(
            r#"
            UPDATE provinces
            SET name = $2,
                total = $3,
                new_case = $4,
                treated = $5,
                decovering_case = $6,
                test_case = $7,
                dead = $8,
                negative_case = $9,
                updated_at = $10
            WHERE id = $1
            "#,
        )
        .bind(&province.id)
        .bind(&province.name)
        .bind(province.total)
        .bind(province.new_case)
        .bind(province.treated)
        .bind(province.decovering_case)
        .bind(province.test_case)
        .bind(province.dead)
        .bind(province.negative_case)
        .bind(province.updated_at)
        .execute(self.pool.as_ref())
        .await?;

        Ok(province)
    }
}
