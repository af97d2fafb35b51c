//! PostgreSQL implementation of the country aggregate repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};
use std::sync::Arc;

use crate::domain::entities::{Country, Province};
use crate::domain::repositories::CountryRepository;
use crate::error::AppError;

/// PostgreSQL repository for the country aggregate.
///
/// The aggregate write path (save, delete) runs inside explicit transactions
/// at `REPEATABLE READ` so a concurrent reader never observes a half-written
/// aggregate. Rollback happens implicitly when the transaction guard drops
/// without a commit.
pub struct PgCountryRepository {
    pool: Arc<PgPool>,
}

impl PgCountryRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CountryRow {
    id: String,
    name: String,
    total: i64,
    new_case: i64,
    treated: i64,
    decovering_case: i64,
    test_case: i64,
    dead: i64,
    negative_case: i64,
    updated_at: DateTime<Utc>,
}

#[derive(sqlx::FromRow)]
struct ProvinceRow {
    id: String,
    name: String,
    total: i64,
    new_case: i64,
    treated: i64,
    decovering_case: i64,
    test_case: i64,
    dead: i64,
    negative_case: i64,
    updated_at: DateTime<Utc>,
}

impl From<ProvinceRow> for Province {
    fn from(r: ProvinceRow) -> Self {
        Province {
            id: r.id,
            name: r.name,
            total: r.total,
            new_case: r.new_case,
            treated: r.treated,
            decovering_case: r.decovering_case,
            test_case: r.test_case,
            dead: r.dead,
            negative_case: r.negative_case,
            districts: Vec::new(),
            updated_at: r.updated_at,
        }
    }
}

#[async_trait]
impl CountryRepository for PgCountryRepository {
    async fn save(&self, country: Country) -> Result<Country, AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ")
            .execute(&mut *tx)
            .await?;

        sqlx::query(
            r#"
            INSERT INTO country
                (id, name, total, new_case, treated, decovering_case,
                 test_case, dead, negative_case, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(&country.id)
        .bind(&country.name)
        .bind(country.total)
        .bind(country.new_case)
        .bind(country.treated)
        .bind(country.decovering_case)
        .bind(country.test_case)
        .bind(country.dead)
        .bind(country.negative_case)
        .bind(country.updated_at)
        .execute(&mut *tx)
        .await?;

        // Postgres rejects a VALUES list with zero rows; an empty province
        // set is still a valid (no-op) save.
        if !country.provinces.is_empty() {
            let mut qb: QueryBuilder<Postgres> = QueryBuilder::new(
                "INSERT INTO provinces \
                 (id, name, total, new_case, treated, decovering_case, \
                  test_case, dead, negative_case, country_id, updated_at) ",
            );
            qb.push_values(&country.provinces, |mut b, p| {
                b.push_bind(&p.id)
                    .push_bind(&p.name)
                    .push_bind(p.total)
                    .push_bind(p.new_case)
                    .push_bind(p.treated)
                    .push_bind(p.decovering_case)
                    .push_bind(p.test_case)
                    .push_bind(p.dead)
                    .push_bind(p.negative_case)
                    .push_bind(&country.id)
                    .push_bind(p.updated_at);
            });
            qb.build().execute(&mut *tx).await?;
        }

        tx.commit().await?;

        Ok(country)
    }

    async fn update(&self, country: Country) -> Result<Country, AppError> {
        sqlx::query(
            r#"
            UPDATE country
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
        .bind(&country.id)
        .bind(&country.name)
        .bind(country.total)
        .bind(country.new_case)
        .bind(country.treated)
        .bind(country.decovering_case)
        .bind(country.test_case)
        .bind(country.dead)
        .bind(country.negative_case)
        .bind(country.updated_at)
        .execute(self.pool.as_ref())
        .await?;

        Ok(country)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ")
            .execute(&mut *tx)
            .await?;

        // Provinces first: they reference the country row.
        sqlx::query("DELETE FROM provinces WHERE country_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM country WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Country>, AppError> {
        let row = sqlx::query_as::<_, CountryRow>(
            r#"
            SELECT id, name, total, new_case, treated, decovering_case,
                   test_case, dead, negative_case, updated_at
            FROM country
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let provinces = sqlx::query_as::<_, ProvinceRow>(
            r#"
            SELECT id, name, total, new_case, treated, decovering_case,
                   test_case, dead, negative_case, updated_at
            FROM provinces
            WHERE country_id = $1
            ORDER BY total DESC
            "#,
        )
        .bind(id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(Some(Country {
            id: row.id,
            name: row.name,
            total: row.total,
            new_case: row.new_case,
            treated: row.treated,
            decovering_case: row.decovering_case,
            test_case: row.test_case,
            dead: row.dead,
            negative_case: row.negative_case,
            provinces: provinces.into_iter().map(Province::from).collect(),
            updated_at: row.updated_at,
        }))
    }
}
