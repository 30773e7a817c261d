//! Soil test model

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use chrono::NaiveDate;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SoilTest {
    pub id: i64,
    pub farmer_id: i64,
    pub ph: Option<f64>,
    pub n: Option<i32>,
    pub p: Option<i32>,
    pub k: Option<i32>,
    pub moisture: Option<f64>,
    pub test_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateSoilTest {
    pub ph: Option<f64>,
    pub n: Option<i32>,
    pub p: Option<i32>,
    pub k: Option<i32>,
    pub moisture: Option<f64>,
    pub test_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl SoilTest {
    pub async fn create(pool: &PgPool, farmer_id: i64, data: CreateSoilTest) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, SoilTest>(
            r#"
            INSERT INTO soil_tests (farmer_id, ph, n, p, k, moisture, test_date, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#
        )
        .bind(farmer_id)
        .bind(data.ph)
        .bind(data.n)
        .bind(data.p)
        .bind(data.k)
        .bind(data.moisture)
        .bind(data.test_date)
        .bind(&data.notes)
        .fetch_one(pool)
        .await
    }

    pub async fn list_by_farmer(pool: &PgPool, farmer_id: i64) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, SoilTest>(
            r#"
            SELECT * FROM soil_tests
            WHERE farmer_id = $1
            ORDER BY test_date DESC NULLS LAST, id DESC
            "#
        )
        .bind(farmer_id)
        .fetch_all(pool)
        .await
    }
}
