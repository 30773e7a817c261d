//! Pest report model

use serde::Serialize;
use sqlx::{FromRow, PgPool};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PestReport {
    pub id: i64,
    pub farmer_id: i64,
    pub image_path: Option<String>,
    pub predicted_label: String,
    pub confidence: f64,
    pub advisory: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

impl PestReport {
    /// Persist one pest-inference event. Returns the new record id.
    pub async fn record(
        pool: &PgPool,
        farmer_id: i64,
        image_path: &str,
        predicted_label: &str,
        confidence: f64,
        advisory: &serde_json::Value,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO pest_reports (farmer_id, image_path, predicted_label, confidence, advisory)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#
        )
        .bind(farmer_id)
        .bind(image_path)
        .bind(predicted_label)
        .bind(confidence)
        .bind(advisory)
        .fetch_one(pool)
        .await
    }

    /// All of a farmer's reports at or after `cutoff`, newest first,
    /// id as the stable insertion-order tie-break.
    pub async fn list_since(
        pool: &PgPool,
        farmer_id: i64,
        cutoff: Option<DateTime<Utc>>,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, PestReport>(
            r#"
            SELECT * FROM pest_reports
            WHERE farmer_id = $1
              AND ($2::timestamptz IS NULL OR created_at >= $2)
            ORDER BY created_at DESC, id DESC
            "#
        )
        .bind(farmer_id)
        .bind(cutoff)
        .fetch_all(pool)
        .await
    }

    /// Fetch a report only if it belongs to the given farmer.
    pub async fn find_owned(pool: &PgPool, id: i64, farmer_id: i64) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, PestReport>(
            "SELECT * FROM pest_reports WHERE id = $1 AND farmer_id = $2"
        )
        .bind(id)
        .bind(farmer_id)
        .fetch_optional(pool)
        .await
    }

    pub async fn count(pool: &PgPool, farmer_id: i64) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM pest_reports WHERE farmer_id = $1")
            .bind(farmer_id)
            .fetch_one(pool)
            .await
    }

    pub async fn avg_confidence(pool: &PgPool, farmer_id: i64) -> Result<Option<f64>, sqlx::Error> {
        sqlx::query_scalar::<_, Option<f64>>(
            "SELECT AVG(confidence) FROM pest_reports WHERE farmer_id = $1"
        )
        .bind(farmer_id)
        .fetch_one(pool)
        .await
    }

    pub async fn delete(pool: &PgPool, id: i64, farmer_id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM pest_reports WHERE id = $1 AND farmer_id = $2")
            .bind(id)
            .bind(farmer_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
