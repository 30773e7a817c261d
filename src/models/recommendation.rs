//! Recommendation model

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Recommendation {
    pub id: i64,
    pub farmer_id: i64,
    pub input: serde_json::Value,
    pub recommended: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

/// Query parameters shared by the history listing endpoints
#[derive(Debug, Deserialize, Default)]
pub struct HistoryFilter {
    pub search: Option<String>,
    pub date_filter: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

/// Start of the window selected by a `date_filter` value, `None` for "all"
pub fn date_filter_cutoff(date_filter: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let days = match date_filter {
        "all" => return None,
        "week" => 7,
        "month" => 30,
        "quarter" => 90,
        _ => 365,
    };
    Some(now - chrono::Duration::days(days))
}

impl Recommendation {
    /// Persist one crop-inference event. Returns the new record id;
    /// callers must not report success without it.
    pub async fn record(
        pool: &PgPool,
        farmer_id: i64,
        input: &serde_json::Value,
        recommended: &serde_json::Value,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO recommendations (farmer_id, input, recommended)
            VALUES ($1, $2, $3)
            RETURNING id
            "#
        )
        .bind(farmer_id)
        .bind(input)
        .bind(recommended)
        .fetch_one(pool)
        .await
    }

    /// One page of a farmer's history, newest first, with the total count.
    pub async fn list_page(
        pool: &PgPool,
        farmer_id: i64,
        page: i64,
        per_page: i64,
    ) -> Result<(Vec<Self>, i64), sqlx::Error> {
        let offset = (page - 1).max(0) * per_page;

        let rows = sqlx::query_as::<_, Recommendation>(
            r#"
            SELECT * FROM recommendations
            WHERE farmer_id = $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#
        )
        .bind(farmer_id)
        .bind(per_page)
        .bind(offset)
        .fetch_all(pool)
        .await?;

        let total = Self::count(pool, farmer_id).await?;
        Ok((rows, total))
    }

    /// All of a farmer's records at or after `cutoff`, newest first.
    /// Secondary id ordering gives the stable insertion-order tie-break.
    pub async fn list_since(
        pool: &PgPool,
        farmer_id: i64,
        cutoff: Option<DateTime<Utc>>,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Recommendation>(
            r#"
            SELECT * FROM recommendations
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

    pub async fn count(pool: &PgPool, farmer_id: i64) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM recommendations WHERE farmer_id = $1")
            .bind(farmer_id)
            .fetch_one(pool)
            .await
    }

    /// All stored result payloads for a farmer (stats aggregation).
    pub async fn recommended_payloads(
        pool: &PgPool,
        farmer_id: i64,
    ) -> Result<Vec<serde_json::Value>, sqlx::Error> {
        sqlx::query_scalar::<_, serde_json::Value>(
            "SELECT recommended FROM recommendations WHERE farmer_id = $1"
        )
        .bind(farmer_id)
        .fetch_all(pool)
        .await
    }

    /// Owner-scoped delete; false when the id does not exist or belongs
    /// to another farmer.
    pub async fn delete(pool: &PgPool, id: i64, farmer_id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM recommendations WHERE id = $1 AND farmer_id = $2")
            .bind(id)
            .bind(farmer_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_filter_windows() {
        let now = Utc::now();

        assert_eq!(date_filter_cutoff("all", now), None);
        assert_eq!(date_filter_cutoff("week", now), Some(now - chrono::Duration::days(7)));
        assert_eq!(date_filter_cutoff("month", now), Some(now - chrono::Duration::days(30)));
        assert_eq!(date_filter_cutoff("quarter", now), Some(now - chrono::Duration::days(90)));
        // Anything else falls back to a year
        assert_eq!(date_filter_cutoff("year", now), Some(now - chrono::Duration::days(365)));
        assert_eq!(date_filter_cutoff("bogus", now), Some(now - chrono::Duration::days(365)));
    }
}
