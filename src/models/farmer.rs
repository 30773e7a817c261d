//! Farmer model

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Farmer {
    pub id: i64,
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub village: Option<String>,
    pub district: Option<String>,
    pub state: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub land_size: f64,
    pub soil_type: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateFarmer {
    pub name: String,
    pub phone: String,
    pub village: Option<String>,
    pub district: Option<String>,
    pub state: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub land_size: Option<f64>,
    pub soil_type: Option<String>,
}

/// Public identity subset returned by auth endpoints
#[derive(Debug, Serialize)]
pub struct FarmerInfo {
    pub id: i64,
    pub name: String,
    pub phone: String,
}

impl Farmer {
    pub async fn create(pool: &PgPool, data: CreateFarmer, password_hash: String) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Farmer>(
            r#"
            INSERT INTO farmers (name, phone, password_hash, village, district, state, lat, lng, land_size, soil_type)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#
        )
        .bind(&data.name)
        .bind(&data.phone)
        .bind(&password_hash)
        .bind(&data.village)
        .bind(&data.district)
        .bind(&data.state)
        .bind(data.lat)
        .bind(data.lng)
        .bind(data.land_size.unwrap_or(0.0))
        .bind(&data.soil_type)
        .fetch_one(pool)
        .await
    }

    pub async fn find_by_phone(pool: &PgPool, phone: &str) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Farmer>("SELECT * FROM farmers WHERE phone = $1")
            .bind(phone)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Farmer>("SELECT * FROM farmers WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub fn to_info(&self) -> FarmerInfo {
        FarmerInfo {
            id: self.id,
            name: self.name.clone(),
            phone: self.phone.clone(),
        }
    }
}
