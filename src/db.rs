//! Database module - PostgreSQL connection and migrations

use sqlx::{postgres::PgPoolOptions, PgPool};

/// Create database connection pool
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
}

/// Run database migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    // Create tables if not exist
    sqlx::query(SCHEMA_SQL)
        .execute(pool)
        .await?;

    tracing::info!("Database schema applied successfully");
    Ok(())
}

/// Database schema SQL
const SCHEMA_SQL: &str = r#"
-- Farmers
CREATE TABLE IF NOT EXISTS farmers (
    id BIGSERIAL PRIMARY KEY,
    name VARCHAR(128) NOT NULL,
    phone VARCHAR(20) NOT NULL UNIQUE,
    password_hash VARCHAR(255) NOT NULL,
    village VARCHAR(255),
    district VARCHAR(255),
    state VARCHAR(255),
    lat DOUBLE PRECISION,
    lng DOUBLE PRECISION,
    land_size DOUBLE PRECISION NOT NULL DEFAULT 0.0,
    soil_type VARCHAR(64),
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

-- Recommendations (one row per crop-inference event, immutable)
CREATE TABLE IF NOT EXISTS recommendations (
    id BIGSERIAL PRIMARY KEY,
    farmer_id BIGINT NOT NULL REFERENCES farmers(id) ON DELETE CASCADE,
    input JSONB NOT NULL,
    recommended JSONB NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

-- Pest reports (one row per pest-inference event, immutable)
CREATE TABLE IF NOT EXISTS pest_reports (
    id BIGSERIAL PRIMARY KEY,
    farmer_id BIGINT NOT NULL REFERENCES farmers(id) ON DELETE CASCADE,
    image_path VARCHAR(512),
    predicted_label VARCHAR(128) NOT NULL,
    confidence DOUBLE PRECISION NOT NULL,
    advisory JSONB NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

-- Soil tests
CREATE TABLE IF NOT EXISTS soil_tests (
    id BIGSERIAL PRIMARY KEY,
    farmer_id BIGINT NOT NULL REFERENCES farmers(id) ON DELETE CASCADE,
    ph DOUBLE PRECISION,
    n INT,
    p INT,
    k INT,
    moisture DOUBLE PRECISION,
    test_date DATE,
    notes TEXT
);

-- Indexes
CREATE INDEX IF NOT EXISTS idx_recommendations_farmer ON recommendations(farmer_id, created_at);
CREATE INDEX IF NOT EXISTS idx_pest_reports_farmer ON pest_reports(farmer_id, created_at);
CREATE INDEX IF NOT EXISTS idx_soil_tests_farmer ON soil_tests(farmer_id);
"#;
