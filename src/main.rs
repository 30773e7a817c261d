//! Agri Advisor Backend Server
//!
//! Farm-advisory API: farmer accounts, crop recommendations and
//! pest-identification results from pre-trained models, and a history
//! of past advisories.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      AGRI ADVISOR API                       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐  ┌───────────┐  ┌─────────────────────────┐ │
//! │  │  API      │  │  Auth     │  │  Inference Adapters     │ │
//! │  │  Gateway  │  │  Service  │  │  (crop + pest, ONNX)    │ │
//! │  │  (Axum)   │  │  (JWT)    │  │                         │ │
//! │  └─────┬─────┘  └─────┬─────┘  └────────────┬────────────┘ │
//! │        └──────────────┼──────────────────────┘              │
//! │                       ▼                                     │
//! │                ┌─────────────┐                             │
//! │                │ PostgreSQL  │                             │
//! │                └─────────────┘                             │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod advisory;
mod config;
mod crops;
mod db;
mod error;
mod handlers;
mod inference;
mod metrics;
mod middleware;
mod models;
mod storage;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post, delete},
    middleware as axum_middleware,
};
use tower_http::{
    cors::{CorsLayer, Any},
    trace::TraceLayer,
    compression::CompressionLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use inference::crop::CropModel;
use inference::pest::PestModel;

pub use error::{AppError, AppResult};

/// Request bodies carry base64 images; match the original 16MB cap
const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "agri_advisor=debug,tower_http=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    tracing::info!("Agri Advisor server starting...");
    tracing::info!("Database: {}", config.database_url.split('@').last().unwrap_or("***"));

    // Initialize database pool
    let pool = db::create_pool(&config.database_url).await
        .expect("Failed to create database pool");

    // Run migrations
    tracing::info!("Running database migrations...");
    db::run_migrations(&pool).await
        .expect("Failed to run migrations");

    // Load model artifacts once; missing artifacts mean fallback mode,
    // not a startup failure
    let crop_model = Arc::new(CropModel::load(&config.crop_model_path));
    let pest_model = Arc::new(PestModel::load(&config.pest_model_path));

    let images = storage::ImageStore::new(&config.upload_dir)
        .expect("Failed to create upload directory");

    // Build application state
    let state = AppState {
        pool,
        config: config.clone(),
        crop_model,
        pest_model,
        images,
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pool: sqlx::PgPool,
    pub config: config::Config,
    pub crop_model: Arc<CropModel>,
    pub pest_model: Arc<PestModel>,
    pub images: storage::ImageStore,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/health", get(handlers::health::check))
        .route("/api/auth/signup", post(handlers::auth::signup))
        .route("/api/auth/login", post(handlers::auth::login));

    // Farmer routes (JWT auth)
    let farmer_routes = Router::new()
        .route("/api/auth/me", get(handlers::auth::me))

        // Crop recommendation pipeline
        .route("/api/recommend/crop", post(handlers::recommend::recommend_crop))
        .route("/api/recommend/history", get(handlers::recommend::history))

        // Pest detection pipeline
        .route("/api/pest/detect", post(handlers::pest::detect))

        // History
        .route("/api/history/recommendations", get(handlers::history::list_recommendations))
        .route("/api/history/recommendations/:id", delete(handlers::history::delete_recommendation))
        .route("/api/history/pest-reports", get(handlers::history::list_pest_reports))
        .route("/api/history/pest-reports/:id", delete(handlers::history::delete_pest_report))
        .route("/api/history/stats", get(handlers::history::stats))

        // Soil tests
        .route("/api/soil/tests", post(handlers::soil::create_test).get(handlers::soil::list_tests))

        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_farmer_auth
        ));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .merge(farmer_routes)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}
