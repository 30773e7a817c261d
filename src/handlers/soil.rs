//! Soil test handlers

use axum::{extract::State, Json};

use crate::{AppState, AppResult};
use crate::middleware::auth::FarmerContext;
use crate::models::{CreateSoilTest, SoilTest};

pub async fn create_test(
    State(state): State<AppState>,
    farmer: FarmerContext,
    Json(req): Json<CreateSoilTest>,
) -> AppResult<Json<SoilTest>> {
    let test = SoilTest::create(&state.pool, farmer.farmer_id, req).await?;
    Ok(Json(test))
}

pub async fn list_tests(
    State(state): State<AppState>,
    farmer: FarmerContext,
) -> AppResult<Json<Vec<SoilTest>>> {
    let tests = SoilTest::list_by_farmer(&state.pool, farmer.farmer_id).await?;
    Ok(Json(tests))
}
