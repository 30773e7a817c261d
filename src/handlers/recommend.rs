//! Crop recommendation handlers
//!
//! The full inference pipeline: validate → predict → derive metrics →
//! persist → respond. Validation failures surface before any side
//! effect; a failed store write aborts the response.

use axum::{extract::{State, Query}, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{AppState, AppResult, AppError};
use crate::crops::{self, CropDetails};
use crate::inference::features;
use crate::metrics;
use crate::middleware::auth::FarmerContext;
use crate::models::Recommendation;

#[derive(Debug, Clone, Serialize)]
pub struct CropRecommendationResponse {
    pub recommended_crop: String,
    pub confidence: f64,
    pub degraded: bool,
    pub estimated_yield: f64,
    pub estimated_profit: f64,
    pub sustainability_score: u32,
    pub crop_details: CropDetails,
    pub input_parameters: Value,
}

pub async fn recommend_crop(
    State(state): State<AppState>,
    farmer: FarmerContext,
    Json(body): Json<Value>,
) -> AppResult<Json<CropRecommendationResponse>> {
    // Validation happens before any inference or persistence side effect
    let input = features::normalize(&body)?;

    let prediction = state.crop_model.predict(&input);
    let derived = metrics::calculate(&input, &prediction.label);
    let crop_details = crops::details(&prediction.label);

    let result = CropRecommendationResponse {
        recommended_crop: prediction.label,
        confidence: prediction.confidence,
        degraded: prediction.degraded,
        estimated_yield: derived.estimated_yield,
        estimated_profit: derived.estimated_profit,
        sustainability_score: derived.sustainability_score,
        crop_details,
        input_parameters: body.clone(),
    };

    let recommended = serde_json::to_value(&result)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    // A recommendation the farmer cannot later retrieve is silent data
    // loss: no success response without a durable record.
    let id = Recommendation::record(&state.pool, farmer.farmer_id, &body, &recommended).await?;
    tracing::debug!("Recorded recommendation {} for farmer {}", id, farmer.farmer_id);

    Ok(Json(result))
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub recommendations: Vec<Recommendation>,
    pub total: i64,
    pub pages: i64,
    pub current_page: i64,
}

/// Paginated raw history, newest first
pub async fn history(
    State(state): State<AppState>,
    farmer: FarmerContext,
    Query(query): Query<HistoryQuery>,
) -> AppResult<Json<HistoryResponse>> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(5).clamp(1, 100);

    let (recommendations, total) =
        Recommendation::list_page(&state.pool, farmer.farmer_id, page, per_page).await?;
    let pages = (total + per_page - 1) / per_page;

    Ok(Json(HistoryResponse {
        recommendations,
        total,
        pages,
        current_page: page,
    }))
}
