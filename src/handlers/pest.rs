//! Pest detection handler
//!
//! Accepts a base64 image payload, stores the image, runs the pest
//! classifier and persists the report. The stored image path is kept
//! verbatim on the report; if the report write fails the image stays
//! behind and is logged as orphaned.

use axum::{extract::State, Json};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::{Deserialize, Serialize};

use crate::{AppState, AppResult, AppError};
use crate::advisory::{self, AdvisoryPayload};
use crate::middleware::auth::FarmerContext;
use crate::models::PestReport;
use crate::storage::ImageStore;

#[derive(Debug, Deserialize)]
pub struct DetectRequest {
    /// Base64 image payload, with or without a data-URL prefix
    #[serde(default)]
    pub image: String,

    #[serde(default = "default_filename")]
    pub filename: String,
}

fn default_filename() -> String {
    "upload.jpg".to_string()
}

#[derive(Debug, Serialize)]
pub struct DetectResponse {
    pub prediction: String,
    pub confidence: f64,
    pub degraded: bool,
    pub advisory: AdvisoryPayload,
    pub report_id: i64,
    pub image_data: String,
}

pub async fn detect(
    State(state): State<AppState>,
    farmer: FarmerContext,
    Json(req): Json<DetectRequest>,
) -> AppResult<Json<DetectResponse>> {
    if req.image.is_empty() {
        return Err(AppError::Validation("No image file provided".to_string()));
    }
    if !ImageStore::allowed_file(&req.filename) {
        return Err(AppError::Validation("Invalid file type".to_string()));
    }

    let encoded = req.image
        .rsplit_once("base64,")
        .map(|(_, data)| data)
        .unwrap_or(&req.image);
    let bytes = BASE64.decode(encoded.trim())
        .map_err(|_| AppError::Validation("Invalid image encoding".to_string()))?;

    let stored_path = state.images.save(&bytes, &req.filename)
        .map_err(|e| AppError::Internal(format!("Failed to store image: {}", e)))?;

    let prediction = state.pest_model.predict(&bytes);

    // Post-fallback the label is always in the known set, so the lookup
    // only hits the generic advisory for legacy or external labels
    let advisory_payload = advisory::advisory_for(&prediction.label);
    let advisory_json = serde_json::to_value(&advisory_payload)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    let report_id = match PestReport::record(
        &state.pool,
        farmer.farmer_id,
        &stored_path,
        &prediction.label,
        prediction.confidence,
        &advisory_json,
    ).await {
        Ok(id) => id,
        Err(e) => {
            // Orphaned images are logged, not auto-cleaned
            tracing::error!("Pest report write failed, orphaned image at {}: {}", stored_path, e);
            return Err(e.into());
        }
    };

    let image_data = format!("data:image/jpeg;base64,{}", BASE64.encode(&bytes));

    Ok(Json(DetectResponse {
        prediction: prediction.label,
        confidence: prediction.confidence,
        degraded: prediction.degraded,
        advisory: advisory_payload,
        report_id,
        image_data,
    }))
}
