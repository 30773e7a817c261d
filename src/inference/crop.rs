//! Crop recommendation adapter
//!
//! Wraps the exported crop pipeline (scaler + classifier + label decoder).
//! The label decoder is the alphabetically-sorted class list the model was
//! trained on; the artifact itself only emits class indices.

use std::path::Path;

use ndarray::Array2;
use parking_lot::Mutex;
use ort::session::{Session, builder::GraphOptimizationLevel};
use ort::value::Value;

use super::{argmax, ModelError};
use super::features::{NormalizedInput, FEATURE_COUNT};

/// Class labels in label-encoder order
pub const CROP_LABELS: [&str; 22] = [
    "apple", "banana", "blackgram", "chickpea", "coconut", "coffee",
    "cotton", "grapes", "jute", "kidneybeans", "lentil", "maize",
    "mango", "mothbeans", "mungbean", "muskmelon", "orange", "papaya",
    "pigeonpeas", "pomegranate", "rice", "watermelon",
];

/// Served when no model is available
pub const FALLBACK_CROP: &str = "wheat";
pub const FALLBACK_CONFIDENCE: f64 = 0.7;

/// Served when the graph has no probability output
const DEFAULT_CONFIDENCE: f64 = 0.8;

#[derive(Debug, Clone)]
pub struct CropPrediction {
    pub label: String,
    pub confidence: f64,
    pub degraded: bool,
}

/// Single-owner handle around the loaded session, built once at startup
pub struct CropModel {
    session: Option<Mutex<Session>>,
}

impl CropModel {
    /// Load the artifact; a missing or corrupt file yields a handle in
    /// fallback mode rather than a startup failure.
    pub fn load(path: &str) -> Self {
        match build_session(path) {
            Ok(session) => {
                tracing::info!("Crop model loaded from {}", path);
                Self { session: Some(Mutex::new(session)) }
            }
            Err(e) => {
                tracing::warn!("Crop model unavailable ({}), serving fallback recommendations", e);
                Self { session: None }
            }
        }
    }

    /// Handle with no model, for tests and degraded deployments
    pub fn disabled() -> Self {
        Self { session: None }
    }

    pub fn is_loaded(&self) -> bool {
        self.session.is_some()
    }

    /// Never fails: inference errors collapse into the degraded fallback.
    pub fn predict(&self, input: &NormalizedInput) -> CropPrediction {
        let Some(lock) = &self.session else {
            return fallback_prediction();
        };

        let mut session = lock.lock();
        match run_inference(&mut session, &input.vector) {
            Ok((label, confidence)) => CropPrediction {
                label,
                confidence: confidence.clamp(0.0, 1.0),
                degraded: false,
            },
            Err(e) => {
                tracing::warn!("Crop inference failed ({}), serving fallback", e);
                fallback_prediction()
            }
        }
    }
}

fn fallback_prediction() -> CropPrediction {
    CropPrediction {
        label: FALLBACK_CROP.to_string(),
        confidence: FALLBACK_CONFIDENCE,
        degraded: true,
    }
}

fn build_session(path: &str) -> Result<Session, ModelError> {
    if !Path::new(path).exists() {
        return Err(ModelError::Missing(path.to_string()));
    }

    let session = Session::builder()?
        .with_optimization_level(GraphOptimizationLevel::Level3)?
        .commit_from_file(path)?;

    Ok(session)
}

fn run_inference(
    session: &mut Session,
    vector: &[f64; FEATURE_COUNT],
) -> Result<(String, f64), ModelError> {
    let output_names: Vec<String> = session.outputs.iter().map(|o| o.name.clone()).collect();

    let data: Vec<f32> = vector.iter().map(|&v| v as f32).collect();
    let input_array = Array2::<f32>::from_shape_vec((1, FEATURE_COUNT), data)
        .map_err(|e| ModelError::Tensor(e.to_string()))?;
    let input_tensor = Value::from_array(input_array)
        .map_err(|e| ModelError::Tensor(e.to_string()))?;

    let outputs = session.run(ort::inputs![input_tensor])?;

    // Probability output when the pipeline exposes one: confidence is the
    // probability mass of the predicted class
    if let Some(name) = output_names.iter().find(|n| n.to_lowercase().contains("probab")) {
        if let Some(output) = outputs.get(name) {
            if let Ok(tensor) = output.try_extract_tensor::<f32>() {
                let probs = tensor.1;
                let (idx, best) =
                    argmax(probs).ok_or_else(|| ModelError::Tensor("empty output".to_string()))?;
                return Ok((decode_label(idx)?, best as f64));
            }
        }
    }

    // Label-only graph: decode the class index, fixed confidence
    let first = output_names
        .first()
        .ok_or_else(|| ModelError::Session("no output defined".to_string()))?;
    let output = outputs
        .get(first)
        .ok_or_else(|| ModelError::Session("no output".to_string()))?;
    let tensor = output
        .try_extract_tensor::<i64>()
        .map_err(|e| ModelError::Tensor(e.to_string()))?;
    let idx = *tensor
        .1
        .first()
        .ok_or_else(|| ModelError::Tensor("empty output".to_string()))? as usize;

    Ok((decode_label(idx)?, DEFAULT_CONFIDENCE))
}

fn decode_label(idx: usize) -> Result<String, ModelError> {
    CROP_LABELS
        .get(idx)
        .map(|s| s.to_string())
        .ok_or(ModelError::InvalidIndex(idx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::features::normalize;
    use serde_json::json;

    fn sample_input() -> NormalizedInput {
        normalize(&json!({
            "n": 80, "p": 40, "k": 40, "ph": 6.5,
            "temperature": 25, "humidity": 70, "rainfall": 200
        }))
        .unwrap()
    }

    #[test]
    fn test_fallback_without_model() {
        let model = CropModel::disabled();
        assert!(!model.is_loaded());

        let prediction = model.predict(&sample_input());
        assert_eq!(prediction.label, FALLBACK_CROP);
        assert_eq!(prediction.confidence, FALLBACK_CONFIDENCE);
        assert!(prediction.degraded);
    }

    #[test]
    fn test_missing_artifact_enters_fallback_mode() {
        let model = CropModel::load("/nonexistent/crop_model.onnx");
        assert!(!model.is_loaded());
    }

    #[test]
    fn test_label_decoder() {
        assert_eq!(decode_label(20).unwrap(), "rice");
        assert!(matches!(decode_label(99), Err(ModelError::InvalidIndex(99))));
    }

    #[test]
    fn test_labels_in_encoder_order() {
        // Label-encoder order is sorted; the decoder depends on it
        let mut sorted = CROP_LABELS;
        sorted.sort_unstable();
        assert_eq!(sorted, CROP_LABELS);
    }
}
