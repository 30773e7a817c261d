//! Model inference adapters
//!
//! Both adapters wrap a pre-trained ONNX artifact loaded once at process
//! start. A missing or broken artifact puts the adapter in fallback mode
//! instead of failing startup; fallback results are flagged `degraded`
//! so callers can tell them apart from real predictions.

pub mod features;
pub mod crop;
pub mod pest;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model file not found: {0}")]
    Missing(String),

    #[error("session error: {0}")]
    Session(String),

    #[error("tensor error: {0}")]
    Tensor(String),

    #[error("image decode error: {0}")]
    Decode(String),

    #[error("class index {0} outside known label set")]
    InvalidIndex(usize),
}

impl From<ort::Error> for ModelError {
    fn from(err: ort::Error) -> Self {
        ModelError::Session(err.to_string())
    }
}

/// Index and value of the largest element
pub(crate) fn argmax(values: &[f32]) -> Option<(usize, f32)> {
    let mut best: Option<(usize, f32)> = None;
    for (i, &v) in values.iter().enumerate() {
        match best {
            Some((_, b)) if v <= b => {}
            _ => best = Some((i, v)),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argmax() {
        assert_eq!(argmax(&[]), None);
        assert_eq!(argmax(&[0.3]), Some((0, 0.3)));
        assert_eq!(argmax(&[0.1, 0.7, 0.2]), Some((1, 0.7)));
        // First occurrence wins on ties
        assert_eq!(argmax(&[0.5, 0.5]), Some((0, 0.5)));
    }
}
