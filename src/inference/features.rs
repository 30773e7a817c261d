//! Feature normalizer
//!
//! Validates raw agronomic inputs and orders them into the fixed feature
//! vector the crop pipeline was fit on. The vector order differs from the
//! request's natural key order and must not change: the trained scaler
//! and classifier index features positionally.

use serde_json::{Map, Value};

use crate::error::AppError;

pub const FEATURE_COUNT: usize = 7;

/// Required request keys, checked in this order
pub const REQUIRED_FIELDS: [&str; FEATURE_COUNT] =
    ["n", "p", "k", "ph", "temperature", "humidity", "rainfall"];

pub const DEFAULT_LAND_SIZE: f64 = 1.0;
pub const DEFAULT_SEASON: &str = "kharif";

/// Validated inputs, with the model-order feature vector
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedInput {
    /// `[n, p, k, temperature, humidity, ph, rainfall]`
    pub vector: [f64; FEATURE_COUNT],
    pub n: f64,
    pub p: f64,
    pub k: f64,
    pub ph: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub rainfall: f64,
    pub land_size: f64,
    pub season: String,
}

/// Validate a raw request body and produce the model-order feature vector.
///
/// Fails before any inference or persistence side effect; the first
/// missing or non-numeric required key is named in the error.
pub fn normalize(input: &Value) -> Result<NormalizedInput, AppError> {
    let obj = input
        .as_object()
        .ok_or_else(|| AppError::Validation("Request body must be a JSON object".to_string()))?;

    for field in REQUIRED_FIELDS {
        if !obj.contains_key(field) {
            return Err(AppError::Validation(format!("Missing required field: {}", field)));
        }
    }

    let n = numeric_field(obj, "n")?;
    let p = numeric_field(obj, "p")?;
    let k = numeric_field(obj, "k")?;
    let ph = numeric_field(obj, "ph")?;
    let temperature = numeric_field(obj, "temperature")?;
    let humidity = numeric_field(obj, "humidity")?;
    let rainfall = numeric_field(obj, "rainfall")?;

    // Optional keys pass through unvalidated
    let land_size = obj
        .get("land_size")
        .and_then(value_to_f64)
        .unwrap_or(DEFAULT_LAND_SIZE);
    let season = obj
        .get("season")
        .and_then(|v| v.as_str())
        .unwrap_or(DEFAULT_SEASON)
        .to_string();

    Ok(NormalizedInput {
        vector: [n, p, k, temperature, humidity, ph, rainfall],
        n,
        p,
        k,
        ph,
        temperature,
        humidity,
        rainfall,
        land_size,
        season,
    })
}

fn numeric_field(obj: &Map<String, Value>, field: &str) -> Result<f64, AppError> {
    value_to_f64(&obj[field])
        .ok_or_else(|| AppError::Validation(format!("Field '{}' must be numeric", field)))
}

/// Accepts JSON numbers and numeric strings, like the clients send them
fn value_to_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_vector_order() {
        let input = json!({
            "n": 80, "p": 40, "k": 40, "ph": 6.5,
            "temperature": 25, "humidity": 70, "rainfall": 200,
            "land_size": 2
        });

        let normalized = normalize(&input).unwrap();
        assert_eq!(normalized.vector, [80.0, 40.0, 40.0, 25.0, 70.0, 6.5, 200.0]);
        assert_eq!(normalized.land_size, 2.0);
        assert_eq!(normalized.season, "kharif");
    }

    #[test]
    fn test_missing_field_is_named() {
        let input = json!({
            "n": 80, "p": 40, "k": 40,
            "temperature": 25, "humidity": 70, "rainfall": 200
        });

        match normalize(&input) {
            Err(AppError::Validation(msg)) => assert_eq!(msg, "Missing required field: ph"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_numeric_strings_are_coerced() {
        let input = json!({
            "n": "80", "p": "40", "k": "40", "ph": "6.5",
            "temperature": "25", "humidity": "70", "rainfall": "200"
        });

        let normalized = normalize(&input).unwrap();
        assert_eq!(normalized.ph, 6.5);
        assert_eq!(normalized.rainfall, 200.0);
    }

    #[test]
    fn test_non_numeric_field_is_rejected() {
        let input = json!({
            "n": 80, "p": 40, "k": 40, "ph": "acidic",
            "temperature": 25, "humidity": 70, "rainfall": 200
        });

        match normalize(&input) {
            Err(AppError::Validation(msg)) => assert_eq!(msg, "Field 'ph' must be numeric"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_optional_defaults() {
        let input = json!({
            "n": 1, "p": 1, "k": 1, "ph": 7,
            "temperature": 20, "humidity": 50, "rainfall": 100
        });

        let normalized = normalize(&input).unwrap();
        assert_eq!(normalized.land_size, DEFAULT_LAND_SIZE);
        assert_eq!(normalized.season, DEFAULT_SEASON);
    }

    #[test]
    fn test_non_object_body() {
        assert!(normalize(&json!([1, 2, 3])).is_err());
    }
}
