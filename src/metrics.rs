//! Derived agronomic estimates
//!
//! Deterministic heuristics, no learned parameters. History and stats
//! endpoints re-aggregate these values, so the formulas must stay exactly
//! as they are.

use serde::Serialize;

use crate::crops;
use crate::inference::features::NormalizedInput;

/// Base yield in tons/acre before adjustments
const BASE_YIELD: f64 = 2.5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedMetrics {
    /// tons/acre
    pub estimated_yield: f64,
    /// total over the farmer's land
    pub estimated_profit: f64,
    /// percent, capped at 100
    pub sustainability_score: u32,
}

pub fn calculate(input: &NormalizedInput, crop: &str) -> DerivedMetrics {
    let nutrient_factor = ((input.n / 100.0 + input.p / 50.0 + input.k / 150.0) / 3.0).min(1.0);
    let rainfall_factor = 0.8 + input.rainfall.min(300.0) / 1000.0;
    let estimated_yield = round2(BASE_YIELD * nutrient_factor * rainfall_factor);

    let price_per_ton = crops::price_per_ton(crop);
    let estimated_profit = round2(estimated_yield * price_per_ton * input.land_size);

    let sustainability_score = (30.0
        + input.ph.min(7.5) / 7.5 * 20.0
        + input.humidity.min(80.0) / 80.0 * 20.0
        + input.rainfall.min(200.0) / 200.0 * 30.0)
        .floor()
        .min(100.0) as u32;

    DerivedMetrics {
        estimated_yield,
        estimated_profit,
        sustainability_score,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::features::normalize;
    use serde_json::json;

    fn sample_input() -> NormalizedInput {
        normalize(&json!({
            "n": 80, "p": 40, "k": 40, "ph": 6.5,
            "temperature": 25, "humidity": 70, "rainfall": 200,
            "land_size": 2
        }))
        .unwrap()
    }

    #[test]
    fn test_sample_scenario() {
        let metrics = calculate(&sample_input(), "rice");

        // nutrient_factor = (0.8 + 0.8 + 0.2667) / 3 = 0.6222
        // rainfall_factor = 0.8 + 200/1000 = 1.0
        assert_eq!(metrics.estimated_yield, 1.56);
        // 1.56 * 1800 (rice) * 2 acres
        assert_eq!(metrics.estimated_profit, 5616.0);
        // 30 + 6.5/7.5*20 + 70/80*20 + 200/200*30 = 94.83 -> 94
        assert_eq!(metrics.sustainability_score, 94);
    }

    #[test]
    fn test_deterministic() {
        let input = sample_input();
        assert_eq!(calculate(&input, "maize"), calculate(&input, "maize"));
    }

    #[test]
    fn test_nutrient_factor_capped() {
        let rich = normalize(&json!({
            "n": 500, "p": 500, "k": 500, "ph": 7,
            "temperature": 25, "humidity": 70, "rainfall": 200
        }))
        .unwrap();

        // Capped nutrient factor and 200mm rainfall give exactly base * 1.0
        let metrics = calculate(&rich, "rice");
        assert_eq!(metrics.estimated_yield, 2.5);
    }

    #[test]
    fn test_rainfall_capped_at_300() {
        let wet = normalize(&json!({
            "n": 500, "p": 500, "k": 500, "ph": 7,
            "temperature": 25, "humidity": 70, "rainfall": 900
        }))
        .unwrap();

        // rainfall_factor caps at 0.8 + 300/1000 = 1.1
        let metrics = calculate(&wet, "rice");
        assert_eq!(metrics.estimated_yield, 2.75);
    }

    #[test]
    fn test_sustainability_capped_at_100() {
        let extreme = normalize(&json!({
            "n": 100, "p": 50, "k": 150, "ph": 14,
            "temperature": 25, "humidity": 300, "rainfall": 900
        }))
        .unwrap();

        let metrics = calculate(&extreme, "rice");
        assert_eq!(metrics.sustainability_score, 100);
    }

    #[test]
    fn test_unknown_crop_uses_default_price() {
        let input = sample_input();
        let metrics = calculate(&input, "dragonfruit");
        assert_eq!(metrics.estimated_profit, round2(1.56 * 1500.0 * 2.0));
    }
}
