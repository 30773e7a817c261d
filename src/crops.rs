//! Crop catalog - per-crop metadata and market price constants

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

/// Price assumed for crops without a table entry (per ton)
pub const DEFAULT_PRICE_PER_TON: f64 = 1500.0;

#[derive(Debug, Clone, Serialize)]
pub struct CropDetails {
    pub description: &'static str,
    pub season: &'static str,
    pub water_requirements: &'static str,
    pub soil_type: &'static str,
    pub image: &'static str,
    pub growth_period: &'static str,
}

static GENERIC_DETAILS: CropDetails = CropDetails {
    description: "A suitable crop for your conditions.",
    season: "Varies",
    water_requirements: "Moderate",
    soil_type: "Various",
    image: "🌱",
    growth_period: "90-120 days",
};

static CROP_PRICES: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("rice", 1800.0),
        ("wheat", 1600.0),
        ("maize", 1400.0),
        ("cotton", 5000.0),
        ("sugarcane", 2800.0),
    ])
});

static CROP_DETAILS: Lazy<HashMap<&'static str, CropDetails>> = Lazy::new(|| {
    HashMap::from([
        (
            "rice",
            CropDetails {
                description: "Rice is a staple food for over half the world's population.",
                season: "Kharif",
                water_requirements: "High",
                soil_type: "Clayey loam",
                image: "🌾",
                growth_period: "90-120 days",
            },
        ),
        (
            "wheat",
            CropDetails {
                description: "Wheat is one of the most important cereal crops globally.",
                season: "Rabi",
                water_requirements: "Moderate",
                soil_type: "Well-drained loamy soil",
                image: "🌾",
                growth_period: "110-130 days",
            },
        ),
        (
            "maize",
            CropDetails {
                description: "Maize is a versatile crop used for food, feed, and industrial products.",
                season: "Kharif",
                water_requirements: "Moderate",
                soil_type: "Well-drained soil",
                image: "🌽",
                growth_period: "90-100 days",
            },
        ),
    ])
});

pub fn price_per_ton(crop: &str) -> f64 {
    CROP_PRICES
        .get(crop.to_lowercase().as_str())
        .copied()
        .unwrap_or(DEFAULT_PRICE_PER_TON)
}

pub fn details(crop: &str) -> CropDetails {
    CROP_DETAILS
        .get(crop.to_lowercase().as_str())
        .unwrap_or(&GENERIC_DETAILS)
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_lookup() {
        assert_eq!(price_per_ton("rice"), 1800.0);
        assert_eq!(price_per_ton("Wheat"), 1600.0);
        assert_eq!(price_per_ton("dragonfruit"), DEFAULT_PRICE_PER_TON);
    }

    #[test]
    fn test_details_fallback() {
        assert_eq!(details("rice").season, "Kharif");
        assert_eq!(details("dragonfruit").description, GENERIC_DETAILS.description);
    }
}
