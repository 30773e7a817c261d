//! History handlers
//!
//! Filtered, sorted display listings over stored recommendations and
//! pest reports, owner-scoped deletes and per-farmer stats. Stored
//! payloads are numeric; currency/percent/unit strings are produced
//! here, at presentation time only. The transforms stay tolerant of
//! legacy rows that stored display strings directly.

use std::cmp::Ordering;

use axum::{extract::{State, Path, Query}, Json};
use chrono::Utc;
use serde::Serialize;
use serde_json::{json, Value};

use crate::{AppState, AppResult, AppError};
use crate::inference::features::REQUIRED_FIELDS;
use crate::middleware::auth::FarmerContext;
use crate::models::{date_filter_cutoff, HistoryFilter, PestReport, Recommendation};

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationItem {
    pub id: i64,
    pub date: String,
    pub crops: Vec<String>,
    #[serde(rename = "yield")]
    pub yield_display: String,
    pub profit: String,
    pub confidence: String,
    pub parameters: Value,
    pub sustainability: String,
    pub created_at: String,

    // Numeric sort keys, never serialized
    #[serde(skip)]
    confidence_value: f64,
    #[serde(skip)]
    yield_value: f64,
    #[serde(skip)]
    profit_value: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PestReportItem {
    pub id: i64,
    pub date: String,
    pub pest: String,
    pub confidence: String,
    pub treatment: String,
    pub severity: String,
    #[serde(rename = "affectedCrop")]
    pub affected_crop: String,
    pub status: String,
    pub images: Vec<String>,
    pub created_at: String,

    #[serde(skip)]
    confidence_value: f64,
}

/// List recommendations with display formatting, search, and sorting
pub async fn list_recommendations(
    State(state): State<AppState>,
    farmer: FarmerContext,
    Query(filter): Query<HistoryFilter>,
) -> AppResult<Json<Value>> {
    let cutoff = date_filter_cutoff(filter.date_filter.as_deref().unwrap_or("all"), Utc::now());
    let rows = Recommendation::list_since(&state.pool, farmer.farmer_id, cutoff).await?;

    let mut items: Vec<RecommendationItem> = rows.iter().map(recommendation_item).collect();

    if let Some(term) = filter.search.as_deref().filter(|s| !s.is_empty()) {
        let term = term.to_lowercase();
        items.retain(|item| item.crops.iter().any(|c| c.to_lowercase().contains(&term)));
    }

    sort_recommendation_items(
        &mut items,
        filter.sort_by.as_deref().unwrap_or("date"),
        filter.sort_order.as_deref().unwrap_or("desc"),
    );

    Ok(Json(json!({ "success": true, "recommendations": items })))
}

/// List pest reports with display formatting, search, and sorting
pub async fn list_pest_reports(
    State(state): State<AppState>,
    farmer: FarmerContext,
    Query(filter): Query<HistoryFilter>,
) -> AppResult<Json<Value>> {
    let cutoff = date_filter_cutoff(filter.date_filter.as_deref().unwrap_or("all"), Utc::now());
    let rows = PestReport::list_since(&state.pool, farmer.farmer_id, cutoff).await?;

    let mut items: Vec<PestReportItem> = rows.iter().map(pest_report_item).collect();

    if let Some(term) = filter.search.as_deref().filter(|s| !s.is_empty()) {
        let term = term.to_lowercase();
        items.retain(|item| item.pest.to_lowercase().contains(&term));
    }

    sort_pest_items(
        &mut items,
        filter.sort_by.as_deref().unwrap_or("date"),
        filter.sort_order.as_deref().unwrap_or("desc"),
    );

    Ok(Json(json!({ "success": true, "pest_reports": items })))
}

/// Owner-scoped delete; a foreign or unknown id is indistinguishable
pub async fn delete_recommendation(
    State(state): State<AppState>,
    farmer: FarmerContext,
    Path(id): Path<i64>,
) -> AppResult<Json<Value>> {
    let deleted = Recommendation::delete(&state.pool, id, farmer.farmer_id).await?;
    if !deleted {
        return Err(AppError::NotFound("Recommendation not found".to_string()));
    }

    Ok(Json(json!({ "success": true, "message": "Recommendation deleted successfully" })))
}

/// Owner-scoped delete, with best-effort removal of the stored image
pub async fn delete_pest_report(
    State(state): State<AppState>,
    farmer: FarmerContext,
    Path(id): Path<i64>,
) -> AppResult<Json<Value>> {
    let report = PestReport::find_owned(&state.pool, id, farmer.farmer_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Pest report not found".to_string()))?;

    PestReport::delete(&state.pool, id, farmer.farmer_id).await?;

    if let Some(path) = &report.image_path {
        if let Err(e) = state.images.remove(path) {
            tracing::warn!("Failed to delete image file {}: {}", path, e);
        }
    }

    Ok(Json(json!({ "success": true, "message": "Pest report deleted successfully" })))
}

/// Per-farmer aggregate counters
pub async fn stats(
    State(state): State<AppState>,
    farmer: FarmerContext,
) -> AppResult<Json<Value>> {
    let total_recommendations = Recommendation::count(&state.pool, farmer.farmer_id).await?;
    let total_pest_reports = PestReport::count(&state.pool, farmer.farmer_id).await?;

    let payloads = Recommendation::recommended_payloads(&state.pool, farmer.farmer_id).await?;
    let mut sum = 0.0;
    let mut count = 0u32;
    for payload in &payloads {
        if let Some(pct) = confidence_percent(payload.get("confidence")) {
            sum += pct;
            count += 1;
        }
    }
    let avg_rec_confidence = if count > 0 { sum / count as f64 } else { 0.0 };

    let avg_pest_confidence = PestReport::avg_confidence(&state.pool, farmer.farmer_id)
        .await?
        .map(|c| c * 100.0)
        .unwrap_or(0.0);

    Ok(Json(json!({
        "success": true,
        "stats": {
            "total_recommendations": total_recommendations,
            "total_pest_reports": total_pest_reports,
            "avg_recommendation_confidence": format!("{:.0}%", avg_rec_confidence),
            "avg_pest_confidence": format!("{:.0}%", avg_pest_confidence),
        }
    })))
}

// Display transforms

fn recommendation_item(rec: &Recommendation) -> RecommendationItem {
    let recommended = &rec.recommended;

    let (confidence, confidence_value) = confidence_display(recommended.get("confidence"));
    let (yield_display, yield_value) = yield_display(recommended.get("estimated_yield"));
    let (profit, profit_value) = profit_display(recommended.get("estimated_profit"));

    RecommendationItem {
        id: rec.id,
        date: rec.created_at.format("%Y-%m-%d").to_string(),
        crops: extract_crops(recommended),
        yield_display,
        profit,
        confidence,
        parameters: parameters_echo(&rec.input),
        sustainability: sustainability_display(recommended.get("sustainability_score")),
        created_at: rec.created_at.to_rfc3339(),
        confidence_value,
        yield_value,
        profit_value,
    }
}

fn pest_report_item(report: &PestReport) -> PestReportItem {
    let advisory = &report.advisory;
    let confidence_value = report.confidence * 100.0;

    let images = report.image_path.as_deref().map(|path| {
        let clean = path.replace('\\', "/");
        let filename = clean.rsplit('/').next().unwrap_or(&clean);
        vec![format!("/api/uploads/{}", filename)]
    }).unwrap_or_default();

    PestReportItem {
        id: report.id,
        date: report.created_at.format("%Y-%m-%d").to_string(),
        pest: prettify_label(&report.predicted_label),
        confidence: format!("{:.0}%", confidence_value),
        treatment: treatment_from_advisory(advisory),
        severity: advisory_field(advisory, "severity", "Medium"),
        affected_crop: advisory_field(advisory, "affected_crop", "Multiple crops"),
        status: advisory_field(advisory, "status", "Monitoring"),
        images,
        created_at: report.created_at.to_rfc3339(),
        confidence_value,
    }
}

/// Tolerant crop extraction from a stored result payload
fn extract_crops(recommended: &Value) -> Vec<String> {
    if let Some(crop) = recommended.get("recommended_crop").and_then(|v| v.as_str()) {
        return vec![crop.to_string()];
    }

    match recommended.get("recommended_crops") {
        Some(Value::String(s)) => vec![s.clone()],
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

fn confidence_display(value: Option<&Value>) -> (String, f64) {
    match value {
        Some(Value::Number(n)) => {
            let pct = n.as_f64().unwrap_or(0.0) * 100.0;
            (format!("{:.0}%", pct), pct)
        }
        Some(Value::String(s)) => match s.trim_end_matches('%').trim().parse::<f64>() {
            Ok(pct) => (format!("{:.0}%", pct), pct),
            Err(_) => (s.clone(), 0.0),
        },
        _ => ("N/A".to_string(), 0.0),
    }
}

fn yield_display(value: Option<&Value>) -> (String, f64) {
    match value {
        Some(Value::Number(n)) => {
            let tons = n.as_f64().unwrap_or(0.0);
            (format!("{} tons/acre", tons), tons)
        }
        Some(Value::String(s)) => {
            let tons = s
                .split_whitespace()
                .next()
                .and_then(|t| t.parse().ok())
                .unwrap_or(0.0);
            (s.clone(), tons)
        }
        _ => ("N/A".to_string(), 0.0),
    }
}

fn profit_display(value: Option<&Value>) -> (String, f64) {
    match value {
        Some(Value::Number(n)) => {
            let amount = n.as_f64().unwrap_or(0.0);
            (format!("₹{}", amount), amount)
        }
        Some(Value::String(s)) => {
            let amount = s
                .trim_start_matches('₹')
                .replace(',', "")
                .parse()
                .unwrap_or(0.0);
            (s.clone(), amount)
        }
        _ => ("N/A".to_string(), 0.0),
    }
}

fn sustainability_display(value: Option<&Value>) -> String {
    match value {
        Some(Value::Number(n)) => format!("{}%", n),
        Some(Value::String(s)) => s.clone(),
        _ => "N/A".to_string(),
    }
}

/// Echo of the seven agronomic inputs, zero when absent
fn parameters_echo(input: &Value) -> Value {
    let mut params = serde_json::Map::new();
    for key in REQUIRED_FIELDS {
        params.insert(key.to_string(), input.get(key).cloned().unwrap_or(json!(0)));
    }
    Value::Object(params)
}

/// Underscores to spaces, then word-initial capitals
fn prettify_label(label: &str) -> String {
    let spaced = label.replace('_', " ");
    let mut out = String::with_capacity(spaced.len());
    let mut prev_alpha = false;
    for c in spaced.chars() {
        if prev_alpha {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_alpha = c.is_alphabetic();
    }
    out
}

fn treatment_from_advisory(advisory: &Value) -> String {
    const DEFAULT: &str = "No treatment advice available";

    let Some(map) = advisory.as_object() else {
        return DEFAULT.to_string();
    };

    if let Some(organic) = map.get("organic").and_then(|v| v.as_str()) {
        return organic.to_string();
    }

    for (key, value) in map {
        let key = key.to_lowercase();
        if key.contains("treatment") || key.contains("advice") {
            if let Some(s) = value.as_str() {
                return s.to_string();
            }
        }
    }

    DEFAULT.to_string()
}

fn advisory_field(advisory: &Value, field: &str, default: &str) -> String {
    advisory
        .get(field)
        .and_then(|v| v.as_str())
        .unwrap_or(default)
        .to_string()
}

// Sorting - stable, so ties keep the fetched insertion order

fn sort_recommendation_items(items: &mut [RecommendationItem], sort_by: &str, sort_order: &str) {
    let desc = sort_order != "asc";
    match sort_by {
        "confidence" => sort_by_f64(items, desc, |i| i.confidence_value),
        "yield" => sort_by_f64(items, desc, |i| i.yield_value),
        "profit" => sort_by_f64(items, desc, |i| i.profit_value),
        _ => {
            // Rows arrive newest first; only flip for ascending date order
            if !desc {
                items.reverse();
            }
        }
    }
}

fn sort_pest_items(items: &mut [PestReportItem], sort_by: &str, sort_order: &str) {
    let desc = sort_order != "asc";
    match sort_by {
        "confidence" => sort_by_f64(items, desc, |i| i.confidence_value),
        "severity" => sort_by_f64(items, desc, |i| severity_rank(&i.severity) as f64),
        _ => {
            if !desc {
                items.reverse();
            }
        }
    }
}

fn severity_rank(severity: &str) -> u8 {
    match severity {
        "High" => 3,
        "Medium" => 2,
        _ => 1,
    }
}

fn sort_by_f64<T>(items: &mut [T], desc: bool, key: impl Fn(&T) -> f64) {
    items.sort_by(|a, b| {
        let ord = key(a).partial_cmp(&key(b)).unwrap_or(Ordering::Equal);
        if desc { ord.reverse() } else { ord }
    });
}

fn confidence_percent(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64().map(|c| c * 100.0),
        Value::String(s) => s.trim_end_matches('%').trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_recommendation(id: i64, confidence: f64, yield_tons: f64) -> Recommendation {
        Recommendation {
            id,
            farmer_id: 1,
            input: json!({
                "n": 80, "p": 40, "k": 40, "ph": 6.5,
                "temperature": 25, "humidity": 70, "rainfall": 200
            }),
            recommended: json!({
                "recommended_crop": "rice",
                "confidence": confidence,
                "estimated_yield": yield_tons,
                "estimated_profit": 5616.0,
                "sustainability_score": 94
            }),
            created_at: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_recommendation_item_formatting() {
        let item = recommendation_item(&sample_recommendation(7, 0.77, 1.56));

        assert_eq!(item.crops, vec!["rice"]);
        assert_eq!(item.confidence, "77%");
        assert_eq!(item.yield_display, "1.56 tons/acre");
        assert_eq!(item.profit, "₹5616");
        assert_eq!(item.sustainability, "94%");
        assert_eq!(item.date, "2025-06-01");
        assert_eq!(item.parameters.get("ph"), Some(&json!(6.5)));
    }

    #[test]
    fn test_legacy_string_payload_tolerated() {
        let mut rec = sample_recommendation(1, 0.0, 0.0);
        rec.recommended = json!({
            "recommended_crop": "wheat",
            "confidence": "77%",
            "estimated_yield": "1.56 tons/acre",
            "estimated_profit": "₹5,616.5",
            "sustainability_score": "94%"
        });

        let item = recommendation_item(&rec);
        assert_eq!(item.confidence, "77%");
        assert_eq!(item.yield_display, "1.56 tons/acre");
        assert_eq!(item.profit, "₹5,616.5");
        assert_eq!(item.profit_value, 5616.5);
        assert_eq!(item.sustainability, "94%");
    }

    #[test]
    fn test_missing_parameters_default_to_zero() {
        let mut rec = sample_recommendation(1, 0.5, 1.0);
        rec.input = json!({ "n": 10 });

        let item = recommendation_item(&rec);
        assert_eq!(item.parameters.get("n"), Some(&json!(10)));
        assert_eq!(item.parameters.get("rainfall"), Some(&json!(0)));
    }

    #[test]
    fn test_sort_by_confidence_stable() {
        let mut items: Vec<RecommendationItem> = [
            (1, 0.5, 1.0),
            (2, 0.9, 1.0),
            (3, 0.5, 1.0),
        ]
        .iter()
        .map(|&(id, c, y)| recommendation_item(&sample_recommendation(id, c, y)))
        .collect();

        sort_recommendation_items(&mut items, "confidence", "desc");
        let ids: Vec<i64> = items.iter().map(|i| i.id).collect();
        // Equal confidences keep their original relative order
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_sort_by_yield_ascending() {
        let mut items: Vec<RecommendationItem> = [
            (1, 0.5, 2.0),
            (2, 0.5, 1.0),
            (3, 0.5, 3.0),
        ]
        .iter()
        .map(|&(id, c, y)| recommendation_item(&sample_recommendation(id, c, y)))
        .collect();

        sort_recommendation_items(&mut items, "yield", "asc");
        let ids: Vec<i64> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_prettify_label() {
        assert_eq!(
            prettify_label("Tomato___Early_blight"),
            "Tomato   Early Blight"
        );
        assert_eq!(
            prettify_label("Corn_(maize)___healthy"),
            "Corn (Maize)   Healthy"
        );
    }

    #[test]
    fn test_treatment_extraction() {
        assert_eq!(
            treatment_from_advisory(&json!({ "organic": "Neem oil" })),
            "Neem oil"
        );
        assert_eq!(
            treatment_from_advisory(&json!({ "treatment_plan": "Spray weekly" })),
            "Spray weekly"
        );
        assert_eq!(
            treatment_from_advisory(&json!({})),
            "No treatment advice available"
        );
    }

    #[test]
    fn test_severity_rank() {
        assert_eq!(severity_rank("High"), 3);
        assert_eq!(severity_rank("Medium"), 2);
        assert_eq!(severity_rank("Low"), 1);
        assert_eq!(severity_rank("odd"), 1);
    }

    #[test]
    fn test_pest_item_formatting() {
        let report = PestReport {
            id: 3,
            farmer_id: 1,
            image_path: Some("./uploads\\abc123_leaf.jpg".to_string()),
            predicted_label: "Potato___Late_blight".to_string(),
            confidence: 0.91,
            advisory: json!({ "organic": "Copper sulfate" }),
            created_at: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
        };

        let item = pest_report_item(&report);
        assert_eq!(item.pest, "Potato   Late Blight");
        assert_eq!(item.confidence, "91%");
        assert_eq!(item.treatment, "Copper sulfate");
        assert_eq!(item.severity, "Medium");
        assert_eq!(item.affected_crop, "Multiple crops");
        assert_eq!(item.status, "Monitoring");
        assert_eq!(item.images, vec!["/api/uploads/abc123_leaf.jpg"]);
    }

    #[test]
    fn test_confidence_percent() {
        assert_eq!(confidence_percent(Some(&json!(0.77))), Some(77.0));
        assert_eq!(confidence_percent(Some(&json!("77%"))), Some(77.0));
        assert_eq!(confidence_percent(Some(&json!("bogus"))), None);
        assert_eq!(confidence_percent(None), None);
    }
}
