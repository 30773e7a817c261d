//! Authentication handlers

use axum::{extract::State, Json};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::SaltString;
use jsonwebtoken::{encode, Header, EncodingKey};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use chrono::{Utc, Duration};
use validator::Validate;

use crate::{AppState, AppError, AppResult};
use crate::middleware::auth::FarmerContext;
use crate::models::{CreateFarmer, Farmer, FarmerInfo};

/// E.164 phone format
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[1-9]\d{1,14}$").unwrap());

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,      // Farmer ID
    pub exp: usize,       // Expiration timestamp
    pub iat: usize,       // Issued at
}

#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Missing required field: name"))]
    pub name: String,

    #[serde(default)]
    #[validate(
        length(min = 1, message = "Missing required field: phone"),
        regex(path = *PHONE_RE, message = "Invalid phone number format")
    )]
    pub phone: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Missing required field: password"))]
    pub password: String,

    pub village: Option<String>,
    pub district: Option<String>,
    pub state: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub land_size: Option<f64>,
    pub soil_type: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub phone: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub message: &'static str,
    pub access_token: String,
    pub farmer: FarmerInfo,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub farmer: FarmerInfo,
}

/// Signup endpoint - create a farmer account and issue a token
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> AppResult<Json<SignupResponse>> {
    req.validate()
        .map_err(|e| AppError::Validation(validation_message(&e)))?;

    if Farmer::find_by_phone(&state.pool, &req.phone).await?.is_some() {
        return Err(AppError::AlreadyExists("Phone number already registered".to_string()));
    }

    // Hash password
    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(req.password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(e.to_string()))?
        .to_string();

    let farmer = Farmer::create(
        &state.pool,
        CreateFarmer {
            name: req.name,
            phone: req.phone,
            village: req.village,
            district: req.district,
            state: req.state,
            lat: req.lat,
            lng: req.lng,
            land_size: req.land_size,
            soil_type: req.soil_type,
        },
        password_hash,
    ).await?;

    let access_token = generate_token(farmer.id, &state.config.jwt_secret, state.config.jwt_expiration_hours)?;

    tracing::info!("New farmer registered: {} ({})", farmer.name, farmer.id);

    Ok(Json(SignupResponse {
        message: "Farmer created successfully",
        access_token,
        farmer: farmer.to_info(),
    }))
}

/// Login endpoint
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let farmer = Farmer::find_by_phone(&state.pool, &req.phone)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    // Verify password
    let parsed_hash = PasswordHash::new(&farmer.password_hash)
        .map_err(|_| AppError::Internal("Invalid password hash".to_string()))?;

    Argon2::default()
        .verify_password(req.password.as_bytes(), &parsed_hash)
        .map_err(|_| AppError::InvalidCredentials)?;

    let access_token = generate_token(farmer.id, &state.config.jwt_secret, state.config.jwt_expiration_hours)?;

    Ok(Json(LoginResponse {
        access_token,
        farmer: farmer.to_info(),
    }))
}

/// Profile of the calling farmer
pub async fn me(
    State(state): State<AppState>,
    farmer: FarmerContext,
) -> AppResult<Json<Farmer>> {
    let farmer = Farmer::find_by_id(&state.pool, farmer.farmer_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Farmer not found".to_string()))?;

    Ok(Json(farmer))
}

/// Generate JWT token
fn generate_token(farmer_id: i64, secret: &str, expiration_hours: u64) -> AppResult<String> {
    let now = Utc::now();
    let exp = now + Duration::hours(expiration_hours as i64);

    let claims = Claims {
        sub: farmer_id.to_string(),
        exp: exp.timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes())
    ).map_err(|e| AppError::Internal(e.to_string()))
}

/// First message from a set of field validation errors
fn validation_message(errors: &validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|field| field.iter())
        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .next()
        .unwrap_or_else(|| "Invalid request".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_validation() {
        assert!(PHONE_RE.is_match("+919876543210"));
        assert!(PHONE_RE.is_match("919876543210"));
        assert!(!PHONE_RE.is_match("0123"));
        assert!(!PHONE_RE.is_match("not-a-phone"));
    }

    #[test]
    fn test_missing_fields_are_named() {
        let req = SignupRequest {
            name: String::new(),
            phone: "+919876543210".to_string(),
            password: "secret".to_string(),
            village: None,
            district: None,
            state: None,
            lat: None,
            lng: None,
            land_size: None,
            soil_type: None,
        };

        let errors = req.validate().unwrap_err();
        assert_eq!(validation_message(&errors), "Missing required field: name");
    }
}
