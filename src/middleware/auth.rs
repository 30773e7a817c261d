//! Authentication middleware
//!
//! Verifies the bearer JWT and supplies the farmer identity to handlers.
//! Everything downstream trusts this identity unconditionally.

use axum::{
    extract::{State, Request},
    middleware::Next,
    response::Response,
    http::header::AUTHORIZATION,
};
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use jsonwebtoken::{decode, DecodingKey, Validation};

use crate::{AppState, AppError};
use crate::handlers::auth::Claims;

/// Farmer context extracted from JWT
#[derive(Debug, Clone, Copy)]
pub struct FarmerContext {
    pub farmer_id: i64,
}

/// Middleware: require farmer JWT authentication
pub async fn require_farmer_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_bearer_token(&req)?;

    let token_data = decode::<Claims>(
        &token,
        &DecodingKey::from_secret(state.config.jwt_secret.as_bytes()),
        &Validation::default()
    )?;

    let farmer_id = token_data.claims.sub.parse::<i64>()
        .map_err(|_| AppError::TokenInvalid)?;

    req.extensions_mut().insert(FarmerContext { farmer_id });

    Ok(next.run(req).await)
}

/// Extract bearer token from Authorization header
fn extract_bearer_token(req: &Request) -> Result<String, AppError> {
    let auth_header = req.headers()
        .get(AUTHORIZATION)
        .ok_or(AppError::Unauthorized)?
        .to_str()
        .map_err(|_| AppError::Unauthorized)?;

    if !auth_header.starts_with("Bearer ") {
        return Err(AppError::Unauthorized);
    }

    Ok(auth_header[7..].to_string())
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for FarmerContext
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions
            .get::<FarmerContext>()
            .copied()
            .ok_or(AppError::Unauthorized)
    }
}
