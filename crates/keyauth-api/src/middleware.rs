use axum::{
    Json,
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};
use keyauth_core::extract_api_key;
use std::sync::Arc;
use subtle::ConstantTimeEq;
use tracing::{debug, warn};

use crate::models::ApiError;
use crate::state::AppState;

/// Result of authentication, stored as a request extension
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub authenticated: bool,
    pub api_key: Option<String>,
}

// API Key Authentication Middleware
pub async fn require_api_key(
    State(state): State<Arc<AppState>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ApiError>)> {
    let provided = extract_api_key(request.headers());

    // If no API key configured, skip authentication
    let Some(expected) = state.api_key.as_deref() else {
        request.extensions_mut().insert(AuthContext {
            authenticated: false,
            api_key: provided,
        });
        return Ok(next.run(request).await);
    };

    let path = request.uri().path().to_string();

    let Some(key) = provided else {
        warn!(%path, "Rejected request: missing or malformed Authorization header");
        return Err(ApiError::unauthorized(
            "Missing or malformed Authorization header",
        ));
    };

    if !keys_match(expected, &key) {
        warn!(%path, "Rejected request: invalid API key");
        return Err(ApiError::unauthorized("Invalid API key"));
    }

    debug!(%path, "API key accepted");
    request.extensions_mut().insert(AuthContext {
        authenticated: true,
        api_key: Some(key),
    });
    Ok(next.run(request).await)
}

fn keys_match(expected: &str, provided: &str) -> bool {
    expected.as_bytes().ct_eq(provided.as_bytes()).into()
}
