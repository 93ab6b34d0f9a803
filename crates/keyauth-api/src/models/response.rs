use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};

/// JSON error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: u16,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> (StatusCode, Json<Self>) {
        (status, Json(Self {
            error: message.into(),
            code: status.as_u16(),
        }))
    }

    pub fn unauthorized(message: impl Into<String>) -> (StatusCode, Json<Self>) {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WhoamiResponse {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_hint: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExtractResponse {
    pub api_key: Option<String>,
}
