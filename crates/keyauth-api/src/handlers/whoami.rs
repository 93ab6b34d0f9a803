use axum::{Extension, Json};
use tracing::info;

use crate::middleware::AuthContext;
use crate::models::WhoamiResponse;

pub async fn whoami(Extension(auth): Extension<AuthContext>) -> Json<WhoamiResponse> {
    info!(authenticated = auth.authenticated, "Whoami request");

    Json(WhoamiResponse {
        authenticated: auth.authenticated,
        key_hint: auth.api_key.as_deref().map(key_hint),
    })
}

// mask all but the last 4 chars, short keys are masked fully
pub fn key_hint(key: &str) -> String {
    let len = key.chars().count();
    if len <= 4 {
        return "****".to_string();
    }
    let tail: String = key.chars().skip(len - 4).collect();
    format!("****{}", tail)
}
