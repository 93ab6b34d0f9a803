use axum::Json;
use keyauth_core::parse_authorization;

use crate::models::{ExtractRequest, ExtractResponse};

// Handler: POST /api/extract
// runs the extractor on a header value supplied in the body
pub async fn extract_key(Json(req): Json<ExtractRequest>) -> Json<ExtractResponse> {
    let api_key = req
        .authorization
        .as_deref()
        .and_then(parse_authorization)
        .map(str::to_string);

    Json(ExtractResponse { api_key })
}
