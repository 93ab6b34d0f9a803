//! HTTP service guarding routes with `Authorization: ApiKey <key>`

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod state;

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub use config::{ConfigError, ServerConfig};
pub use state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    //routes - protected routes with API key
    let protected_routes = Router::new()
        .route("/api/whoami", get(handlers::whoami))
        .route("/api/extract", post(handlers::extract_key))
        .layer(from_fn_with_state(state.clone(), middleware::require_api_key));

    // Health endpoint without auth
    Router::new()
        .route("/health", get(handlers::health))
        .merge(protected_routes)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
