use keyauth_api::{AppState, ServerConfig, create_router};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    dotenvy::dotenv().ok();

    //logging setup
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env()?;

    // Log if API key is enabled
    if config.auth_enabled() {
        info!("API key authentication ENABLED");
    } else {
        info!("API key authentication DISABLED (set KEYAUTH_API_KEY to enable)");
    }

    let state = Arc::new(AppState::from_config(&config));
    let app = create_router(state);

    // Server start
    info!("Starting server on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
