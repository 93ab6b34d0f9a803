//! Server configuration loaded from the environment

use std::net::SocketAddr;
use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

// env var names
pub const API_KEY_VAR: &str = "KEYAUTH_API_KEY";
pub const BIND_ADDR_VAR: &str = "KEYAUTH_BIND_ADDR";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid bind address '{value}': {source}")]
    InvalidBindAddr {
        value: String,
        source: std::net::AddrParseError,
    },
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    // expected API key, None disables authentication
    pub api_key: Option<String>,

    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Read config from `KEYAUTH_API_KEY` and `KEYAUTH_BIND_ADDR`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            std::env::var(API_KEY_VAR).ok(),
            std::env::var(BIND_ADDR_VAR).ok(),
        )
    }

    pub fn from_values(
        api_key: Option<String>,
        bind_addr: Option<String>,
    ) -> Result<Self, ConfigError> {
        let bind_addr = bind_addr.unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidBindAddr {
                value: bind_addr.clone(),
                source,
            })?;

        Ok(Self {
            // empty key counts as not configured
            api_key: api_key.filter(|k| !k.is_empty()),
            bind_addr,
        })
    }

    pub fn auth_enabled(&self) -> bool {
        self.api_key.is_some()
    }
}
