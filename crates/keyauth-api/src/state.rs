use crate::config::ServerConfig;

pub struct AppState {
    pub api_key: Option<String>,
}

impl AppState {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.is_empty()),
        }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(config.api_key.clone())
    }
}
