use crate::consts;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

/// Immutable process configuration, read once at startup and handed to the
/// app factory. No ambient environment lookups happen after this.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub gemini_api_url: String,
    pub gemini_model: String,
    pub port: u16,
    pub environment: Environment,
}

pub fn load_config() -> Config {
    let gemini_api_key = std::env::var("GEMINI_API_KEY")
        .ok()
        .filter(|key| !key.is_empty());
    let gemini_api_url = std::env::var("GEMINI_API_URL")
        .unwrap_or_else(|_| consts::GEMINI_API_BASE.to_string());
    let gemini_model = std::env::var("GEMINI_MODEL")
        .unwrap_or_else(|_| consts::DEFAULT_GEMINI_MODEL.to_string());
    let port = std::env::var("PORT")
        .ok()
        .and_then(|port| port.parse().ok())
        .unwrap_or(consts::DEFAULT_PORT);
    let environment = match std::env::var("APP_ENV").as_deref() {
        Ok("development") => Environment::Development,
        _ => Environment::Production,
    };

    Config {
        gemini_api_key,
        gemini_api_url,
        gemini_model,
        port,
        environment,
    }
}
