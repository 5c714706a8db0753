//! Application configuration loaded from environment variables.

use std::env;

use scribe_infra::OpenAiConfig;
#[cfg(feature = "rate-limit")]
use scribe_infra::RateLimitConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub openai: OpenAiConfig,
    #[cfg(feature = "rate-limit")]
    pub rate_limit: RateLimitConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            openai: OpenAiConfig::from_env(),
            #[cfg(feature = "rate-limit")]
            rate_limit: RateLimitConfig::from_env(),
        }
    }
}
