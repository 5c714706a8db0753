//! Application state - shared across all handlers.

use std::sync::Arc;

use scribe_core::ports::{BlogPostRepository, ContentGenerator, GenerationError, RateLimiter};
use scribe_infra::{InMemoryBlogPostRepository, OpenAiContentGenerator};

use crate::config::AppConfig;

/// Shared application state.
///
/// The store is built once at startup and handed to every worker, so all
/// workers see the same posts.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn BlogPostRepository>,
    pub generator: Arc<dyn ContentGenerator>,
    pub rate_limiter: Option<Arc<dyn RateLimiter>>,
}

impl AppState {
    /// Build the application state with the production implementations.
    pub fn new(config: &AppConfig) -> Result<Self, GenerationError> {
        if config.openai.api_key.is_none() {
            tracing::warn!("OPENAI_API_KEY not set. Generation endpoints will fail until it is configured.");
        }
        let generator = Arc::new(OpenAiContentGenerator::new(config.openai.clone())?);

        #[cfg(feature = "rate-limit")]
        let rate_limiter: Option<Arc<dyn RateLimiter>> = Some(Arc::new(
            scribe_infra::InMemoryRateLimiter::new(config.rate_limit.clone()),
        ));

        #[cfg(not(feature = "rate-limit"))]
        let rate_limiter: Option<Arc<dyn RateLimiter>> = {
            tracing::info!("Running without rate-limit feature - generation endpoints are unthrottled");
            None
        };

        tracing::info!(model = %config.openai.model, "Application state initialized");

        Ok(Self {
            posts: Arc::new(InMemoryBlogPostRepository::new()),
            generator,
            rate_limiter,
        })
    }
}
