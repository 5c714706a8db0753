//! Rate limiting port.

use async_trait::async_trait;
use std::time::Duration;

/// Rate limiter trait - guards the endpoints that call the paid content provider.
#[async_trait]
pub trait RateLimiter: Send + Sync {
    /// Record a request for `key` and report whether it may proceed.
    async fn check(&self, key: &str) -> Result<RateLimitResult, RateLimitError>;
}

/// Result of a rate limit check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitResult {
    pub allowed: bool,
    pub remaining: u32,
    pub reset_after: Duration,
}

impl RateLimitResult {
    pub fn allowed(remaining: u32, reset_after: Duration) -> Self {
        Self {
            allowed: true,
            remaining,
            reset_after,
        }
    }

    pub fn limited(retry_after: Duration) -> Self {
        Self {
            allowed: false,
            remaining: 0,
            reset_after: retry_after,
        }
    }
}

/// Rate limit errors.
#[derive(Debug, thiserror::Error)]
pub enum RateLimitError {
    #[error("Backend error: {0}")]
    Backend(String),
}
