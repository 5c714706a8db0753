//! # Scribe Infrastructure
//!
//! Concrete implementations of the ports defined in `scribe-core`:
//! the in-memory record store, the OpenAI content generator and rate limiting.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - Store and generator only
//! - `rate-limit` - Rate limiting via governor

pub mod generation;
pub mod storage;

#[cfg(feature = "rate-limit")]
pub mod rate_limit;

pub use generation::{OpenAiConfig, OpenAiContentGenerator};
pub use storage::{InMemoryBlogPostRepository, InMemoryUserRepository};

#[cfg(feature = "rate-limit")]
pub use rate_limit::{InMemoryRateLimiter, RateLimitConfig};
