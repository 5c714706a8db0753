//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod generator;
mod rate_limit;
mod repository;

pub use generator::{ContentGenerator, GenerationError};
pub use rate_limit::{RateLimitError, RateLimitResult, RateLimiter};
pub use repository::{BaseRepository, BlogPostRepository, DEFAULT_RECENT_LIMIT, UserRepository};
