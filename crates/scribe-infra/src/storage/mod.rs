//! In-memory record store.
//!
//! State lives only in process memory and is lost on restart. Each repository
//! keeps its records in an ordered map keyed by id plus a monotonic counter;
//! freed ids are never handed out again.

mod blog_posts;
mod users;

pub use blog_posts::InMemoryBlogPostRepository;
pub use users::InMemoryUserRepository;
