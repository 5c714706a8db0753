use async_trait::async_trait;

use crate::domain::{BlogPost, BlogPostPatch, NewBlogPost, NewUser, User};
use crate::error::RepoError;

/// Number of posts returned by a recent-posts query when the caller has no preference.
pub const DEFAULT_RECENT_LIMIT: usize = 10;

/// Generic repository trait for store-assigned integer identities.
#[async_trait]
pub trait BaseRepository<T, N, ID>: Send + Sync {
    /// Find an entity by its unique ID. `None` when absent.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Store a new entity, assigning its identity.
    async fn create(&self, new: N) -> Result<T, RepoError>;
}

/// User repository with domain-specific methods.
#[async_trait]
pub trait UserRepository: BaseRepository<User, NewUser, i32> {
    /// Find a user by exact username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError>;
}

/// Blog post repository: CRUD, chronological queries and today's aggregates.
///
/// Ordered queries return the newest `created_at` first.
#[async_trait]
pub trait BlogPostRepository: BaseRepository<BlogPost, NewBlogPost, i32> {
    /// Merge `patch` onto the stored post. `None` if the id does not exist.
    async fn update(&self, id: i32, patch: BlogPostPatch) -> Result<Option<BlogPost>, RepoError>;

    /// Remove a post. Returns whether a post was removed.
    async fn delete(&self, id: i32) -> Result<bool, RepoError>;

    async fn find_by_user_id(&self, user_id: i32) -> Result<Vec<BlogPost>, RepoError>;

    /// Up to `limit` posts across all owners.
    async fn find_recent(&self, limit: usize) -> Result<Vec<BlogPost>, RepoError>;

    /// Sum of word counts over posts created today.
    async fn todays_word_count(&self) -> Result<u64, RepoError>;

    /// Number of posts created today.
    async fn todays_article_count(&self) -> Result<u64, RepoError>;
}
