//! In-memory blog post repository.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use scribe_core::calendar::{Clock, SystemClock};
use scribe_core::domain::{BlogPost, BlogPostPatch, NewBlogPost};
use scribe_core::error::RepoError;
use scribe_core::ports::{BaseRepository, BlogPostRepository};

struct PostTable {
    rows: BTreeMap<i32, BlogPost>,
    next_id: i32,
}

/// In-memory blog post repository.
///
/// Creation time is taken from the injected [`Clock`], which also decides
/// which calendar day counts as "today" for the aggregates.
pub struct InMemoryBlogPostRepository {
    table: RwLock<PostTable>,
    clock: Arc<dyn Clock>,
}

impl InMemoryBlogPostRepository {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            table: RwLock::new(PostTable {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
            clock,
        }
    }

    /// Newest first; equal timestamps fall back to creation order.
    fn newest_first<'a>(posts: impl Iterator<Item = &'a BlogPost>) -> Vec<BlogPost> {
        let mut posts: Vec<BlogPost> = posts.cloned().collect();
        posts.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        posts
    }
}

impl Default for InMemoryBlogPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<BlogPost, NewBlogPost, i32> for InMemoryBlogPostRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<BlogPost>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn create(&self, new: NewBlogPost) -> Result<BlogPost, RepoError> {
        let mut table = self.table.write().await;

        let id = table.next_id;
        table.next_id += 1;

        let post = new.into_post(id, self.clock.now());
        table.rows.insert(id, post.clone());

        tracing::debug!(post_id = id, word_count = post.word_count, "Created blog post");
        Ok(post)
    }
}

#[async_trait]
impl BlogPostRepository for InMemoryBlogPostRepository {
    async fn update(&self, id: i32, patch: BlogPostPatch) -> Result<Option<BlogPost>, RepoError> {
        let mut table = self.table.write().await;

        let Some(existing) = table.rows.get(&id).cloned() else {
            return Ok(None);
        };

        let merged = patch.apply(existing);
        table.rows.insert(id, merged.clone());

        tracing::debug!(post_id = id, "Updated blog post");
        Ok(Some(merged))
    }

    async fn delete(&self, id: i32) -> Result<bool, RepoError> {
        let mut table = self.table.write().await;
        let removed = table.rows.remove(&id).is_some();
        if removed {
            tracing::debug!(post_id = id, "Deleted blog post");
        }
        Ok(removed)
    }

    async fn find_by_user_id(&self, user_id: i32) -> Result<Vec<BlogPost>, RepoError> {
        let table = self.table.read().await;
        Ok(Self::newest_first(
            table.rows.values().filter(|p| p.user_id == Some(user_id)),
        ))
    }

    async fn find_recent(&self, limit: usize) -> Result<Vec<BlogPost>, RepoError> {
        if limit == 0 {
            return Ok(Vec::new());
        }
        let table = self.table.read().await;
        let mut posts = Self::newest_first(table.rows.values());
        posts.truncate(limit);
        Ok(posts)
    }

    async fn todays_word_count(&self) -> Result<u64, RepoError> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .filter(|p| self.clock.is_today(p.created_at))
            .map(|p| u64::from(p.word_count))
            .sum())
    }

    async fn todays_article_count(&self) -> Result<u64, RepoError> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .filter(|p| self.clock.is_today(p.created_at))
            .count() as u64)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeDelta, Utc};
    use scribe_core::calendar::ManualClock;
    use scribe_core::domain::{ContentLength, TargetAudience, WritingTone};
    use scribe_core::ports::DEFAULT_RECENT_LIMIT;

    use super::*;

    fn new_post(title: &str, word_count: u32) -> NewBlogPost {
        NewBlogPost {
            user_id: None,
            title: title.to_string(),
            content: format!("<p>{title}</p>"),
            topic: "Rust".to_string(),
            keywords: None,
            content_length: ContentLength::Short,
            writing_tone: WritingTone::Professional,
            target_audience: TargetAudience::General,
            word_count,
            seo_score: None,
            featured_image_description: None,
        }
    }

    fn noon() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-05-10T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn repo_at(start: DateTime<Utc>) -> (InMemoryBlogPostRepository, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::utc(start));
        (InMemoryBlogPostRepository::with_clock(clock.clone()), clock)
    }

    fn titles(posts: &[BlogPost]) -> Vec<&str> {
        posts.iter().map(|p| p.title.as_str()).collect()
    }

    #[tokio::test]
    async fn test_ids_increase_and_are_never_reused() {
        let repo = InMemoryBlogPostRepository::new();

        let a = repo.create(new_post("A", 1)).await.unwrap();
        let b = repo.create(new_post("B", 1)).await.unwrap();
        assert!(repo.delete(b.id).await.unwrap());
        let c = repo.create(new_post("C", 1)).await.unwrap();

        assert_eq!((a.id, b.id, c.id), (1, 2, 3));
        assert_eq!(repo.find_by_id(b.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_create_then_read_round_trip() {
        let (repo, _clock) = repo_at(noon());
        let mut new = new_post("T", 42);
        new.topic = "X".to_string();
        new.writing_tone = WritingTone::Conversational;

        let created = repo.create(new).await.unwrap();
        let read = repo.find_by_id(created.id).await.unwrap().unwrap();

        assert_eq!(read, created);
        assert_eq!(read.created_at, noon());
        assert_eq!(read.title, "T");
        assert_eq!(read.topic, "X");
        assert_eq!(read.content_length, ContentLength::Short);
        assert_eq!(read.writing_tone, WritingTone::Conversational);
        assert_eq!(read.target_audience, TargetAudience::General);
        assert_eq!(read.word_count, 42);
    }

    #[tokio::test]
    async fn test_update_changes_only_patched_fields() {
        let (repo, clock) = repo_at(noon());
        let original = repo.create(new_post("A", 10)).await.unwrap();
        clock.advance(TimeDelta::minutes(5));

        let patch = BlogPostPatch {
            word_count: Some(999),
            ..Default::default()
        };
        let updated = repo.update(original.id, patch).await.unwrap().unwrap();

        assert_eq!(updated.word_count, 999);
        assert_eq!(
            BlogPost {
                word_count: original.word_count,
                ..updated.clone()
            },
            original
        );
        assert_eq!(repo.find_by_id(original.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_update_missing_id_has_no_side_effects() {
        let repo = InMemoryBlogPostRepository::new();
        let existing = repo.create(new_post("A", 10)).await.unwrap();

        let patch = BlogPostPatch {
            title: Some("ghost".to_string()),
            ..Default::default()
        };
        assert_eq!(repo.update(42, patch).await.unwrap(), None);

        assert_eq!(repo.find_by_id(42).await.unwrap(), None);
        assert_eq!(repo.find_recent(10).await.unwrap(), vec![existing]);
        // The id counter was not consumed either.
        assert_eq!(repo.create(new_post("B", 1)).await.unwrap().id, 2);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let repo = InMemoryBlogPostRepository::new();
        let post = repo.create(new_post("A", 10)).await.unwrap();

        assert!(repo.delete(post.id).await.unwrap());
        assert!(!repo.delete(post.id).await.unwrap());
        assert!(!repo.delete(1000).await.unwrap());
    }

    #[tokio::test]
    async fn test_recent_returns_newest_first() {
        let (repo, clock) = repo_at(noon());
        for title in ["A", "B", "C"] {
            repo.create(new_post(title, 1)).await.unwrap();
            clock.advance(TimeDelta::seconds(1));
        }

        assert_eq!(titles(&repo.find_recent(2).await.unwrap()), ["C", "B"]);
        assert_eq!(titles(&repo.find_recent(10).await.unwrap()), ["C", "B", "A"]);
        assert!(repo.find_recent(0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_recent_breaks_timestamp_ties_by_creation_order() {
        let (repo, _clock) = repo_at(noon());
        for title in ["A", "B", "C"] {
            repo.create(new_post(title, 1)).await.unwrap();
        }

        assert_eq!(titles(&repo.find_recent(2).await.unwrap()), ["C", "B"]);
    }

    #[tokio::test]
    async fn test_default_recent_limit() {
        let repo = InMemoryBlogPostRepository::new();
        for i in 0..12 {
            repo.create(new_post(&format!("P{i}"), 1)).await.unwrap();
        }

        let posts = repo.find_recent(DEFAULT_RECENT_LIMIT).await.unwrap();
        assert_eq!(posts.len(), 10);
        assert_eq!(posts[0].title, "P11");
    }

    #[tokio::test]
    async fn test_find_by_user_id() {
        let (repo, clock) = repo_at(noon());
        for (title, owner) in [("A", Some(1)), ("B", Some(2)), ("C", Some(1)), ("D", None)] {
            let mut new = new_post(title, 1);
            new.user_id = owner;
            repo.create(new).await.unwrap();
            clock.advance(TimeDelta::seconds(1));
        }

        assert_eq!(titles(&repo.find_by_user_id(1).await.unwrap()), ["C", "A"]);
        assert_eq!(titles(&repo.find_by_user_id(2).await.unwrap()), ["B"]);
        assert!(repo.find_by_user_id(3).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_todays_aggregates_exclude_yesterday() {
        // 23 hours before 22:00 is still yesterday.
        let evening = noon() + TimeDelta::hours(10);
        let (repo, clock) = repo_at(evening - TimeDelta::hours(23));
        repo.create(new_post("t0", 1000)).await.unwrap();

        clock.set(evening - TimeDelta::hours(3));
        repo.create(new_post("t1", 100)).await.unwrap();
        clock.advance(TimeDelta::hours(1));
        repo.create(new_post("t2", 200)).await.unwrap();
        clock.advance(TimeDelta::hours(1));
        repo.create(new_post("t3", 300)).await.unwrap();
        clock.set(evening);

        assert_eq!(repo.todays_article_count().await.unwrap(), 3);
        assert_eq!(repo.todays_word_count().await.unwrap(), 600);
        assert_eq!(
            titles(&repo.find_recent(10).await.unwrap()),
            ["t3", "t2", "t1", "t0"]
        );
    }

    #[tokio::test]
    async fn test_todays_aggregates_roll_over_at_midnight() {
        let (repo, clock) = repo_at(noon());
        repo.create(new_post("A", 250)).await.unwrap();
        assert_eq!(repo.todays_word_count().await.unwrap(), 250);

        clock.advance(TimeDelta::hours(12));

        assert_eq!(repo.todays_word_count().await.unwrap(), 0);
        assert_eq!(repo.todays_article_count().await.unwrap(), 0);
    }
}
