use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::generation::{ContentLength, TargetAudience, WritingTone};

/// Blog post entity - a generated article together with its generation parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: i32,
    pub user_id: Option<i32>,
    pub title: String,
    pub content: String,
    pub topic: String,
    pub keywords: Option<String>,
    pub content_length: ContentLength,
    pub writing_tone: WritingTone,
    pub target_audience: TargetAudience,
    pub word_count: u32,
    pub seo_score: Option<u8>,
    pub featured_image_description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Data required to create a blog post; id and creation time are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBlogPost {
    #[serde(default)]
    pub user_id: Option<i32>,
    pub title: String,
    pub content: String,
    pub topic: String,
    #[serde(default)]
    pub keywords: Option<String>,
    pub content_length: ContentLength,
    pub writing_tone: WritingTone,
    pub target_audience: TargetAudience,
    pub word_count: u32,
    #[serde(default)]
    pub seo_score: Option<u8>,
    #[serde(default)]
    pub featured_image_description: Option<String>,
}

impl NewBlogPost {
    pub fn into_post(self, id: i32, created_at: DateTime<Utc>) -> BlogPost {
        BlogPost {
            id,
            user_id: self.user_id,
            title: self.title,
            content: self.content,
            topic: self.topic,
            keywords: self.keywords,
            content_length: self.content_length,
            writing_tone: self.writing_tone,
            target_audience: self.target_audience,
            word_count: self.word_count,
            seo_score: self.seo_score,
            featured_image_description: self.featured_image_description,
            created_at,
        }
    }
}

/// Partial update of a blog post.
///
/// Every field is optional; `None` leaves the stored value untouched. Nullable
/// fields use `Option<Option<_>>` so that an explicit JSON `null` clears them.
/// `id` and `createdAt` have no counterpart here and are ignored when present
/// in a request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostPatch {
    #[serde(default, deserialize_with = "nullable")]
    pub user_id: Option<Option<i32>>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub topic: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub keywords: Option<Option<String>>,
    pub content_length: Option<ContentLength>,
    pub writing_tone: Option<WritingTone>,
    pub target_audience: Option<TargetAudience>,
    pub word_count: Option<u32>,
    #[serde(default, deserialize_with = "nullable")]
    pub seo_score: Option<Option<u8>>,
    #[serde(default, deserialize_with = "nullable")]
    pub featured_image_description: Option<Option<String>>,
}

/// Distinguishes a present `null` (`Some(None)`) from an absent field (`None`).
fn nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl BlogPostPatch {
    /// Merge the patch onto `existing`. Identity and creation time are carried over.
    pub fn apply(self, existing: BlogPost) -> BlogPost {
        BlogPost {
            id: existing.id,
            created_at: existing.created_at,
            user_id: self.user_id.unwrap_or(existing.user_id),
            title: self.title.unwrap_or(existing.title),
            content: self.content.unwrap_or(existing.content),
            topic: self.topic.unwrap_or(existing.topic),
            keywords: self.keywords.unwrap_or(existing.keywords),
            content_length: self.content_length.unwrap_or(existing.content_length),
            writing_tone: self.writing_tone.unwrap_or(existing.writing_tone),
            target_audience: self.target_audience.unwrap_or(existing.target_audience),
            word_count: self.word_count.unwrap_or(existing.word_count),
            seo_score: self.seo_score.unwrap_or(existing.seo_score),
            featured_image_description: self
                .featured_image_description
                .unwrap_or(existing.featured_image_description),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BlogPost {
        NewBlogPost {
            user_id: Some(3),
            title: "Title".to_string(),
            content: "<p>Body</p>".to_string(),
            topic: "Rust".to_string(),
            keywords: Some("ownership".to_string()),
            content_length: ContentLength::Medium,
            writing_tone: WritingTone::Creative,
            target_audience: TargetAudience::Technical,
            word_count: 640,
            seo_score: Some(80),
            featured_image_description: Some("A crab".to_string()),
        }
        .into_post(7, Utc::now())
    }

    #[test]
    fn test_empty_patch_is_identity() {
        let post = sample();
        assert_eq!(BlogPostPatch::default().apply(post.clone()), post);
    }

    #[test]
    fn test_patch_overwrites_only_given_fields() {
        let post = sample();
        let patch = BlogPostPatch {
            word_count: Some(999),
            ..Default::default()
        };

        let merged = patch.apply(post.clone());

        assert_eq!(merged.word_count, 999);
        assert_eq!(
            BlogPost {
                word_count: post.word_count,
                ..merged
            },
            post
        );
    }

    #[test]
    fn test_patch_ignores_identity_fields_in_json() {
        let post = sample();
        let patch: BlogPostPatch =
            serde_json::from_str(r#"{"id": 99, "createdAt": "2001-01-01T00:00:00Z", "title": "New"}"#)
                .unwrap();

        let merged = patch.apply(post.clone());

        assert_eq!(merged.id, post.id);
        assert_eq!(merged.created_at, post.created_at);
        assert_eq!(merged.title, "New");
    }

    #[test]
    fn test_explicit_null_clears_nullable_field() {
        let patch: BlogPostPatch =
            serde_json::from_str(r#"{"seoScore": null, "keywords": "new"}"#).unwrap();
        assert_eq!(patch.seo_score, Some(None));
        assert_eq!(patch.featured_image_description, None);

        let merged = patch.apply(sample());
        assert_eq!(merged.seo_score, None);
        assert_eq!(merged.keywords.as_deref(), Some("new"));
        assert_eq!(merged.featured_image_description.as_deref(), Some("A crab"));
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["wordCount"], 640);
        assert_eq!(json["contentLength"], "medium");
        assert_eq!(json["userId"], 3);
        assert!(json.get("createdAt").is_some());
    }
}
