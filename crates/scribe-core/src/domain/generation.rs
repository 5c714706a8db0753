//! Generation parameters and generator output.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Requested length class of a blog post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentLength {
    Short,
    Medium,
    Long,
}

impl ContentLength {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }

    /// Word count range handed to the model.
    pub fn word_target(&self) -> &'static str {
        match self {
            Self::Short => "300-500",
            Self::Medium => "500-800",
            Self::Long => "800-1200",
        }
    }
}

/// Writing tone of a blog post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WritingTone {
    Professional,
    Conversational,
    Academic,
    Creative,
}

impl WritingTone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Professional => "professional",
            Self::Conversational => "conversational",
            Self::Academic => "academic",
            Self::Creative => "creative",
        }
    }
}

/// Audience a blog post is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetAudience {
    General,
    Business,
    Technical,
    Students,
}

impl TargetAudience {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Business => "business",
            Self::Technical => "technical",
            Self::Students => "students",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(ContentLength, WritingTone, TargetAudience, Platform, SocialTone);

/// Parameters of a blog post generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub topic: String,
    #[serde(default)]
    pub keywords: Option<String>,
    pub content_length: ContentLength,
    pub writing_tone: WritingTone,
    pub target_audience: TargetAudience,
}

impl GenerationRequest {
    /// Check field rules that the type system does not cover.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.topic.trim().is_empty() {
            return Err(DomainError::Validation("Topic is required".to_string()));
        }
        Ok(())
    }

    /// Keywords with surrounding whitespace removed, `None` when blank.
    pub fn keywords(&self) -> Option<&str> {
        self.keywords
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }
}

/// Blog post produced by a content generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContent {
    pub title: String,
    pub content: String,
    pub featured_image_description: String,
    pub seo_score: u8,
    pub word_count: u32,
    /// Estimated reading time in minutes.
    pub reading_time: u32,
    pub seo_suggestions: Vec<String>,
}

/// Minutes needed to read `word_count` words at 200 words per minute.
pub fn reading_time_minutes(word_count: u32) -> u32 {
    word_count.div_ceil(200)
}

/// Social network a caption is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Tiktok,
    Facebook,
    Instagram,
    Twitter,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tiktok => "tiktok",
            Self::Facebook => "facebook",
            Self::Instagram => "instagram",
            Self::Twitter => "twitter",
        }
    }
}

/// Tone of a social media caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialTone {
    Casual,
    Professional,
    Playful,
    Inspirational,
}

impl SocialTone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Casual => "casual",
            Self::Professional => "professional",
            Self::Playful => "playful",
            Self::Inspirational => "inspirational",
        }
    }
}

fn default_include_hashtags() -> bool {
    true
}

/// Request for a caption describing an uploaded image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialPostRequest {
    pub platform: Platform,
    pub tone: SocialTone,
    #[serde(default = "default_include_hashtags")]
    pub include_hashtags: bool,
    /// Base64 image payload without the `data:` prefix.
    pub image_base64: String,
}

impl SocialPostRequest {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.image_base64.trim().is_empty() {
            return Err(DomainError::Validation(
                "An image is required to generate a social media post".to_string(),
            ));
        }
        Ok(())
    }
}

/// Caption produced for a social media post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedSocialPost {
    pub caption: String,
    pub hashtags: Vec<String>,
    pub platform: Platform,
    pub engagement_tips: Vec<String>,
}
