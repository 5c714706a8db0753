use async_trait::async_trait;

use crate::domain::{GeneratedContent, GeneratedSocialPost, GenerationRequest, SocialPostRequest};

/// Content generator - abstraction over the generative AI provider.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Write a blog post for the given parameters.
    async fn generate_blog_post(
        &self,
        request: &GenerationRequest,
    ) -> Result<GeneratedContent, GenerationError>;

    /// Suggest blog topics, optionally around a theme.
    async fn suggest_topics(&self, theme: Option<&str>) -> Result<Vec<String>, GenerationError>;

    /// Write a caption for an image.
    async fn generate_social_post(
        &self,
        request: &SocialPostRequest,
    ) -> Result<GeneratedSocialPost, GenerationError>;
}

/// Generation errors.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("Content provider is not configured: {0}")]
    NotConfigured(String),

    #[error("Request to content provider failed: {0}")]
    Transport(String),

    #[error("Content provider returned status {status}: {body}")]
    Provider { status: u16, body: String },

    #[error("Content provider returned unparseable output: {0}")]
    InvalidResponse(String),
}
