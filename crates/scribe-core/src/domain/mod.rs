//! Domain entities - the core business objects.

mod blog_post;
mod generation;
mod seo;
mod stats;
mod user;

pub use blog_post::{BlogPost, BlogPostPatch, NewBlogPost};
pub use generation::{
    ContentLength, GeneratedContent, GeneratedSocialPost, GenerationRequest, Platform,
    SocialPostRequest, SocialTone, TargetAudience, WritingTone, reading_time_minutes,
};
pub use seo::seo_score;
pub use stats::UsageStats;
pub use user::{NewUser, User};
