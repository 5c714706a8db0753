//! Generation handlers - calls into the content provider.

use actix_web::{HttpResponse, web};

use scribe_core::domain::{GenerationRequest, NewBlogPost, SocialPostRequest};
use scribe_shared::dto::{
    GenerateContentResponse, TopicSuggestionsRequest, TopicSuggestionsResponse,
};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/generate
///
/// Nothing is stored unless generation succeeds.
pub async fn generate_blog_post(
    state: web::Data<AppState>,
    body: web::Json<GenerationRequest>,
) -> AppResult<HttpResponse> {
    let request = body.into_inner();
    request.validate()?;

    let generated = state.generator.generate_blog_post(&request).await?;

    let post = state
        .posts
        .create(NewBlogPost {
            user_id: None,
            title: generated.title.clone(),
            content: generated.content.clone(),
            topic: request.topic.clone(),
            keywords: Some(request.keywords.clone().unwrap_or_default()),
            content_length: request.content_length,
            writing_tone: request.writing_tone,
            target_audience: request.target_audience,
            word_count: generated.word_count,
            seo_score: Some(generated.seo_score),
            featured_image_description: Some(generated.featured_image_description.clone()),
        })
        .await?;

    tracing::info!(post_id = post.id, word_count = post.word_count, "Blog post generated");

    Ok(HttpResponse::Ok().json(GenerateContentResponse {
        content: generated,
        id: post.id,
    }))
}

/// POST /api/topic-suggestions
pub async fn topic_suggestions(
    state: web::Data<AppState>,
    body: web::Json<TopicSuggestionsRequest>,
) -> AppResult<HttpResponse> {
    let suggestions = state
        .generator
        .suggest_topics(body.theme.as_deref())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Topic suggestion failed");
            AppError::BadGateway("Failed to generate topic suggestions".to_string())
        })?;

    Ok(HttpResponse::Ok().json(TopicSuggestionsResponse { suggestions }))
}

/// POST /api/generate-social-post
pub async fn generate_social_post(
    state: web::Data<AppState>,
    body: web::Json<SocialPostRequest>,
) -> AppResult<HttpResponse> {
    let request = body.into_inner();
    request.validate()?;

    let post = state.generator.generate_social_post(&request).await?;

    Ok(HttpResponse::Ok().json(post))
}
