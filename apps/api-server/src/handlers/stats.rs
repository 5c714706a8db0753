//! Usage statistics endpoint.

use actix_web::{HttpResponse, web};

use scribe_core::domain::UsageStats;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/stats
pub async fn usage_stats(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let words = state.posts.todays_word_count().await?;
    let articles = state.posts.todays_article_count().await?;

    Ok(HttpResponse::Ok().json(UsageStats::new(words, articles)))
}
