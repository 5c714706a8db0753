//! Stored blog post handlers.

use actix_web::{HttpResponse, web};

use scribe_core::domain::BlogPostPatch;
use scribe_shared::dto::{MessageResponse, RecentPostsQuery};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Page size of the recent posts listing when the client does not pick one.
pub const RECENT_POSTS_DEFAULT_LIMIT: usize = 6;

/// Missing, unparseable and zero limits fall back to the default.
fn resolve_limit(raw: Option<&str>) -> AppResult<usize> {
    match raw.map(str::trim).and_then(|s| s.parse::<i64>().ok()) {
        None | Some(0) => Ok(RECENT_POSTS_DEFAULT_LIMIT),
        Some(n) if n < 0 => Err(AppError::BadRequest(format!(
            "Invalid limit: {}. Limit must not be negative",
            n
        ))),
        Some(n) => Ok(usize::try_from(n).unwrap_or(usize::MAX)),
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Blog post not found".to_string())
}

/// GET /api/blog-posts/recent?limit=N
pub async fn recent_posts(
    state: web::Data<AppState>,
    query: web::Query<RecentPostsQuery>,
) -> AppResult<HttpResponse> {
    let limit = resolve_limit(query.limit.as_deref())?;
    let posts = state.posts.find_recent(limit).await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/blog-posts/{id}
pub async fn get_post(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let post = state
        .posts
        .find_by_id(path.into_inner())
        .await?
        .ok_or_else(not_found)?;
    Ok(HttpResponse::Ok().json(post))
}

/// PATCH /api/blog-posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<BlogPostPatch>,
) -> AppResult<HttpResponse> {
    let post = state
        .posts
        .update(path.into_inner(), body.into_inner())
        .await?
        .ok_or_else(not_found)?;
    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /api/blog-posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    if !state.posts.delete(path.into_inner()).await? {
        return Err(not_found());
    }
    Ok(HttpResponse::Ok().json(MessageResponse::new("Blog post deleted successfully")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_limit() {
        assert_eq!(resolve_limit(None).unwrap(), 6);
        assert_eq!(resolve_limit(Some("abc")).unwrap(), 6);
        assert_eq!(resolve_limit(Some("0")).unwrap(), 6);
        assert_eq!(resolve_limit(Some(" 3 ")).unwrap(), 3);
        assert!(resolve_limit(Some("-1")).is_err());
    }
}
