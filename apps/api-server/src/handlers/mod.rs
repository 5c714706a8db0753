//! HTTP handlers and route configuration.

mod blog_posts;
mod generate;
mod health;
mod stats;


use std::sync::Arc;

use actix_web::web;
use scribe_core::ports::RateLimiter;

use crate::middleware::error::AppError;
use crate::middleware::rate_limit::RateLimitMiddleware;

/// Configure all application routes.
///
/// `limiter` throttles the endpoints that call the content provider.
pub fn configure_routes(cfg: &mut web::ServiceConfig, limiter: Option<Arc<dyn RateLimiter>>) {
    let throttle = RateLimitMiddleware::new(limiter);

    cfg.app_data(json_config())
        .app_data(query_config())
        .app_data(path_config())
        .service(
            web::scope("/api")
                // Public routes
                .route("/health", web::get().to(health::health_check))
                // Generation routes
                .service(
                    web::resource("/generate")
                        .wrap(throttle.clone())
                        .route(web::post().to(generate::generate_blog_post)),
                )
                .service(
                    web::resource("/topic-suggestions")
                        .wrap(throttle.clone())
                        .route(web::post().to(generate::topic_suggestions)),
                )
                .service(
                    web::resource("/generate-social-post")
                        .wrap(throttle)
                        .route(web::post().to(generate::generate_social_post)),
                )
                // Stored posts; `recent` is registered before the `{id}` pattern
                .service(
                    web::scope("/blog-posts")
                        .route("/recent", web::get().to(blog_posts::recent_posts))
                        .route("/{id}", web::get().to(blog_posts::get_post))
                        .route("/{id}", web::patch().to(blog_posts::update_post))
                        .route("/{id}", web::delete().to(blog_posts::delete_post)),
                )
                .route("/stats", web::get().to(stats::usage_stats)),
        );
}

/// Malformed bodies (including out-of-enum values) become RFC 7807 400s.
/// The limit leaves room for a base64-encoded 5 MB image.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(8 * 1024 * 1024)
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

/// The only path parameter is a post id; an id that does not parse cannot exist.
fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|_err, _req| AppError::NotFound("Blog post not found".to_string()).into())
}
