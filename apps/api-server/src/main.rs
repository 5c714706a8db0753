//! # Scribe API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod observability;
mod state;
mod telemetry;

use config::AppConfig;
use observability::RequestIdMiddleware;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!(
        "Starting Scribe API Server on {}:{}",
        config.host,
        config.port
    );

    // One store for the whole process, shared by every worker
    let state = AppState::new(&config).map_err(std::io::Error::other)?;

    HttpServer::new(move || {
        let limiter = state.rate_limiter.clone();
        App::new()
            .wrap(RequestIdMiddleware)
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(|cfg| handlers::configure_routes(cfg, limiter))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
