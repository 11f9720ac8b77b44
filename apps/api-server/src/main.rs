//! # Quill API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::HttpServer;

mod app;
mod config;
mod handlers;
mod middleware;
mod observability;
mod state;
mod telemetry;

use config::AppConfig;
use state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().map_err(std::io::Error::other)?;
    telemetry::init_telemetry(&config.telemetry);

    let state = AppState::new(&config.store).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to open content store");
        std::io::Error::other(e)
    })?;

    tracing::info!(
        "Starting Quill API Server on {}:{}",
        config.host,
        config.port
    );

    let server = HttpServer::new(move || app::build_app(state.clone()))
        .bind((config.host.as_str(), config.port))?;

    tracing::info!(
        "Blog API available at http://{}:{}/api",
        config.host,
        config.port
    );

    server.run().await
}
