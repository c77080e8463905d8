//! WrldBldr Assets - REST API for virtual-world asset management
//!
//! The service exposes players, rooms, items, links and users over HTTP:
//! - Validates list filters and create/update requests before storage sees them
//! - Models item locations as a closed set of room, player or item references
//! - Classifies every failure as bad request, not found, conflict or internal

mod application;
mod domain;
mod infrastructure;

use std::sync::Arc;

use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::infrastructure::config::{AppConfig, BuildInfo};
use crate::infrastructure::http;
use crate::infrastructure::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wrldbldr_assets=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let build = BuildInfo::current();
    tracing::info!("Starting {} {}", build.name, build.version);

    // Load configuration
    let config = AppConfig::from_env()?;
    tracing::info!("Configuration loaded");

    // Initialize application state
    let state = Arc::new(AppState::new(config, build));
    let addr = state.config.bind_address()?;
    tracing::info!("Application state initialized");

    // Build the router
    let app = http::create_routes()
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start the server
    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let server = axum::serve(listener, app);

    // Wait for shutdown signal (Ctrl+C)
    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
