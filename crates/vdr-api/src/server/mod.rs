//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;
use vdr_common::{AppConfig, AppError};
use vdr_core::channels_conf;

use crate::middleware::{apply_middleware, create_cors_layer};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let cors = create_cors_layer(&config.cors, config.app.env.is_production());
    let api = apply_middleware(
        create_router(cors),
        &config.rate_limit,
        config.api.request_timeout(),
    );

    api.merge(health_routes()).with_state(state)
}

/// Load the channel list and create AppState
pub fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!(
        path = %config.channels.conf_path.display(),
        charset = %config.channels.charset,
        "Loading channels.conf..."
    );
    let channels = channels_conf::load(&config.channels.conf_path, &config.channels.charset)?;
    info!(
        entries = channels.len(),
        channels = channels.real_channel_count(),
        "Channel list loaded"
    );

    Ok(AppState::new(Arc::new(channels), config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Server(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Server(e.to_string()))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid listen address {}: {}", config.api.address(), e)))?;

    // Create app state
    let state = create_app_state(config)?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
