//! Route definitions

use axum::{
    routing::{get, MethodRouter},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::handlers::{channels, health};
use crate::state::AppState;

/// Create the API router (excluding health for separate middleware handling)
pub fn create_router(cors: CorsLayer) -> Router<AppState> {
    Router::new()
        .merge(channel_routes(&cors))
        .fallback(channels::fallback)
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Channel list routes
fn channel_routes(cors: &CorsLayer) -> Router<AppState> {
    Router::new()
        .route("/channels", channel_endpoint(cors))
        .route("/channels.json", channel_endpoint(cors))
        .route("/channels.html", channel_endpoint(cors))
        .route("/channels.xml", channel_endpoint(cors))
        .route("/channels/*params", channel_endpoint(cors))
}

/// `GET` (and `HEAD`) through CORS, every other method straight to the handler
///
/// The method fallback sits outside `route_layer`, so `OPTIONS` reaches the
/// handler and is rejected like any other non-GET method.
fn channel_endpoint(cors: &CorsLayer) -> MethodRouter<AppState> {
    get(channels::list_channels)
        .route_layer(cors.clone())
        .fallback(channels::list_channels)
}
