//! Health check handlers
//!
//! Endpoints for liveness and readiness probes.

use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::state::AppState;

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health of the loaded channel list
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub channels: String,
    pub channel_count: usize,
}

impl ReadinessResponse {
    /// Ready once at least one real channel is loaded
    pub fn from_channel_count(channel_count: usize) -> Self {
        let healthy = channel_count > 0;
        Self {
            status: if healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                channels: if healthy { "healthy" } else { "unhealthy" }.to_string(),
                channel_count,
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}

/// Basic health check (liveness probe)
///
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Readiness check with channel list health
///
/// GET /health/ready
pub async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<ReadinessResponse>) {
    let channel_count = state
        .channels()
        .channels()
        .filter(|channel| !channel.is_group_sep())
        .count();

    let response = ReadinessResponse::from_channel_count(channel_count);
    let status = if response.is_ready() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}
