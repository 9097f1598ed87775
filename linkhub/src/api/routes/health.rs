//! Health check route.

use axum::{Json, Router, extract::State, routing::get};
use chrono::Utc;

use crate::api::models::HealthResponse;
use crate::api::server::AppState;
use crate::utils::time::format_timestamp;

/// Create the health router.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// Health check endpoint.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
        timestamp: format_timestamp(Utc::now()),
    })
}
