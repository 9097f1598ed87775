//! Twitch live-status routes.

use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header::CACHE_CONTROL},
    response::{IntoResponse, Response},
    routing::get,
};
use linkhub_upstream::{PlatformError, twitch};

use crate::api::models::LiveStatusError;
use crate::api::server::AppState;
use crate::live::LiveStatusOutcome;
use crate::utils::time::format_timestamp;

const LIVE_CACHE_CONTROL: &str = "public, max-age=60";
const NO_CACHE: &str = "no-cache";

/// Create the live-status router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/twitch/live", get(live_status))
        .route("/api/live-status", get(live_status))
}

async fn live_status(State(state): State<AppState>) -> Response {
    outcome_response(state.live_status.check().await)
}

/// Map an outcome to status code, cache header and body.
pub fn outcome_response(outcome: LiveStatusOutcome) -> Response {
    match outcome {
        LiveStatusOutcome::Unconfigured => {
            let body = LiveStatusError::new(
                PlatformError::ConfigMissing(twitch::PLATFORM).to_string(),
                None,
            );
            (
                StatusCode::SERVICE_UNAVAILABLE,
                [(CACHE_CONTROL, NO_CACHE)],
                Json(body),
            )
                .into_response()
        }
        LiveStatusOutcome::Status(status) => {
            (StatusCode::OK, [(CACHE_CONTROL, LIVE_CACHE_CONTROL)], Json(status)).into_response()
        }
        LiveStatusOutcome::Degraded { error, timestamp } => {
            let body = LiveStatusError::new(error, Some(format_timestamp(timestamp)));
            (StatusCode::OK, [(CACHE_CONTROL, NO_CACHE)], Json(body)).into_response()
        }
    }
}
