//! API route modules.

pub mod assets;
pub mod health;
pub mod live;

use axum::Router;

use crate::api::server::AppState;

/// Create the main router: API routes, health, then the static site for
/// everything else.
pub fn create_router(state: AppState) -> Router {
    let site = assets::router(&state.public_dir);

    Router::new()
        .merge(live::router())
        .merge(health::router())
        .fallback_service(site)
        .with_state(state)
}
