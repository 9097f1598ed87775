//! Static site files.
//!
//! Unknown paths fall back to `index.html` so client-side routes resolve.

use std::path::Path;

use axum::{Router, middleware};
use tower_http::services::{ServeDir, ServeFile};

use crate::api::middleware::static_cache_control;

/// Router serving `public_dir`, intended as the application fallback.
pub fn router(public_dir: &Path) -> Router {
    let index = ServeFile::new(public_dir.join("index.html"));
    let files = ServeDir::new(public_dir).fallback(index);

    Router::new()
        .fallback_service(files)
        .layer(middleware::from_fn(static_cache_control))
}
