//! HTTP server: live-status API, health check and the static site.

pub mod middleware;
pub mod models;
pub mod routes;
pub mod server;

pub use server::{ApiServer, ApiServerConfig, AppState};
