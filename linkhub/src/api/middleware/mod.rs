//! API middleware.

pub mod cache_control;

pub use cache_control::{cache_policy, static_cache_control};
