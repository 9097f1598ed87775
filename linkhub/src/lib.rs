//! linkhub library crate.
//!
//! Follower-count refresh job, Twitch live-status service and the HTTP
//! server that fronts the static link hub site.

pub mod api;
pub mod config;
pub mod error;
pub mod live;
pub mod logging;
pub mod stats;
pub mod utils;

pub use error::{Error, Result};
