//! Upstream platform clients for the link hub.
//!
//! Provides the pieces shared by the stats refresh job and the live-status
//! service: a bounded HTTP client, a typed error taxonomy, a token cache with
//! explicit-clock expiry, and thin clients for Twitch and YouTube.

pub mod client;
pub mod error;
pub mod token;
pub mod twitch;
pub mod youtube;

pub use client::build_client;
pub use error::PlatformError;
pub use token::{AuthToken, TokenCache, TokenSource};
