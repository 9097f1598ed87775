//! Twitch: app token grant, follower totals and active streams.

pub mod api;
pub mod auth;
pub mod models;

pub use api::TwitchClient;
pub use auth::ClientCredentialsGrant;
pub use models::StreamEntry;

/// Display name used in stats documents and log lines.
pub const PLATFORM: &str = "Twitch";

pub const DEFAULT_AUTH_URL: &str = "https://id.twitch.tv/oauth2/token";
pub const DEFAULT_API_URL: &str = "https://api.twitch.tv/helix";

/// Everything needed to query the broadcaster's channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwitchCredentials {
    pub client_id: String,
    pub client_secret: String,
    /// Broadcaster user id.
    pub user_id: String,
}

/// Base URLs, overridable for tests and proxies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwitchEndpoints {
    pub auth_url: String,
    pub api_url: String,
}

impl Default for TwitchEndpoints {
    fn default() -> Self {
        Self {
            auth_url: DEFAULT_AUTH_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}
