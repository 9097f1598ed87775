//! YouTube Data API: channel subscriber counts.

pub mod models;

use models::ChannelListResponse;

use crate::client::send_json;
use crate::error::PlatformError;

/// Display name used in stats documents and log lines.
pub const PLATFORM: &str = "YouTube";

pub const DEFAULT_API_URL: &str = "https://www.googleapis.com/youtube/v3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YouTubeCredentials {
    pub api_key: String,
    pub channel_id: String,
}

/// API-key authenticated channel statistics lookup.
pub struct YouTubeClient {
    http: reqwest::Client,
    credentials: YouTubeCredentials,
    api_url: String,
}

impl YouTubeClient {
    pub fn new(
        http: reqwest::Client,
        credentials: YouTubeCredentials,
        api_url: impl Into<String>,
    ) -> Self {
        Self {
            http,
            credentials,
            api_url: api_url.into(),
        }
    }

    /// Subscriber count of the configured channel.
    pub async fn subscriber_count(&self) -> Result<u64, PlatformError> {
        let request = self
            .http
            .get(format!("{}/channels", self.api_url))
            .query(&[
                ("part", "statistics"),
                ("id", self.credentials.channel_id.as_str()),
                ("key", self.credentials.api_key.as_str()),
            ]);
        let response: ChannelListResponse = send_json(request).await?;

        let Some(channel) = response.items.into_iter().next() else {
            return Err(PlatformError::upstream(format!(
                "YouTube channel {} not found",
                self.credentials.channel_id
            )));
        };

        let raw = channel.statistics.subscriber_count.ok_or_else(|| {
            PlatformError::upstream("YouTube subscriber count is hidden")
        })?;
        raw.trim()
            .parse::<u64>()
            .map_err(|_| PlatformError::upstream(format!("Invalid subscriber count: {raw}")))
    }
}
