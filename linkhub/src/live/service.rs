//! Per-request Twitch live check backed by a shared token cache.

use chrono::{DateTime, Utc};
use linkhub_upstream::twitch::{StreamEntry, TwitchClient};
use linkhub_upstream::PlatformError;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::utils::time::iso_millis;

/// Metadata of the stream currently on air.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamData {
    pub title: String,
    pub game: String,
    pub viewers: u64,
    pub started_at: String,
}

impl From<&StreamEntry> for StreamData {
    fn from(entry: &StreamEntry) -> Self {
        Self {
            title: entry.title.clone(),
            game: entry.game_name.clone(),
            viewers: entry.viewer_count,
            started_at: entry.started_at.clone(),
        }
    }
}

/// A successful live/offline answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveStatus {
    pub is_live: bool,
    /// `null` on the wire when offline.
    pub stream_data: Option<StreamData>,
    pub cached: bool,
    #[serde(with = "iso_millis")]
    pub timestamp: DateTime<Utc>,
}

impl LiveStatus {
    /// Live iff at least one stream is active; metadata comes from the first.
    pub fn from_streams(streams: &[StreamEntry], now: DateTime<Utc>) -> Self {
        let stream_data = streams.first().map(StreamData::from);
        Self {
            is_live: stream_data.is_some(),
            stream_data,
            cached: false,
            timestamp: now,
        }
    }
}

/// Everything the endpoint can answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiveStatusOutcome {
    /// Credentials are missing.
    Unconfigured,
    /// The upstream answered.
    Status(LiveStatus),
    /// Token refresh or the streams query failed.
    Degraded {
        error: String,
        timestamp: DateTime<Utc>,
    },
}

/// Answers "is the channel live" for the web server.
pub struct LiveStatusService {
    twitch: Option<TwitchClient>,
}

impl LiveStatusService {
    pub fn new(twitch: Option<TwitchClient>) -> Self {
        Self { twitch }
    }

    pub fn from_config(config: &AppConfig, http: reqwest::Client) -> Self {
        let twitch = config
            .twitch
            .clone()
            .map(|creds| TwitchClient::new(http, creds, config.endpoints.twitch.clone()));
        Self::new(twitch)
    }

    pub async fn check(&self) -> LiveStatusOutcome {
        self.check_at(Utc::now()).await
    }

    /// Check at `now`. Never fails: errors become [`LiveStatusOutcome::Degraded`].
    pub async fn check_at(&self, now: DateTime<Utc>) -> LiveStatusOutcome {
        let Some(client) = self.twitch.as_ref() else {
            return LiveStatusOutcome::Unconfigured;
        };

        match Self::query(client, now).await {
            Ok(status) => {
                debug!(is_live = status.is_live, "Twitch live status checked");
                LiveStatusOutcome::Status(status)
            }
            Err(e) => {
                warn!(error = %e, "Error checking Twitch live status");
                LiveStatusOutcome::Degraded {
                    error: e.to_string(),
                    timestamp: now,
                }
            }
        }
    }

    async fn query(client: &TwitchClient, now: DateTime<Utc>) -> Result<LiveStatus, PlatformError> {
        let token = client.access_token(now).await?;
        let streams = client.active_streams(&token).await?;
        Ok(LiveStatus::from_streams(&streams, now))
    }
}
