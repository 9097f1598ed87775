//! Per-platform metric sources and the best-effort fold over them.

use async_trait::async_trait;
use chrono::Utc;
use linkhub_upstream::PlatformError;
use linkhub_upstream::twitch::{self, TwitchClient};
use linkhub_upstream::youtube::{self, YouTubeClient};
use tracing::{info, warn};

use super::models::PlatformStat;

/// Capabilities a platform offers to the refresh job.
#[async_trait]
pub trait StatsSource: Send + Sync {
    /// Display name written into the stats document.
    fn platform(&self) -> &'static str;

    /// Current follower / subscriber count.
    async fn fetch_followers(&self) -> Result<u64, PlatformError>;

    /// Whether the channel is live. `None` for platforms without a live concept.
    async fn fetch_live_status(&self) -> Result<Option<bool>, PlatformError> {
        Ok(None)
    }
}

/// Result of querying one source.
#[derive(Debug)]
pub enum FetchOutcome {
    Ok(PlatformStat),
    Skipped {
        platform: &'static str,
        reason: String,
    },
    Failed {
        platform: &'static str,
        error: PlatformError,
    },
}

impl FetchOutcome {
    /// Classify an error: missing configuration skips, anything else fails.
    pub fn from_error(platform: &'static str, error: PlatformError) -> Self {
        if error.is_config_missing() {
            Self::Skipped {
                platform,
                reason: error.to_string(),
            }
        } else {
            Self::Failed { platform, error }
        }
    }
}

/// Query one source. Errors never escape; they become `Skipped` or `Failed`.
pub async fn fetch_outcome(source: &dyn StatsSource) -> FetchOutcome {
    let platform = source.platform();

    let followers = match source.fetch_followers().await {
        Ok(followers) => followers,
        Err(e) => return FetchOutcome::from_error(platform, e),
    };
    let is_live = match source.fetch_live_status().await {
        Ok(is_live) => is_live,
        Err(e) => return FetchOutcome::from_error(platform, e),
    };

    FetchOutcome::Ok(PlatformStat {
        platform: platform.to_string(),
        followers,
        is_live,
    })
}

/// Keep successful stats in source order, logging everything else.
pub fn collect_stats(outcomes: Vec<FetchOutcome>) -> Vec<PlatformStat> {
    outcomes
        .into_iter()
        .filter_map(|outcome| match outcome {
            FetchOutcome::Ok(stat) => {
                info!(
                    platform = %stat.platform,
                    followers = stat.followers,
                    is_live = ?stat.is_live,
                    "Fetched platform stats"
                );
                Some(stat)
            }
            FetchOutcome::Skipped { platform, reason } => {
                info!(platform, %reason, "Platform skipped");
                None
            }
            FetchOutcome::Failed { platform, error } => {
                warn!(platform, error = %error, "Error fetching platform stats");
                None
            }
        })
        .collect()
}

/// Twitch followers plus live status.
pub struct TwitchSource {
    client: Option<TwitchClient>,
}

impl TwitchSource {
    pub fn new(client: Option<TwitchClient>) -> Self {
        Self { client }
    }

    fn client(&self) -> Result<&TwitchClient, PlatformError> {
        self.client
            .as_ref()
            .ok_or(PlatformError::ConfigMissing(twitch::PLATFORM))
    }
}

#[async_trait]
impl StatsSource for TwitchSource {
    fn platform(&self) -> &'static str {
        twitch::PLATFORM
    }

    async fn fetch_followers(&self) -> Result<u64, PlatformError> {
        let client = self.client()?;
        let token = client.access_token(Utc::now()).await?;
        client.followers(&token).await
    }

    async fn fetch_live_status(&self) -> Result<Option<bool>, PlatformError> {
        let client = self.client()?;
        let token = client.access_token(Utc::now()).await?;
        let streams = client.active_streams(&token).await?;
        Ok(Some(!streams.is_empty()))
    }
}

/// YouTube subscribers. No live status.
pub struct YouTubeSource {
    client: Option<YouTubeClient>,
}

impl YouTubeSource {
    pub fn new(client: Option<YouTubeClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StatsSource for YouTubeSource {
    fn platform(&self) -> &'static str {
        youtube::PLATFORM
    }

    async fn fetch_followers(&self) -> Result<u64, PlatformError> {
        let client = self
            .client
            .as_ref()
            .ok_or(PlatformError::ConfigMissing(youtube::PLATFORM))?;
        client.subscriber_count().await
    }
}
