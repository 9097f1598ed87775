//! One-shot stats refresh run.

use std::fmt;

use chrono::{DateTime, Utc};
use futures::future::join_all;
use linkhub_upstream::twitch::TwitchClient;
use linkhub_upstream::youtube::YouTubeClient;
use tracing::{info, warn};

use super::source::{StatsSource, TwitchSource, YouTubeSource, collect_stats, fetch_outcome};
use super::store::{commit, prepare_documents};
use crate::Result;
use crate::config::{AppConfig, DataPaths};

/// What a run did to the published documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshReport {
    /// Both documents were rewritten with this many platforms.
    Updated { platforms: usize },
    /// Nothing was fetched; both documents were left alone.
    Unchanged,
    /// Documents were built but not written.
    DryRun { platforms: usize },
}

impl fmt::Display for RefreshReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Updated { platforms } => write!(f, "updated {platforms} platform(s)"),
            Self::Unchanged => write!(f, "no stats fetched, keeping existing data"),
            Self::DryRun { platforms } => write!(f, "dry run, {platforms} platform(s) not written"),
        }
    }
}

/// Fetches every source and republishes the stats and media-kit documents.
pub struct StatsRefresher {
    sources: Vec<Box<dyn StatsSource>>,
    paths: DataPaths,
    dry_run: bool,
}

impl StatsRefresher {
    pub fn new(paths: DataPaths) -> Self {
        Self {
            sources: Vec::new(),
            paths,
            dry_run: false,
        }
    }

    /// Twitch then YouTube, each built fresh so a run performs at most one
    /// token grant.
    pub fn from_config(config: &AppConfig, http: reqwest::Client) -> Self {
        let twitch = config
            .twitch
            .clone()
            .map(|creds| TwitchClient::new(http.clone(), creds, config.endpoints.twitch.clone()));
        let youtube = config.youtube.clone().map(|creds| {
            YouTubeClient::new(http.clone(), creds, config.endpoints.youtube_api_url.clone())
        });

        Self::new(config.data.clone())
            .with_source(TwitchSource::new(twitch))
            .with_source(YouTubeSource::new(youtube))
    }

    /// Append a source. Output order follows insertion order.
    pub fn with_source(mut self, source: impl StatsSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub async fn run_once(&self) -> Result<RefreshReport> {
        self.run_once_at(Utc::now()).await
    }

    /// Run with `now` as the `lastUpdated` stamp.
    pub async fn run_once_at(&self, now: DateTime<Utc>) -> Result<RefreshReport> {
        info!(sources = self.sources.len(), "Fetching social media stats");

        let outcomes = join_all(self.sources.iter().map(|s| fetch_outcome(s.as_ref()))).await;
        let stats = collect_stats(outcomes);

        if stats.is_empty() {
            warn!("No stats fetched, keeping existing data");
            return Ok(RefreshReport::Unchanged);
        }

        let writes = prepare_documents(&self.paths, &stats, now).await?;

        if self.dry_run {
            for write in &writes {
                info!(path = %write.path.display(), "Dry run, skipping write");
            }
            return Ok(RefreshReport::DryRun {
                platforms: stats.len(),
            });
        }

        commit(&writes).await?;
        info!(platforms = stats.len(), "Stats updated successfully");
        Ok(RefreshReport::Updated {
            platforms: stats.len(),
        })
    }
}
