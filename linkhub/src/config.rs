//! Process configuration, read from the environment.
//!
//! Missing platform credentials are not an error: the affected platform is
//! simply treated as unconfigured.

use std::path::PathBuf;
use std::time::Duration;

use linkhub_upstream::twitch::{self, TwitchCredentials, TwitchEndpoints};
use linkhub_upstream::youtube::{self, YouTubeCredentials};

use crate::api::server::ApiServerConfig;

/// File name of the stats artifact inside the data directory.
pub const STATS_FILE_NAME: &str = "social.stats.json";
/// File name of the media-kit artifact inside the data directory.
pub const MEDIA_KIT_FILE_NAME: &str = "media.kit.json";

const DEFAULT_DATA_DIR: &str = "public/data";
const DEFAULT_LIVE_TIMEOUT_SECS: u64 = 5;
const DEFAULT_REFRESH_TIMEOUT_SECS: u64 = 15;

/// Location of the two published JSON documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub data_dir: PathBuf,
}

impl DataPaths {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn stats_path(&self) -> PathBuf {
        self.data_dir.join(STATS_FILE_NAME)
    }

    pub fn media_kit_path(&self) -> PathBuf {
        self.data_dir.join(MEDIA_KIT_FILE_NAME)
    }
}

impl Default for DataPaths {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR)
    }
}

/// Upstream base URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamEndpoints {
    pub twitch: TwitchEndpoints,
    pub youtube_api_url: String,
}

impl Default for UpstreamEndpoints {
    fn default() -> Self {
        Self {
            twitch: TwitchEndpoints::default(),
            youtube_api_url: youtube::DEFAULT_API_URL.to_string(),
        }
    }
}

/// Complete process configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ApiServerConfig,
    pub data: DataPaths,
    pub twitch: Option<TwitchCredentials>,
    pub youtube: Option<YouTubeCredentials>,
    pub endpoints: UpstreamEndpoints,
    /// Per-request bound for the live-status path.
    pub live_timeout: Duration,
    /// Per-request bound for the refresh job.
    pub refresh_timeout: Duration,
    /// Directory for daily log files; console only when unset.
    pub log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ApiServerConfig::default(),
            data: DataPaths::default(),
            twitch: None,
            youtube: None,
            endpoints: UpstreamEndpoints::default(),
            live_timeout: Duration::from_secs(DEFAULT_LIVE_TIMEOUT_SECS),
            refresh_timeout: Duration::from_secs(DEFAULT_REFRESH_TIMEOUT_SECS),
            log_dir: None,
        }
    }
}

impl AppConfig {
    /// Load from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        // Zero would leave upstream calls unbounded; fall back to the default.
        let secs = |key: &str, default: u64| {
            get(key)
                .and_then(|v| v.parse::<u64>().ok())
                .filter(|&n| n > 0)
                .map(Duration::from_secs)
                .unwrap_or(Duration::from_secs(default))
        };

        let twitch = match (
            get("TWITCH_CLIENT_ID"),
            get("TWITCH_CLIENT_SECRET"),
            get("TWITCH_USER_ID"),
        ) {
            (Some(client_id), Some(client_secret), Some(user_id)) => Some(TwitchCredentials {
                client_id,
                client_secret,
                user_id,
            }),
            _ => None,
        };

        let youtube = match (get("YOUTUBE_API_KEY"), get("YOUTUBE_CHANNEL_ID")) {
            (Some(api_key), Some(channel_id)) => Some(YouTubeCredentials {
                api_key,
                channel_id,
            }),
            _ => None,
        };

        let endpoints = UpstreamEndpoints {
            twitch: TwitchEndpoints {
                auth_url: get("TWITCH_AUTH_URL").unwrap_or_else(|| twitch::DEFAULT_AUTH_URL.to_string()),
                api_url: get("TWITCH_API_URL").unwrap_or_else(|| twitch::DEFAULT_API_URL.to_string()),
            },
            youtube_api_url: get("YOUTUBE_API_URL")
                .unwrap_or_else(|| youtube::DEFAULT_API_URL.to_string()),
        };

        Self {
            server: ApiServerConfig::from_lookup(&get),
            data: get("DATA_DIR").map(DataPaths::new).unwrap_or_default(),
            twitch,
            youtube,
            endpoints,
            live_timeout: secs("LIVE_STATUS_TIMEOUT_SECS", DEFAULT_LIVE_TIMEOUT_SECS),
            refresh_timeout: secs("REFRESH_TIMEOUT_SECS", DEFAULT_REFRESH_TIMEOUT_SECS),
            log_dir: get("LOG_DIR").map(PathBuf::from),
        }
    }

    #[inline]
    pub fn twitch_configured(&self) -> bool {
        self.twitch.is_some()
    }
}
