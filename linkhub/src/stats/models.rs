//! Published stats documents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::time::iso_millis;

/// Follower count of one platform as shown on a stats card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformStat {
    pub platform: String,
    pub followers: u64,
    /// Only present for platforms with a live concept.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_live: Option<bool>,
}

impl PlatformStat {
    pub fn new(platform: impl Into<String>, followers: u64) -> Self {
        Self {
            platform: platform.into(),
            followers,
            is_live: None,
        }
    }

    pub fn with_live(mut self, is_live: bool) -> Self {
        self.is_live = Some(is_live);
        self
    }
}

/// Contents of `social.stats.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsDocument {
    pub platforms: Vec<PlatformStat>,
    #[serde(with = "iso_millis")]
    pub last_updated: DateTime<Utc>,
}

impl StatsDocument {
    pub fn new(platforms: Vec<PlatformStat>, last_updated: DateTime<Utc>) -> Self {
        Self {
            platforms,
            last_updated,
        }
    }
}
