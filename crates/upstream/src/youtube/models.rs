use serde::Deserialize;

/// `GET /channels?part=statistics` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChannelListResponse {
    #[serde(default)]
    pub items: Vec<ChannelItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChannelItem {
    #[serde(default)]
    pub statistics: ChannelStatistics,
}

/// Counters are transmitted as decimal strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStatistics {
    /// Absent when the owner hides it.
    #[serde(default)]
    pub subscriber_count: Option<String>,
}
