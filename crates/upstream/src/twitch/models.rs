use serde::Deserialize;

/// Body of a successful client-credentials grant.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    /// Upstream validity window. Read but not trusted; the cache applies its
    /// own TTL.
    #[serde(default)]
    pub expires_in: Option<u64>,
}

/// `GET /channels/followers` response. Only the total is of interest.
#[derive(Debug, Clone, Deserialize)]
pub struct FollowersResponse {
    #[serde(default)]
    pub total: u64,
}

/// `GET /streams` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StreamsResponse {
    #[serde(default)]
    pub data: Vec<StreamEntry>,
}

/// One active stream as reported by Helix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StreamEntry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub game_name: String,
    #[serde(default)]
    pub viewer_count: u64,
    /// RFC 3339 start time, forwarded verbatim.
    #[serde(default)]
    pub started_at: String,
}
