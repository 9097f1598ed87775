//! Response bodies that are not domain types.

use serde::Serialize;

/// `GET /health` body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
    pub timestamp: String,
}

/// Live-status body when no upstream answer is available.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveStatusError {
    pub is_live: bool,
    pub error: String,
    pub cached: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl LiveStatusError {
    pub fn new(error: impl Into<String>, timestamp: Option<String>) -> Self {
        Self {
            is_live: false,
            error: error.into(),
            cached: false,
            timestamp,
        }
    }
}
