use thiserror::Error;

/// Errors raised while talking to an upstream platform.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// Credentials or identifiers for the platform are absent.
    #[error("{0} not configured")]
    ConfigMissing(&'static str),

    /// The token exchange failed, was rejected or timed out.
    #[error("{0}")]
    Auth(String),

    /// Non-2xx status, malformed body or transport failure on a data resource.
    #[error("{0}")]
    Upstream(String),

    /// An outbound call exceeded its time budget.
    #[error("Request timeout")]
    Timeout,
}

impl PlatformError {
    pub fn auth(msg: impl Into<String>) -> Self {
        Self::Auth(msg.into())
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    /// Build the error for a response outside the 2xx range.
    pub fn status(status: reqwest::StatusCode, body: &str) -> Self {
        Self::Upstream(format!(
            "Request failed with status {}: {}",
            status.as_u16(),
            body
        ))
    }

    /// Missing configuration is the only kind that means "skip", not "failed".
    #[inline]
    pub fn is_config_missing(&self) -> bool {
        matches!(self, Self::ConfigMissing(_))
    }

    #[inline]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }
}

impl From<reqwest::Error> for PlatformError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::Upstream("Invalid JSON response".to_string())
        } else {
            // Request URLs carry credentials in their query strings.
            Self::Upstream(err.without_url().to_string())
        }
    }
}

impl From<serde_json::Error> for PlatformError {
    fn from(_: serde_json::Error) -> Self {
        Self::Upstream("Invalid JSON response".to_string())
    }
}
