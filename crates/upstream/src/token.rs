//! Short-lived bearer token cache.
//!
//! The cache holds at most one token. Callers pass the current time into
//! [`TokenCache::acquire`], so expiry is a pure comparison of the recorded
//! expiry against that instant and never depends on a background timer.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;
use tracing::debug;

use crate::error::PlatformError;

/// Lifetime assigned to every freshly issued token, regardless of what the
/// upstream reports.
pub const DEFAULT_TOKEN_TTL: Duration = Duration::hours(1);

/// A bearer token together with the instant it stops being served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthToken {
    pub value: String,
    pub expires_at: DateTime<Utc>,
}

impl AuthToken {
    pub fn new(value: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            value: value.into(),
            expires_at,
        }
    }

    #[inline]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        is_expired(self.expires_at, now)
    }
}

/// A token is unusable from its expiry instant onwards.
#[inline]
pub fn is_expired(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now >= expires_at
}

/// Something that can exchange credentials for a new bearer token.
#[async_trait]
pub trait TokenSource: Send + Sync {
    /// Perform one credential grant and return the raw token value.
    async fn request_token(&self) -> Result<String, PlatformError>;
}

/// Process-local cache in front of a [`TokenSource`].
///
/// The lock is only held to read or replace the cached value, never across
/// the upstream call. Two callers racing on an expired token may both
/// refresh; the last one to finish wins, which is harmless because grants are
/// idempotent.
pub struct TokenCache<S> {
    source: S,
    ttl: Duration,
    cached: Mutex<Option<AuthToken>>,
}

impl<S: TokenSource> TokenCache<S> {
    pub fn new(source: S) -> Self {
        Self::with_ttl(source, DEFAULT_TOKEN_TTL)
    }

    pub fn with_ttl(source: S, ttl: Duration) -> Self {
        Self {
            source,
            ttl,
            cached: Mutex::new(None),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Return the cached token when it is still valid at `now`, otherwise
    /// request a new one and cache it until `now + ttl`.
    pub async fn acquire(&self, now: DateTime<Utc>) -> Result<AuthToken, PlatformError> {
        if let Some(token) = self.cached(now) {
            return Ok(token);
        }

        debug!("Cached token absent or expired, requesting a new one");
        let value = self.source.request_token().await?;
        let token = AuthToken::new(value, now + self.ttl);
        *self.cached.lock() = Some(token.clone());
        Ok(token)
    }

    /// The cached token, if one exists and is valid at `now`.
    pub fn cached(&self, now: DateTime<Utc>) -> Option<AuthToken> {
        self.cached
            .lock()
            .as_ref()
            .filter(|token| !token.is_expired(now))
            .cloned()
    }
}
