//! Helix API client for follower counts and live status.

use chrono::{DateTime, Utc};
use reqwest::header::AUTHORIZATION;

use super::auth::ClientCredentialsGrant;
use super::models::{FollowersResponse, StreamEntry, StreamsResponse};
use super::{TwitchCredentials, TwitchEndpoints};
use crate::client::send_json;
use crate::error::PlatformError;
use crate::token::{AuthToken, TokenCache};

/// Authenticated access to the Helix resources the link hub needs.
///
/// Owns its own token cache; each process (or each refresh run) builds its
/// own client.
pub struct TwitchClient {
    http: reqwest::Client,
    credentials: TwitchCredentials,
    endpoints: TwitchEndpoints,
    tokens: TokenCache<ClientCredentialsGrant>,
}

impl TwitchClient {
    pub fn new(
        http: reqwest::Client,
        credentials: TwitchCredentials,
        endpoints: TwitchEndpoints,
    ) -> Self {
        let grant = ClientCredentialsGrant::new(
            http.clone(),
            endpoints.auth_url.clone(),
            credentials.client_id.clone(),
            credentials.client_secret.clone(),
        );
        Self {
            http,
            credentials,
            endpoints,
            tokens: TokenCache::new(grant),
        }
    }

    /// A token valid at `now`, from cache or from a fresh grant.
    pub async fn access_token(&self, now: DateTime<Utc>) -> Result<AuthToken, PlatformError> {
        self.tokens.acquire(now).await
    }

    /// Total follower count of the configured broadcaster.
    pub async fn followers(&self, token: &AuthToken) -> Result<u64, PlatformError> {
        let url = format!("{}/channels/followers", self.endpoints.api_url);
        let request = self
            .authorized_get(&url, token)
            .query(&[("broadcaster_id", self.credentials.user_id.as_str())]);
        let response: FollowersResponse = send_json(request).await?;
        Ok(response.total)
    }

    /// Streams currently active for the configured broadcaster. Empty when
    /// offline.
    pub async fn active_streams(&self, token: &AuthToken) -> Result<Vec<StreamEntry>, PlatformError> {
        let url = format!("{}/streams", self.endpoints.api_url);
        let request = self
            .authorized_get(&url, token)
            .query(&[("user_id", self.credentials.user_id.as_str())]);
        let response: StreamsResponse = send_json(request).await?;
        Ok(response.data)
    }

    fn authorized_get(&self, url: &str, token: &AuthToken) -> reqwest::RequestBuilder {
        self.http
            .get(url)
            .header(AUTHORIZATION, format!("Bearer {}", token.value))
            .header("Client-Id", &self.credentials.client_id)
    }
}
