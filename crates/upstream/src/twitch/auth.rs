//! Twitch app access tokens via the OAuth client-credentials grant.

use async_trait::async_trait;
use tracing::debug;

use super::models::TokenResponse;
use crate::error::PlatformError;
use crate::token::TokenSource;

/// Exchanges a client id / secret pair for an app access token.
#[derive(Clone)]
pub struct ClientCredentialsGrant {
    client: reqwest::Client,
    auth_url: String,
    client_id: String,
    client_secret: String,
}

impl ClientCredentialsGrant {
    pub fn new(
        client: reqwest::Client,
        auth_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            client,
            auth_url: auth_url.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    async fn exchange(&self) -> Result<String, PlatformError> {
        let response = self
            .client
            .post(&self.auth_url)
            .query(&[
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("grant_type", "client_credentials"),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if status != reqwest::StatusCode::OK {
            return Err(PlatformError::auth(format!("Twitch auth failed: {body}")));
        }

        let token: TokenResponse = serde_json::from_str(&body)?;
        debug!(expires_in = ?token.expires_in, "Twitch app token issued");
        Ok(token.access_token)
    }
}

#[async_trait]
impl TokenSource for ClientCredentialsGrant {
    async fn request_token(&self) -> Result<String, PlatformError> {
        self.exchange().await.map_err(|e| match e {
            PlatformError::Auth(_) => e,
            other => PlatformError::auth(format!("Twitch auth failed: {other}")),
        })
    }
}
