//! Shared HTTP plumbing for upstream clients.

use std::sync::OnceLock;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::PlatformError;

/// User agent sent with every upstream request.
pub const DEFAULT_UA: &str = concat!("linkhub/", env!("CARGO_PKG_VERSION"));

/// Floor applied to configured request timeouts; a zero timeout is never unbounded.
pub const MIN_REQUEST_TIMEOUT: Duration = Duration::from_millis(100);

pub fn install_rustls_provider() {
    static PROVIDER_INSTALLED: OnceLock<()> = OnceLock::new();
    PROVIDER_INSTALLED.get_or_init(|| {
        if let Err(e) = rustls::crypto::aws_lc_rs::default_provider().install_default() {
            // Another crate may have installed one first.
            debug!(existing_provider = ?e, "rustls CryptoProvider already installed");
        }
    });
}

/// Build a `reqwest::Client` whose every request is bounded by `request_timeout`.
///
/// Timeouts below [`MIN_REQUEST_TIMEOUT`] are raised to it. A timed-out request
/// is dropped together with its connection.
pub fn build_client(request_timeout: Duration) -> reqwest::Client {
    install_rustls_provider();

    let request_timeout = request_timeout.max(MIN_REQUEST_TIMEOUT);
    let builder = reqwest::Client::builder()
        .user_agent(DEFAULT_UA)
        .timeout(request_timeout);

    builder.build().unwrap_or_else(|error| {
        warn!(
            error = %error,
            "Failed to create HTTP client; falling back to reqwest defaults"
        );
        reqwest::Client::builder()
            .timeout(request_timeout)
            .build()
            .unwrap_or_default()
    })
}

/// Send `request` and decode a 2xx JSON body into `T`.
///
/// Non-2xx responses become [`PlatformError::Upstream`] carrying the status and
/// the raw body; undecodable bodies become `Invalid JSON response`.
pub async fn send_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, PlatformError> {
    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(PlatformError::status(status, &body));
    }

    Ok(serde_json::from_str(&body)?)
}
