//! Fake Twitch and YouTube upstreams served from a local axum listener.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
};
use linkhub::config::{AppConfig, DataPaths, UpstreamEndpoints};
use linkhub_upstream::twitch::{TwitchCredentials, TwitchEndpoints};
use linkhub_upstream::youtube::YouTubeCredentials;
use std::collections::HashMap;
use tokio::net::TcpListener;

/// How the fake upstream answers.
#[derive(Debug, Clone)]
pub struct Behavior {
    pub auth_ok: bool,
    /// `None` answers the followers endpoint with a 500.
    pub followers: Option<u64>,
    pub live: bool,
    /// `None` answers with an empty `items` list.
    pub subscribers: Option<String>,
    pub streams_delay: Duration,
}

impl Default for Behavior {
    fn default() -> Self {
        Self {
            auth_ok: true,
            followers: Some(5120),
            live: false,
            subscribers: Some("15300".to_string()),
            streams_delay: Duration::ZERO,
        }
    }
}

#[derive(Clone)]
struct Shared {
    behavior: Arc<Behavior>,
    grants: Arc<AtomicUsize>,
    stream_calls: Arc<AtomicUsize>,
}

pub struct FakeUpstream {
    pub addr: SocketAddr,
    grants: Arc<AtomicUsize>,
    stream_calls: Arc<AtomicUsize>,
}

impl FakeUpstream {
    pub async fn spawn(behavior: Behavior) -> Self {
        let shared = Shared {
            behavior: Arc::new(behavior),
            grants: Arc::new(AtomicUsize::new(0)),
            stream_calls: Arc::new(AtomicUsize::new(0)),
        };

        let app = Router::new()
            .route("/oauth2/token", post(token))
            .route("/helix/channels/followers", get(followers))
            .route("/helix/streams", get(streams))
            .route("/youtube/channels", get(channels))
            .with_state(shared.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            grants: shared.grants,
            stream_calls: shared.stream_calls,
        }
    }

    pub fn grants(&self) -> usize {
        self.grants.load(Ordering::SeqCst)
    }

    pub fn stream_calls(&self) -> usize {
        self.stream_calls.load(Ordering::SeqCst)
    }

    pub fn endpoints(&self) -> UpstreamEndpoints {
        UpstreamEndpoints {
            twitch: TwitchEndpoints {
                auth_url: format!("http://{}/oauth2/token", self.addr),
                api_url: format!("http://{}/helix", self.addr),
            },
            youtube_api_url: format!("http://{}/youtube", self.addr),
        }
    }

    /// Config with both platforms configured against this upstream.
    pub fn config(&self, data_dir: &Path) -> AppConfig {
        AppConfig {
            data: DataPaths::new(data_dir),
            twitch: Some(twitch_credentials()),
            youtube: Some(YouTubeCredentials {
                api_key: "key".to_string(),
                channel_id: "UC123".to_string(),
            }),
            endpoints: self.endpoints(),
            ..AppConfig::default()
        }
    }
}

pub fn twitch_credentials() -> TwitchCredentials {
    TwitchCredentials {
        client_id: "cid".to_string(),
        client_secret: "secret".to_string(),
        user_id: "42".to_string(),
    }
}

async fn token(State(shared): State<Shared>) -> (StatusCode, String) {
    shared.grants.fetch_add(1, Ordering::SeqCst);
    if shared.behavior.auth_ok {
        (
            StatusCode::OK,
            r#"{"access_token":"app-token","expires_in":5011271,"token_type":"bearer"}"#.to_string(),
        )
    } else {
        (
            StatusCode::BAD_REQUEST,
            r#"{"status":400,"message":"invalid client secret"}"#.to_string(),
        )
    }
}

async fn followers(State(shared): State<Shared>) -> (StatusCode, String) {
    match shared.behavior.followers {
        Some(total) => (StatusCode::OK, format!(r#"{{"total":{total},"data":[]}}"#)),
        None => (StatusCode::INTERNAL_SERVER_ERROR, "upstream down".to_string()),
    }
}

async fn streams(State(shared): State<Shared>) -> String {
    shared.stream_calls.fetch_add(1, Ordering::SeqCst);
    if !shared.behavior.streams_delay.is_zero() {
        tokio::time::sleep(shared.behavior.streams_delay).await;
    }
    if shared.behavior.live {
        r#"{"data":[{"id":"1","user_login":"creator","title":"Any% practice","game_name":"Celeste","viewer_count":88,"started_at":"2024-05-01T10:00:00Z","type":"live"}]}"#
            .to_string()
    } else {
        r#"{"data":[]}"#.to_string()
    }
}

async fn channels(
    State(shared): State<Shared>,
    Query(q): Query<HashMap<String, String>>,
) -> String {
    match (&shared.behavior.subscribers, q.get("id").map(String::as_str)) {
        (Some(count), Some("UC123")) => format!(
            r#"{{"items":[{{"id":"UC123","statistics":{{"subscriberCount":"{count}","hiddenSubscriberCount":false}}}}]}}"#
        ),
        _ => r#"{"items":[]}"#.to_string(),
    }
}

pub const MEDIA_KIT: &str = r#"{
  "name": "Example Creator",
  "tagline": "Speedruns and chill",
  "bio": "Streaming since 2019.",
  "stats": [],
  "audience": {"regions": ["NA", "EU"], "ageRange": "18-34"},
  "contact": {"email": "business@example.com"},
  "lastUpdated": "2024-01-01T00:00:00.000Z"
}"#;

pub const SEED_STATS: &str = r#"{
  "platforms": [
    {"platform": "Twitch", "followers": 5000, "isLive": false},
    {"platform": "YouTube", "followers": 15000}
  ],
  "lastUpdated": "2024-01-01T00:00:00.000Z"
}"#;

/// Data directory holding the seed stats and media kit.
pub fn seeded_data_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("social.stats.json"), SEED_STATS).unwrap();
    std::fs::write(dir.path().join("media.kit.json"), MEDIA_KIT).unwrap();
    dir
}
