//! Integration tests for the stats refresh job against fake upstreams.

mod common;

use chrono::{DateTime, TimeZone, Utc};
use common::{Behavior, FakeUpstream, MEDIA_KIT, SEED_STATS, seeded_data_dir};
use linkhub::config::DataPaths;
use linkhub::stats::store::load_stats;
use linkhub::stats::{PlatformStat, RefreshReport, StatsRefresher};
use linkhub_upstream::build_client;
use serde_json::Value;
use std::time::Duration;

fn refresher(upstream: &FakeUpstream, data_dir: &std::path::Path) -> StatsRefresher {
    let config = upstream.config(data_dir);
    StatsRefresher::from_config(&config, build_client(config.refresh_timeout))
}

fn read_json(path: &std::path::Path) -> Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

fn at(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, hour, 0, 0).unwrap()
}

#[tokio::test]
async fn successful_run_rewrites_both_documents() {
    let upstream = FakeUpstream::spawn(Behavior::default()).await;
    let dir = seeded_data_dir();
    let paths = DataPaths::new(dir.path());

    let report = refresher(&upstream, dir.path()).run_once().await.unwrap();
    assert_eq!(report, RefreshReport::Updated { platforms: 2 });

    let doc = load_stats(&paths).await.unwrap();
    assert_eq!(
        doc.platforms,
        vec![
            PlatformStat::new("Twitch", 5120).with_live(false),
            PlatformStat::new("YouTube", 15300),
        ]
    );
    let seed: Value = serde_json::from_str(SEED_STATS).unwrap();
    let previous = DateTime::parse_from_rfc3339(seed["lastUpdated"].as_str().unwrap()).unwrap();
    assert!(doc.last_updated > previous);

    let kit = read_json(&paths.media_kit_path());
    assert_eq!(kit["stats"], serde_json::to_value(&doc.platforms).unwrap());
    assert_eq!(kit["lastUpdated"], read_json(&paths.stats_path())["lastUpdated"]);
}

#[tokio::test]
async fn media_kit_keeps_every_other_field() {
    let upstream = FakeUpstream::spawn(Behavior::default()).await;
    let dir = seeded_data_dir();
    let paths = DataPaths::new(dir.path());

    refresher(&upstream, dir.path()).run_once().await.unwrap();

    let before: Value = serde_json::from_str(MEDIA_KIT).unwrap();
    let after = read_json(&paths.media_kit_path());
    let before = before.as_object().unwrap();
    let after = after.as_object().unwrap();

    let before_keys: Vec<&String> = before.keys().collect();
    let after_keys: Vec<&String> = after.keys().collect();
    assert_eq!(before_keys, after_keys);

    for (key, value) in before {
        if key == "stats" || key == "lastUpdated" {
            continue;
        }
        assert_eq!(&after[key], value, "field {key} changed");
    }
}

#[tokio::test]
async fn live_channel_is_flagged() {
    let upstream = FakeUpstream::spawn(Behavior {
        live: true,
        ..Behavior::default()
    })
    .await;
    let dir = seeded_data_dir();

    refresher(&upstream, dir.path()).run_once().await.unwrap();

    let doc = load_stats(&DataPaths::new(dir.path())).await.unwrap();
    assert_eq!(doc.platforms[0].is_live, Some(true));
    assert_eq!(doc.platforms[1].is_live, None);
}

#[tokio::test]
async fn all_failures_leave_files_byte_identical() {
    let upstream = FakeUpstream::spawn(Behavior {
        followers: None,
        subscribers: None,
        ..Behavior::default()
    })
    .await;
    let dir = seeded_data_dir();
    let paths = DataPaths::new(dir.path());
    let stats_before = std::fs::read(paths.stats_path()).unwrap();
    let kit_before = std::fs::read(paths.media_kit_path()).unwrap();

    let report = refresher(&upstream, dir.path()).run_once().await.unwrap();

    assert_eq!(report, RefreshReport::Unchanged);
    assert_eq!(std::fs::read(paths.stats_path()).unwrap(), stats_before);
    assert_eq!(std::fs::read(paths.media_kit_path()).unwrap(), kit_before);
}

#[tokio::test]
async fn rejected_credentials_only_drop_twitch() {
    let upstream = FakeUpstream::spawn(Behavior {
        auth_ok: false,
        ..Behavior::default()
    })
    .await;
    let dir = seeded_data_dir();

    let report = refresher(&upstream, dir.path()).run_once().await.unwrap();
    assert_eq!(report, RefreshReport::Updated { platforms: 1 });

    let doc = load_stats(&DataPaths::new(dir.path())).await.unwrap();
    assert_eq!(doc.platforms, vec![PlatformStat::new("YouTube", 15300)]);
}

#[tokio::test]
async fn unconfigured_platform_is_skipped() {
    let upstream = FakeUpstream::spawn(Behavior::default()).await;
    let dir = seeded_data_dir();
    let mut config = upstream.config(dir.path());
    config.youtube = None;

    let refresher = StatsRefresher::from_config(&config, build_client(Duration::from_secs(5)));
    refresher.run_once().await.unwrap();

    let doc = load_stats(&DataPaths::new(dir.path())).await.unwrap();
    assert_eq!(doc.platforms, vec![PlatformStat::new("Twitch", 5120).with_live(false)]);
}

#[tokio::test]
async fn one_token_grant_per_run() {
    let upstream = FakeUpstream::spawn(Behavior::default()).await;
    let dir = seeded_data_dir();

    refresher(&upstream, dir.path()).run_once().await.unwrap();
    assert_eq!(upstream.grants(), 1);

    // A new run builds a new cache.
    refresher(&upstream, dir.path()).run_once().await.unwrap();
    assert_eq!(upstream.grants(), 2);
}

#[tokio::test]
async fn repeated_runs_differ_only_in_timestamp() {
    let upstream = FakeUpstream::spawn(Behavior::default()).await;
    let dir = seeded_data_dir();
    let paths = DataPaths::new(dir.path());

    let job = refresher(&upstream, dir.path());
    job.run_once_at(at(12)).await.unwrap();
    let stats_first = std::fs::read_to_string(paths.stats_path()).unwrap();
    let kit_first = std::fs::read_to_string(paths.media_kit_path()).unwrap();

    job.run_once_at(at(13)).await.unwrap();
    let stats_second = std::fs::read_to_string(paths.stats_path()).unwrap();
    let kit_second = std::fs::read_to_string(paths.media_kit_path()).unwrap();

    assert_ne!(stats_first, stats_second);
    let first_stamp = "2024-05-01T12:00:00.000Z";
    let second_stamp = "2024-05-01T13:00:00.000Z";
    assert_eq!(stats_first.replace(first_stamp, second_stamp), stats_second);
    assert_eq!(kit_first.replace(first_stamp, second_stamp), kit_second);
}

#[tokio::test]
async fn missing_media_kit_fails_without_writing() {
    let upstream = FakeUpstream::spawn(Behavior::default()).await;
    let dir = seeded_data_dir();
    let paths = DataPaths::new(dir.path());
    std::fs::remove_file(paths.media_kit_path()).unwrap();

    let result = refresher(&upstream, dir.path()).run_once().await;

    assert!(result.is_err());
    assert_eq!(std::fs::read_to_string(paths.stats_path()).unwrap(), SEED_STATS);
    assert!(!paths.media_kit_path().exists());
}

#[tokio::test]
async fn invalid_media_kit_fails_without_writing() {
    let upstream = FakeUpstream::spawn(Behavior::default()).await;
    let dir = seeded_data_dir();
    let paths = DataPaths::new(dir.path());
    std::fs::write(paths.media_kit_path(), "[\"not\", \"an object\"]").unwrap();

    let err = refresher(&upstream, dir.path()).run_once().await.unwrap_err();

    assert!(matches!(err, linkhub::Error::InvalidDocument { .. }));
    assert_eq!(std::fs::read_to_string(paths.stats_path()).unwrap(), SEED_STATS);
}
