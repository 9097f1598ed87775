//! Reading and writing the published JSON documents.
//!
//! Writing is split in two phases. [`prepare_documents`] builds every output
//! in memory and fails before anything touches disk; [`commit`] then replaces
//! each file atomically.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use tracing::debug;

use super::models::{PlatformStat, StatsDocument};
use crate::config::DataPaths;
use crate::utils::fs::{read_to_string, write_atomic};
use crate::utils::time::format_timestamp;
use crate::{Error, Result};

const MEDIA_KIT_STATS_KEY: &str = "stats";
const MEDIA_KIT_UPDATED_KEY: &str = "lastUpdated";

/// A fully rendered document waiting to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingWrite {
    pub path: PathBuf,
    pub contents: Vec<u8>,
}

/// Pretty-printed JSON, two-space indent.
fn render<T: serde::Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(value)?)
}

/// Parse a media kit. Anything other than a JSON object is rejected.
pub fn parse_media_kit(raw: &str, path: &Path) -> Result<Map<String, Value>> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(Error::invalid_document(path, "expected a JSON object")),
        Err(e) => Err(Error::invalid_document(path, e.to_string())),
    }
}

/// Replace `stats` and `lastUpdated`, leaving every other field and the key
/// order untouched.
pub fn merge_media_kit(
    mut kit: Map<String, Value>,
    stats: &[PlatformStat],
    now: DateTime<Utc>,
) -> Result<Map<String, Value>> {
    kit.insert(MEDIA_KIT_STATS_KEY.to_string(), serde_json::to_value(stats)?);
    kit.insert(
        MEDIA_KIT_UPDATED_KEY.to_string(),
        Value::String(format_timestamp(now)),
    );
    Ok(kit)
}

/// Build the stats document and the updated media kit without writing.
///
/// Fails when the media kit is missing or malformed, in which case neither
/// document should be written.
pub async fn prepare_documents(
    paths: &DataPaths,
    stats: &[PlatformStat],
    now: DateTime<Utc>,
) -> Result<Vec<PendingWrite>> {
    let document = StatsDocument::new(stats.to_vec(), now);
    let stats_write = PendingWrite {
        path: paths.stats_path(),
        contents: render(&document)?,
    };

    let kit_path = paths.media_kit_path();
    let raw = read_to_string(&kit_path).await?;
    let kit = merge_media_kit(parse_media_kit(&raw, &kit_path)?, stats, now)?;
    let kit_write = PendingWrite {
        path: kit_path,
        contents: render(&kit)?,
    };

    Ok(vec![stats_write, kit_write])
}

/// Write each pending document in order.
pub async fn commit(writes: &[PendingWrite]) -> Result<()> {
    for write in writes {
        write_atomic(&write.path, &write.contents).await?;
        debug!(path = %write.path.display(), bytes = write.contents.len(), "Wrote document");
    }
    Ok(())
}

/// Read the current stats document, if present.
pub async fn load_stats(paths: &DataPaths) -> Result<StatsDocument> {
    let path = paths.stats_path();
    let raw = read_to_string(&path).await?;
    serde_json::from_str(&raw).map_err(|e| Error::invalid_document(&path, e.to_string()))
}
