//! Filesystem helpers shared across modules.
//!
//! Errors carry the operation and path. Writes of published documents go
//! through [`write_atomic`] so readers only ever see the old or the new file.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Convert an IO error into an application error with operation + path context.
pub fn io_error(op: &'static str, path: &Path, source: std::io::Error) -> Error {
    Error::io_path(op, path, source)
}

/// Ensure the parent directory of a file path exists.
pub async fn ensure_parent_dir(path: &Path) -> Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() {
        return Ok(());
    }
    tokio::fs::create_dir_all(parent)
        .await
        .map_err(|e| io_error("creating directory", parent, e))
}

/// Read a file into a string.
pub async fn read_to_string(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| io_error("reading", path, e))
}

/// Sibling path used while a write is in flight.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Replace `path` with `contents` via a sibling temp file and a rename.
///
/// The rename is atomic on the same filesystem, so a concurrent reader sees
/// either the previous file or the complete new one.
pub async fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    ensure_parent_dir(path).await?;

    let temp_path = temp_path_for(path);
    if let Err(e) = tokio::fs::write(&temp_path, contents).await {
        let _ = tokio::fs::remove_file(&temp_path).await;
        return Err(io_error("writing", &temp_path, e));
    }

    if let Err(e) = tokio::fs::rename(&temp_path, path).await {
        let _ = tokio::fs::remove_file(&temp_path).await;
        return Err(io_error("renaming", path, e));
    }

    Ok(())
}
