use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use cardfill_logging::admin_info;
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::error::StoreError;
use crate::models::Snapshot;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("directory {path:?} missing or not writable: {reason}")]
    Directory { path: PathBuf, reason: String },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Ensure `dir` exists and accepts new files; create it if missing.
pub fn ensure_dir(dir: &Path) -> Result<(), PersistError> {
    let fail = |reason: String| PersistError::Directory {
        path: dir.to_path_buf(),
        reason,
    };
    if dir.exists() {
        if !fs::metadata(dir).map_err(|e| fail(e.to_string()))?.is_dir() {
            return Err(fail("path is not a directory".into()));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| fail(e.to_string()))?;
    }
    // Writability probe.
    NamedTempFile::new_in(dir).map_err(|e| fail(e.to_string()))?;
    Ok(())
}

/// Replace `path` with `content` through a temp file in the same directory,
/// so readers never observe a half-written file.
pub fn write_atomically(path: &Path, content: &str) -> Result<(), PersistError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    ensure_dir(&dir)?;

    let mut tmp = NamedTempFile::new_in(&dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    tmp.as_file_mut().sync_all()?;
    tmp.persist(path).map_err(|e| PersistError::Io(e.error))?;
    Ok(())
}

/// Read a JSON snapshot from disk.
pub fn load_snapshot(path: &Path) -> Result<Snapshot, StoreError> {
    let text = fs::read_to_string(path).map_err(|source| StoreError::Unavailable {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| StoreError::Corrupt {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `snapshot` as pretty JSON, atomically.
pub fn save_snapshot(path: &Path, snapshot: &Snapshot) -> Result<(), StoreError> {
    let text = serde_json::to_string_pretty(snapshot).map_err(StoreError::Serialize)?;
    write_atomically(path, &text)?;
    admin_info!(
        "Saved snapshot to {:?} ({} users, {} cards)",
        path,
        snapshot.users.len(),
        snapshot.cards.len()
    );
    Ok(())
}
