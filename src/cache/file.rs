//! [`RowCache`] that persists each entry as a JSON file in a directory.
//!
//! A launcher runs the search helper once per keystroke, so an in-memory cache
//! would never see a second lookup. Entries written here survive the process
//! and are still subject to the same max age.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{CacheEntry, Clock, RowCache, SystemClock};
use crate::types::errors::CacheError;
use crate::types::history::HistoryRecord;

const ENTRY_EXTENSION: &str = "json";

/// Row cache storing one `<hex(key)>.json` file per entry under `dir`.
pub struct FileCache<C: Clock = SystemClock> {
    dir: PathBuf,
    clock: C,
}

impl FileCache<SystemClock> {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self::with_clock(dir, SystemClock)
    }
}

impl<C: Clock> FileCache<C> {
    pub fn with_clock<P: Into<PathBuf>>(dir: P, clock: C) -> Self {
        Self {
            dir: dir.into(),
            clock,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Keys hold arbitrary filter text, so they are hex-encoded into file names.
    fn entry_path(&self, key: &str) -> PathBuf {
        let name: String = key.bytes().map(|b| format!("{:02x}", b)).collect();
        self.dir.join(format!("{}.{}", name, ENTRY_EXTENSION))
    }
}

impl<C: Clock> RowCache for FileCache<C> {
    fn get(&self, key: &str) -> Result<Option<Vec<HistoryRecord>>, CacheError> {
        let path = self.entry_path(key);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(CacheError::Io(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        let entry: CacheEntry = serde_json::from_str(&content).map_err(|e| {
            CacheError::Serialization(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        if entry.key != key || entry.is_expired(self.clock.now_ms()) {
            // Stale files are harmless; a failed removal is just retried next time.
            let _ = fs::remove_file(&path);
            return Ok(None);
        }
        Ok(Some(entry.rows))
    }

    fn set(&self, key: &str, rows: &[HistoryRecord], max_age_ms: i64) -> Result<(), CacheError> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            CacheError::Io(format!(
                "Failed to create cache directory {}: {}",
                self.dir.display(),
                e
            ))
        })?;

        let entry = CacheEntry::new(key, rows, self.clock.now_ms(), max_age_ms);
        let json = serde_json::to_string(&entry)
            .map_err(|e| CacheError::Serialization(format!("Failed to encode entry: {}", e)))?;

        // Write then rename so a concurrent reader never sees a partial file.
        let path = self.entry_path(key);
        let tmp = path.with_extension(format!("{}.{}.tmp", ENTRY_EXTENSION, std::process::id()));
        fs::write(&tmp, json)
            .map_err(|e| CacheError::Io(format!("Failed to write {}: {}", tmp.display(), e)))?;
        fs::rename(&tmp, &path)
            .map_err(|e| CacheError::Io(format!("Failed to write {}: {}", path.display(), e)))?;
        Ok(())
    }

    fn clear(&self) -> Result<(), CacheError> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
            Err(e) => {
                return Err(CacheError::Io(format!(
                    "Failed to list {}: {}",
                    self.dir.display(),
                    e
                )))
            }
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) == Some(ENTRY_EXTENSION) {
                fs::remove_file(&path).map_err(|e| {
                    CacheError::Io(format!("Failed to remove {}: {}", path.display(), e))
                })?;
            }
        }
        Ok(())
    }
}
