//! Short-lived caching of history query results.
//!
//! [`RowCache`] is the capability the query layer depends on; any store that
//! can `get` and `set` with a per-entry max age satisfies it. Two are provided:
//! [`MemoryCache`] for long-lived processes and [`FileCache`] for launchers
//! that spawn a fresh process per keystroke.

pub mod file;
pub mod memory;

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::errors::CacheError;
use crate::types::history::HistoryRecord;

pub use file::FileCache;
pub use memory::MemoryCache;

/// Key/value store for query results with per-entry expiry.
pub trait RowCache: Send + Sync {
    /// Returns the rows stored under `key`, or `None` if absent or expired.
    fn get(&self, key: &str) -> Result<Option<Vec<HistoryRecord>>, CacheError>;
    /// Stores `rows` under `key`, replacing any previous entry.
    fn set(&self, key: &str, rows: &[HistoryRecord], max_age_ms: i64) -> Result<(), CacheError>;
    /// Drops every entry.
    fn clear(&self) -> Result<(), CacheError>;
}

/// Source of "now" in Unix milliseconds.
pub trait Clock: Send + Sync {
    fn now_ms(&self) -> i64;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as i64
    }
}

/// A clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<AtomicI64>,
}

impl ManualClock {
    pub fn new(start_ms: i64) -> Self {
        Self {
            now: Arc::new(AtomicI64::new(start_ms)),
        }
    }

    pub fn advance(&self, ms: i64) {
        self.now.fetch_add(ms, Ordering::SeqCst);
    }

    pub fn set(&self, ms: i64) {
        self.now.store(ms, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}

/// A cached result together with the instant it stops being valid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct CacheEntry {
    pub key: String,
    pub expires_at: i64,
    pub rows: Vec<HistoryRecord>,
}

impl CacheEntry {
    pub fn new(key: &str, rows: &[HistoryRecord], now_ms: i64, max_age_ms: i64) -> Self {
        Self {
            key: key.to_string(),
            expires_at: now_ms.saturating_add(max_age_ms),
            rows: rows.to_vec(),
        }
    }

    /// An entry is stale once it is older than its max age.
    pub fn is_expired(&self, now_ms: i64) -> bool {
        now_ms > self.expires_at
    }
}
