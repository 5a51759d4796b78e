//! In-process [`RowCache`] backed by a `HashMap`.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{CacheEntry, Clock, RowCache, SystemClock};
use crate::types::errors::CacheError;
use crate::types::history::HistoryRecord;

/// Row cache living in process memory. Expired entries are evicted on read.
pub struct MemoryCache<C: Clock = SystemClock> {
    entries: Mutex<HashMap<String, CacheEntry>>,
    clock: C,
}

impl MemoryCache<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for MemoryCache<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> MemoryCache<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            clock,
        }
    }

    /// Number of entries currently held, including ones not yet evicted.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // Entries are plain data, so a panic mid-update cannot leave one half-written.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, CacheEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<C: Clock> RowCache for MemoryCache<C> {
    fn get(&self, key: &str) -> Result<Option<Vec<HistoryRecord>>, CacheError> {
        let now = self.clock.now_ms();
        let mut entries = self.lock();
        let expired = match entries.get(key) {
            Some(entry) => entry.is_expired(now),
            None => return Ok(None),
        };
        if expired {
            entries.remove(key);
            return Ok(None);
        }
        Ok(entries.get(key).map(|entry| entry.rows.clone()))
    }

    fn set(&self, key: &str, rows: &[HistoryRecord], max_age_ms: i64) -> Result<(), CacheError> {
        let entry = CacheEntry::new(key, rows, self.clock.now_ms(), max_age_ms);
        self.lock().insert(key.to_string(), entry);
        Ok(())
    }

    fn clear(&self) -> Result<(), CacheError> {
        self.lock().clear();
        Ok(())
    }
}
