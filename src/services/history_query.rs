//! History Query Cache.
//!
//! Looks up the most recent visit per distinct title among history rows whose
//! hostname matches a domain filter, serving repeated lookups from a
//! [`RowCache`] until the entry's max age passes.

use rusqlite::params;

use crate::cache::RowCache;
use crate::database::functions::chrome_time_to_unix_ms;
use crate::database::HistoryStore;
use crate::types::errors::{CacheError, HistoryQueryError};
use crate::types::history::HistoryRecord;
use crate::types::settings::{HostMatch, DEFAULT_CACHE_MAX_AGE_MS};

/// Prefix of every cache key written by this module.
pub const CACHE_KEY_PREFIX: &str = "history-rows";

// Bare `url` and `title` columns take their values from the row holding
// MAX(last_visit_time), so each title keeps its most recent visit.
const CONTAINS_QUERY: &str = "SELECT title, url, MAX(last_visit_time) AS last_visit \
     FROM urls \
     WHERE title IS NOT NULL AND instr(url_host(url), ?1) > 0 \
     GROUP BY title \
     ORDER BY last_visit DESC \
     LIMIT ?2";

const EXACT_QUERY: &str = "SELECT title, url, MAX(last_visit_time) AS last_visit \
     FROM urls \
     WHERE title IS NOT NULL AND url_host(url) = ?1 \
     GROUP BY title \
     ORDER BY last_visit DESC \
     LIMIT ?2";

/// Anything that can produce candidate rows for a domain.
pub trait HistorySource {
    fn get_history_rows(
        &self,
        domain_filter: &str,
        history_limit: usize,
    ) -> Result<Vec<HistoryRecord>, HistoryQueryError>;
}

/// History lookups backed by a [`HistoryStore`] and fronted by a [`RowCache`].
pub struct HistoryQueryCache<'a> {
    store: &'a HistoryStore,
    cache: &'a dyn RowCache,
    max_age_ms: i64,
    host_match: HostMatch,
}

impl<'a> HistoryQueryCache<'a> {
    /// Creates a query cache with a 60 second max age and substring host matching.
    pub fn new(store: &'a HistoryStore, cache: &'a dyn RowCache) -> Self {
        Self {
            store,
            cache,
            max_age_ms: DEFAULT_CACHE_MAX_AGE_MS,
            host_match: HostMatch::Contains,
        }
    }

    pub fn with_max_age(mut self, max_age_ms: i64) -> Self {
        self.max_age_ms = max_age_ms;
        self
    }

    pub fn with_host_match(mut self, host_match: HostMatch) -> Self {
        self.host_match = host_match;
        self
    }

    /// Builds the cache key for a lookup.
    pub fn cache_key(&self, domain_filter: &str, history_limit: usize) -> String {
        match self.host_match {
            HostMatch::Contains => {
                format!("{}-{}-{}", CACHE_KEY_PREFIX, domain_filter, history_limit)
            }
            HostMatch::Exact => {
                format!("{}-exact-{}-{}", CACHE_KEY_PREFIX, domain_filter, history_limit)
            }
        }
    }

    fn query_store(
        &self,
        domain_filter: &str,
        history_limit: usize,
    ) -> Result<Vec<HistoryRecord>, HistoryQueryError> {
        let sql = match self.host_match {
            HostMatch::Contains => CONTAINS_QUERY,
            HostMatch::Exact => EXACT_QUERY,
        };
        let limit = i64::try_from(history_limit).unwrap_or(i64::MAX);

        let mut stmt = self.store.connection().prepare_cached(sql)?;
        let rows = stmt.query_map(params![domain_filter, limit], |row| {
            let last_visit: i64 = row.get(2)?;
            Ok(HistoryRecord {
                title: row.get(0)?,
                url: row.get(1)?,
                visit_time: chrome_time_to_unix_ms(last_visit),
            })
        })?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row?);
        }
        Ok(results)
    }

    fn cached(&self, key: &str) -> Option<Vec<HistoryRecord>> {
        match self.cache.get(key) {
            Ok(rows) => rows,
            Err(e) => {
                log_cache_error("read", key, &e);
                None
            }
        }
    }
}

fn log_cache_error(op: &str, key: &str, err: &CacheError) {
    tracing::warn!(key, error = %err, "History cache {} failed", op);
}

impl HistorySource for HistoryQueryCache<'_> {
    /// Returns up to `history_limit` rows, most recently visited first, one per
    /// title, whose hostname matches `domain_filter`.
    ///
    /// A cached result younger than the max age is returned unchanged without
    /// touching the store.
    ///
    /// # Errors
    /// `InvalidArgument` if `history_limit` is zero, `StoreUnavailable` if the
    /// history database cannot be queried.
    fn get_history_rows(
        &self,
        domain_filter: &str,
        history_limit: usize,
    ) -> Result<Vec<HistoryRecord>, HistoryQueryError> {
        if history_limit == 0 {
            return Err(HistoryQueryError::InvalidArgument(
                "history limit must be positive".to_string(),
            ));
        }

        let key = self.cache_key(domain_filter, history_limit);
        if let Some(rows) = self.cached(&key) {
            tracing::debug!(key = %key, rows = rows.len(), "History cache hit");
            return Ok(rows);
        }

        let rows = self.query_store(domain_filter, history_limit).map_err(|e| {
            tracing::error!(domain = domain_filter, error = %e, "History query failed");
            e
        })?;
        tracing::debug!(key = %key, rows = rows.len(), "History cache miss, queried store");

        if let Err(e) = self.cache.set(&key, &rows, self.max_age_ms) {
            log_cache_error("write", &key, &e);
        }
        Ok(rows)
    }
}
