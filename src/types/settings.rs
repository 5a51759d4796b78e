use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::platform;

/// Path the launcher's script filter copies the browser history database to.
pub const DEFAULT_HISTORY_DB_PATH: &str = "/tmp/chrome-history.db";

/// How long a cached history query stays fresh.
pub const DEFAULT_CACHE_MAX_AGE_MS: i64 = 60_000;

pub const DEFAULT_HISTORY_LIMIT: usize = 1000;
pub const DEFAULT_RESULT_LIMIT: usize = 20;

/// How a domain filter is compared against the hostname of each URL.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum HostMatch {
    /// The hostname contains the filter anywhere (`"hub.com"` matches `github.com`).
    #[default]
    Contains,
    /// The hostname equals the filter.
    Exact,
}

/// Settings for history search, persisted as JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchSettings {
    pub history_db_path: PathBuf,
    pub cache_dir: PathBuf,
    pub cache_max_age_ms: i64,
    pub history_limit: usize,
    pub result_limit: usize,
    pub host_match: HostMatch,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            history_db_path: PathBuf::from(DEFAULT_HISTORY_DB_PATH),
            cache_dir: platform::get_cache_dir(),
            cache_max_age_ms: DEFAULT_CACHE_MAX_AGE_MS,
            history_limit: DEFAULT_HISTORY_LIMIT,
            result_limit: DEFAULT_RESULT_LIMIT,
            host_match: HostMatch::Contains,
        }
    }
}
