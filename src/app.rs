//! App Core for history-fzf.
//!
//! Owns the history store, the row cache and the active settings, and wires
//! them into the query and matcher services for each request.

use serde::Serialize;

use crate::cache::{FileCache, RowCache};
use crate::database::HistoryStore;
use crate::services::history_query::{HistoryQueryCache, HistorySource};
use crate::services::matcher_factory::MatcherFactory;
use crate::types::errors::HistoryQueryError;
use crate::types::history::HistoryRecord;
use crate::types::settings::SearchSettings;

/// One ranked search result, shaped for a launcher result list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub title: String,
    pub url: String,
    pub visit_time: i64,
    pub score: u32,
    /// Char indices of the matched title characters.
    pub positions: Vec<usize>,
}

/// Central struct holding the resources shared by every request.
pub struct App {
    pub settings: SearchSettings,
    pub store: HistoryStore,
    pub cache: Box<dyn RowCache>,
}

impl App {
    /// Opens the history database and file cache named in `settings`.
    ///
    /// # Errors
    /// `StoreUnavailable` if the history database cannot be opened.
    pub fn new(settings: SearchSettings) -> Result<Self, HistoryQueryError> {
        let store = HistoryStore::open(&settings.history_db_path).map_err(|e| {
            HistoryQueryError::StoreUnavailable(format!(
                "{}: {}",
                settings.history_db_path.display(),
                e
            ))
        })?;
        let cache = Box::new(FileCache::new(settings.cache_dir.clone()));
        tracing::info!(
            db = %settings.history_db_path.display(),
            cache_dir = %settings.cache_dir.display(),
            "Opened history store"
        );
        Ok(Self::with_parts(settings, store, cache))
    }

    /// Assembles an app from already-constructed parts.
    pub fn with_parts(
        settings: SearchSettings,
        store: HistoryStore,
        cache: Box<dyn RowCache>,
    ) -> Self {
        Self {
            settings,
            store,
            cache,
        }
    }

    /// Returns the cached history query service configured from settings.
    pub fn history_query(&self) -> HistoryQueryCache<'_> {
        HistoryQueryCache::new(&self.store, self.cache.as_ref())
            .with_max_age(self.settings.cache_max_age_ms)
            .with_host_match(self.settings.host_match)
    }

    /// Returns the candidate rows for `domain`.
    pub fn rows(
        &self,
        domain: &str,
        history_limit: usize,
    ) -> Result<Vec<HistoryRecord>, HistoryQueryError> {
        self.history_query().get_history_rows(domain, history_limit)
    }

    /// Fuzzy-searches the titles of `domain`'s history for `query`.
    pub fn search(
        &self,
        domain: &str,
        query: &str,
        history_limit: usize,
        result_limit: usize,
    ) -> Result<Vec<SearchHit>, HistoryQueryError> {
        let source = self.history_query();
        let factory = MatcherFactory::new(&source);
        let matcher = factory.create_matcher(
            domain,
            query.chars().count(),
            history_limit,
            result_limit,
        )?;

        Ok(matcher
            .find(query)
            .into_iter()
            .map(|hit| SearchHit {
                title: hit.item.title.clone(),
                url: hit.item.url.clone(),
                visit_time: hit.item.visit_time,
                score: hit.score,
                positions: hit.positions,
            })
            .collect())
    }
}
