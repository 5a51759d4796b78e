//! Fuzzy Matcher Factory.
//!
//! Turns the candidate rows for a domain into a ready-to-query [`Fzf`] whose
//! strictness follows the length of what the user has typed so far.

use crate::fuzzy::{FuzzyMode, Fzf, FzfOptions, Tiebreaker};
use crate::services::history_query::HistorySource;
use crate::types::errors::HistoryQueryError;
use crate::types::history::HistoryRecord;

fn record_title(record: &HistoryRecord) -> &str {
    &record.title
}

/// Builds title matchers over rows from a [`HistorySource`].
pub struct MatcherFactory<'a> {
    source: &'a dyn HistorySource,
}

impl<'a> MatcherFactory<'a> {
    pub fn new(source: &'a dyn HistorySource) -> Self {
        Self { source }
    }

    /// Fetches candidate rows and wraps them in a matcher.
    ///
    /// The matcher matches against `title`, prefers earlier match starts on
    /// equal score and returns at most `result_limit` hits. Its rows are
    /// fixed at construction; matching runs only when the caller queries it.
    ///
    /// # Errors
    /// `InvalidArgument` for a zero limit (checked before any lookup), and
    /// whatever the history source returns.
    pub fn create_matcher(
        &self,
        domain_filter: &str,
        query_length: usize,
        history_limit: usize,
        result_limit: usize,
    ) -> Result<Fzf<HistoryRecord>, HistoryQueryError> {
        if history_limit == 0 {
            return Err(HistoryQueryError::InvalidArgument(
                "history limit must be positive".to_string(),
            ));
        }
        if result_limit == 0 {
            return Err(HistoryQueryError::InvalidArgument(
                "result limit must be positive".to_string(),
            ));
        }

        let rows = self.source.get_history_rows(domain_filter, history_limit)?;
        let mode = FuzzyMode::for_query_length(query_length);
        tracing::debug!(
            domain = domain_filter,
            candidates = rows.len(),
            ?mode,
            "Built history matcher"
        );

        Ok(Fzf::new(
            rows,
            FzfOptions {
                selector: record_title,
                tiebreakers: vec![Tiebreaker::ByStartAsc],
                limit: result_limit,
                mode,
            },
        ))
    }
}
