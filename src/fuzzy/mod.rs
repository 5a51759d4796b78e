//! Ranked approximate matching over a frozen list of items.
//!
//! [`Fzf`] owns its items, picks the text to match from each one with a
//! selector, and ranks hits by score then by configurable tiebreakers. Scoring
//! is delegated to `nucleo-matcher`:
//!
//! | [`FuzzyMode`] | matcher call | behaviour |
//! |---|---|---|
//! | `Exact` | `substring_indices` | contiguous match only |
//! | `Strict` | `fuzzy_indices_greedy` | first left-to-right alignment, fewer loose hits |
//! | `Permissive` | `fuzzy_indices` | optimal alignment, most tolerant |
//!
//! Matching is smart-case: a query with no uppercase characters ignores case.

use std::cmp::Ordering;

use nucleo_matcher::{Config, Matcher, Utf32Str};

/// How tolerant matching is of gaps between query characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FuzzyMode {
    /// No fuzziness: the query must appear as a contiguous substring.
    Exact,
    /// Greedy fuzzy alignment. Suited to short queries.
    Strict,
    /// Optimal fuzzy alignment. Suited to longer queries.
    Permissive,
}

impl FuzzyMode {
    /// Picks the mode for a query of `query_length` characters.
    pub fn for_query_length(query_length: usize) -> Self {
        match query_length {
            0 => FuzzyMode::Exact,
            1..=3 => FuzzyMode::Strict,
            _ => FuzzyMode::Permissive,
        }
    }
}

/// Secondary ordering applied between results with equal score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tiebreaker {
    /// Prefer matches that start earlier in the selected text.
    ByStartAsc,
    /// Prefer shorter selected text.
    ByLengthAsc,
}

impl Tiebreaker {
    fn compare<T>(&self, a: &FzfResultItem<'_, T>, b: &FzfResultItem<'_, T>) -> Ordering {
        match self {
            Tiebreaker::ByStartAsc => a.start.cmp(&b.start),
            Tiebreaker::ByLengthAsc => a.text_len.cmp(&b.text_len),
        }
    }
}

/// Construction options for [`Fzf`].
pub struct FzfOptions<T> {
    /// Picks the text of an item that queries are matched against.
    pub selector: fn(&T) -> &str,
    /// Applied in order when scores are equal; item order breaks any remaining tie.
    pub tiebreakers: Vec<Tiebreaker>,
    /// Maximum number of results returned by [`Fzf::find`].
    pub limit: usize,
    pub mode: FuzzyMode,
}

/// One ranked hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FzfResultItem<'a, T> {
    pub item: &'a T,
    pub score: u32,
    /// Char index of the first matched character.
    pub start: usize,
    /// Char index one past the last matched character.
    pub end: usize,
    /// Char indices of every matched character, ascending.
    pub positions: Vec<usize>,
    index: usize,
    text_len: usize,
}

/// Matcher over a list of items that is fixed at construction.
pub struct Fzf<T> {
    items: Vec<T>,
    options: FzfOptions<T>,
}

impl<T> Fzf<T> {
    pub fn new(items: Vec<T>, options: FzfOptions<T>) -> Self {
        Self { items, options }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn mode(&self) -> FuzzyMode {
        self.options.mode
    }

    pub fn limit(&self) -> usize {
        self.options.limit
    }

    pub fn tiebreakers(&self) -> &[Tiebreaker] {
        &self.options.tiebreakers
    }

    /// Ranks the items against `query` and returns at most `limit` hits.
    ///
    /// An empty query matches everything with score 0, in item order.
    pub fn find(&self, query: &str) -> Vec<FzfResultItem<'_, T>> {
        let selector = self.options.selector;

        if query.is_empty() {
            return self
                .items
                .iter()
                .enumerate()
                .take(self.options.limit)
                .map(|(index, item)| FzfResultItem {
                    item,
                    score: 0,
                    start: 0,
                    end: 0,
                    positions: Vec::new(),
                    index,
                    text_len: selector(item).chars().count(),
                })
                .collect();
        }

        let ignore_case = !query.chars().any(char::is_uppercase);
        let needle_text = if ignore_case {
            query.to_lowercase()
        } else {
            query.to_string()
        };

        let mut config = Config::DEFAULT;
        config.ignore_case = ignore_case;
        config.normalize = false;
        let mut matcher = Matcher::new(config);

        let mut needle_buf = Vec::new();
        let needle = Utf32Str::new(&needle_text, &mut needle_buf);
        let mut haystack_buf = Vec::new();
        let mut indices = Vec::new();

        let mut results = Vec::new();
        for (index, item) in self.items.iter().enumerate() {
            let text = selector(item);
            let haystack = Utf32Str::new(text, &mut haystack_buf);
            indices.clear();

            let score = match self.options.mode {
                FuzzyMode::Exact => matcher.substring_indices(haystack, needle, &mut indices),
                FuzzyMode::Strict => matcher.fuzzy_indices_greedy(haystack, needle, &mut indices),
                FuzzyMode::Permissive => matcher.fuzzy_indices(haystack, needle, &mut indices),
            };
            let Some(score) = score else {
                continue;
            };

            let mut positions: Vec<usize> = indices.iter().map(|&i| i as usize).collect();
            positions.sort_unstable();
            positions.dedup();
            let start = positions.first().copied().unwrap_or(0);
            let end = positions.last().map_or(0, |last| last + 1);

            results.push(FzfResultItem {
                item,
                score: u32::from(score),
                start,
                end,
                positions,
                index,
                text_len: haystack.len(),
            });
        }

        results.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| {
                    self.options
                        .tiebreakers
                        .iter()
                        .map(|tb| tb.compare(a, b))
                        .find(|ord| *ord != Ordering::Equal)
                        .unwrap_or(Ordering::Equal)
                })
                .then_with(|| a.index.cmp(&b.index))
        });
        results.truncate(self.options.limit);
        results
    }
}
