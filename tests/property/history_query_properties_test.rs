//! Property-based tests for the cached history query.
//!
//! For arbitrary visit tables, filters and limits, the rows returned must be a
//! recency-ordered, title-unique, host-filtered prefix of the table, and a
//! repeated lookup must be served from the cache.

use std::collections::{HashMap, HashSet};

use history_fzf::cache::{ManualClock, MemoryCache};
use history_fzf::database::functions::{extract_hostname, unix_ms_to_chrome_time};
use history_fzf::database::schema::insert_url;
use history_fzf::database::HistoryStore;
use history_fzf::services::history_query::{HistoryQueryCache, HistorySource};
use history_fzf::types::history::HistoryRecord;
use proptest::prelude::*;

const BASE_MS: i64 = 1_650_000_000_000;

const TITLES: &[&str] = &["GitHub", "Rust", "Docs", "Issues", "Home", "Gist"];
const HOSTS: &[&str] = &[
    "github.com",
    "gist.github.com",
    "docs.rs",
    "rust-lang.org",
    "hub.com.example",
];
const FILTERS: &[&str] = &["github.com", "hub.com", "rs", "rust", ".", "nothing.test"];

#[derive(Debug, Clone)]
struct Visit {
    title: Option<&'static str>,
    url: String,
}

fn arb_visit() -> impl Strategy<Value = Visit> {
    (
        proptest::option::weighted(0.9, proptest::sample::select(TITLES)),
        proptest::sample::select(HOSTS),
        "[a-z]{0,6}",
        any::<bool>(),
    )
        .prop_map(|(title, host, path, malformed)| Visit {
            title,
            url: if malformed {
                format!("{}/{}", host, path)
            } else {
                format!("https://{}/{}", host, path)
            },
        })
}

/// Straightforward in-memory version of the query, used as the oracle.
fn expected_rows(visits: &[(Visit, i64)], filter: &str, limit: usize) -> Vec<HistoryRecord> {
    let mut latest: HashMap<&str, (&str, i64)> = HashMap::new();
    for (visit, ms) in visits {
        let Some(title) = visit.title else { continue };
        let Some(host) = extract_hostname(&visit.url) else { continue };
        if !host.contains(filter) {
            continue;
        }
        let entry = latest.entry(title).or_insert((visit.url.as_str(), *ms));
        if *ms > entry.1 {
            *entry = (visit.url.as_str(), *ms);
        }
    }

    let mut rows: Vec<HistoryRecord> = latest
        .into_iter()
        .map(|(title, (url, ms))| HistoryRecord {
            title: title.to_string(),
            url: url.to_string(),
            visit_time: ms,
        })
        .collect();
    rows.sort_by(|a, b| b.visit_time.cmp(&a.visit_time));
    rows.truncate(limit);
    rows
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn history_rows_match_the_reference_query(
        visits in proptest::collection::vec(arb_visit(), 0..40),
        filter in proptest::sample::select(FILTERS),
        limit in 1usize..12,
    ) {
        let store = HistoryStore::open_in_memory().expect("Failed to open in-memory store");
        // Distinct second-precision times so recency ordering is total.
        let timed: Vec<(Visit, i64)> = visits
            .into_iter()
            .enumerate()
            .map(|(i, v)| (v, BASE_MS + (i as i64) * 1000))
            .collect();
        for (visit, ms) in &timed {
            insert_url(store.connection(), &visit.url, visit.title, unix_ms_to_chrome_time(*ms))
                .expect("insert should succeed");
        }

        let clock = ManualClock::new(BASE_MS);
        let cache = MemoryCache::with_clock(clock.clone());
        let query = HistoryQueryCache::new(&store, &cache);
        let rows = query.get_history_rows(filter, limit).expect("query should succeed");

        prop_assert!(rows.len() <= limit);

        let titles: HashSet<&str> = rows.iter().map(|r| r.title.as_str()).collect();
        prop_assert_eq!(titles.len(), rows.len(), "titles must be unique");

        for row in &rows {
            let host = extract_hostname(&row.url);
            prop_assert!(
                host.map_or(false, |h| h.contains(filter)),
                "host of {} should contain {}",
                row.url,
                filter
            );
        }

        prop_assert!(rows.windows(2).all(|w| w[0].visit_time >= w[1].visit_time));
        prop_assert_eq!(&rows, &expected_rows(&timed, filter, limit));

        // Within the window the store is not consulted again.
        insert_url(
            store.connection(),
            &format!("https://{}/fresh", HOSTS[0]),
            Some("Fresh"),
            unix_ms_to_chrome_time(BASE_MS + 10_000_000),
        )
        .expect("insert should succeed");
        clock.advance(30_000);
        let again = query.get_history_rows(filter, limit).expect("query should succeed");
        prop_assert_eq!(rows, again);
    }
}
