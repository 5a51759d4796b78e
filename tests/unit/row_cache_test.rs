//! Unit tests for the row cache implementations.
//!
//! Both caches are driven by a `ManualClock` so expiry can be tested without sleeping.

use history_fzf::cache::{FileCache, ManualClock, MemoryCache, RowCache};
use history_fzf::types::history::HistoryRecord;
use tempfile::TempDir;

const START: i64 = 1_700_000_000_000;
const MAX_AGE: i64 = 60_000;

fn rows() -> Vec<HistoryRecord> {
    vec![
        HistoryRecord {
            title: "GitHub".to_string(),
            url: "https://github.com/b".to_string(),
            visit_time: START,
        },
        HistoryRecord {
            title: "Gist".to_string(),
            url: "https://gist.github.com/x".to_string(),
            visit_time: START - 1000,
        },
    ]
}

/// Shared expectations for any `RowCache`.
fn check_expiry(cache: &dyn RowCache, clock: &ManualClock) {
    assert_eq!(cache.get("k").unwrap(), None);

    cache.set("k", &rows(), MAX_AGE).unwrap();
    assert_eq!(cache.get("k").unwrap(), Some(rows()));

    clock.advance(MAX_AGE);
    assert_eq!(
        cache.get("k").unwrap(),
        Some(rows()),
        "an entry exactly max-age old is still fresh"
    );

    clock.advance(1);
    assert_eq!(cache.get("k").unwrap(), None, "an older entry is a miss");
}

fn check_keys_are_independent(cache: &dyn RowCache) {
    cache.set("history-rows-github.com-10", &rows(), MAX_AGE).unwrap();
    assert_eq!(cache.get("history-rows-github.com-20").unwrap(), None);
    assert_eq!(cache.get("history-rows-github.co-10").unwrap(), None);

    cache.set("history-rows-github.com-20", &rows()[..1], MAX_AGE).unwrap();
    assert_eq!(cache.get("history-rows-github.com-10").unwrap().unwrap().len(), 2);
    assert_eq!(cache.get("history-rows-github.com-20").unwrap().unwrap().len(), 1);
}

fn check_clear(cache: &dyn RowCache) {
    cache.set("a", &rows(), MAX_AGE).unwrap();
    cache.set("b", &rows(), MAX_AGE).unwrap();
    cache.clear().unwrap();
    assert_eq!(cache.get("a").unwrap(), None);
    assert_eq!(cache.get("b").unwrap(), None);
}

// ─── MemoryCache ───

#[test]
fn test_memory_cache_expiry() {
    let clock = ManualClock::new(START);
    let cache = MemoryCache::with_clock(clock.clone());
    check_expiry(&cache, &clock);
    assert!(cache.is_empty(), "expired entries are evicted on read");
}

#[test]
fn test_memory_cache_keys_are_independent() {
    check_keys_are_independent(&MemoryCache::new());
}

#[test]
fn test_memory_cache_clear() {
    let cache = MemoryCache::new();
    check_clear(&cache);
    assert_eq!(cache.len(), 0);
}

#[test]
fn test_memory_cache_set_replaces_and_restarts_expiry() {
    let clock = ManualClock::new(START);
    let cache = MemoryCache::with_clock(clock.clone());
    cache.set("k", &rows(), MAX_AGE).unwrap();

    clock.advance(50_000);
    cache.set("k", &rows()[..1], MAX_AGE).unwrap();

    clock.advance(50_000);
    assert_eq!(cache.get("k").unwrap(), Some(rows()[..1].to_vec()));
}

#[test]
fn test_memory_cache_empty_rows_are_a_hit() {
    let cache = MemoryCache::new();
    cache.set("empty", &[], MAX_AGE).unwrap();
    assert_eq!(cache.get("empty").unwrap(), Some(Vec::new()));
}

// ─── FileCache ───

#[test]
fn test_file_cache_expiry() {
    let tmp = TempDir::new().unwrap();
    let clock = ManualClock::new(START);
    let cache = FileCache::with_clock(tmp.path().join("cache"), clock.clone());
    check_expiry(&cache, &clock);
}

#[test]
fn test_file_cache_keys_are_independent() {
    let tmp = TempDir::new().unwrap();
    check_keys_are_independent(&FileCache::new(tmp.path()));
}

#[test]
fn test_file_cache_clear() {
    let tmp = TempDir::new().unwrap();
    let cache = FileCache::new(tmp.path());
    check_clear(&cache);
    assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
}

#[test]
fn test_file_cache_clear_without_directory() {
    let tmp = TempDir::new().unwrap();
    let cache = FileCache::new(tmp.path().join("never-created"));
    assert!(cache.clear().is_ok());
}

#[test]
fn test_file_cache_survives_a_new_instance() {
    let tmp = TempDir::new().unwrap();
    let clock = ManualClock::new(START);

    FileCache::with_clock(tmp.path(), clock.clone())
        .set("history-rows-github.com-10", &rows(), MAX_AGE)
        .unwrap();

    clock.advance(10_000);
    let reopened = FileCache::with_clock(tmp.path(), clock.clone());
    assert_eq!(
        reopened.get("history-rows-github.com-10").unwrap(),
        Some(rows())
    );
}

#[test]
fn test_file_cache_handles_unsafe_key_characters() {
    let tmp = TempDir::new().unwrap();
    let cache = FileCache::new(tmp.path());
    let key = "history-rows-../../etc/passwd-10";
    cache.set(key, &rows(), MAX_AGE).unwrap();
    assert_eq!(cache.get(key).unwrap(), Some(rows()));

    for entry in std::fs::read_dir(tmp.path()).unwrap() {
        let name = entry.unwrap().file_name().to_string_lossy().to_string();
        assert!(!name.contains('/') && !name.contains(".."), "unsafe file name: {}", name);
    }
}

#[test]
fn test_file_cache_corrupt_entry_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let cache = FileCache::new(tmp.path());
    cache.set("k", &rows(), MAX_AGE).unwrap();

    let entry = std::fs::read_dir(tmp.path())
        .unwrap()
        .next()
        .unwrap()
        .unwrap()
        .path();
    std::fs::write(&entry, "{ not json").unwrap();

    assert!(cache.get("k").is_err());
}
