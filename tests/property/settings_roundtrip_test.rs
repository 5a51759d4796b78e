//! Property-based tests for SearchSettings serialization round-trip.
//!
//! Settings written by the engine must load back unchanged, both through
//! serde directly and through a save/load cycle on disk.

use std::path::PathBuf;

use history_fzf::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use history_fzf::types::settings::{HostMatch, SearchSettings};
use proptest::prelude::*;

fn arb_host_match() -> impl Strategy<Value = HostMatch> {
    prop_oneof![Just(HostMatch::Contains), Just(HostMatch::Exact)]
}

fn arb_settings() -> impl Strategy<Value = SearchSettings> {
    (
        "/[a-zA-Z0-9_.-]{1,12}(/[a-zA-Z0-9_. -]{1,12}){0,3}",
        "/[a-zA-Z0-9_.-]{1,12}(/[a-zA-Z0-9_.-]{1,12}){0,3}",
        0i64..=86_400_000,
        1usize..100_000,
        1usize..500,
        arb_host_match(),
    )
        .prop_map(
            |(db, cache, cache_max_age_ms, history_limit, result_limit, host_match)| SearchSettings {
                history_db_path: PathBuf::from(db),
                cache_dir: PathBuf::from(cache),
                cache_max_age_ms,
                history_limit,
                result_limit,
                host_match,
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn settings_json_roundtrip(settings in arb_settings()) {
        let json = serde_json::to_string_pretty(&settings).expect("serialize");
        let back: SearchSettings = serde_json::from_str(&json).expect("deserialize");
        prop_assert_eq!(settings, back);
    }

    #[test]
    fn settings_save_load_roundtrip(settings in arb_settings()) {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("settings.json").to_string_lossy().to_string();

        let mut engine = SettingsEngine::new(Some(path.clone()));
        engine.load().expect("load defaults");
        for (key, value) in serde_json::to_value(&settings)
            .expect("to_value")
            .as_object()
            .expect("object")
        {
            engine.set_value(key, value.clone()).expect("set_value");
        }

        let mut reloaded = SettingsEngine::new(Some(path));
        prop_assert_eq!(reloaded.load().expect("reload"), settings);
    }
}
