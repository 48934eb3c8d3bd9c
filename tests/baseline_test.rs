mod helpers;

use fitrecall::config::FitRecallConfig;
use fitrecall::db;
use fitrecall::memory::baseline::builtin_seeds;
use fitrecall::memory::types::EntrySource;
use fitrecall::memory::MemoryEngine;
use helpers::{now, seed, test_engine};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn builtin_seeds_cover_new_users() {
    let engine = test_engine();

    let results = engine.search_at("newcomer", "", 50, now());

    assert_eq!(results.len(), builtin_seeds().len());
    assert!(results.iter().all(|r| r.entry.source == EntrySource::Baseline));
    assert!(results.iter().all(|r| r.entry.user_id == "newcomer"));
}

#[test]
fn imported_seeds_replace_builtin_set() {
    let mut engine = test_engine();

    let written = engine
        .import_baseline(&[seed("swim", "Swim session, 40 laps", 1)])
        .unwrap();
    assert_eq!(written, 1);

    let results = engine.search_at("u1", "", 50, now());
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].entry.id, "baseline-swim");
    assert_eq!(
        results[0].entry.activity_date,
        Some((now() - chrono::Duration::days(1)).date_naive())
    );
}

#[test]
fn seed_file_is_used_when_table_is_empty() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"id": "row", "text": "Rowing 5 km", "days_ago": 2}}]"#
    )
    .unwrap();

    let mut config = FitRecallConfig::default();
    config.storage.baseline_path = Some(file.path().display().to_string());

    let conn = db::open_memory_database().unwrap();
    let engine = MemoryEngine::new(conn, &config, None).unwrap();
    let results = engine.search_at("u1", "rowing", 10, now());

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].entry.id, "baseline-row");
}

#[test]
fn stored_history_outranks_baseline_in_order() {
    let mut engine = test_engine();
    engine.store_at("u1", "deadlifts 3x5", None, now()).unwrap();

    let results = engine.search_at("u1", "deadlifts", 3, now());

    assert_eq!(results[0].entry.source, EntrySource::Stored);
    assert!(results[1..]
        .iter()
        .all(|r| r.entry.source == EntrySource::Baseline));
}
