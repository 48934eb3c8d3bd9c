mod helpers;

use fitrecall::memory::types::EntrySource;
use helpers::engine_with_baseline;
use helpers::seed;

#[test]
fn logged_user_message_is_recallable_without_store() {
    let engine = engine_with_baseline(vec![]);
    engine
        .log_message("u1", "default", "leg day: squats 4x8", true)
        .unwrap();

    let results = engine.search("u1", "squats", 10);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].entry.source, EntrySource::Transcript);
    assert!(results[0].entry.tags.muscle_groups.contains("legs"));
}

#[test]
fn assistant_and_chatter_messages_are_not_candidates() {
    let engine = engine_with_baseline(vec![]);
    engine
        .log_message("u1", "default", "Nice work on those squats 4x8!", false)
        .unwrap();
    engine
        .log_message("u1", "default", "what should I cook tonight", true)
        .unwrap();

    assert!(engine.search("u1", "squats", 10).is_empty());
}

#[test]
fn transcript_results_come_before_baseline() {
    let engine = engine_with_baseline(vec![
        seed("a", "Chest day: bench press 4x8", 1),
        seed("b", "Chest and triceps, dips 3x12", 2),
    ]);
    engine
        .log_message("u1", "default", "bench press 5x5 today", true)
        .unwrap();

    let results = engine.search("u1", "bench press", 10);

    assert_eq!(results[0].entry.source, EntrySource::Transcript);
    assert!(results[1..]
        .iter()
        .all(|r| r.entry.source == EntrySource::Baseline));
}

#[test]
fn limit_is_filled_by_transcript_first() {
    let engine = engine_with_baseline(vec![seed("a", "Chest day: bench press 4x8", 1)]);
    engine.log_message("u1", "default", "deadlifts 3x5", true).unwrap();
    engine.log_message("u1", "default", "squats 5x5", true).unwrap();

    let results = engine.search("u1", "", 2);

    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| r.entry.source == EntrySource::Transcript));
}

#[test]
fn duplicate_text_across_sources_appears_once() {
    let engine = engine_with_baseline(vec![seed("dup", "Leg day: squats 4x8", 3)]);
    engine
        .log_message("u1", "default", "leg day: squats 4x8", true)
        .unwrap();

    let results = engine.search("u1", "squats", 10);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].entry.source, EntrySource::Transcript);
}

#[test]
fn transcripts_are_scoped_per_user() {
    let engine = engine_with_baseline(vec![]);
    engine.log_message("alice", "default", "deadlifts 3x5", true).unwrap();

    assert_eq!(engine.search("alice", "deadlifts", 10).len(), 1);
    assert!(engine.search("bob", "deadlifts", 10).is_empty());
}
