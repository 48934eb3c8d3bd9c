//! Candidate providers for the search pipeline.
//!
//! Each provider yields raw candidate entries for a user; [`super::search`]
//! ranks them per provider and concatenates in priority order.

use anyhow::Result;
use chrono::{DateTime, Utc};
use rusqlite::Connection;

use super::baseline::{self, BaselineSeed};
use super::extract::is_activity_content;
use super::store;
use super::types::{EntrySource, MemoryEntry};
use crate::db::transcript::TranscriptSource;

/// A source of candidate entries.
pub trait CandidateProvider {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Candidates for `user_id`, dated against `now` where relevant.
    fn candidates(&self, user_id: &str, now: DateTime<Utc>) -> Result<Vec<MemoryEntry>>;
}

/// Re-extracts qualifying user messages from the transcript on every call.
pub struct TranscriptProvider<S> {
    source: S,
}

impl<S: TranscriptSource> TranscriptProvider<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S: TranscriptSource> CandidateProvider for TranscriptProvider<S> {
    fn name(&self) -> &str {
        "transcript"
    }

    fn candidates(&self, user_id: &str, _now: DateTime<Utc>) -> Result<Vec<MemoryEntry>> {
        let entries = self
            .source
            .records(user_id)?
            .into_iter()
            .filter(|r| r.is_from_user && is_activity_content(&r.text))
            .map(|r| {
                MemoryEntry::derive(
                    format!("transcript-{}", r.id),
                    user_id,
                    r.text,
                    None,
                    r.timestamp,
                    EntrySource::Transcript,
                )
            })
            .collect();
        Ok(entries)
    }
}

/// Entries previously written by `store`.
pub struct StoredProvider<'c> {
    conn: &'c Connection,
}

impl<'c> StoredProvider<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }
}

impl CandidateProvider for StoredProvider<'_> {
    fn name(&self) -> &str {
        "stored"
    }

    fn candidates(&self, user_id: &str, _now: DateTime<Utc>) -> Result<Vec<MemoryEntry>> {
        store::load_entries(self.conn, user_id)
    }
}

/// The seed collection, lowest priority.
pub struct BaselineProvider<'a> {
    seeds: &'a [BaselineSeed],
}

impl<'a> BaselineProvider<'a> {
    pub fn new(seeds: &'a [BaselineSeed]) -> Self {
        Self { seeds }
    }
}

impl CandidateProvider for BaselineProvider<'_> {
    fn name(&self) -> &str {
        "baseline"
    }

    fn candidates(&self, user_id: &str, now: DateTime<Utc>) -> Result<Vec<MemoryEntry>> {
        Ok(baseline::materialize(self.seeds, user_id, now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::types::TranscriptRecord;

    fn record(id: i64, text: &str, from_user: bool) -> TranscriptRecord {
        TranscriptRecord {
            id,
            text: text.into(),
            is_from_user: from_user,
            timestamp: Some(Utc::now()),
        }
    }

    #[test]
    fn transcript_keeps_only_user_activity_messages() {
        let provider = TranscriptProvider::new(vec![
            record(1, "leg day: squats 4x8", true),
            record(2, "Great job on the squats!", false),
            record(3, "had a great lunch with friends", true),
        ]);

        let entries = provider.candidates("u1", Utc::now()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "transcript-1");
        assert_eq!(entries[0].source, EntrySource::Transcript);
        assert!(entries[0].tags.workout_types.contains("leg day"));
    }

    #[test]
    fn transcript_ids_are_stable_across_calls() {
        let provider = TranscriptProvider::new(vec![record(7, "bench press 3x10", true)]);
        let first = provider.candidates("u1", Utc::now()).unwrap();
        let second = provider.candidates("u1", Utc::now()).unwrap();
        assert_eq!(first[0].id, second[0].id);
        assert_eq!(first[0].tags, second[0].tags);
    }
}
