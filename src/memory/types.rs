//! Core record types for the activity memory engine.
//!
//! [`MemoryEntry`] is the append-only unit of memory. [`SearchResult`],
//! [`RecallSummary`] and [`StatsReport`] are recomputed on every call and never
//! persisted. [`TranscriptRecord`] is the read-only shape of one chat message.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Structured tags extracted from one piece of free text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityTags {
    pub workout_types: BTreeSet<String>,
    pub muscle_groups: BTreeSet<String>,
    pub exercises: BTreeSet<String>,
}

impl ActivityTags {
    /// `true` when extraction found nothing at all.
    pub fn is_empty(&self) -> bool {
        self.workout_types.is_empty() && self.muscle_groups.is_empty() && self.exercises.is_empty()
    }
}

/// Where a candidate entry came from. Carried for display and logging only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntrySource {
    /// Re-extracted on the fly from a transcript message.
    Transcript,
    /// Written by `store`.
    Stored,
    /// Seed collection.
    Baseline,
}

impl EntrySource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Transcript => "transcript",
            Self::Stored => "stored",
            Self::Baseline => "baseline",
        }
    }
}

impl std::fmt::Display for EntrySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recorded activity fact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryEntry {
    /// Unique id. UUID v7 for stored entries, derived from the row for others.
    pub id: String,
    pub user_id: String,
    /// The original text. Tags are always a pure function of this field.
    pub source_text: String,
    /// Opaque reference to an image or video; never interpreted here.
    pub media_ref: Option<String>,
    #[serde(flatten)]
    pub tags: ActivityTags,
    /// Creation instant. `None` when the stored value could not be parsed.
    pub timestamp: Option<DateTime<Utc>>,
    /// Calendar day of `timestamp`.
    pub activity_date: Option<NaiveDate>,
    pub source: EntrySource,
}

impl MemoryEntry {
    /// Build an entry, deriving tags and activity date from text and timestamp.
    pub fn derive(
        id: impl Into<String>,
        user_id: impl Into<String>,
        source_text: impl Into<String>,
        media_ref: Option<String>,
        timestamp: Option<DateTime<Utc>>,
        source: EntrySource,
    ) -> Self {
        let source_text = source_text.into();
        let tags = super::extract::extract(&source_text);
        Self {
            id: id.into(),
            user_id: user_id.into(),
            source_text,
            media_ref,
            tags,
            timestamp,
            activity_date: timestamp.map(|t| t.date_naive()),
            source,
        }
    }

    /// `true` when extraction found any activity signal in this entry.
    pub fn is_activity_bearing(&self) -> bool {
        !self.tags.is_empty()
    }
}

/// One ranked hit.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    pub entry: MemoryEntry,
    /// Additive score; comparable only within one ranking run.
    pub relevance: f64,
    pub matched_text: String,
}

/// Inclusive calendar range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Aggregates computed over a result set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Aggregates {
    pub total_count: usize,
    /// `None` when no result carries a usable date.
    pub date_range: Option<DateRange>,
    pub muscle_groups: BTreeSet<String>,
    pub exercises: BTreeSet<String>,
}

/// The answer to one recall query.
#[derive(Debug, Clone, Serialize)]
pub struct RecallSummary {
    pub query: String,
    pub results: Vec<SearchResult>,
    pub narrative: String,
    pub aggregates: Aggregates,
    /// `true` when the narrative came from the text-generation collaborator.
    pub generated: bool,
}

/// Totals over everything `search` can see for one user.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StatsReport {
    pub total_count: usize,
    pub muscle_groups: BTreeSet<String>,
    pub exercises: BTreeSet<String>,
    pub workout_types: BTreeSet<String>,
    /// Entry count per activity day.
    pub by_date: BTreeMap<NaiveDate, usize>,
}

/// One message from the running chat transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptRecord {
    /// Row id in the transcript table, used to derive entry ids.
    pub id: i64,
    pub text: String,
    pub is_from_user: bool,
    pub timestamp: Option<DateTime<Utc>>,
}
