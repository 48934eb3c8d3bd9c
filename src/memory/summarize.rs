//! Recall summarizer: ranked results → [`RecallSummary`].
//!
//! The narrative comes from the text-generation collaborator when one is
//! configured. Any failure there degrades to a templated sentence built from
//! the aggregates; [`summarize`] itself cannot fail.

use std::collections::BTreeSet;
use std::fmt::Write;

use super::types::{Aggregates, DateRange, RecallSummary, SearchResult};
use crate::generation::TextGenerator;

/// Narrative returned when nothing matched.
pub const NOTHING_FOUND: &str =
    "I couldn't find any workouts matching that. Try different terms, like a muscle group or an exercise.";

/// Summarize `results` for `query`.
pub async fn summarize(
    query: &str,
    results: Vec<SearchResult>,
    generator: Option<&dyn TextGenerator>,
) -> RecallSummary {
    if results.is_empty() {
        return RecallSummary {
            query: query.to_string(),
            results,
            narrative: NOTHING_FOUND.to_string(),
            aggregates: Aggregates::default(),
            generated: false,
        };
    }

    let aggregates = compute_aggregates(&results);

    let generated = match generator {
        Some(generator) => {
            let prompt = build_prompt(query, &results, &aggregates);
            match generator.generate(&prompt).await {
                Ok(text) if !text.trim().is_empty() => Some(text.trim().to_string()),
                Ok(_) => {
                    tracing::warn!("text generator returned blank narrative, using fallback");
                    None
                }
                Err(e) => {
                    tracing::warn!(error = %e, "text generator failed, using fallback");
                    None
                }
            }
        }
        None => None,
    };

    let (narrative, generated) = match generated {
        Some(text) => (text, true),
        None => (fallback_narrative(&aggregates), false),
    };

    RecallSummary {
        query: query.to_string(),
        results,
        narrative,
        aggregates,
        generated,
    }
}

/// Union of tags and min/max activity date across `results`.
pub fn compute_aggregates(results: &[SearchResult]) -> Aggregates {
    let mut muscle_groups = BTreeSet::new();
    let mut exercises = BTreeSet::new();
    let mut date_range: Option<DateRange> = None;

    for result in results {
        muscle_groups.extend(result.entry.tags.muscle_groups.iter().cloned());
        exercises.extend(result.entry.tags.exercises.iter().cloned());

        if let Some(date) = result.entry.activity_date {
            date_range = Some(match date_range {
                Some(r) => DateRange {
                    start: r.start.min(date),
                    end: r.end.max(date),
                },
                None => DateRange { start: date, end: date },
            });
        }
    }

    Aggregates {
        total_count: results.len(),
        date_range,
        muscle_groups,
        exercises,
    }
}

/// Prompt for the text-generation collaborator.
pub fn build_prompt(query: &str, results: &[SearchResult], aggregates: &Aggregates) -> String {
    let mut prompt = String::new();
    let _ = writeln!(
        prompt,
        "You are a friendly fitness assistant. Answer the user's question about their past workouts \
         in two or three sentences, using only the records below."
    );
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "Question: {query}");
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "Records (most relevant first):");
    for (i, result) in results.iter().enumerate() {
        let date = result
            .entry
            .activity_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "unknown date".into());
        let _ = writeln!(prompt, "{}. [{}] {}", i + 1, date, result.matched_text);
    }
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "Total workouts: {}", aggregates.total_count);
    if let Some(range) = aggregates.date_range {
        let _ = writeln!(prompt, "Date range: {} to {}", range.start, range.end);
    }
    if !aggregates.muscle_groups.is_empty() {
        let _ = writeln!(prompt, "Muscle groups: {}", join(&aggregates.muscle_groups));
    }
    if !aggregates.exercises.is_empty() {
        let _ = writeln!(prompt, "Exercises: {}", join(&aggregates.exercises));
    }
    prompt
}

/// Deterministic narrative assembled from aggregates alone.
pub fn fallback_narrative(aggregates: &Aggregates) -> String {
    let noun = if aggregates.total_count == 1 { "workout" } else { "workouts" };
    let mut text = format!("Found {} {noun}", aggregates.total_count);

    if !aggregates.muscle_groups.is_empty() {
        let _ = write!(text, " covering {}", join(&aggregates.muscle_groups));
    }

    match aggregates.date_range {
        Some(range) if range.start == range.end => {
            let _ = write!(text, " on {}", range.start);
        }
        Some(range) => {
            let _ = write!(text, " between {} and {}", range.start, range.end);
        }
        None => {}
    }

    text.push('.');
    text
}

fn join(set: &BTreeSet<String>) -> String {
    set.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}
