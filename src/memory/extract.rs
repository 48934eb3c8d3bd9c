//! Entity extraction: free text → [`ActivityTags`].
//!
//! Matching is compiled once from the tables in [`super::vocabulary`] and is a
//! pure function of the input text.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use super::types::ActivityTags;
use super::vocabulary::{TagGroup, EXERCISE_NAMES, MUSCLE_GROUPS, QUANTITY_PATTERNS, WORKOUT_TYPES};

struct CompiledGroup {
    label: &'static str,
    pattern: Regex,
}

struct Matcher {
    workout_types: Vec<CompiledGroup>,
    muscle_groups: Vec<CompiledGroup>,
    exercise_names: Regex,
    quantities: Vec<Regex>,
}

static MATCHER: LazyLock<Matcher> = LazyLock::new(|| Matcher {
    workout_types: compile_groups(WORKOUT_TYPES),
    muscle_groups: compile_groups(MUSCLE_GROUPS),
    exercise_names: keyword_regex(EXERCISE_NAMES),
    quantities: QUANTITY_PATTERNS
        .iter()
        .map(|p| Regex::new(&format!("(?i){p}")).expect("valid quantity pattern"))
        .collect(),
});

/// Extract workout types, muscle groups, and exercises from `text`.
///
/// All three sets may be empty; that is the "no signal" result, not an error.
pub fn extract(text: &str) -> ActivityTags {
    let m = &*MATCHER;

    let workout_types = matching_labels(&m.workout_types, text);
    let muscle_groups = matching_labels(&m.muscle_groups, text);

    let mut exercises: BTreeSet<String> = m
        .exercise_names
        .find_iter(text)
        .map(|hit| normalize(hit.as_str()))
        .collect();

    for pattern in &m.quantities {
        exercises.extend(pattern.find_iter(text).map(|hit| normalize_quantity(hit.as_str())));
    }

    ActivityTags {
        workout_types,
        muscle_groups,
        exercises,
    }
}

/// Does `text` contain any activity keyword or quantity at all?
///
/// Callers use this to decide whether a piece of text is worth remembering.
pub fn is_activity_content(text: &str) -> bool {
    let m = &*MATCHER;
    m.workout_types.iter().any(|g| g.pattern.is_match(text))
        || m.muscle_groups.iter().any(|g| g.pattern.is_match(text))
        || m.exercise_names.is_match(text)
        || m.quantities.iter().any(|p| p.is_match(text))
}

fn compile_groups(groups: &[TagGroup]) -> Vec<CompiledGroup> {
    groups
        .iter()
        .map(|g| CompiledGroup {
            label: g.label,
            pattern: keyword_regex(g.triggers),
        })
        .collect()
}

fn matching_labels(groups: &[CompiledGroup], text: &str) -> BTreeSet<String> {
    groups
        .iter()
        .filter(|g| g.pattern.is_match(text))
        .map(|g| g.label.to_string())
        .collect()
}

/// Build `(?i)\b(?:kw1|kw2|...)\b`, longest keyword first so multi-word names win.
fn keyword_regex(keywords: &[&str]) -> Regex {
    let mut sorted: Vec<&str> = keywords.to_vec();
    sorted.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));

    let alternation = sorted
        .iter()
        .map(|kw| regex::escape(kw).replace(' ', r"\s+"))
        .collect::<Vec<_>>()
        .join("|");

    Regex::new(&format!(r"(?i)\b(?:{alternation})\b")).expect("valid keyword pattern")
}

/// Lowercase and collapse internal whitespace.
fn normalize(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn normalize_quantity(s: &str) -> String {
    let folded = normalize(s);
    if folded.contains('x') && folded.chars().all(|c| c.is_ascii_digit() || c == 'x' || c == ' ') {
        folded.replace(' ', "")
    } else {
        folded
    }
}
