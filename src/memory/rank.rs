//! Relevance ranking: temporal bonus + lexical overlap, with an activity floor.

use chrono::{DateTime, Utc};

use super::temporal::{self, TemporalWindow};
use super::types::{MemoryEntry, SearchResult};
use crate::config::RankingConfig;

/// Composite relevance of `entry` for `query`.
pub fn score(entry: &MemoryEntry, query: &str, now: DateTime<Utc>, config: &RankingConfig) -> f64 {
    let window = temporal::classify_window(query);
    let tokens = query_tokens(query, config.min_token_len);
    score_with(entry, &tokens, window, now, config)
}

/// Score, threshold, sort, then truncate to `limit`.
pub fn rank(
    entries: &[MemoryEntry],
    query: &str,
    limit: usize,
    now: DateTime<Utc>,
    config: &RankingConfig,
) -> Vec<SearchResult> {
    let window = temporal::classify_window(query);
    let tokens = query_tokens(query, config.min_token_len);

    let mut results: Vec<SearchResult> = entries
        .iter()
        .filter_map(|entry| {
            let relevance = score_with(entry, &tokens, window, now, config);
            (relevance > config.min_relevance).then(|| SearchResult {
                entry: entry.clone(),
                relevance,
                matched_text: entry.source_text.clone(),
            })
        })
        .collect();

    let discarded = entries.len() - results.len();
    sort_results(&mut results, config.tie_window);
    results.truncate(limit);

    tracing::debug!(
        window = %window,
        tokens = tokens.len(),
        candidates = entries.len(),
        discarded,
        returned = results.len(),
        "ranked candidates"
    );

    results
}

/// Slack for float noise when comparing a relevance gap against `tie_window`.
const TIE_EPSILON: f64 = 1e-9;

/// Order results so every adjacent pair satisfies `precedes`.
///
/// Relevances within `tie_window` of each other are ordered by recency; wider
/// gaps by relevance. The relation is not transitive, so a plain sort cannot
/// honour it. Insertion into a path always can, and on input already sorted by
/// relevance each insert lands at or near the tail.
pub fn sort_results(results: &mut Vec<SearchResult>, tie_window: f64) {
    let mut pending = std::mem::take(results);
    pending.sort_by(|a, b| {
        b.relevance
            .total_cmp(&a.relevance)
            .then_with(|| b.entry.timestamp.cmp(&a.entry.timestamp))
            .then_with(|| a.entry.id.cmp(&b.entry.id))
    });

    for hit in pending {
        let slot = results
            .iter()
            .rposition(|placed| precedes(placed, &hit, tie_window))
            .map_or(0, |i| i + 1);
        results.insert(slot, hit);
    }
}

/// Whether `a` belongs directly before `b`.
///
/// Entries without a timestamp count as oldest. Exact ties fall back to
/// relevance, then id, so exactly one of `precedes(a, b)` and `precedes(b, a)`
/// holds for distinct entries.
fn precedes(a: &SearchResult, b: &SearchResult, tie_window: f64) -> bool {
    let tied = (a.relevance - b.relevance).abs() <= tie_window + TIE_EPSILON;
    let order = if tied {
        b.entry
            .timestamp
            .cmp(&a.entry.timestamp)
            .then_with(|| b.relevance.total_cmp(&a.relevance))
    } else {
        b.relevance.total_cmp(&a.relevance)
    };
    order.then_with(|| a.entry.id.cmp(&b.entry.id)).is_lt()
}

fn score_with(
    entry: &MemoryEntry,
    tokens: &[String],
    window: TemporalWindow,
    now: DateTime<Utc>,
    config: &RankingConfig,
) -> f64 {
    let temporal_bonus = temporal::score(entry.timestamp, window, now, config);

    let haystack = searchable_text(entry);
    let hits = tokens.iter().filter(|t| haystack.contains(t.as_str())).count();
    let lexical_bonus = hits as f64 * config.token_bonus;

    let total = temporal_bonus + lexical_bonus;
    if total == 0.0 && entry.is_activity_bearing() {
        config.activity_base
    } else {
        total
    }
}

/// Lowercased query words of at least `min_len` characters.
fn query_tokens(query: &str, min_len: usize) -> Vec<String> {
    query
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().count() >= min_len)
        .map(str::to_string)
        .collect()
}

fn searchable_text(entry: &MemoryEntry) -> String {
    let mut text = entry.source_text.to_lowercase();
    for tag in entry.tags.muscle_groups.iter().chain(entry.tags.exercises.iter()) {
        text.push(' ');
        text.push_str(tag);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::types::EntrySource;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 15, 0, 0).unwrap()
    }

    fn entry(id: &str, text: &str, days_ago: i64) -> MemoryEntry {
        MemoryEntry::derive(
            id,
            "u1",
            text,
            None,
            Some(now() - Duration::days(days_ago)),
            EntrySource::Stored,
        )
    }

    #[test]
    fn same_day_entry_ranks_first_for_today() {
        let cfg = RankingConfig::default();
        let entries = vec![
            entry("old", "bench press 3x10", 10),
            entry("new", "bench press 3x10", 0),
        ];
        let results = rank(&entries, "what did I do today", 10, now(), &cfg);
        assert_eq!(results[0].entry.id, "new");
        assert!(results[0].relevance > results[1].relevance);
    }

    #[test]
    fn lexical_hits_add_per_token() {
        let cfg = RankingConfig::default();
        let e = entry("a", "chest day: bench press 4x8", 30);
        let s = score(&e, "chest bench", now(), &cfg);
        assert!((s - 0.6).abs() < 1e-9);
    }

    #[test]
    fn tags_are_searchable() {
        let cfg = RankingConfig::default();
        // "legs" only appears as a derived muscle group
        let e = entry("a", "squats 5x5", 30);
        let s = score(&e, "legs", now(), &cfg);
        assert!((s - 0.3).abs() < 1e-9);
    }

    #[test]
    fn activity_base_applies_without_signal() {
        let cfg = RankingConfig::default();
        let e = entry("a", "deadlifts 3x5", 30);
        assert_eq!(score(&e, "show me everything", now(), &cfg), 0.5);
    }

    #[test]
    fn threshold_discards_non_activity_entries() {
        let cfg = RankingConfig::default();
        let entries = vec![entry("noise", "had a great lunch with friends", 0)];
        assert!(rank(&entries, "xyzzy nonsense", 10, now(), &cfg).is_empty());
    }

    #[test]
    fn ties_break_by_recency() {
        let cfg = RankingConfig::default();
        let entries = vec![
            entry("older", "deadlifts 3x5", 20),
            entry("newer", "squats 5x5", 12),
            entry("middle", "bench press 3x10", 15),
        ];
        let results = rank(&entries, "anything", 10, now(), &cfg);
        let ids: Vec<&str> = results.iter().map(|r| r.entry.id.as_str()).collect();
        assert_eq!(ids, vec!["newer", "middle", "older"]);
    }

    #[test]
    fn score_equal_to_threshold_is_discarded() {
        let cfg = RankingConfig {
            min_relevance: 0.3,
            ..RankingConfig::default()
        };
        let entries = vec![entry("a", "squats 5x5", 30)];
        assert!((score(&entries[0], "legs", now(), &cfg) - 0.3).abs() < 1e-9);
        assert!(rank(&entries, "legs", 10, now(), &cfg).is_empty());

        let looser = RankingConfig {
            min_relevance: 0.29,
            ..cfg
        };
        assert_eq!(rank(&entries, "legs", 10, now(), &looser).len(), 1);
    }

    #[test]
    fn scores_within_window_order_by_recency() {
        let cfg = RankingConfig::default();
        let entries = vec![
            entry("older-topical", "chest bench press", 30),
            entry("recent", "deadlifts 3x5", 1),
        ];
        let results = rank(&entries, "chest bench", 10, now(), &cfg);

        assert!((results[0].relevance - 0.5).abs() < 1e-9);
        assert_eq!(results[0].entry.id, "recent");
        assert_eq!(results[1].entry.id, "older-topical");
    }

    fn hit(id: &str, relevance: f64, days_ago: i64) -> SearchResult {
        let e = entry(id, "plank", days_ago);
        SearchResult {
            matched_text: e.source_text.clone(),
            entry: e,
            relevance,
        }
    }

    #[test]
    fn adjacent_pairs_respect_relevance_and_recency() {
        let cfg = RankingConfig::default();
        let base = vec![
            hit("a", 0.5, 1),
            hit("b", 0.6, 9),
            hit("c", 0.7, 4),
            hit("d", 0.5, 12),
            hit("e", 0.6, 2),
            hit("f", 0.7, 20),
            hit("g", 1.5, 6),
            hit("h", 0.3, 0),
        ];

        for rotation in 0..base.len() {
            let mut results = base.clone();
            results.rotate_left(rotation);
            sort_results(&mut results, cfg.tie_window);

            assert_eq!(results.len(), base.len());
            for pair in results.windows(2) {
                let (a, b) = (&pair[0], &pair[1]);
                if (a.relevance - b.relevance).abs() <= cfg.tie_window + 1e-9 {
                    assert!(
                        a.entry.timestamp >= b.entry.timestamp,
                        "{} before {} breaks recency",
                        a.entry.id,
                        b.entry.id
                    );
                } else {
                    assert!(
                        a.relevance > b.relevance,
                        "{} before {} breaks relevance",
                        a.entry.id,
                        b.entry.id
                    );
                }
            }
            assert_eq!(results[0].entry.id, "g");
        }
    }

    #[test]
    fn truncation_happens_after_sorting() {
        let cfg = RankingConfig::default();
        let mut entries: Vec<MemoryEntry> =
            (0..5).map(|i| entry(&format!("filler-{i}"), "plank", 30 + i)).collect();
        entries.push(entry("best", "chest bench press", 30));

        let results = rank(&entries, "chest bench", 1, now(), &cfg);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].entry.id, "best");
    }

    #[test]
    fn missing_timestamp_sorts_last_among_ties() {
        let cfg = RankingConfig::default();
        let mut undated = entry("undated", "plank", 0);
        undated.timestamp = None;
        let entries = vec![undated, entry("dated", "plank", 40)];
        let results = rank(&entries, "anything", 10, now(), &cfg);
        assert_eq!(results[0].entry.id, "dated");
        assert_eq!(results[1].entry.id, "undated");
    }
}
