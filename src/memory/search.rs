//! Multi-provider search: rank each provider's candidates, then fill `limit`
//! slots in provider priority order, skipping anything already emitted.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use super::providers::CandidateProvider;
use super::rank;
use super::types::SearchResult;
use crate::config::RankingConfig;

/// Search across `providers`, highest priority first.
///
/// A failing provider is logged and skipped; the caller sees fewer results,
/// never an error. Entries are de-duplicated by id and by source text.
pub fn search(
    providers: &[&dyn CandidateProvider],
    user_id: &str,
    query: &str,
    limit: usize,
    now: DateTime<Utc>,
    config: &RankingConfig,
) -> Vec<SearchResult> {
    let mut results: Vec<SearchResult> = Vec::new();
    let mut seen_ids: HashSet<String> = HashSet::new();
    let mut seen_texts: HashSet<String> = HashSet::new();

    for provider in providers {
        if results.len() >= limit {
            break;
        }

        let candidates = match provider.candidates(user_id, now) {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!(provider = provider.name(), error = %e, "candidate provider failed, skipping");
                continue;
            }
        };

        let ranked = rank::rank(&candidates, query, candidates.len(), now, config);
        let before = results.len();

        for hit in ranked {
            if results.len() >= limit {
                break;
            }
            let text_key = hit.entry.source_text.trim().to_lowercase();
            if seen_ids.contains(&hit.entry.id) || seen_texts.contains(&text_key) {
                continue;
            }
            seen_ids.insert(hit.entry.id.clone());
            seen_texts.insert(text_key);
            results.push(hit);
        }

        tracing::debug!(
            provider = provider.name(),
            candidates = candidates.len(),
            added = results.len() - before,
            "provider merged"
        );
    }

    tracing::info!(user = %user_id, query = %query, limit, returned = results.len(), "search complete");
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::providers::TranscriptProvider;
    use crate::memory::types::{EntrySource, MemoryEntry, TranscriptRecord};
    use anyhow::Result;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 15, 0, 0).unwrap()
    }

    struct Fixed(Vec<MemoryEntry>);

    impl CandidateProvider for Fixed {
        fn name(&self) -> &str {
            "fixed"
        }
        fn candidates(&self, _user_id: &str, _now: DateTime<Utc>) -> Result<Vec<MemoryEntry>> {
            Ok(self.0.clone())
        }
    }

    struct Broken;

    impl CandidateProvider for Broken {
        fn name(&self) -> &str {
            "broken"
        }
        fn candidates(&self, _user_id: &str, _now: DateTime<Utc>) -> Result<Vec<MemoryEntry>> {
            anyhow::bail!("backend offline")
        }
    }

    fn seed(id: &str, text: &str, days_ago: i64) -> MemoryEntry {
        MemoryEntry::derive(id, "u1", text, None, Some(now() - Duration::days(days_ago)), EntrySource::Baseline)
    }

    fn transcript(records: &[(i64, &str)]) -> TranscriptProvider<Vec<TranscriptRecord>> {
        TranscriptProvider::new(
            records
                .iter()
                .map(|(id, text)| TranscriptRecord {
                    id: *id,
                    text: (*text).into(),
                    is_from_user: true,
                    timestamp: Some(now() - Duration::days(20)),
                })
                .collect(),
        )
    }

    #[test]
    fn higher_priority_results_come_first_even_when_weaker() {
        let cfg = RankingConfig::default();
        let primary = transcript(&[(1, "plank holds")]);
        let fallback = Fixed(vec![seed("b1", "chest day bench press", 1)]);

        let providers: [&dyn CandidateProvider; 2] = [&primary, &fallback];
        let results = search(&providers, "u1", "chest", 10, now(), &cfg);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].entry.source, EntrySource::Transcript);
        assert_eq!(results[1].entry.id, "b1");
    }

    #[test]
    fn fallback_fills_only_remaining_slots() {
        let cfg = RankingConfig::default();
        let primary = transcript(&[(1, "squats 5x5"), (2, "deadlifts 3x5")]);
        let fallback = Fixed(vec![seed("b1", "bench press", 1), seed("b2", "dips", 2)]);

        let providers: [&dyn CandidateProvider; 2] = [&primary, &fallback];
        let results = search(&providers, "u1", "workouts", 3, now(), &cfg);
        assert_eq!(results.len(), 3);
        assert_eq!(
            results.iter().filter(|r| r.entry.source == EntrySource::Baseline).count(),
            1
        );
    }

    #[test]
    fn duplicate_source_text_is_emitted_once() {
        let cfg = RankingConfig::default();
        let primary = transcript(&[(1, "Leg day: squats 4x8")]);
        let fallback = Fixed(vec![seed("b1", "leg day: squats 4x8", 0)]);

        let providers: [&dyn CandidateProvider; 2] = [&primary, &fallback];
        let results = search(&providers, "u1", "legs", 10, now(), &cfg);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].entry.id, "transcript-1");
    }

    #[test]
    fn failing_provider_is_skipped() {
        let cfg = RankingConfig::default();
        let fallback = Fixed(vec![seed("b1", "bench press", 1)]);

        let providers: [&dyn CandidateProvider; 2] = [&Broken, &fallback];
        let results = search(&providers, "u1", "bench", 10, now(), &cfg);
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn empty_sources_yield_empty_results() {
        let cfg = RankingConfig::default();
        let primary = transcript(&[]);
        let fallback = Fixed(vec![]);
        let providers: [&dyn CandidateProvider; 2] = [&primary, &fallback];
        assert!(search(&providers, "u1", "xyzzy nonsense", 10, now(), &cfg).is_empty());
    }
}
