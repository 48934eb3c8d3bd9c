use super::types::{SearchResult, StatsReport};

/// Fold search results into a [`StatsReport`].
///
/// The caller runs an unscoped search with a high limit so every entry visible
/// to `search` lands here exactly once.
pub fn activity_stats(results: &[SearchResult]) -> StatsReport {
    let mut report = StatsReport {
        total_count: results.len(),
        ..StatsReport::default()
    };

    for result in results {
        let tags = &result.entry.tags;
        report.muscle_groups.extend(tags.muscle_groups.iter().cloned());
        report.exercises.extend(tags.exercises.iter().cloned());
        report.workout_types.extend(tags.workout_types.iter().cloned());

        if let Some(date) = result.entry.activity_date {
            *report.by_date.entry(date).or_insert(0) += 1;
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::types::{EntrySource, MemoryEntry};
    use chrono::{Duration, TimeZone, Utc};

    fn hit(id: &str, text: &str, days_ago: i64) -> SearchResult {
        let now = Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap();
        let entry = MemoryEntry::derive(id, "u1", text, None, Some(now - Duration::days(days_ago)), EntrySource::Stored);
        SearchResult {
            matched_text: entry.source_text.clone(),
            entry,
            relevance: 0.5,
        }
    }

    #[test]
    fn counts_per_day_and_unions_tags() {
        let results = vec![
            hit("a", "leg day: squats 4x8", 0),
            hit("b", "bench press 3x10", 0),
            hit("c", "run 5 km", 2),
        ];
        let report = activity_stats(&results);

        assert_eq!(report.total_count, 3);
        assert_eq!(report.by_date.len(), 2);
        assert_eq!(report.by_date.values().sum::<usize>(), 3);
        assert!(report.muscle_groups.contains("legs"));
        assert!(report.muscle_groups.contains("chest"));
        assert!(report.workout_types.contains("cardio"));
        assert!(report.exercises.contains("5 km"));
    }

    #[test]
    fn undated_entries_count_but_have_no_day() {
        let mut undated = hit("a", "plank", 0);
        undated.entry.activity_date = None;
        let report = activity_stats(&[undated]);
        assert_eq!(report.total_count, 1);
        assert!(report.by_date.is_empty());
    }
}
