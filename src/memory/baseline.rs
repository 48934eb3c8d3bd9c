//! Baseline collection: seed entries that keep recall useful before a user has
//! any history of their own.
//!
//! Seeds are stored relative to "now" (`days_ago`) and materialised against the
//! reference instant on every search. Precedence: `baseline` table rows, then a
//! JSON seed file, then the built-in set.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};

use super::store::write_audit_log;
use super::types::{EntrySource, MemoryEntry};

/// One seed entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineSeed {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub days_ago: i64,
    #[serde(default)]
    pub media_ref: Option<String>,
}

const BUILTIN_SEEDS: &[(&str, &str, i64)] = &[
    ("seed-chest", "Chest day: bench press 4x8 at 80kg, incline bench and dips", 2),
    ("seed-legs", "Leg day: squats 5x5, leg press 3x12, calf raises", 4),
    ("seed-back", "Pull day: deadlifts 3x5, barbell rows and pull-ups", 6),
    ("seed-cardio", "Easy run, 5 km along the river", 8),
    ("seed-core", "Core circuit: planks, crunches and burpees, 3 sets", 11),
    ("seed-yoga", "Yoga and mobility session after a long week", 13),
];

/// The built-in seed set.
pub fn builtin_seeds() -> Vec<BaselineSeed> {
    BUILTIN_SEEDS
        .iter()
        .map(|(id, text, days_ago)| BaselineSeed {
            id: (*id).to_string(),
            text: (*text).to_string(),
            days_ago: *days_ago,
            media_ref: None,
        })
        .collect()
}

/// Resolve the active seed set for this database.
///
/// An unreadable table or seed file is logged and the next source is used;
/// the built-in set is always available.
pub fn load_seeds(conn: &Connection, seed_file: Option<&Path>) -> Vec<BaselineSeed> {
    match load_table_seeds(conn) {
        Ok(seeds) if !seeds.is_empty() => {
            tracing::debug!(count = seeds.len(), "baseline loaded from table");
            return seeds;
        }
        Ok(_) => {}
        Err(e) => tracing::warn!(error = %e, "baseline table unreadable, trying next source"),
    }

    if let Some(path) = seed_file {
        match read_seed_file(path) {
            Ok(seeds) => {
                tracing::debug!(count = seeds.len(), path = %path.display(), "baseline loaded from file");
                return seeds;
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "baseline file unusable, using built-in seeds")
            }
        }
    }

    builtin_seeds()
}

/// Parse a JSON array of seeds.
pub fn read_seed_file(path: &Path) -> Result<Vec<BaselineSeed>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read baseline file {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse baseline file {}", path.display()))
}

/// Insert or replace seeds in the `baseline` table. Returns the number written.
pub fn import_seeds(conn: &mut Connection, seeds: &[BaselineSeed]) -> Result<usize> {
    let tx = conn.transaction()?;
    for seed in seeds {
        tx.execute(
            "INSERT OR REPLACE INTO baseline (id, text, days_ago, media_ref) VALUES (?1, ?2, ?3, ?4)",
            params![seed.id, seed.text, seed.days_ago, seed.media_ref],
        )?;
        write_audit_log(
            &tx,
            "import",
            &seed.id,
            Some(&serde_json::json!({"source": "baseline"})),
        )?;
    }
    tx.commit()?;

    tracing::info!(count = seeds.len(), "baseline seeds imported");
    Ok(seeds.len())
}

/// Turn seeds into entries for `user_id`, dated relative to `now`.
pub fn materialize(seeds: &[BaselineSeed], user_id: &str, now: DateTime<Utc>) -> Vec<MemoryEntry> {
    seeds
        .iter()
        .map(|seed| {
            MemoryEntry::derive(
                format!("baseline-{}", seed.id),
                user_id,
                seed.text.clone(),
                seed.media_ref.clone(),
                Some(now - Duration::days(seed.days_ago)),
                EntrySource::Baseline,
            )
        })
        .collect()
}

fn load_table_seeds(conn: &Connection) -> Result<Vec<BaselineSeed>> {
    let mut stmt = conn.prepare("SELECT id, text, days_ago, media_ref FROM baseline ORDER BY days_ago, id")?;
    let seeds = stmt
        .query_map([], |row| {
            Ok(BaselineSeed {
                id: row.get(0)?,
                text: row.get(1)?,
                days_ago: row.get(2)?,
                media_ref: row.get(3)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(seeds)
}
