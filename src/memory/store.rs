//! Write path: extraction gate, append, and audit logging.
//!
//! [`store_memory`] is the single entry point. Text with no activity signal is a
//! silent no-op; everything else becomes a new, never-updated `memories` row.

use anyhow::Result;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};

use super::extract::is_activity_content;
use super::temporal::parse_timestamp;
use super::types::{EntrySource, MemoryEntry};

/// Extract and append an entry for `source_text`, or return `None` when the
/// text carries no activity signal.
pub fn store_memory(
    conn: &mut Connection,
    user_id: &str,
    source_text: &str,
    media_ref: Option<&str>,
    now: DateTime<Utc>,
) -> Result<Option<MemoryEntry>> {
    if !is_activity_content(source_text) {
        tracing::debug!(user = %user_id, len = source_text.len(), "no activity signal, skipping store");
        return Ok(None);
    }

    let entry = MemoryEntry::derive(
        uuid::Uuid::now_v7().to_string(),
        user_id,
        source_text,
        media_ref.map(str::to_string),
        Some(now),
        EntrySource::Stored,
    );

    let tx = conn.transaction()?;
    insert_entry(&tx, &entry)?;
    write_audit_log(&tx, "create", &entry.id, None)?;
    tx.commit()?;

    tracing::info!(
        id = %entry.id,
        user = %user_id,
        workout_types = entry.tags.workout_types.len(),
        muscle_groups = entry.tags.muscle_groups.len(),
        exercises = entry.tags.exercises.len(),
        "memory stored"
    );

    Ok(Some(entry))
}

/// All stored entries for `user_id`, newest first.
///
/// Tags are re-derived from `source_text`; the tag columns are a write-time
/// snapshot for inspection only. A row that cannot be decoded is logged and
/// skipped.
pub fn load_entries(conn: &Connection, user_id: &str) -> Result<Vec<MemoryEntry>> {
    let mut stmt = conn.prepare(
        "SELECT id, user_id, source_text, media_ref, timestamp \
         FROM memories WHERE user_id = ?1 ORDER BY timestamp DESC",
    )?;

    let rows = stmt.query_map(params![user_id], |row| {
        Ok(StoredRow {
            id: row.get(0)?,
            user_id: row.get(1)?,
            source_text: row.get(2)?,
            media_ref: row.get(3)?,
            timestamp: row.get(4)?,
        })
    })?;

    let mut entries = Vec::new();
    for row in rows {
        match row {
            Ok(row) => entries.push(row.into_entry()),
            Err(e) => tracing::warn!(user = %user_id, error = %e, "skipping unreadable memory row"),
        }
    }
    Ok(entries)
}

/// Number of stored entries for `user_id`.
pub fn count_entries(conn: &Connection, user_id: &str) -> Result<u64> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM memories WHERE user_id = ?1",
        params![user_id],
        |row| row.get(0),
    )?;
    Ok(count as u64)
}

struct StoredRow {
    id: String,
    user_id: String,
    source_text: String,
    media_ref: Option<String>,
    timestamp: Option<String>,
}

impl StoredRow {
    fn into_entry(self) -> MemoryEntry {
        let timestamp = self.timestamp.as_deref().and_then(parse_timestamp);
        MemoryEntry::derive(
            self.id,
            self.user_id,
            self.source_text,
            self.media_ref,
            timestamp,
            EntrySource::Stored,
        )
    }
}

fn insert_entry(conn: &Connection, entry: &MemoryEntry) -> Result<()> {
    let timestamp = entry.timestamp.map(|t| t.to_rfc3339()).unwrap_or_default();
    let activity_date = entry.activity_date.map(|d| d.to_string());

    conn.execute(
        "INSERT INTO memories (id, user_id, source_text, media_ref, workout_types, muscle_groups, exercises, timestamp, activity_date) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            entry.id,
            entry.user_id,
            entry.source_text,
            entry.media_ref,
            serde_json::to_string(&entry.tags.workout_types)?,
            serde_json::to_string(&entry.tags.muscle_groups)?,
            serde_json::to_string(&entry.tags.exercises)?,
            timestamp,
            activity_date,
        ],
    )?;
    Ok(())
}

/// Write an entry to the memory_log audit table.
pub(crate) fn write_audit_log(
    conn: &Connection,
    operation: &str,
    memory_id: &str,
    details: Option<&serde_json::Value>,
) -> Result<()> {
    let now = Utc::now().to_rfc3339();
    let details_json = details.map(|d| d.to_string());
    conn.execute(
        "INSERT INTO memory_log (operation, memory_id, details, created_at) VALUES (?1, ?2, ?3, ?4)",
        params![operation, memory_id, details_json, now],
    )?;
    Ok(())
}
