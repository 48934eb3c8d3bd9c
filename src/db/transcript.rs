//! Transcript table access.
//!
//! The engine only reads the transcript through [`TranscriptSource`]; the
//! append helper exists for callers that own the conversation (CLI, MCP tools).

use anyhow::Result;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};

use crate::memory::temporal::parse_timestamp;
use crate::memory::types::TranscriptRecord;

/// Read-only access to a user's transcript, oldest message first.
pub trait TranscriptSource {
    fn records(&self, user_id: &str) -> Result<Vec<TranscriptRecord>>;
}

/// An in-memory snapshot. Ignores `user_id`: the snapshot is already scoped.
impl TranscriptSource for Vec<TranscriptRecord> {
    fn records(&self, _user_id: &str) -> Result<Vec<TranscriptRecord>> {
        Ok(self.clone())
    }
}

/// Transcript stored in the `transcript` table.
pub struct SqliteTranscript<'c> {
    conn: &'c Connection,
}

impl<'c> SqliteTranscript<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }
}

impl TranscriptSource for SqliteTranscript<'_> {
    fn records(&self, user_id: &str) -> Result<Vec<TranscriptRecord>> {
        load_transcript(self.conn, user_id)
    }
}

/// Append one message. Returns the new row id.
pub fn append_message(
    conn: &Connection,
    user_id: &str,
    conversation: &str,
    text: &str,
    is_from_user: bool,
    at: DateTime<Utc>,
) -> Result<i64> {
    conn.execute(
        "INSERT INTO transcript (user_id, conversation, text, is_from_user, created_at) \
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![user_id, conversation, text, is_from_user, at.to_rfc3339()],
    )?;
    let id = conn.last_insert_rowid();
    tracing::debug!(id, user = %user_id, conversation = %conversation, is_from_user, "transcript message appended");
    Ok(id)
}

/// All messages for `user_id` across conversations, in insertion order.
pub fn load_transcript(conn: &Connection, user_id: &str) -> Result<Vec<TranscriptRecord>> {
    let mut stmt = conn.prepare(
        "SELECT id, text, is_from_user, created_at FROM transcript \
         WHERE user_id = ?1 ORDER BY id",
    )?;
    let records = stmt
        .query_map(params![user_id], |row| {
            let created_at: String = row.get(3)?;
            Ok(TranscriptRecord {
                id: row.get(0)?,
                text: row.get(1)?,
                is_from_user: row.get(2)?,
                timestamp: parse_timestamp(&created_at),
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(records)
}
