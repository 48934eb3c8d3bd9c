//! SQL DDL for the core tables.
//!
//! Defines `memories` (append-only structured entries), `transcript` (chat
//! messages, read back by the transcript provider), `memory_log`, and
//! `schema_meta`. All DDL uses `IF NOT EXISTS` for idempotent initialization.
//! The `baseline` table arrives in migration v2.

use rusqlite::Connection;

const SCHEMA_SQL: &str = r#"
-- Structured activity entries written by `store`
CREATE TABLE IF NOT EXISTS memories (
    id TEXT PRIMARY KEY,
    user_id TEXT NOT NULL,
    source_text TEXT NOT NULL,
    media_ref TEXT,
    workout_types TEXT NOT NULL DEFAULT '[]',
    muscle_groups TEXT NOT NULL DEFAULT '[]',
    exercises TEXT NOT NULL DEFAULT '[]',
    timestamp TEXT NOT NULL,
    activity_date TEXT
);

CREATE INDEX IF NOT EXISTS idx_memories_user ON memories(user_id);
CREATE INDEX IF NOT EXISTS idx_memories_date ON memories(activity_date);

-- Running chat transcript, append-only
CREATE TABLE IF NOT EXISTS transcript (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id TEXT NOT NULL,
    conversation TEXT NOT NULL DEFAULT 'default',
    text TEXT NOT NULL,
    is_from_user INTEGER NOT NULL DEFAULT 1,
    created_at TEXT NOT NULL
);

-- Audit log
CREATE TABLE IF NOT EXISTS memory_log (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    operation TEXT NOT NULL CHECK(operation IN ('create','import')),
    memory_id TEXT NOT NULL,
    details TEXT,
    created_at TEXT NOT NULL
);

-- Schema metadata
CREATE TABLE IF NOT EXISTS schema_meta (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);
"#;

/// Initialize all schema tables. Idempotent (uses IF NOT EXISTS).
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA_SQL)?;

    // Set initial schema version if not already present
    conn.execute(
        "INSERT OR IGNORE INTO schema_meta (key, value) VALUES ('schema_version', '1')",
        [],
    )?;

    Ok(())
}
