//! Schema upgrades.
//!
//! `schema_meta.schema_version` records the last applied step. Steps are plain
//! SQL batches applied in order, one transaction per step.

use rusqlite::Connection;

/// Version written by the newest step in [`STEPS`].
pub const CURRENT_SCHEMA_VERSION: u32 = 2;

/// `(target_version, sql)` pairs, ascending.
const STEPS: &[(u32, &str)] = &[(
    2,
    r#"
    CREATE TABLE IF NOT EXISTS baseline (
        id TEXT PRIMARY KEY,
        text TEXT NOT NULL,
        days_ago INTEGER NOT NULL DEFAULT 0,
        media_ref TEXT
    );
    CREATE INDEX IF NOT EXISTS idx_transcript_user ON transcript(user_id, created_at);
    "#,
)];

/// Version recorded in `schema_meta`; 0 when the value is unreadable.
pub fn get_schema_version(conn: &Connection) -> rusqlite::Result<u32> {
    let raw: String = conn.query_row(
        "SELECT value FROM schema_meta WHERE key = 'schema_version'",
        [],
        |row| row.get(0),
    )?;
    Ok(raw.parse().unwrap_or(0))
}

/// Apply every step newer than the recorded version.
pub fn run_migrations(conn: &Connection) -> rusqlite::Result<()> {
    let start = get_schema_version(conn)?;
    let pending: Vec<&(u32, &str)> = STEPS.iter().filter(|(to, _)| *to > start).collect();
    if pending.is_empty() {
        tracing::debug!(schema_version = start, "schema up to date");
        return Ok(());
    }

    for (to, sql) in pending {
        tracing::info!(to = *to, "applying schema step");
        conn.execute_batch("BEGIN")?;
        let applied = conn.execute_batch(sql).and_then(|_| {
            conn.execute(
                "UPDATE schema_meta SET value = ?1 WHERE key = 'schema_version'",
                [to.to_string()],
            )
        });
        if let Err(e) = applied {
            tracing::error!(to = *to, error = %e, "schema step failed, rolling back");
            conn.execute_batch("ROLLBACK")?;
            return Err(e);
        }
        conn.execute_batch("COMMIT")?;
    }

    Ok(())
}
