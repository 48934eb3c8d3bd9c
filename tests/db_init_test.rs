use fitrecall::db;
use rusqlite::Connection;

fn table_exists(conn: &Connection, name: &str) -> bool {
    conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
        [name],
        |row| row.get::<_, i64>(0),
    )
    .unwrap()
        == 1
}

#[test]
fn memory_database_has_all_tables() {
    let conn = db::open_memory_database().unwrap();

    for table in ["memories", "transcript", "baseline", "memory_log", "schema_meta"] {
        assert!(table_exists(&conn, table), "missing table {table}");
    }
}

#[test]
fn schema_init_is_idempotent() {
    let conn = db::open_memory_database().unwrap();
    db::schema::init_schema(&conn).unwrap();
    db::migrations::run_migrations(&conn).unwrap();

    assert_eq!(
        db::migrations::get_schema_version(&conn).unwrap(),
        db::migrations::CURRENT_SCHEMA_VERSION
    );
}

#[test]
fn audit_log_rejects_unknown_operations() {
    let conn = db::open_memory_database().unwrap();
    let result = conn.execute(
        "INSERT INTO memory_log (operation, memory_id, created_at) VALUES ('delete', 'x', '2026-01-01')",
        [],
    );
    assert!(result.is_err());
}

#[test]
fn health_check_passes_on_fresh_db() {
    let conn = db::open_memory_database().unwrap();

    let report = db::check_database_health(&conn).unwrap();
    assert!(report.integrity_ok);
    assert_eq!(report.schema_version, db::migrations::CURRENT_SCHEMA_VERSION);
    assert_eq!(report.memory_count, 0);
    assert_eq!(report.transcript_count, 0);
    assert_eq!(report.baseline_count, 0);
    assert_eq!(report.log_count, 0);
}
