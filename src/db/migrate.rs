use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

const MIGRATION_CREATE_LESSONS: &str = "20260112_0001_create_lessons";

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `lessons` table exists.
fn lessons_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='lessons'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn create_indexes(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE INDEX IF NOT EXISTS idx_lessons_start ON lessons(start_at);
        CREATE INDEX IF NOT EXISTS idx_lessons_end ON lessons(end_at);
        "#,
    )
}

/// Create the `lessons` table.
fn create_lessons_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS lessons (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            student     TEXT NOT NULL DEFAULT '',
            start_at    TEXT NOT NULL,
            end_at      TEXT NOT NULL,
            latitude    REAL,
            longitude   REAL,
            address     TEXT DEFAULT '',
            source      TEXT NOT NULL DEFAULT 'cli',
            created_at  TEXT NOT NULL,
            status      TEXT NOT NULL DEFAULT 'scheduled'
                        CHECK(status IN ('scheduled','completed','cancelled')),
            CHECK(end_at > start_at)
        );
        "#,
    )?;
    create_indexes(conn)
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Fresh book → create the schema and record it
    if !lessons_table_exists(conn)? {
        create_lessons_table(conn)?;
        success(format!(
            "Migration applied: {} → created lessons table",
            MIGRATION_CREATE_LESSONS
        ));
        return mark_applied(conn, MIGRATION_CREATE_LESSONS, "Created lessons table");
    }

    // 3) Existing book → indexes only
    create_indexes(conn)
}
