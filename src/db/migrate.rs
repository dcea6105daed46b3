//! Schema migrations.
//!
//! Every migration is recorded in the internal `log` table as
//! `operation = 'migration_applied'`, `target = <id>`, so running the engine
//! twice is a no-op.

use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension, params};
use tracing::{debug, info};

struct Migration {
    id: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        id: "20250301_0001_create_employees",
        description: "Created employees directory table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS employees (
            id          TEXT PRIMARY KEY,
            name        TEXT NOT NULL,
            active      INTEGER NOT NULL DEFAULT 1,
            created_at  TEXT NOT NULL
        );
        "#,
    },
    Migration {
        id: "20250301_0002_create_events",
        description: "Created events table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS events (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id  TEXT NOT NULL,
            kind         TEXT NOT NULL CHECK(kind IN ('entrada','salida')),
            place        TEXT NOT NULL DEFAULT '',
            latitude     TEXT,
            longitude    TEXT,
            recorded_at  TEXT NOT NULL,
            created_at   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_events_employee_time ON events(employee_id, recorded_at);
        CREATE INDEX IF NOT EXISTS idx_events_time ON events(recorded_at);
        "#,
    },
    Migration {
        id: "20250315_0003_add_event_source",
        description: "Added source column to events",
        sql: "ALTER TABLE events ADD COLUMN source TEXT NOT NULL DEFAULT 'cli';",
    },
];

/// Ensure that the `log` table exists; migrations are tracked through it.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
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

fn is_applied(conn: &Connection, id: &str) -> AppResult<bool> {
    let mut chk = conn.prepare_cached(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([id], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> AppResult<()> {
    let batch = format!(
        "BEGIN;\n{}\nINSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', '{}', '{}');\nCOMMIT;",
        m.sql, m.id, m.description
    );

    if let Err(e) = conn.execute_batch(&batch) {
        // Leave the connection usable for the caller's error path.
        let _ = conn.execute_batch("ROLLBACK;");
        return Err(AppError::Migration(format!("{}: {}", m.id, e)));
    }

    info!(migration = m.id, "{}", m.description);
    Ok(())
}

/// Public entry point: run all pending migrations in order.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    for m in MIGRATIONS {
        if is_applied(conn, m.id)? {
            debug!(migration = m.id, "already applied");
            continue;
        }
        apply(conn, m)?;
    }

    Ok(())
}

/// Ids of applied migrations, oldest first.
pub fn applied_migrations(conn: &Connection) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id ASC",
    )?;
    let rows = stmt.query_map(params![], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
