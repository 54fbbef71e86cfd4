use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

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

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Check if a table has a given column.
fn has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{table}')"))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Core tables: projects, workers, work logs, expenses.
fn create_core_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS projects (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL,
            budget      REAL NOT NULL DEFAULT 0 CHECK(budget >= 0),
            status      TEXT NOT NULL DEFAULT 'not_started'
                        CHECK(status IN ('not_started','in_progress','blocked','finished')),
            contractor  TEXT,
            start_date  TEXT,
            end_date    TEXT
        );

        CREATE TABLE IF NOT EXISTS workers (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL,
            national_id TEXT
        );

        CREATE TABLE IF NOT EXISTS work_logs (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            worker_id   INTEGER NOT NULL REFERENCES workers(id) ON DELETE RESTRICT,
            project_id  INTEGER NOT NULL REFERENCES projects(id) ON DELETE RESTRICT,
            date        TEXT NOT NULL,
            hours       REAL NOT NULL CHECK(hours > 0),
            notes       TEXT NOT NULL DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS expenses (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            project_id  INTEGER NOT NULL REFERENCES projects(id) ON DELETE RESTRICT,
            category    TEXT NOT NULL
                        CHECK(category IN ('per_diem','fuel','materials','container','other')),
            amount      REAL NOT NULL CHECK(amount >= 0),
            date        TEXT NOT NULL,
            description TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_work_logs_project_date ON work_logs(project_id, date);
        CREATE INDEX IF NOT EXISTS idx_work_logs_worker ON work_logs(worker_id);
        CREATE INDEX IF NOT EXISTS idx_expenses_project_date ON expenses(project_id, date);
        "#,
    )?;
    Ok(())
}

/// Workers gained an optional role ("oficial", "peón", ...) after the first release.
fn add_worker_role(conn: &Connection) -> Result<()> {
    if !has_column(conn, "workers", "role")? {
        conn.execute("ALTER TABLE workers ADD COLUMN role TEXT", [])?;
    }
    Ok(())
}

struct Migration {
    version: &'static str,
    message: &'static str,
    apply: fn(&Connection) -> Result<()>,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20260110_0001_create_core_tables",
        message: "Created projects, workers, work_logs and expenses tables",
        apply: create_core_tables,
    },
    Migration {
        version: "20260212_0002_add_worker_role",
        message: "Added 'role' column to workers",
        apply: add_worker_role,
    },
];

/// Public entry point: run all pending migrations.
///
/// Each migration runs in its own transaction and is marked as applied in
/// the `log` table, so calling this repeatedly is a no-op.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }

        let tx = conn.unchecked_transaction()?;

        (m.apply)(&tx).map_err(|e| AppError::Migration(format!("{}: {}", m.version, e)))?;

        tx.execute(
            "INSERT INTO log (date, operation, target, message)
             VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
            [m.version, m.message],
        )?;

        tx.commit()?;

        success(format!("Migration applied: {} → {}", m.version, m.message));
    }

    Ok(())
}

/// Versions already applied, oldest first.
pub fn applied_versions(conn: &Connection) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_are_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        run_pending_migrations(&conn).unwrap();
        run_pending_migrations(&conn).unwrap();

        let versions = applied_versions(&conn).unwrap();
        assert_eq!(versions.len(), MIGRATIONS.len());
        assert!(has_column(&conn, "workers", "role").unwrap());
    }
}
