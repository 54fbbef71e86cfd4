//! SQLite connection wrapper (lightweight for CLI usage).

use crate::db::initialize::init_db;
use crate::errors::{AppError, AppResult};
use rusqlite::Connection;
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open (or create) the database file. Foreign keys are enforced.
    pub fn new(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(Self { conn })
    }

    /// Open a database that must already exist, then bring its schema up to date.
    ///
    /// A missing file is an error: reports must never be computed against an
    /// accidentally created empty database.
    pub fn open_existing(path: &str) -> AppResult<Self> {
        if !Path::new(path).exists() {
            return Err(AppError::Config(format!(
                "Database not found: {path} (run `obralog init` first)"
            )));
        }
        let pool = Self::new(path)?;
        init_db(&pool.conn)?;
        Ok(pool)
    }

    /// Fresh in-memory database with the full schema.
    pub fn in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        init_db(&conn)?;
        Ok(Self { conn })
    }
}
