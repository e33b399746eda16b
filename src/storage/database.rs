//! `SQLite` database connection and key/value access.
//!
//! The database is stored at `~/.roundtimer/roundtimer.db` and holds a single
//! `app_state` table mapping well-known keys to JSON documents.

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};

use crate::error::TimerError;

use super::migrations;

/// Database connection wrapper.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at a specific path.
    ///
    /// Creates the database file and runs migrations if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrations fail.
    pub fn open_at(path: &std::path::Path) -> Result<Self, TimerError> {
        let conn = Connection::open(path).map_err(|e| {
            TimerError::Database(format!("Failed to open database {}: {e}", path.display()))
        })?;

        let db = Self { conn };
        db.migrate()?;

        Ok(db)
    }

    /// Open an in-memory database (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrations fail.
    pub fn open_in_memory() -> Result<Self, TimerError> {
        let conn = Connection::open_in_memory().map_err(|e| {
            TimerError::Database(format!("Failed to open in-memory database: {e}"))
        })?;

        let db = Self { conn };
        db.migrate()?;

        Ok(db)
    }

    /// Run database migrations.
    fn migrate(&self) -> Result<(), TimerError> {
        migrations::run(&self.conn)
    }

    /// Get the current schema version.
    ///
    /// # Errors
    ///
    /// Returns an error if the version cannot be read.
    pub fn schema_version(&self) -> Result<i32, TimerError> {
        migrations::get_version(&self.conn)
    }

    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_value(&self, key: &str) -> Result<Option<String>, TimerError> {
        self.conn
            .query_row(
                "SELECT value FROM app_state WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| TimerError::Database(format!("Failed to read '{key}': {e}")))
    }

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn put_value(&self, key: &str, value: &str) -> Result<(), TimerError> {
        self.conn
            .execute(
                r"INSERT INTO app_state (key, value, updated_at) VALUES (?1, ?2, ?3)
                  ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
                params![key, value, Utc::now().to_rfc3339()],
            )
            .map_err(|e| TimerError::Database(format!("Failed to write '{key}': {e}")))?;
        Ok(())
    }
}
