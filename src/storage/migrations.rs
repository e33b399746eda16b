//! Database migrations for roundtimer.
//!
//! Each migration is a function that upgrades the schema by one version.
//! Migrations are run automatically when the database is opened.

use rusqlite::Connection;

use crate::error::TimerError;

/// Current schema version.
const CURRENT_VERSION: i32 = 1;

/// Get the current schema version from the database.
///
/// Returns 0 if no version has been set (new database).
pub fn get_version(conn: &Connection) -> Result<i32, TimerError> {
    let version: i32 = conn
        .query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| TimerError::Database(format!("Failed to get schema version: {e}")))?;

    Ok(version)
}

/// Set the schema version in the database.
fn set_version(conn: &Connection, version: i32) -> Result<(), TimerError> {
    conn.execute_batch(&format!("PRAGMA user_version = {version};"))
        .map_err(|e| TimerError::Database(format!("Failed to set schema version: {e}")))
}

/// Run all pending migrations.
pub fn run(conn: &Connection) -> Result<(), TimerError> {
    let current = get_version(conn)?;

    if current >= CURRENT_VERSION {
        return Ok(());
    }

    for version in (current + 1)..=CURRENT_VERSION {
        log::info!("Applying database migration v{version}");
        run_migration(conn, version)?;
        set_version(conn, version)?;
    }

    Ok(())
}

/// Run a specific migration.
fn run_migration(conn: &Connection, version: i32) -> Result<(), TimerError> {
    match version {
        1 => migrate_v1(conn),
        _ => Err(TimerError::Database(format!(
            "Unknown migration version: {version}"
        ))),
    }
}

/// Migration v1: key/value application state.
///
/// The workout list is stored as a JSON array under a single well-known key.
fn migrate_v1(conn: &Connection) -> Result<(), TimerError> {
    conn.execute_batch(
        r"
        CREATE TABLE IF NOT EXISTS app_state (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        ",
    )
    .map_err(|e| TimerError::Database(format!("Migration v1 failed: {e}")))
}
