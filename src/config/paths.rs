//! Path resolution for roundtimer configuration and data files.
//!
//! All roundtimer data is stored in `~/.roundtimer/` unless a different root
//! is given with `--data-dir` or `ROUNDTIMER_HOME`:
//! - `config.yaml` - Main configuration file
//! - `roundtimer.db` - SQLite database holding the workout list

use std::path::PathBuf;

use crate::error::TimerError;

/// File name used for exports when only a directory is given.
pub const EXPORT_FILE_NAME: &str = "workouts.json";

/// Paths to roundtimer configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.roundtimer/`
    pub root: PathBuf,
    /// Config file: `~/.roundtimer/config.yaml`
    pub config_file: PathBuf,
    /// Database file: `~/.roundtimer/roundtimer.db`
    pub database: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, TimerError> {
        let home = std::env::var("HOME").map_err(|_| {
            TimerError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".roundtimer")))
    }

    /// Create paths with a custom root directory.
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            database: root.join("roundtimer.db"),
            root,
        }
    }

    /// Use `root` when given, otherwise fall back to the home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if no root is given and the home directory cannot be
    /// determined.
    pub fn resolve(root: Option<PathBuf>) -> Result<Self, TimerError> {
        root.map_or_else(Self::new, |root| Ok(Self::with_root(root)))
    }

    /// Ensure the root directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), TimerError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                TimerError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }

        Ok(())
    }
}
