//! Command implementations for roundtimer.
//!
//! Each command returns the text to print; `main` does the printing.

mod completions;
mod config;
mod session;
mod workouts;

pub use completions::completions;
pub use config::{config_init, config_path, config_show};
pub use session::simulate;
pub use workouts::{
    add, build_item, edit, export, import, list, move_item, remove, reset_defaults, show,
};

use std::path::PathBuf;

use crate::cli::args::{OutputFormat, SessionArgs};
use crate::config::{Config, Paths};
use crate::error::TimerError;
use crate::features::session::{parse_clock, SessionConfig};
use crate::features::workout::{SqliteWorkoutStore, WorkoutLibrary};

/// Resolved paths, configuration and output format for one invocation.
pub struct Context {
    pub paths: Paths,
    pub config: Config,
    pub format: OutputFormat,
}

impl Context {
    /// Resolve the data directory and load its config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory is unknown or the config file
    /// cannot be parsed.
    pub fn load(data_dir: Option<PathBuf>, output: Option<OutputFormat>) -> Result<Self, TimerError> {
        let paths = Paths::resolve(data_dir)?;
        let config = Config::load_from_path(&paths.config_file)?;
        let format = output.unwrap_or(config.general.default_output);
        Ok(Self {
            paths,
            config,
            format,
        })
    }

    /// Open the persisted workout list.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or read.
    pub fn open_library(&self) -> Result<WorkoutLibrary<SqliteWorkoutStore>, TimerError> {
        WorkoutLibrary::open(SqliteWorkoutStore::open(&self.paths)?)
    }

    /// Session configuration from the config file with command-line overrides.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::InvalidConfig` for an unparsable duration or a
    /// zero value.
    pub fn session_config(&self, args: &SessionArgs) -> Result<SessionConfig, TimerError> {
        let mut config = self.config.session.to_session_config()?;

        if let Some(work) = &args.work {
            config.set_work_seconds(parse_clock(work)?)?;
        }
        if let Some(rest) = &args.rest {
            config.set_rest_seconds(parse_clock(rest)?)?;
        }
        if let Some(rounds) = args.rounds {
            config.set_rounds_per_exercise(rounds)?;
        }
        if let Some(policy) = args.rest_policy {
            config.set_rest_policy(policy);
        }

        Ok(config)
    }
}
