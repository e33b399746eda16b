//! Error types for roundtimer.

use thiserror::Error;

/// Errors produced by the workout list, the session engine and their hosts.
#[derive(Debug, Error)]
pub enum TimerError {
    /// A structural edit or selection referenced an index outside the list.
    #[error("Index {index} is out of range (list has {len} items)")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Length of the list at the time of the call.
        len: usize,
    },

    /// A session was started against a list with no items.
    #[error("Cannot start a session: the workout list is empty")]
    EmptyWorkoutList,

    /// An import payload failed to parse or validate.
    #[error("Malformed import: {0}")]
    MalformedImport(String),

    /// A workout item violates the data model (e.g. empty exercise name).
    #[error("Invalid workout item: {0}")]
    InvalidItem(String),

    /// A session configuration value is out of range or unparsable.
    #[error("Invalid session configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file, data directory or terminal setup failure.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Storage failure.
    #[error("Database error: {0}")]
    Database(String),

    /// Filesystem failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON output serialization failure.
    #[error("JSON error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl TimerError {
    /// Build an [`TimerError::IndexOutOfRange`] for `index` against a list of `len` items.
    #[must_use]
    pub const fn out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TimerError>;
