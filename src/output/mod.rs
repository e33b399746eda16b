//! Output formatting for roundtimer.
//!
//! This module provides formatters for displaying workouts in various formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::TimerError;
use crate::features::session::SessionConfig;
use crate::features::workout::{WorkoutItem, WorkoutList};

pub use json::*;
pub use pretty::*;

/// Format the workout list based on output format
///
/// # Errors
///
/// Returns `TimerError::Parse` if JSON serialization fails.
pub fn format_list(
    list: &WorkoutList,
    config: &SessionConfig,
    format: OutputFormat,
) -> Result<String, TimerError> {
    match format {
        OutputFormat::Pretty => Ok(format_list_pretty(list, config)),
        OutputFormat::Json => format_list_json(list),
    }
}

/// Format a single item based on output format
///
/// # Errors
///
/// Returns `TimerError::Parse` if JSON serialization fails.
pub fn format_item(index: usize, item: &WorkoutItem, format: OutputFormat) -> Result<String, TimerError> {
    match format {
        OutputFormat::Pretty => Ok(format_item_pretty(index, item)),
        OutputFormat::Json => format_item_json(index, item),
    }
}
