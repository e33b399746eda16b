//! JSON output formatting for roundtimer.
//!
//! Item objects use the same shape as the import/export file.

use serde::Serialize;
use serde_json::json;

use crate::error::TimerError;
use crate::features::workout::{WorkoutItem, WorkoutList};

/// Format the workout list as JSON
///
/// # Errors
///
/// Returns `TimerError::Parse` if JSON serialization fails.
pub fn format_list_json(list: &WorkoutList) -> Result<String, TimerError> {
    let output = json!({
        "count": list.len(),
        "items": list,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a single item with its index as JSON
///
/// # Errors
///
/// Returns `TimerError::Parse` if JSON serialization fails.
pub fn format_item_json(index: usize, item: &WorkoutItem) -> Result<String, TimerError> {
    let output = json!({
        "index": index,
        "item": item,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `TimerError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, TimerError> {
    Ok(serde_json::to_string_pretty(value)?)
}
