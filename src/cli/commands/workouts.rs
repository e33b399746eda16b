//! Workout list commands.
//!
//! These operate on any [`WorkoutLibrary`] so they can be exercised against
//! an in-memory store.

use std::path::Path;

use colored::Colorize;
use serde_json::json;

use crate::cli::args::{ItemCommand, MoveDirection, OutputFormat};
use crate::error::TimerError;
use crate::features::session::{parse_clock, SessionConfig};
use crate::features::workout::{Exercise, ListEdit, WorkoutItem, WorkoutLibrary, WorkoutStore};
use crate::output::{format_item, format_list, to_json};

/// Turn `add`/`edit` arguments into an item.
///
/// # Errors
///
/// Returns `TimerError::InvalidConfig` if a duration cannot be parsed.
pub fn build_item(cmd: ItemCommand) -> Result<WorkoutItem, TimerError> {
    match cmd {
        ItemCommand::Exercise {
            name,
            description,
            reps,
            sets,
            hold,
            image,
        } => {
            let mut exercise =
                Exercise::new(name, description).with_prescription(reps, sets, parse_clock(&hold)?);
            if let Some(image) = image {
                exercise = exercise.with_image(image);
            }
            Ok(WorkoutItem::Exercise(exercise))
        }
        ItemCommand::Rest { duration } => Ok(WorkoutItem::rest(parse_clock(&duration)?)),
    }
}

fn report(
    action: &str,
    index: usize,
    item: &WorkoutItem,
    len: usize,
    format: OutputFormat,
) -> Result<String, TimerError> {
    match format {
        OutputFormat::Json => to_json(&json!({
            "action": action,
            "index": index,
            "item": item,
            "count": len,
        })),
        OutputFormat::Pretty => Ok(format!(
            "{} {} (index {index})",
            capitalize(action).green(),
            item.to_string().bold()
        )),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Print the workout list.
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn list<S: WorkoutStore>(
    library: &WorkoutLibrary<S>,
    session: &SessionConfig,
    format: OutputFormat,
) -> Result<String, TimerError> {
    format_list(library.list(), session, format)
}

/// Print one item.
///
/// # Errors
///
/// Returns `TimerError::IndexOutOfRange` if there is no item at `index`.
pub fn show<S: WorkoutStore>(
    library: &WorkoutLibrary<S>,
    index: usize,
    format: OutputFormat,
) -> Result<String, TimerError> {
    let list = library.list();
    let item = list
        .get(index)
        .ok_or_else(|| TimerError::out_of_range(index, list.len()))?;
    format_item(index, item, format)
}

/// Append an item.
///
/// # Errors
///
/// Returns an error if the arguments are invalid or the list cannot be saved.
pub fn add<S: WorkoutStore>(
    library: &mut WorkoutLibrary<S>,
    cmd: ItemCommand,
    format: OutputFormat,
) -> Result<String, TimerError> {
    let item = build_item(cmd)?;
    let index = library.list().len();
    library.add(item.clone())?;
    report("added", index, &item, library.list().len(), format)
}

/// Replace the item at `index`.
///
/// # Errors
///
/// Returns an error if the index or arguments are invalid or the list cannot
/// be saved.
pub fn edit<S: WorkoutStore>(
    library: &mut WorkoutLibrary<S>,
    index: usize,
    cmd: ItemCommand,
    format: OutputFormat,
) -> Result<String, TimerError> {
    let item = build_item(cmd)?;
    library.replace(index, item.clone())?;
    report("replaced", index, &item, library.list().len(), format)
}

/// Remove the item at `index`.
///
/// # Errors
///
/// Returns an error if the index is invalid or the list cannot be saved.
pub fn remove<S: WorkoutStore>(
    library: &mut WorkoutLibrary<S>,
    index: usize,
    format: OutputFormat,
) -> Result<String, TimerError> {
    let list = library.list();
    let item = list
        .get(index)
        .cloned()
        .ok_or_else(|| TimerError::out_of_range(index, list.len()))?;
    library.remove(index)?;
    report("removed", index, &item, library.list().len(), format)
}

/// Move the item at `index` one place.
///
/// # Errors
///
/// Returns an error if the index is invalid or the list cannot be saved.
pub fn move_item<S: WorkoutStore>(
    library: &mut WorkoutLibrary<S>,
    index: usize,
    direction: MoveDirection,
    format: OutputFormat,
) -> Result<String, TimerError> {
    let edit = match direction {
        MoveDirection::Up => library.move_up(index)?,
        MoveDirection::Down => library.move_down(index)?,
    };

    let to = match edit {
        ListEdit::Swapped { to, .. } => to,
        _ => index,
    };

    match format {
        OutputFormat::Json => to_json(&json!({
            "action": "moved",
            "from": index,
            "to": to,
            "changed": edit != ListEdit::Unchanged,
        })),
        OutputFormat::Pretty if edit == ListEdit::Unchanged => Ok(format!(
            "Item {index} is already at the {} of the list",
            match direction {
                MoveDirection::Up => "top",
                MoveDirection::Down => "bottom",
            }
        )),
        OutputFormat::Pretty => Ok(format!("{} item {index} to {to}", "Moved".green())),
    }
}

/// Replace the list with the built-in defaults.
///
/// # Errors
///
/// Returns `TimerError::Config` without `--force`, or an error if the list
/// cannot be saved.
pub fn reset_defaults<S: WorkoutStore>(
    library: &mut WorkoutLibrary<S>,
    force: bool,
    format: OutputFormat,
) -> Result<String, TimerError> {
    if !force {
        return Err(TimerError::Config(
            "This will replace your workout list with the default exercises.\nUse --force to confirm."
                .to_string(),
        ));
    }

    library.reset_to_default()?;
    match format {
        OutputFormat::Json => to_json(&json!({
            "action": "reset",
            "count": library.list().len(),
        })),
        OutputFormat::Pretty => Ok(format!(
            "{} workout list to {} default exercises",
            "Reset".green(),
            library.list().len()
        )),
    }
}

/// Write the list to a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn export<S: WorkoutStore>(
    library: &WorkoutLibrary<S>,
    path: Option<&Path>,
    format: OutputFormat,
) -> Result<String, TimerError> {
    let written = library.export_file(path)?;
    match format {
        OutputFormat::Json => to_json(&json!({
            "action": "exported",
            "path": written,
            "count": library.list().len(),
        })),
        OutputFormat::Pretty => Ok(format!(
            "{} {} items to {}",
            "Exported".green(),
            library.list().len(),
            written.display()
        )),
    }
}

/// Replace the list with the contents of a JSON file.
///
/// # Errors
///
/// Returns `TimerError::MalformedImport` if the file is not a valid list; the
/// current list is kept in that case.
pub fn import<S: WorkoutStore>(
    library: &mut WorkoutLibrary<S>,
    path: &Path,
    format: OutputFormat,
) -> Result<String, TimerError> {
    library.import_file(path)?;
    match format {
        OutputFormat::Json => to_json(&json!({
            "action": "imported",
            "path": path,
            "count": library.list().len(),
        })),
        OutputFormat::Pretty => Ok(format!(
            "{} {} items from {}",
            "Imported".green(),
            library.list().len(),
            path.display()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::workout::SqliteWorkoutStore;
    use crate::storage::Database;
    use tempfile::TempDir;

    fn library() -> WorkoutLibrary<SqliteWorkoutStore> {
        let store = SqliteWorkoutStore::with_database(Database::open_in_memory().unwrap());
        WorkoutLibrary::open(store).unwrap()
    }

    fn rest(duration: &str) -> ItemCommand {
        ItemCommand::Rest {
            duration: duration.to_string(),
        }
    }

    #[test]
    fn test_build_exercise_item() {
        let item = build_item(ItemCommand::Exercise {
            name: "Plank".to_string(),
            description: "Straight back".to_string(),
            reps: 0,
            sets: 3,
            hold: "0:45".to_string(),
            image: Some("plank.png".to_string()),
        })
        .unwrap();

        let exercise = item.as_exercise().unwrap();
        assert_eq!(exercise.hold_time, 45);
        assert_eq!(exercise.sets, 3);
        assert_eq!(exercise.image.as_deref(), Some("plank.png"));
    }

    #[test]
    fn test_build_rest_item_rejects_bad_duration() {
        assert!(matches!(
            build_item(rest("soon")),
            Err(TimerError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_add_reports_index() {
        let mut library = library();
        let output = add(&mut library, rest("1:00"), OutputFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["action"], "added");
        assert_eq!(value["index"], 4);
        assert_eq!(value["item"]["restTime"], 60);
        assert_eq!(library.list().len(), 5);
    }

    #[test]
    fn test_show_out_of_range() {
        let library = library();
        assert!(matches!(
            show(&library, 4, OutputFormat::Pretty),
            Err(TimerError::IndexOutOfRange { index: 4, len: 4 })
        ));
    }

    #[test]
    fn test_edit_and_remove() {
        let mut library = library();

        edit(&mut library, 1, rest("30"), OutputFormat::Pretty).unwrap();
        assert_eq!(library.list().get(1), Some(&WorkoutItem::rest(30)));

        remove(&mut library, 1, OutputFormat::Pretty).unwrap();
        assert_eq!(library.list().len(), 3);
        assert!(remove(&mut library, 3, OutputFormat::Pretty).is_err());
    }

    #[test]
    fn test_move_item_at_boundary() {
        let mut library = library();
        let before = library.list().clone();

        let output = move_item(&mut library, 0, MoveDirection::Up, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["changed"], false);
        assert_eq!(library.list(), &before);
    }

    #[test]
    fn test_move_item_down() {
        let mut library = library();
        let first = library.list().get(0).cloned();

        move_item(&mut library, 0, MoveDirection::Down, OutputFormat::Pretty).unwrap();
        assert_eq!(library.list().get(1).cloned(), first);
    }

    #[test]
    fn test_reset_defaults_requires_force() {
        let mut library = library();
        library.remove(0).unwrap();

        assert!(reset_defaults(&mut library, false, OutputFormat::Pretty).is_err());
        assert_eq!(library.list().len(), 3);

        reset_defaults(&mut library, true, OutputFormat::Pretty).unwrap();
        assert_eq!(library.list().len(), 4);
    }

    #[test]
    fn test_export_and_import() {
        let temp = TempDir::new().unwrap();
        let mut source = library();
        add(&mut source, rest("20"), OutputFormat::Pretty).unwrap();
        export(&source, Some(temp.path()), OutputFormat::Pretty).unwrap();

        let mut target = library();
        let output = import(
            &mut target,
            &temp.path().join("workouts.json"),
            OutputFormat::Json,
        )
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["count"], 5);
        assert_eq!(target.list(), source.list());
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("added"), "Added");
        assert_eq!(capitalize(""), "");
    }
}
