//! Workout list persistence.
//!
//! The list is stored as a JSON array under [`WORKOUTS_KEY`] in the local
//! database. [`WorkoutLibrary`] pairs the in-memory list with a store and
//! writes it back after every successful edit.

use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use super::item::WorkoutItem;
use super::list::{ListEdit, WorkoutList};
use crate::config::{Paths, EXPORT_FILE_NAME};
use crate::error::Result;
use crate::storage::Database;

/// Storage key holding the serialized workout list.
pub const WORKOUTS_KEY: &str = "workouts";

/// Raw storage for the serialized workout list.
#[cfg_attr(test, mockall::automock)]
pub trait WorkoutStore {
    /// Load the stored JSON, or `None` if nothing was ever saved.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn load(&self) -> Result<Option<String>>;

    /// Replace the stored JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn save(&self, json: &str) -> Result<()>;
}

/// Workout store backed by the `app_state` table.
pub struct SqliteWorkoutStore {
    db: Database,
}

impl SqliteWorkoutStore {
    /// Open the database under `paths`, creating the data directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or database cannot be created.
    pub fn open(paths: &Paths) -> Result<Self> {
        paths.ensure_dirs()?;
        let db = Database::open_at(&paths.database)?;
        Ok(Self { db })
    }

    /// Create a store over an existing database connection.
    #[must_use]
    pub const fn with_database(db: Database) -> Self {
        Self { db }
    }
}

impl WorkoutStore for SqliteWorkoutStore {
    fn load(&self) -> Result<Option<String>> {
        self.db.get_value(WORKOUTS_KEY)
    }

    fn save(&self, json: &str) -> Result<()> {
        self.db.put_value(WORKOUTS_KEY, json)
    }
}

/// The workout list together with the store it is persisted to.
pub struct WorkoutLibrary<S> {
    store: S,
    list: WorkoutList,
}

impl<S: WorkoutStore> WorkoutLibrary<S> {
    /// Load the list from `store`.
    ///
    /// Falls back to the built-in default list when nothing is stored or the
    /// stored value cannot be parsed. A corrupt value stays in the store until
    /// the next edit overwrites it.
    ///
    /// # Errors
    ///
    /// Returns an error if the store itself fails.
    pub fn open(store: S) -> Result<Self> {
        let list = match store.load()? {
            None => {
                debug!("No stored workout list; using defaults");
                WorkoutList::with_defaults()
            }
            Some(text) => WorkoutList::from_json(&text).unwrap_or_else(|e| {
                warn!("Stored workout list is unreadable, using defaults: {e}");
                WorkoutList::with_defaults()
            }),
        };

        Ok(Self { store, list })
    }

    /// The current list.
    pub const fn list(&self) -> &WorkoutList {
        &self.list
    }

    /// Apply `edit` to a copy of the list and persist it.
    ///
    /// The in-memory list only changes once the store accepted the new
    /// value, so a failed edit or a failed write leaves both untouched.
    fn commit(&mut self, edit: impl FnOnce(&mut WorkoutList) -> Result<ListEdit>) -> Result<ListEdit> {
        let mut next = self.list.clone();
        let change = edit(&mut next)?;
        if change == ListEdit::Unchanged {
            return Ok(change);
        }

        self.store.save(&next.to_json()?)?;
        self.list = next;
        info!("Saved workout list ({} items)", self.list.len());
        Ok(change)
    }

    /// Append an item.
    ///
    /// # Errors
    ///
    /// Returns an error if the item is invalid or the list cannot be saved.
    pub fn add(&mut self, item: WorkoutItem) -> Result<ListEdit> {
        self.commit(|list| list.add(item))
    }

    /// Remove the item at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range or the list cannot be saved.
    pub fn remove(&mut self, index: usize) -> Result<ListEdit> {
        self.commit(|list| list.remove(index))
    }

    /// Move the item at `index` one place towards the front.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range or the list cannot be saved.
    pub fn move_up(&mut self, index: usize) -> Result<ListEdit> {
        self.commit(|list| list.move_up(index))
    }

    /// Move the item at `index` one place towards the back.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range or the list cannot be saved.
    pub fn move_down(&mut self, index: usize) -> Result<ListEdit> {
        self.commit(|list| list.move_down(index))
    }

    /// Overwrite the item at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range, the item is invalid, or the
    /// list cannot be saved.
    pub fn replace(&mut self, index: usize, item: WorkoutItem) -> Result<ListEdit> {
        self.commit(|list| list.replace(index, item))
    }

    /// Replace the list with the built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be saved.
    pub fn reset_to_default(&mut self) -> Result<ListEdit> {
        self.commit(|list| Ok(list.to_default()))
    }

    /// Replace the list with a JSON array.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::MalformedImport` if the text is not a valid list;
    /// nothing is changed or saved in that case.
    pub fn import_json(&mut self, text: &str) -> Result<ListEdit> {
        let edit = self.commit(|list| list.import_json(text))?;
        info!("Imported {} workout items", self.list.len());
        Ok(edit)
    }

    /// Import a list from a file.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::Io` if the file cannot be read, or
    /// `TimerError::MalformedImport` if its contents are not a valid list.
    pub fn import_file(&mut self, path: &Path) -> Result<ListEdit> {
        let text = std::fs::read_to_string(path)?;
        self.import_json(&text)
    }

    /// Write the list to `path` (see [`resolve_export_path`]) and return the
    /// file actually written.
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be serialized or written.
    pub fn export_file(&self, path: Option<&Path>) -> Result<PathBuf> {
        let target = resolve_export_path(path);
        std::fs::write(&target, self.list.to_json()?)?;
        info!("Exported {} workout items to {}", self.list.len(), target.display());
        Ok(target)
    }
}

/// Where an export should be written.
///
/// No path means `workouts.json` in the current directory; a directory means
/// `workouts.json` inside it.
#[must_use]
pub fn resolve_export_path(path: Option<&Path>) -> PathBuf {
    match path {
        None => PathBuf::from(EXPORT_FILE_NAME),
        Some(dir) if dir.is_dir() => dir.join(EXPORT_FILE_NAME),
        Some(file) => file.to_path_buf(),
    }
}
