//! The ordered workout list.
//!
//! Insertion order is playback order. Every mutator either applies fully or
//! returns an error with the list untouched, and reports what changed as a
//! [`ListEdit`] so a running session can follow along.

use serde::{Deserialize, Serialize};

use super::defaults::default_items;
use super::item::WorkoutItem;
use crate::error::{Result, TimerError};

/// Description of a structural change applied to a [`WorkoutList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEdit {
    /// Nothing changed (e.g. moving the first item up).
    Unchanged,
    /// An item was appended at `index`.
    Appended {
        /// Position of the new item.
        index: usize,
    },
    /// The item at `index` was deleted; later items shifted down by one.
    Removed {
        /// Position the removed item occupied.
        index: usize,
    },
    /// Two neighbouring items traded places.
    Swapped {
        /// Position the moved item came from.
        from: usize,
        /// Position the moved item went to.
        to: usize,
    },
    /// The item at `index` was overwritten.
    Replaced {
        /// Position of the replaced item.
        index: usize,
    },
    /// The whole list was replaced (defaults or import).
    Reloaded,
}

/// An ordered sequence of workout items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkoutList {
    items: Vec<WorkoutItem>,
}

impl WorkoutList {
    /// Create an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create a list from existing items.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::InvalidItem` if any item fails validation, so every
    /// list that serializes also parses back.
    pub fn from_items(items: Vec<WorkoutItem>) -> Result<Self> {
        items.iter().try_for_each(WorkoutItem::validate)?;
        Ok(Self { items })
    }

    /// Create a list holding the built-in default sequence.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            items: default_items(),
        }
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&WorkoutItem> {
        self.items.get(index)
    }

    /// All items in playback order.
    #[must_use]
    pub fn items(&self) -> &[WorkoutItem] {
        &self.items
    }

    /// Iterate over items in playback order.
    pub fn iter(&self) -> std::slice::Iter<'_, WorkoutItem> {
        self.items.iter()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(TimerError::out_of_range(index, self.items.len()))
        }
    }

    /// Append an item to the end of the list.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::InvalidItem` if the item fails validation.
    pub fn add(&mut self, item: WorkoutItem) -> Result<ListEdit> {
        item.validate()?;
        self.items.push(item);
        Ok(ListEdit::Appended {
            index: self.items.len() - 1,
        })
    }

    /// Delete the item at `index`, returning the edit.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::IndexOutOfRange` if `index` is not in `[0, len)`.
    pub fn remove(&mut self, index: usize) -> Result<ListEdit> {
        self.check_index(index)?;
        self.items.remove(index);
        Ok(ListEdit::Removed { index })
    }

    /// Swap the item at `index` with its predecessor.
    ///
    /// Moving the first item up is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::IndexOutOfRange` if `index` is not in `[0, len)`.
    pub fn move_up(&mut self, index: usize) -> Result<ListEdit> {
        self.check_index(index)?;
        if index == 0 {
            return Ok(ListEdit::Unchanged);
        }
        self.items.swap(index, index - 1);
        Ok(ListEdit::Swapped {
            from: index,
            to: index - 1,
        })
    }

    /// Swap the item at `index` with its successor.
    ///
    /// Moving the last item down is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::IndexOutOfRange` if `index` is not in `[0, len)`.
    pub fn move_down(&mut self, index: usize) -> Result<ListEdit> {
        self.check_index(index)?;
        if index + 1 == self.items.len() {
            return Ok(ListEdit::Unchanged);
        }
        self.items.swap(index, index + 1);
        Ok(ListEdit::Swapped {
            from: index,
            to: index + 1,
        })
    }

    /// Overwrite the item at `index`.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::IndexOutOfRange` for a bad index, or
    /// `TimerError::InvalidItem` if the new item fails validation.
    pub fn replace(&mut self, index: usize, item: WorkoutItem) -> Result<ListEdit> {
        self.check_index(index)?;
        item.validate()?;
        self.items[index] = item;
        Ok(ListEdit::Replaced { index })
    }

    /// Replace the whole list with the built-in default sequence.
    ///
    /// Irreversible; callers are expected to confirm with the user first.
    pub fn to_default(&mut self) -> ListEdit {
        self.items = default_items();
        ListEdit::Reloaded
    }

    /// Serialize the list as a pretty-printed JSON array.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::Parse` if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.items)?)
    }

    /// Parse a JSON array of workout items.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::MalformedImport` if the text is not valid JSON, is
    /// not an array, or any element is not a valid exercise or rest.
    pub fn from_json(text: &str) -> Result<Self> {
        let items: Vec<WorkoutItem> =
            serde_json::from_str(text).map_err(|e| TimerError::MalformedImport(e.to_string()))?;
        Self::from_items(items).map_err(|e| TimerError::MalformedImport(e.to_string()))
    }

    /// Replace the list with the contents of a JSON array.
    ///
    /// On failure the current items are left untouched.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::MalformedImport` as for [`WorkoutList::from_json`].
    pub fn import_json(&mut self, text: &str) -> Result<ListEdit> {
        let parsed = Self::from_json(text)?;
        *self = parsed;
        Ok(ListEdit::Reloaded)
    }
}

impl<'a> IntoIterator for &'a WorkoutList {
    type Item = &'a WorkoutItem;
    type IntoIter = std::slice::Iter<'a, WorkoutItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
