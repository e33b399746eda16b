//! Workout sequences.
//!
//! Items, the ordered list the session plays through, the built-in default
//! sequence, and persistence of the list.

pub mod defaults;
pub mod item;
pub mod list;
pub mod storage;

pub use defaults::default_items;
pub use item::{Exercise, Rest, WorkoutItem};
pub use list::{ListEdit, WorkoutList};
pub use storage::{resolve_export_path, SqliteWorkoutStore, WorkoutLibrary, WorkoutStore, WORKOUTS_KEY};
