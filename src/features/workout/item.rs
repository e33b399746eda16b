//! Workout items.
//!
//! An item is either an exercise or a rest. On the wire the two variants share
//! one flat JSON object shape: exercises carry `name`, `description`,
//! `repetitions`, `sets`, `holdTime` and an optional `image`, rests carry
//! `isRest: true` and `restTime`. Fields belonging to the other variant are
//! ignored on read and never written.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TimerError};

/// An exercise with its prescription.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    /// Display name. Never empty.
    pub name: String,
    /// Free-form instructions.
    pub description: String,
    /// Repetitions per set.
    pub repetitions: u32,
    /// Number of sets.
    pub sets: u32,
    /// Hold time in seconds.
    pub hold_time: u32,
    /// Optional image reference (URI or data URL).
    pub image: Option<String>,
}

impl Exercise {
    /// Create an exercise with no prescription and no image.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            repetitions: 0,
            sets: 0,
            hold_time: 0,
            image: None,
        }
    }

    /// Set repetitions, sets and hold time in one go.
    #[must_use]
    pub const fn with_prescription(mut self, repetitions: u32, sets: u32, hold_time: u32) -> Self {
        self.repetitions = repetitions;
        self.sets = sets;
        self.hold_time = hold_time;
        self
    }

    /// Attach an image reference.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

/// A rest block inside the workout sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rest {
    /// Rest length in seconds.
    pub rest_time: u32,
}

/// One entry of a workout list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawItem", into = "RawItem")]
pub enum WorkoutItem {
    /// A timed exercise, repeated for the configured number of rounds.
    Exercise(Exercise),
    /// A rest block timed by its own `rest_time`.
    Rest(Rest),
}

impl WorkoutItem {
    /// Shorthand for an exercise item.
    #[must_use]
    pub fn exercise(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::Exercise(Exercise::new(name, description))
    }

    /// Shorthand for a rest item.
    #[must_use]
    pub const fn rest(rest_time: u32) -> Self {
        Self::Rest(Rest { rest_time })
    }

    /// Whether this is a rest item.
    #[must_use]
    pub const fn is_rest(&self) -> bool {
        matches!(self, Self::Rest(_))
    }

    /// The exercise payload, if this is an exercise.
    #[must_use]
    pub const fn as_exercise(&self) -> Option<&Exercise> {
        match self {
            Self::Exercise(exercise) => Some(exercise),
            Self::Rest(_) => None,
        }
    }

    /// Name shown to the user.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self {
            Self::Exercise(exercise) => &exercise.name,
            Self::Rest(_) => "Rest",
        }
    }

    /// Check the item against the data model.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::InvalidItem` if an exercise has a blank name.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Exercise(exercise) if exercise.name.trim().is_empty() => Err(
                TimerError::InvalidItem("exercise name must not be empty".to_string()),
            ),
            _ => Ok(()),
        }
    }
}

impl std::fmt::Display for WorkoutItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exercise(exercise) => write!(f, "{}", exercise.name),
            Self::Rest(rest) => write!(f, "Rest ({}s)", rest.rest_time),
        }
    }
}

/// Flat wire shape shared by both variants.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    repetitions: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sets: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    hold_time: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    is_rest: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rest_time: Option<u32>,
}

impl TryFrom<RawItem> for WorkoutItem {
    type Error = String;

    fn try_from(raw: RawItem) -> std::result::Result<Self, Self::Error> {
        if raw.is_rest == Some(true) {
            let rest_time = raw
                .rest_time
                .ok_or_else(|| "rest item is missing `restTime`".to_string())?;
            return Ok(Self::rest(rest_time));
        }

        let name = raw
            .name
            .ok_or_else(|| "item is neither an exercise (`name`) nor a rest (`isRest`)".to_string())?;
        if name.trim().is_empty() {
            return Err("exercise `name` must not be empty".to_string());
        }

        Ok(Self::Exercise(Exercise {
            name,
            description: raw.description.unwrap_or_default(),
            repetitions: raw.repetitions.unwrap_or(0),
            sets: raw.sets.unwrap_or(0),
            hold_time: raw.hold_time.unwrap_or(0),
            image: raw.image,
        }))
    }
}

impl From<WorkoutItem> for RawItem {
    fn from(item: WorkoutItem) -> Self {
        match item {
            WorkoutItem::Exercise(exercise) => Self {
                name: Some(exercise.name),
                description: Some(exercise.description),
                repetitions: Some(exercise.repetitions),
                sets: Some(exercise.sets),
                hold_time: Some(exercise.hold_time),
                image: exercise.image,
                ..Self::default()
            },
            WorkoutItem::Rest(rest) => Self {
                is_rest: Some(true),
                rest_time: Some(rest.rest_time),
                ..Self::default()
            },
        }
    }
}
