//! Observable session state and transitions.

use serde::{Deserialize, Serialize};

use super::clock::format_clock;

/// Whether the session is timing a work or a rest interval.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Work interval.
    #[default]
    Working,
    /// Rest interval.
    Resting,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Working => write!(f, "Working"),
            Self::Resting => write!(f, "Resting"),
        }
    }
}

/// Snapshot of a session.
///
/// `exercise_index` is meaningless while the bound list is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    /// Index of the current item in the workout list.
    pub exercise_index: usize,
    /// Completed work intervals for the current exercise.
    pub round: u32,
    /// Current phase.
    pub phase: Phase,
    /// Countdown within the current phase.
    pub remaining_seconds: u32,
    /// Whether the host should be ticking.
    pub running: bool,
}

impl SessionState {
    /// The state a fresh or reset session starts in.
    #[must_use]
    pub const fn initial(remaining_seconds: u32) -> Self {
        Self {
            exercise_index: 0,
            round: 0,
            phase: Phase::Working,
            remaining_seconds,
            running: false,
        }
    }

    /// Remaining time as `MM:SS`.
    #[must_use]
    pub fn remaining_display(&self) -> String {
        format_clock(self.remaining_seconds)
    }

    /// One-based round label, e.g. `Round: 1/20`.
    #[must_use]
    pub fn round_label(&self, rounds_per_exercise: u32) -> String {
        format!("Round: {}/{rounds_per_exercise}", self.round + 1)
    }
}

/// What happened at a phase boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Transition {
    /// A new work interval of the same exercise began.
    RoundAdvanced {
        /// Current item.
        exercise_index: usize,
        /// New round number (zero-based).
        round: u32,
    },
    /// A rest interval began.
    RestStarted {
        /// Current item.
        exercise_index: usize,
        /// Round that just finished (zero-based).
        round: u32,
    },
    /// The session moved on to the next item.
    ExerciseAdvanced {
        /// New current item.
        exercise_index: usize,
    },
    /// The last item finished; the session was reset.
    SessionCompleted,
}

impl std::fmt::Display for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RoundAdvanced { round, .. } => write!(f, "Round {} started", round + 1),
            Self::RestStarted { round, .. } => write!(f, "Rest after round {}", round + 1),
            Self::ExerciseAdvanced { exercise_index } => {
                write!(f, "Moved to item {exercise_index}")
            }
            Self::SessionCompleted => write!(f, "Session complete"),
        }
    }
}
