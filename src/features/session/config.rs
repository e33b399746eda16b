//! Session configuration.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TimerError};

/// When rest intervals are inserted for exercise items.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RestPolicy {
    /// Rest after every work interval; the rest boundary advances the round.
    #[default]
    EveryRound,
    /// Rounds run back to back; a single rest follows the final round.
    BetweenExercises,
}

impl std::fmt::Display for RestPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EveryRound => write!(f, "every-round"),
            Self::BetweenExercises => write!(f, "between-exercises"),
        }
    }
}

/// Durations and round count driving a session.
///
/// All values are strictly positive. The engine reads the configuration at
/// every transition, so changes take effect at the next phase boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawSessionConfig")]
pub struct SessionConfig {
    work_seconds: u32,
    rest_seconds: u32,
    rounds_per_exercise: u32,
    rest_policy: RestPolicy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            work_seconds: 5,
            rest_seconds: 5,
            rounds_per_exercise: 20,
            rest_policy: RestPolicy::EveryRound,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSessionConfig {
    work_seconds: u32,
    rest_seconds: u32,
    rounds_per_exercise: u32,
    #[serde(default)]
    rest_policy: RestPolicy,
}

impl TryFrom<RawSessionConfig> for SessionConfig {
    type Error = TimerError;

    fn try_from(raw: RawSessionConfig) -> Result<Self> {
        Ok(Self::new(raw.work_seconds, raw.rest_seconds, raw.rounds_per_exercise)?
            .with_rest_policy(raw.rest_policy))
    }
}

fn positive(value: u32, what: &str) -> Result<u32> {
    if value == 0 {
        Err(TimerError::InvalidConfig(format!("{what} must be positive")))
    } else {
        Ok(value)
    }
}

impl SessionConfig {
    /// Create a configuration with the default rest policy.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::InvalidConfig` if any value is zero.
    pub fn new(work_seconds: u32, rest_seconds: u32, rounds_per_exercise: u32) -> Result<Self> {
        Ok(Self {
            work_seconds: positive(work_seconds, "work duration")?,
            rest_seconds: positive(rest_seconds, "rest duration")?,
            rounds_per_exercise: positive(rounds_per_exercise, "rounds per exercise")?,
            rest_policy: RestPolicy::default(),
        })
    }

    /// Use a different rest policy.
    #[must_use]
    pub const fn with_rest_policy(mut self, rest_policy: RestPolicy) -> Self {
        self.rest_policy = rest_policy;
        self
    }

    /// Work interval in seconds.
    #[must_use]
    pub const fn work_seconds(&self) -> u32 {
        self.work_seconds
    }

    /// Rest interval in seconds.
    #[must_use]
    pub const fn rest_seconds(&self) -> u32 {
        self.rest_seconds
    }

    /// Rounds per exercise.
    #[must_use]
    pub const fn rounds_per_exercise(&self) -> u32 {
        self.rounds_per_exercise
    }

    /// Index of the final round of an exercise.
    #[must_use]
    pub const fn last_round(&self) -> u32 {
        self.rounds_per_exercise.saturating_sub(1)
    }

    /// Rest policy.
    #[must_use]
    pub const fn rest_policy(&self) -> RestPolicy {
        self.rest_policy
    }

    /// Change the work interval.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::InvalidConfig` if `seconds` is zero.
    pub fn set_work_seconds(&mut self, seconds: u32) -> Result<()> {
        self.work_seconds = positive(seconds, "work duration")?;
        Ok(())
    }

    /// Change the rest interval.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::InvalidConfig` if `seconds` is zero.
    pub fn set_rest_seconds(&mut self, seconds: u32) -> Result<()> {
        self.rest_seconds = positive(seconds, "rest duration")?;
        Ok(())
    }

    /// Change the number of rounds per exercise.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::InvalidConfig` if `rounds` is zero.
    pub fn set_rounds_per_exercise(&mut self, rounds: u32) -> Result<()> {
        self.rounds_per_exercise = positive(rounds, "rounds per exercise")?;
        Ok(())
    }

    /// Change the rest policy.
    pub fn set_rest_policy(&mut self, rest_policy: RestPolicy) {
        self.rest_policy = rest_policy;
    }
}
