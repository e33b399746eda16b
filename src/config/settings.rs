//! Configuration settings for roundtimer.
//!
//! Settings are loaded from `~/.roundtimer/config.yaml`.

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::error::TimerError;
use crate::features::session::{RestPolicy, SessionConfig};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Session defaults.
    pub session: SessionDefaults,
    /// Interactive timer settings.
    pub tui: TuiConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
}

/// Defaults used to build a [`SessionConfig`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionDefaults {
    /// Work interval in seconds.
    #[serde(default = "default_work_seconds")]
    pub work_seconds: u32,
    /// Rest interval in seconds.
    #[serde(default = "default_rest_seconds")]
    pub rest_seconds: u32,
    /// Rounds per exercise.
    #[serde(default = "default_rounds")]
    pub rounds_per_exercise: u32,
    /// When rest intervals happen.
    #[serde(default)]
    pub rest_policy: RestPolicy,
}

/// Interactive timer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Host timer cadence in milliseconds.
    #[serde(default = "default_tick_millis")]
    pub tick_millis: u64,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_work_seconds() -> u32 {
    5
}

const fn default_rest_seconds() -> u32 {
    5
}

const fn default_rounds() -> u32 {
    20
}

const fn default_tick_millis() -> u64 {
    1000
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
        }
    }
}

impl Default for SessionDefaults {
    fn default() -> Self {
        Self {
            work_seconds: default_work_seconds(),
            rest_seconds: default_rest_seconds(),
            rounds_per_exercise: default_rounds(),
            rest_policy: RestPolicy::default(),
        }
    }
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_millis: default_tick_millis(),
        }
    }
}

impl SessionDefaults {
    /// Build a validated session configuration from these defaults.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::InvalidConfig` if any value is zero.
    pub fn to_session_config(&self) -> Result<SessionConfig, TimerError> {
        SessionConfig::new(self.work_seconds, self.rest_seconds, self.rounds_per_exercise)
            .map(|config| config.with_rest_policy(self.rest_policy))
    }
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, TimerError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            TimerError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            TimerError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), TimerError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| TimerError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            TimerError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Serialize the configuration as YAML for display.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String, TimerError> {
        serde_yaml::to_string(self)
            .map_err(|e| TimerError::Config(format!("Failed to serialize config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.general.default_output, OutputFormat::Pretty);
        assert_eq!(config.session.work_seconds, 5);
        assert_eq!(config.session.rest_seconds, 5);
        assert_eq!(config.session.rounds_per_exercise, 20);
        assert_eq!(config.session.rest_policy, RestPolicy::EveryRound);
        assert_eq!(config.tui.tick_millis, 1000);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let config = Config::load_from_path(&config_path).unwrap();

        assert_eq!(config.general.default_output, OutputFormat::Pretty);
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut config = Config::default();
        config.session.work_seconds = 40;
        config.session.rest_policy = RestPolicy::BetweenExercises;

        config.save_to_path(&config_path).unwrap();

        let loaded = Config::load_from_path(&config_path).unwrap();

        assert_eq!(loaded.session.work_seconds, 40);
        assert_eq!(loaded.session.rest_policy, RestPolicy::BetweenExercises);
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let partial_yaml = r"
session:
  rounds_per_exercise: 3
  rest_policy: between-exercises
";
        std::fs::write(&config_path, partial_yaml).unwrap();

        let config = Config::load_from_path(&config_path).unwrap();

        assert_eq!(config.session.rounds_per_exercise, 3);
        assert_eq!(config.session.rest_policy, RestPolicy::BetweenExercises);
        assert_eq!(config.session.work_seconds, 5);
        assert_eq!(config.general.default_output, OutputFormat::Pretty);
    }

    #[test]
    fn test_invalid_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        std::fs::write(&config_path, "session: [not, a, map]").unwrap();

        assert!(matches!(
            Config::load_from_path(&config_path),
            Err(TimerError::Config(_))
        ));
    }

    #[test]
    fn test_to_session_config() {
        let defaults = SessionDefaults {
            rest_policy: RestPolicy::BetweenExercises,
            ..SessionDefaults::default()
        };
        let config = defaults.to_session_config().unwrap();

        assert_eq!(config.work_seconds(), 5);
        assert_eq!(config.rounds_per_exercise(), 20);
        assert_eq!(config.rest_policy(), RestPolicy::BetweenExercises);
    }

    #[test]
    fn test_to_session_config_rejects_zero() {
        let defaults = SessionDefaults {
            work_seconds: 0,
            ..SessionDefaults::default()
        };
        assert!(matches!(
            defaults.to_session_config(),
            Err(TimerError::InvalidConfig(_))
        ));
    }
}
