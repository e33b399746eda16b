//! Configuration management for roundtimer.
//!
//! This module handles loading configuration from `~/.roundtimer/`.

mod paths;
mod settings;

pub use paths::{Paths, EXPORT_FILE_NAME};
pub use settings::{Config, GeneralConfig, SessionDefaults, TuiConfig};
