//! roundtimer - an interval workout timer
//!
//! This crate provides the workout list model, the tick-driven session
//! engine, local persistence, and the CLI and terminal UI hosts that drive
//! them.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod features;
pub mod output;
pub mod storage;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::TimerError;
pub use features::session::{SessionConfig, SessionEngine, SessionState};
pub use features::workout::{WorkoutItem, WorkoutList};
