//! Timed workout sessions.
//!
//! - `config`: durations, rounds and rest policy
//! - `state`: the observable snapshot and boundary transitions
//! - `engine`: the tick-driven state machine
//! - `clock`: `MM:SS` parsing and formatting

pub mod clock;
pub mod config;
pub mod engine;
pub mod state;

pub use clock::{format_clock, format_duration, parse_clock};
pub use config::{RestPolicy, SessionConfig};
pub use engine::{nominal_duration, SessionEngine};
pub use state::{Phase, SessionState, Transition};
