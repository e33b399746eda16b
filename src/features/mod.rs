//! Feature implementations for roundtimer.
//!
//! - `workout`: workout items, the ordered list and its persistence
//! - `session`: the tick-driven session engine

pub mod session;
pub mod workout;
