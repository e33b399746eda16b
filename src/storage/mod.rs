//! Storage layer for roundtimer.
//!
//! `SQLite`-backed key/value persistence for application state such as the
//! workout list.

mod database;
mod migrations;

pub use database::Database;
