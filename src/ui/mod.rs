//! UI module - text rendering helpers and status history for the REPL

pub mod display;
pub mod state;

pub use state::{StatusEntry, StatusLog};
