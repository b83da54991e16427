//! Heresy Roster - points-capped army list builder

pub mod army;
pub mod catalog;
pub mod command;
pub mod core;
pub mod ui;
