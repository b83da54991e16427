pub mod config;
pub mod error;
pub mod types;

pub use config::RosterConfig;
pub use error::{Result, RosterError};
pub use types::{Points, Severity};
