//! Command pipeline for the interactive builder
//!
//! input line -> parse_input -> Command -> CommandExecutor -> ExecutionResult

pub mod executor;
pub mod parser;

pub use executor::{CommandExecutor, ExecutionResult};
pub use parser::{parse_input, Command, ExportFormat, Input, ParseError};
