//! Text command grammar for the interactive builder
//!
//! Indexes typed by the user are 1-based, matching the numbered listings;
//! parsed commands carry 0-based indexes.

use thiserror::Error;

use crate::core::types::Points;

/// An action the executor applies to a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start an army; missing values fall back to configured defaults
    Create {
        points_limit: Option<Points>,
        faction: Option<String>,
    },
    Reset,
    Categories,
    Units { category: usize },
    Add { category: usize, unit: usize },
    Undo,
    Clear,
    Show,
    Export { format: ExportFormat },
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Text,
    Json,
}

/// One line of REPL input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Command(Command),
    ShowLog,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unknown command: {0} (try `help`)")]
    UnknownCommand(String),
    #[error("Usage: {0}")]
    Usage(&'static str),
    #[error("Not a valid number: {0}")]
    BadNumber(String),
    #[error("Numbers start at 1")]
    ZeroIndex,
}

/// Parse a trimmed, non-empty input line
pub fn parse_input(line: &str) -> Result<Input, ParseError> {
    let mut parts = line.split_whitespace();
    let keyword = match parts.next() {
        Some(k) => k.to_lowercase(),
        None => return Err(ParseError::Usage("help")),
    };
    let args: Vec<&str> = parts.collect();

    let command = match keyword.as_str() {
        "quit" | "q" | "exit" => return Ok(Input::Quit),
        "log" => return Ok(Input::ShowLog),
        "create" | "new" => parse_create(&args)?,
        "reset" => Command::Reset,
        "categories" | "cats" | "c" => Command::Categories,
        "units" | "u" => match args.as_slice() {
            [category] => Command::Units {
                category: parse_index(category)?,
            },
            _ => return Err(ParseError::Usage("units <category#>")),
        },
        "add" | "a" => match args.as_slice() {
            [category, unit] => Command::Add {
                category: parse_index(category)?,
                unit: parse_index(unit)?,
            },
            _ => return Err(ParseError::Usage("add <category#> <unit#>")),
        },
        "undo" => Command::Undo,
        "clear" => Command::Clear,
        "show" | "s" => Command::Show,
        "export" | "download" => match args.as_slice() {
            [] | ["txt"] | ["text"] => Command::Export {
                format: ExportFormat::Text,
            },
            ["json"] => Command::Export {
                format: ExportFormat::Json,
            },
            _ => return Err(ParseError::Usage("export [txt|json]")),
        },
        "help" | "h" | "?" => Command::Help,
        other => return Err(ParseError::UnknownCommand(other.to_string())),
    };
    Ok(Input::Command(command))
}

/// `create [points] [faction...]`
///
/// A first token made of digits with an optional sign is always the points
/// limit; one that does not fit is an error, not part of the faction name.
fn parse_create(args: &[&str]) -> Result<Command, ParseError> {
    let (points_limit, rest) = match args.split_first() {
        Some((first, rest)) if is_numeric(first) => {
            let points = first
                .parse::<Points>()
                .map_err(|_| ParseError::BadNumber(first.to_string()))?;
            (Some(points), rest)
        }
        _ => (None, args),
    };
    let faction = (!rest.is_empty()).then(|| rest.join(" "));
    Ok(Command::Create {
        points_limit,
        faction,
    })
}

fn is_numeric(token: &str) -> bool {
    let digits = token.strip_prefix(['+', '-']).unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn parse_index(token: &str) -> Result<usize, ParseError> {
    let n: usize = token
        .parse()
        .map_err(|_| ParseError::BadNumber(token.to_string()))?;
    n.checked_sub(1).ok_or(ParseError::ZeroIndex)
}
