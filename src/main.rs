//! Heresy Roster - Entry Point
//!
//! Loads configuration and the unit catalog, then runs an interactive loop
//! for building a points-capped army list.

use heresy_roster::army::Session;
use heresy_roster::catalog::UnitCatalog;
use heresy_roster::command::{parse_input, Command, CommandExecutor, ExecutionResult, Input};
use heresy_roster::core::error::Result;
use heresy_roster::core::types::{Points, Severity};
use heresy_roster::core::RosterConfig;
use heresy_roster::ui::{display, StatusLog};

use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Horus Heresy list builder
#[derive(Parser, Debug)]
#[command(name = "heresy-roster")]
#[command(about = "Build a points-capped Horus Heresy army list and export it as text")]
struct Args {
    /// Configuration file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Catalog file (TOML) replacing the built-in units
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Create an army for this faction at start-up
    #[arg(long)]
    faction: Option<String>,

    /// Points limit for the start-up army
    #[arg(long)]
    points: Option<Points>,

    /// Directory exported lists are written to
    #[arg(long)]
    export_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "heresy_roster=debug"
    } else {
        "heresy_roster=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();

    let mut config = match &args.config {
        Some(path) => RosterConfig::load_from_toml(path)?,
        None => RosterConfig::default(),
    };
    if let Some(dir) = args.export_dir.clone() {
        config.export_dir = dir;
    }
    if args.catalog.is_some() {
        config.catalog_path = args.catalog.clone();
    }

    let catalog = match &config.catalog_path {
        Some(path) => UnitCatalog::load_from_toml(path)?,
        None => UnitCatalog::with_defaults(),
    };
    if catalog.is_empty() {
        tracing::warn!("catalog has no categories, units cannot be added");
    }
    tracing::info!(
        categories = catalog.len(),
        units = catalog.unit_count(),
        "catalog loaded"
    );

    let mut session = Session::new();
    let mut log = StatusLog::with_capacity(config.status_log_len);

    println!("\n=== HORUS HERESY LIST BUILDER ===");
    println!("{}", display::help_text(&config));

    if args.faction.is_some() || args.points.is_some() {
        let create = Command::Create {
            points_limit: args.points,
            faction: args.faction.clone(),
        };
        let result = CommandExecutor::execute(&mut session, &catalog, &config, &create);
        report(&session, &mut log, result);
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let input = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        match parse_input(input) {
            Ok(Input::Quit) => break,
            Ok(Input::ShowLog) => print!("{}", display::log_listing(&log)),
            Ok(Input::Command(command)) => {
                let result = CommandExecutor::execute(&mut session, &catalog, &config, &command);
                report(&session, &mut log, result);
            }
            Err(e) => println!("[{}] {}", Severity::Error, e),
        }
    }

    if let Ok(army) = session.army() {
        println!("\nGoodbye! Final list: {}", display::status_line(army));
    } else {
        println!("\nGoodbye!");
    }
    Ok(())
}

/// Print a result and record it in the status log
fn report(session: &Session, log: &mut StatusLog, result: ExecutionResult) {
    println!("[{}] {}", result.severity, result.message.trim_end());
    if let Some(preview) = &result.preview {
        if let Ok(army) = session.army() {
            println!("{}", display::status_line(army));
        }
        println!("{}", "-".repeat(40));
        print!("{}", preview);
        println!("{}", "-".repeat(40));
    }
    let headline = result.message.lines().next().unwrap_or_default();
    log.push(result.severity, headline);
}
