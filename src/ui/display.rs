//! Text for the interactive surface: status line, listings, help

use std::fmt::Write as _;

use crate::army::{ArmyList, MAX_POINTS_LIMIT, MIN_POINTS_LIMIT};
use crate::catalog::UnitCatalog;
use crate::core::config::RosterConfig;
use crate::core::error::{Result, RosterError};
use crate::ui::state::StatusLog;

/// `<faction> - <total>/<limit> pts`
pub fn status_line(army: &ArmyList) -> String {
    format!(
        "{} - {}/{} pts",
        army.faction(),
        army.total_points(),
        army.points_limit()
    )
}

/// Numbered category list
pub fn category_listing(catalog: &UnitCatalog) -> String {
    let mut buf = String::from("Categories:\n");
    for (i, category) in catalog.iter().enumerate() {
        let _ = writeln!(buf, "  {}. {} ({} units)", i + 1, category.name, category.units.len());
    }
    buf
}

/// Numbered unit list for the category at `category_index`
pub fn unit_listing(catalog: &UnitCatalog, category_index: usize) -> Result<String> {
    let category = catalog
        .category_at(category_index)
        .ok_or_else(|| RosterError::UnknownCategory(format!("#{}", category_index + 1)))?;

    let mut buf = format!("{}:\n", category);
    for (i, unit) in catalog.units_in(category)?.iter().enumerate() {
        let _ = writeln!(buf, "  {}. {}", i + 1, unit.display_label());
    }
    Ok(buf)
}

pub fn log_listing(log: &StatusLog) -> String {
    if log.is_empty() {
        return "No actions yet.\n".to_string();
    }
    let mut buf = String::new();
    for entry in log.iter() {
        let _ = writeln!(buf, "[{}] {}", entry.severity, entry.message);
    }
    buf
}

pub fn help_text(config: &RosterConfig) -> String {
    format!(
        "Commands:
  create [points] [faction]  - Create an army (default: {faction}, {points} pts)
  reset                      - Discard the current army
  categories                 - List unit categories
  units <cat#>               - List units in a category
  add <cat#> <unit#>         - Add a unit to the army
  undo                       - Remove the last added unit
  clear                      - Remove all units
  show                       - Show the army list
  export [txt|json]          - Write the army list to {dir}
  log                        - Show recent status messages
  quit                       - Exit
Points limits range from {min} to {max} (step {step}).
",
        faction = config.default_faction,
        points = config.default_points_limit,
        dir = config.export_dir.display(),
        min = MIN_POINTS_LIMIT,
        max = MAX_POINTS_LIMIT,
        step = config.points_step,
    )
}
