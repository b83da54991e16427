//! Command execution - applies parsed commands to the builder session

use crate::army::Session;
use crate::catalog::UnitCatalog;
use crate::command::parser::{Command, ExportFormat};
use crate::core::config::RosterConfig;
use crate::core::error::RosterError;
use crate::core::types::Severity;
use crate::ui::display;

/// Executes commands against a session
pub struct CommandExecutor;

impl CommandExecutor {
    /// Apply one command. Never fails: rejections become status messages.
    pub fn execute(
        session: &mut Session,
        catalog: &UnitCatalog,
        config: &RosterConfig,
        command: &Command,
    ) -> ExecutionResult {
        match command {
            Command::Create {
                points_limit,
                faction,
            } => {
                let faction = faction.as_deref().unwrap_or(&config.default_faction);
                let limit = points_limit.unwrap_or(config.default_points_limit);
                match session.create(faction, limit) {
                    Ok(army) => ExecutionResult::with_preview(
                        Severity::Success,
                        format!("Army created: {} ({} pts)", army.faction(), army.points_limit()),
                        army.display(),
                    ),
                    Err(e) => ExecutionResult::from_error(e),
                }
            }
            Command::Reset => match session.reset() {
                Some(_) => ExecutionResult::message(Severity::Warning, "Army reset."),
                None => ExecutionResult::from_error(RosterError::NoArmy),
            },
            Command::Categories => {
                ExecutionResult::message(Severity::Info, display::category_listing(catalog))
            }
            Command::Units { category } => match display::unit_listing(catalog, *category) {
                Ok(listing) => ExecutionResult::message(Severity::Info, listing),
                Err(e) => ExecutionResult::rejection(e),
            },
            Command::Add { category, unit } => add_unit(session, catalog, *category, *unit),
            Command::Undo => {
                let army = match session.army_mut() {
                    Ok(army) => army,
                    Err(e) => return ExecutionResult::from_error(e),
                };
                match army.remove_last() {
                    Ok(removed) => ExecutionResult::with_preview(
                        Severity::Info,
                        format!("Removed last unit: {}", removed.display_label()),
                        army.display(),
                    ),
                    Err(e) => ExecutionResult::from_error(e),
                }
            }
            Command::Clear => match session.army_mut() {
                Ok(army) => {
                    army.clear();
                    ExecutionResult::with_preview(
                        Severity::Warning,
                        "All units removed from army.",
                        army.display(),
                    )
                }
                Err(e) => ExecutionResult::from_error(e),
            },
            Command::Show => match session.army() {
                Ok(army) => ExecutionResult::with_preview(
                    Severity::Info,
                    display::status_line(army),
                    army.display(),
                ),
                Err(e) => ExecutionResult::from_error(e),
            },
            Command::Export { format } => {
                let army = match session.army() {
                    Ok(army) => army,
                    Err(e) => return ExecutionResult::from_error(e),
                };
                let artifact = match format {
                    ExportFormat::Text => Ok(army.export()),
                    ExportFormat::Json => army.export_json(),
                };
                match artifact.and_then(|a| a.write_to(&config.export_dir)) {
                    Ok(path) => ExecutionResult::message(
                        Severity::Success,
                        format!("Exported army list to {}", path.display()),
                    ),
                    Err(e) => ExecutionResult::from_error(e),
                }
            }
            Command::Help => ExecutionResult::message(Severity::Info, display::help_text(config)),
        }
    }
}

fn add_unit(
    session: &mut Session,
    catalog: &UnitCatalog,
    category_index: usize,
    unit_index: usize,
) -> ExecutionResult {
    let army = match session.army_mut() {
        Ok(army) => army,
        Err(e) => return ExecutionResult::from_error(e),
    };
    let unit = match catalog
        .category_at(category_index)
        .ok_or_else(|| RosterError::UnknownCategory(format!("#{}", category_index + 1)))
        .and_then(|category| catalog.unit(category, unit_index))
    {
        Ok(unit) => unit,
        Err(e) => return ExecutionResult::rejection(e),
    };

    match army.add_unit(unit) {
        Ok(_) => ExecutionResult::with_preview(
            Severity::Success,
            format!("Added {}", unit.display_label()),
            army.display(),
        ),
        Err(e) => ExecutionResult::from_error(e),
    }
}

/// Result of executing a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    pub severity: Severity,
    pub message: String,
    /// Rendered army list after the action, when the action touched the army
    pub preview: Option<String>,
}

impl ExecutionResult {
    pub fn message(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            preview: None,
        }
    }

    pub fn with_preview(severity: Severity, message: impl Into<String>, preview: String) -> Self {
        Self {
            severity,
            message: message.into(),
            preview: Some(preview),
        }
    }

    /// Map a rejection or fault to a status message, logging faults
    pub fn from_error(error: RosterError) -> Self {
        if !error.is_rejection() {
            tracing::warn!(%error, "command failed");
        }
        Self::rejection(error)
    }

    /// Map an error caused by user input to a status message without logging
    ///
    /// Catalog lookups by typed index land here: a bad index is a typo, not
    /// a broken catalog.
    pub fn rejection(error: RosterError) -> Self {
        let severity = match &error {
            RosterError::NoArmy => Severity::Info,
            RosterError::EmptyList | RosterError::ArmyExists => Severity::Warning,
            _ => Severity::Error,
        };
        Self::message(severity, error.to_string())
    }

    pub fn is_success(&self) -> bool {
        self.severity == Severity::Success
    }
}
