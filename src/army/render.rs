//! Text rendering and export of an army list
//!
//! Output format:
//!
//! ```text
//! <faction> Army List
//! Points: <total> / <limit>
//!
//! <category>:
//!  - <name> (<points> pts)
//!
//! ```
//!
//! An empty list renders `No units added yet.` after the header instead.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::list::ArmyList;
use crate::catalog::UnitDefinition;
use crate::core::error::Result;
use crate::core::types::Points;

/// Render the list as plain text
pub fn render_text(army: &ArmyList) -> String {
    let mut buf = String::new();
    // Writing to a String cannot fail
    let _ = writeln!(buf, "{} Army List", army.faction());
    let _ = writeln!(buf, "Points: {} / {}", army.total_points(), army.points_limit());
    buf.push('\n');

    if army.is_empty() {
        buf.push_str("No units added yet.\n");
        return buf;
    }

    for group in army.grouped_view() {
        let _ = writeln!(buf, "{}:", group.category);
        for unit in group.units {
            let _ = writeln!(buf, " - {}", unit.display_label());
        }
        buf.push('\n');
    }
    buf
}

impl ArmyList {
    /// Rendered text, see [`render_text`]
    pub fn display(&self) -> String {
        render_text(self)
    }

    /// Rendered text plus `<faction>_army.txt` as suggested file name
    pub fn export(&self) -> ExportArtifact {
        ExportArtifact {
            filename: format!("{}_army.txt", self.faction()),
            content: self.display(),
        }
    }

    /// JSON document with faction, limit, total and units
    pub fn export_json(&self) -> Result<ExportArtifact> {
        let doc = JsonExport {
            faction: self.faction(),
            points_limit: self.points_limit(),
            total_points: self.total_points(),
            units: self.units(),
        };
        Ok(ExportArtifact {
            filename: format!("{}_army.json", self.faction()),
            content: serde_json::to_string_pretty(&doc)?,
        })
    }
}

#[derive(Serialize)]
struct JsonExport<'a> {
    faction: &'a str,
    points_limit: Points,
    total_points: Points,
    units: &'a [UnitDefinition],
}

/// Exportable file content with a suggested name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub filename: String,
    pub content: String,
}

impl ExportArtifact {
    /// Write the content into `dir` and return the written path
    ///
    /// Path separators in the suggested name are replaced with `_` so the
    /// file always lands directly inside `dir`.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let name: String = self
            .filename
            .chars()
            .map(|c| if std::path::is_separator(c) { '_' } else { c })
            .collect();
        std::fs::create_dir_all(dir)?;
        let path = dir.join(name);
        std::fs::write(&path, &self.content)?;
        tracing::info!(path = %path.display(), bytes = self.content.len(), "army list exported");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(name: &str, points: Points, category: &str) -> UnitDefinition {
        UnitDefinition::new(name, points, category)
    }

    #[test]
    fn test_render_empty_army() {
        let army = ArmyList::new("Sons of Horus", 500).unwrap();
        assert_eq!(
            army.display(),
            "Sons of Horus Army List\nPoints: 0 / 500\n\nNo units added yet.\n"
        );
    }

    #[test]
    fn test_render_grouped_units() {
        let mut army = ArmyList::new("Iron Warriors", 1000).unwrap();
        army.add_unit(&unit("Legion Praetor", 120, "HQ")).unwrap();
        army.add_unit(&unit("Rhino Transport", 35, "Troops & Transports")).unwrap();
        army.add_unit(&unit("Legion Centurion", 60, "HQ")).unwrap();

        let expected = "Iron Warriors Army List\n\
                        Points: 215 / 1000\n\
                        \n\
                        HQ:\n - Legion Praetor (120 pts)\n - Legion Centurion (60 pts)\n\
                        \n\
                        Troops & Transports:\n - Rhino Transport (35 pts)\n\
                        \n";
        assert_eq!(army.display(), expected);
    }

    #[test]
    fn test_render_is_deterministic() {
        let mut army = ArmyList::new("Word Bearers", 1000).unwrap();
        army.add_unit(&unit("Scout Squad (5)", 65, "Troops & Transports")).unwrap();
        assert_eq!(army.display(), army.display());
    }

    #[test]
    fn test_export_filename_from_faction() {
        let army = ArmyList::new("Sons of Horus", 500).unwrap();
        let artifact = army.export();
        assert_eq!(artifact.filename, "Sons of Horus_army.txt");
        assert_eq!(artifact.content, army.display());
    }

    #[test]
    fn test_export_json_fields() {
        let mut army = ArmyList::new("Imperial Fists", 1000).unwrap();
        army.add_unit(&unit("Legion Praetor", 120, "HQ")).unwrap();

        let artifact = army.export_json().unwrap();
        assert_eq!(artifact.filename, "Imperial Fists_army.json");

        let value: serde_json::Value = serde_json::from_str(&artifact.content).unwrap();
        assert_eq!(value["faction"], "Imperial Fists");
        assert_eq!(value["points_limit"], 1000);
        assert_eq!(value["total_points"], 120);
        assert_eq!(value["units"][0]["name"], "Legion Praetor");
        assert_eq!(value["units"][0]["category"], "HQ");
    }

    #[test]
    fn test_write_to_replaces_separators() {
        let dir = std::env::temp_dir().join(format!("heresy_roster_render_{}", std::process::id()));
        let army = ArmyList::new("Thousand/Sons", 500).unwrap();

        let path = army.export().write_to(&dir).unwrap();
        assert_eq!(path, dir.join("Thousand_Sons_army.txt"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), army.display());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
