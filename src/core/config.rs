//! Builder configuration with documented defaults
//!
//! Values can be overridden from a TOML file; every field is optional there
//! and falls back to the default listed here.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::army::{MAX_POINTS_LIMIT, MIN_POINTS_LIMIT};
use crate::core::error::{Result, RosterError};
use crate::core::types::Points;

/// Configuration for the list builder
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    /// Faction name offered when creating an army without one
    pub default_faction: String,

    /// Points limit offered when creating an army without one
    ///
    /// Must lie in the accepted army range (100..=10000).
    pub default_points_limit: Points,

    /// Granularity hint for the points limit input
    pub points_step: Points,

    /// Directory exported army files are written to
    pub export_dir: PathBuf,

    /// Optional catalog file replacing the built-in unit catalog
    pub catalog_path: Option<PathBuf>,

    /// Number of status messages kept for the `log` command
    pub status_log_len: usize,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            default_faction: "Space Marines".to_string(),
            default_points_limit: 2000,
            points_step: 50,
            export_dir: PathBuf::from("."),
            catalog_path: None,
            status_log_len: 20,
        }
    }
}

impl RosterConfig {
    /// Load configuration from a TOML file
    pub fn load_from_toml(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    /// Parse configuration from a TOML string
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: RosterConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that the rest of the builder relies on
    pub fn validate(&self) -> Result<()> {
        if self.default_faction.trim().is_empty() {
            return Err(RosterError::InvalidConfig(
                "default_faction must not be empty".into(),
            ));
        }
        if !(MIN_POINTS_LIMIT..=MAX_POINTS_LIMIT).contains(&self.default_points_limit) {
            return Err(RosterError::InvalidPointsLimit {
                limit: self.default_points_limit,
                min: MIN_POINTS_LIMIT,
                max: MAX_POINTS_LIMIT,
            });
        }
        if self.points_step == 0 {
            return Err(RosterError::InvalidConfig("points_step must be positive".into()));
        }
        Ok(())
    }
}
