//! Unit catalog - the read-only, categorized list of selectable units
//!
//! Categories keep the order they were first inserted in, and units keep
//! their order within a category. Every stored unit's `category` matches the
//! category it is stored under; `push` and the TOML loader both enforce this.

pub mod defaults;
pub mod unit;

use std::path::Path;

use ahash::AHashMap;
use serde::Deserialize;

use crate::core::error::{Result, RosterError};
use crate::core::types::Points;

pub use unit::UnitDefinition;

/// One category and its units, in catalog order
#[derive(Debug, Clone)]
pub struct CatalogCategory {
    pub name: String,
    pub units: Vec<UnitDefinition>,
}

/// Ordered mapping from category name to unit definitions
///
/// Read-only once built:
///
/// ```compile_fail
/// use heresy_roster::catalog::{UnitCatalog, UnitDefinition};
///
/// let mut catalog = UnitCatalog::with_defaults();
/// catalog.push(UnitDefinition::new("Legion Praetor", 1, "HQ"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct UnitCatalog {
    categories: Vec<CatalogCategory>,
    index: AHashMap<String, usize>,
}

impl UnitCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in Legiones Astartes catalog
    pub fn with_defaults() -> Self {
        defaults::legiones_astartes()
    }

    /// Add an empty category if it is not present yet. Returns its position.
    pub(crate) fn insert_category(&mut self, name: &str) -> usize {
        if let Some(&idx) = self.index.get(name) {
            return idx;
        }
        let idx = self.categories.len();
        self.categories.push(CatalogCategory {
            name: name.to_string(),
            units: Vec::new(),
        });
        self.index.insert(name.to_string(), idx);
        idx
    }

    /// Append a unit to the category named by its own `category` field
    pub(crate) fn push(&mut self, unit: UnitDefinition) {
        let idx = self.insert_category(&unit.category);
        self.categories[idx].units.push(unit);
    }

    /// Category names in catalog order
    pub fn categories(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    /// Category name at a position in catalog order
    pub fn category_at(&self, index: usize) -> Option<&str> {
        self.categories.get(index).map(|c| c.name.as_str())
    }

    /// Units of a category in catalog order
    pub fn units_in(&self, category: &str) -> Result<&[UnitDefinition]> {
        self.index
            .get(category)
            .map(|&idx| self.categories[idx].units.as_slice())
            .ok_or_else(|| RosterError::UnknownCategory(category.to_string()))
    }

    /// A single unit by 0-based position within its category
    pub fn unit(&self, category: &str, index: usize) -> Result<&UnitDefinition> {
        self.units_in(category)?
            .get(index)
            .ok_or_else(|| RosterError::UnknownUnit {
                category: category.to_string(),
                index,
            })
    }

    /// Iterate categories with their units
    pub fn iter(&self) -> impl Iterator<Item = &CatalogCategory> {
        self.categories.iter()
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Total number of units across all categories
    pub fn unit_count(&self) -> usize {
        self.categories.iter().map(|c| c.units.len()).sum()
    }

    /// Load a catalog from a TOML file
    pub fn load_from_toml(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    /// Parse a catalog from a TOML string
    ///
    /// Repeated category tables are merged into the first one with that name.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let toml_data: TomlCatalog = toml::from_str(content)?;

        let mut catalog = Self::new();
        for category in toml_data.categories {
            catalog.insert_category(&category.name);
            for unit in category.units {
                catalog.push(unit.into_unit(&category.name)?);
            }
        }
        Ok(catalog)
    }
}

/// TOML representation of a catalog file
#[derive(Debug, Deserialize)]
struct TomlCatalog {
    categories: Vec<TomlCategory>,
}

#[derive(Debug, Deserialize)]
struct TomlCategory {
    name: String,
    #[serde(default)]
    units: Vec<TomlUnit>,
}

#[derive(Debug, Deserialize)]
struct TomlUnit {
    name: String,
    points: Points,
    category: Option<String>,
}

impl TomlUnit {
    fn into_unit(self, parent: &str) -> Result<UnitDefinition> {
        if let Some(declared) = self.category {
            if declared != parent {
                return Err(RosterError::CatalogInvariant {
                    unit: self.name,
                    stored_under: parent.to_string(),
                    declared,
                });
            }
        }
        Ok(UnitDefinition::new(self.name, self.points, parent))
    }
}
