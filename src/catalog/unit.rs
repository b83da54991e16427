//! Unit definitions - the immutable catalog entries an army is built from

use serde::{Deserialize, Serialize};

use crate::core::types::Points;

/// A selectable unit with a fixed point cost
///
/// Identity is by value: two definitions with the same name, cost and
/// category are the same unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitDefinition {
    pub name: String,
    pub points: Points,
    pub category: String,
}

impl UnitDefinition {
    pub fn new(name: impl Into<String>, points: Points, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            points,
            category: category.into(),
        }
    }

    /// Label used in selection lists and list output: `<name> (<points> pts)`
    pub fn display_label(&self) -> String {
        format!("{} ({} pts)", self.name, self.points)
    }
}
