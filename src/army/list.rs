//! The army list and its points budget
//!
//! `add_unit` is the only way to grow the list and it checks the budget
//! against the current total before appending, so the total never exceeds
//! the limit after any call. The check and the push happen under one
//! `&mut self` borrow.

use ahash::AHashMap;
use serde::Serialize;

use crate::catalog::UnitDefinition;
use crate::core::error::{Result, RosterError};
use crate::core::types::Points;

/// Smallest accepted points limit
pub const MIN_POINTS_LIMIT: Points = 100;
/// Largest accepted points limit
pub const MAX_POINTS_LIMIT: Points = 10_000;

/// A faction's list of chosen units under a points ceiling
///
/// Units keep insertion order and may repeat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArmyList {
    faction: String,
    points_limit: Points,
    units: Vec<UnitDefinition>,
}

/// Units of one category, borrowed from an `ArmyList`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitGroup<'a> {
    pub category: &'a str,
    pub units: Vec<&'a UnitDefinition>,
}

impl ArmyList {
    /// Create an empty list after validating its faction and limit
    pub fn new(faction: &str, points_limit: Points) -> Result<Self> {
        let faction = faction.trim();
        if faction.is_empty() {
            return Err(RosterError::InvalidFaction);
        }
        if !(MIN_POINTS_LIMIT..=MAX_POINTS_LIMIT).contains(&points_limit) {
            return Err(RosterError::InvalidPointsLimit {
                limit: points_limit,
                min: MIN_POINTS_LIMIT,
                max: MAX_POINTS_LIMIT,
            });
        }
        Ok(Self {
            faction: faction.to_string(),
            points_limit,
            units: Vec::new(),
        })
    }

    pub fn faction(&self) -> &str {
        &self.faction
    }

    pub fn points_limit(&self) -> Points {
        self.points_limit
    }

    /// Chosen units in insertion order
    pub fn units(&self) -> &[UnitDefinition] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Sum of the points of every chosen unit
    pub fn total_points(&self) -> Points {
        self.units.iter().map(|u| u.points).sum()
    }

    /// Points still available under the limit
    pub fn remaining_points(&self) -> Points {
        self.points_limit.saturating_sub(self.total_points())
    }

    /// Append a unit if it fits in the remaining budget
    ///
    /// A unit costing exactly the remaining points is accepted. On rejection
    /// the list is unchanged. Returns the new total.
    pub fn add_unit(&mut self, unit: &UnitDefinition) -> Result<Points> {
        let total = self.total_points();
        match total.checked_add(unit.points) {
            Some(new_total) if new_total <= self.points_limit => {
                self.units.push(unit.clone());
                tracing::debug!(
                    unit = %unit.name,
                    points = unit.points,
                    total = new_total,
                    limit = self.points_limit,
                    "unit added"
                );
                Ok(new_total)
            }
            _ => {
                tracing::warn!(
                    unit = %unit.name,
                    points = unit.points,
                    total,
                    limit = self.points_limit,
                    "unit rejected, over budget"
                );
                Err(RosterError::BudgetExceeded {
                    unit: unit.name.clone(),
                    points: unit.points,
                    total,
                    limit: self.points_limit,
                })
            }
        }
    }

    /// Remove and return the most recently added unit
    pub fn remove_last(&mut self) -> Result<UnitDefinition> {
        let removed = self.units.pop().ok_or(RosterError::EmptyList)?;
        tracing::debug!(unit = %removed.name, total = self.total_points(), "unit removed");
        Ok(removed)
    }

    /// Remove every unit
    pub fn clear(&mut self) {
        self.units.clear();
    }

    /// Units grouped by category
    ///
    /// Groups appear in the order their category first occurs in the list,
    /// not catalog order. Units keep insertion order inside a group.
    pub fn grouped_view(&self) -> Vec<UnitGroup<'_>> {
        let mut groups: Vec<UnitGroup<'_>> = Vec::new();
        let mut positions: AHashMap<&str, usize> = AHashMap::new();

        for unit in &self.units {
            let idx = *positions.entry(unit.category.as_str()).or_insert_with(|| {
                groups.push(UnitGroup {
                    category: unit.category.as_str(),
                    units: Vec::new(),
                });
                groups.len() - 1
            });
            groups[idx].units.push(unit);
        }

        groups
    }
}
