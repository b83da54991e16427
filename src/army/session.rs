//! Explicit builder state: either no army or exactly one army

use super::list::ArmyList;
use crate::core::error::{Result, RosterError};
use crate::core::types::Points;

/// Holds the single army being built, if any
#[derive(Debug, Clone, Default)]
pub struct Session {
    army: Option<ArmyList>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.army.is_some()
    }

    /// Start a new army. Fails if one already exists.
    pub fn create(&mut self, faction: &str, points_limit: Points) -> Result<&ArmyList> {
        if self.army.is_some() {
            return Err(RosterError::ArmyExists);
        }
        let army = ArmyList::new(faction, points_limit)?;
        tracing::info!(faction = %army.faction(), points_limit, "army created");
        Ok(&*self.army.insert(army))
    }

    /// Discard the current army, returning it. No-op without one.
    pub fn reset(&mut self) -> Option<ArmyList> {
        let discarded = self.army.take();
        if let Some(army) = &discarded {
            tracing::info!(faction = %army.faction(), units = army.len(), "army reset");
        }
        discarded
    }

    pub fn army(&self) -> Result<&ArmyList> {
        self.army.as_ref().ok_or(RosterError::NoArmy)
    }

    pub fn army_mut(&mut self) -> Result<&mut ArmyList> {
        self.army.as_mut().ok_or(RosterError::NoArmy)
    }
}
