use thiserror::Error;

use crate::core::types::Points;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Faction name must not be empty")]
    InvalidFaction,

    #[error("Points limit {limit} must be between {min} and {max}")]
    InvalidPointsLimit { limit: Points, min: Points, max: Points },

    #[error("Cannot add {unit}: would exceed points limit ({total} + {points} > {limit})")]
    BudgetExceeded {
        unit: String,
        points: Points,
        total: Points,
        limit: Points,
    },

    #[error("No units to remove.")]
    EmptyList,

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("No unit #{} in category {category}", .index + 1)]
    UnknownUnit { category: String, index: usize },

    #[error("Unit {unit} is stored under {stored_under} but declares category {declared}")]
    CatalogInvariant {
        unit: String,
        stored_under: String,
        declared: String,
    },

    #[error("Create an army first.")]
    NoArmy,

    #[error("An army already exists; reset it first.")]
    ArmyExists,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RosterError {
    /// Whether this is a normal user-facing rejection rather than a fault
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            RosterError::InvalidFaction
                | RosterError::InvalidPointsLimit { .. }
                | RosterError::BudgetExceeded { .. }
                | RosterError::EmptyList
                | RosterError::NoArmy
                | RosterError::ArmyExists
        )
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
