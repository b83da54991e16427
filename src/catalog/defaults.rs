//! Built-in unit catalog for the Legiones Astartes
//!
//! Entries are kept exactly as published, including near-duplicate names
//! and the zero-point Proteus Explorator.

use super::{UnitCatalog, UnitDefinition};
use crate::core::types::Points;

/// Categories in display order
pub const CATEGORIES: [&str; 5] = [
    "HQ",
    "Troops & Transports",
    "Elites",
    "Fast Attack",
    "Heavy Support",
];

const HQ: &[(&str, Points)] = &[
    ("Legion Praetor", 120),
    ("Legion Cataphractii Praetor", 135),
    ("Legion Tartaros Praetor", 110),
    ("Legion Centurion", 60),
    ("Legion Cataphractii Centurion", 85),
    ("Legion Tartaros Centurion", 75),
    ("Legion Command Squad", 85),
    ("Legion Cataphractii Command Squad", 125),
    ("Legion Tartaros Command Squad", 110),
    ("Legion Damocles Command Rhino", 150),
];

const TROOPS_TRANSPORTS: &[(&str, Points)] = &[
    ("Tactical Squad (10)", 100),
    ("Despoiler Squad (10)", 100),
    ("Assault Squad (10)", 145),
    ("Breacher Squad (10)", 155),
    ("Tactical support squad (5)", 85),
    ("Scout Squad (5)", 65),
    ("Rhino Transport", 35),
    ("Drop pod", 35),
    ("Dreadnought Drop pod", 100),
    ("Termite Assult Drill", 80),
];

const ELITES: &[(&str, Points)] = &[
    ("Legion veteran squad", 115),
    ("Cataphractii Terminator Squad (5)", 175),
    ("Tartaros Terminator Squad (5)", 150),
    ("destroyer assult squad", 130),
    ("Mortalis Destroyer Squad", 105),
    ("Apothecarion detachment", 45),
    ("Techmarine Covenant", 55),
    ("Contemptor Dreadnought Talon", 175),
    ("Rapier Battery", 40),
];

const FAST_ATTACK: &[(&str, Points)] = &[
    ("Seeker Squad", 105),
    ("Outrider Squadron", 85),
    ("Sabre Strike Squadron", 80),
    ("Sky-hunter Squadron", 105),
    ("Javelin Squadron", 90),
    ("Protues Land Raider Squadron", 60),
    ("Storm Eagle Gunship", 210),
    ("Xiphon Interceptor", 105),
    ("Dreadclaw Drop Pod", 115),
];

const HEAVY_SUPPORT: &[(&str, Points)] = &[
    ("Leviathan Dreadnought Talon", 270),
    ("Deredeo Dreadnought Talon", 205),
    ("Heavy Support Squad (5)", 100),
    ("Predator Squadron", 120),
    ("Sicarian Squadron", 190),
    ("Sicarian Aecus Squadron", 215),
    ("Sicarian Punisher Squadron", 190),
    ("Sicarian Venator Squadron", 200),
    ("Sicarian Omega Squadron", 230),
    ("Kratos Squadron", 300),
    ("Land Raider Proteus Carrier Squadron", 220),
    ("Land Raider Proteus Explorator", 0),
    ("Vindicator Squadron", 120),
    ("Land Raider Spartan", 350),
    ("Scorpius Squadron", 120),
    ("Arquitor Squadron", 200),
    ("Fire Raptor Gunship", 280),
    ("Deathstorm Drop Pod Squadron", 90),
    ("Kharydis Assult Claw", 235),
];

/// Build the built-in catalog
pub fn legiones_astartes() -> UnitCatalog {
    let mut catalog = UnitCatalog::new();
    let sections: [(&str, &[(&str, Points)]); 5] = [
        (CATEGORIES[0], HQ),
        (CATEGORIES[1], TROOPS_TRANSPORTS),
        (CATEGORIES[2], ELITES),
        (CATEGORIES[3], FAST_ATTACK),
        (CATEGORIES[4], HEAVY_SUPPORT),
    ];

    for (category, units) in sections {
        catalog.insert_category(category);
        for &(name, points) in units {
            catalog.push(UnitDefinition::new(name, points, category));
        }
    }
    catalog
}
