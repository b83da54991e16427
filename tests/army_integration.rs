//! Integration tests for the army list aggregate
//!
//! These tests drive `ArmyList` with units from the built-in catalog and check
//! the list-building guarantees:
//! - The total never exceeds the points limit, whatever is added
//! - Undo restores the list exactly
//! - Grouping and rendering follow first-seen category order

use catalog_units::*;
use heresy_roster::army::{ArmyList, Session};
use heresy_roster::catalog::{UnitCatalog, UnitDefinition};
use heresy_roster::core::error::RosterError;
use proptest::prelude::*;

mod catalog_units {
    use heresy_roster::catalog::{UnitCatalog, UnitDefinition};

    /// Every catalog unit in catalog order
    pub fn all_units(catalog: &UnitCatalog) -> Vec<UnitDefinition> {
        catalog.iter().flat_map(|c| c.units.iter().cloned()).collect()
    }
}

// ============================================================================
// Scenario Tests
// ============================================================================

/// Sons of Horus at 500 points: 120 ok, 400 rejected, 380 ok, 1 rejected
#[test]
fn test_sons_of_horus_scenario_with_catalog_units() {
    let catalog = UnitCatalog::with_defaults();
    let mut army = ArmyList::new("Sons of Horus", 500).unwrap();

    let praetor = catalog.unit("HQ", 0).unwrap();
    assert_eq!(praetor.points, 120);
    assert_eq!(army.add_unit(praetor).unwrap(), 120);

    let heavy = UnitDefinition::new("Heavy Choice", 400, "Heavy Support");
    assert!(matches!(
        army.add_unit(&heavy),
        Err(RosterError::BudgetExceeded { .. })
    ));
    assert_eq!(army.total_points(), 120);

    let filler = UnitDefinition::new("Filler", 380, "Elites");
    assert_eq!(army.add_unit(&filler).unwrap(), 500);

    let tiny = UnitDefinition::new("Tiny", 1, "Elites");
    assert!(army.add_unit(&tiny).is_err());
    assert_eq!(army.total_points(), 500);
}

/// Full session lifecycle: create, build, render, reset, create again
#[test]
fn test_session_lifecycle() {
    let catalog = UnitCatalog::with_defaults();
    let mut session = Session::new();
    session.create("Night Lords", 1000).unwrap();

    {
        let army = session.army_mut().unwrap();
        army.add_unit(catalog.unit("Fast Attack", 0).unwrap()).unwrap();
        army.add_unit(catalog.unit("HQ", 3).unwrap()).unwrap();
        army.add_unit(catalog.unit("Fast Attack", 1).unwrap()).unwrap();
    }

    let text = session.army().unwrap().display();
    assert_eq!(
        text,
        "Night Lords Army List\n\
         Points: 250 / 1000\n\
         \n\
         Fast Attack:\n - Seeker Squad (105 pts)\n - Outrider Squadron (85 pts)\n\
         \n\
         HQ:\n - Legion Centurion (60 pts)\n\
         \n"
    );

    session.reset();
    assert!(!session.is_active());
    session.create("Night Lords", 1000).unwrap();
    assert!(session.army().unwrap().is_empty());
}

#[test]
fn test_empty_army_render() {
    let army = ArmyList::new("Sons of Horus", 500).unwrap();
    assert_eq!(
        army.display(),
        "Sons of Horus Army List\nPoints: 0 / 500\n\nNo units added yet.\n"
    );
}

#[test]
fn test_export_uses_faction_name() {
    let army = ArmyList::new("Death Guard", 3000).unwrap();
    let artifact = army.export();
    assert_eq!(artifact.filename, "Death Guard_army.txt");
    assert_eq!(artifact.content, army.display());
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Any sequence of adds keeps the total within the limit, and rejected
    /// adds leave the list unchanged
    #[test]
    fn prop_budget_never_exceeded(
        limit in 100u32..=10_000,
        picks in prop::collection::vec(0usize..57, 0..60),
    ) {
        let catalog = UnitCatalog::with_defaults();
        let units = all_units(&catalog);
        let mut army = ArmyList::new("Iron Warriors", limit).unwrap();

        for pick in picks {
            let unit = &units[pick];
            let before = army.units().to_vec();
            match army.add_unit(unit) {
                Ok(total) => {
                    prop_assert_eq!(total, army.total_points());
                    prop_assert_eq!(army.units().last(), Some(unit));
                }
                Err(_) => prop_assert_eq!(army.units(), before.as_slice()),
            }
            prop_assert!(army.total_points() <= army.points_limit());
        }
    }

    /// A successful add followed by undo restores the previous list
    #[test]
    fn prop_add_then_undo_restores(
        prefix in prop::collection::vec(0usize..57, 0..10),
        pick in 0usize..57,
    ) {
        let catalog = UnitCatalog::with_defaults();
        let units = all_units(&catalog);
        let mut army = ArmyList::new("Raven Guard", 10_000).unwrap();
        for i in prefix {
            let _ = army.add_unit(&units[i]);
        }

        let before = army.clone();
        if army.add_unit(&units[pick]).is_ok() {
            let removed = army.remove_last().unwrap();
            prop_assert_eq!(&removed, &units[pick]);
            prop_assert_eq!(&army, &before);
        }
    }

    /// Groups come out in first-seen order and together hold every unit once
    #[test]
    fn prop_grouped_view_first_seen(picks in prop::collection::vec(0usize..57, 0..30)) {
        let catalog = UnitCatalog::with_defaults();
        let units = all_units(&catalog);
        let mut army = ArmyList::new("Ultramarines", 10_000).unwrap();
        for i in picks {
            let _ = army.add_unit(&units[i]);
        }

        let mut first_seen: Vec<&str> = Vec::new();
        for unit in army.units() {
            if !first_seen.contains(&unit.category.as_str()) {
                first_seen.push(unit.category.as_str());
            }
        }

        let groups = army.grouped_view();
        let order: Vec<&str> = groups.iter().map(|g| g.category).collect();
        prop_assert_eq!(order, first_seen);

        let grouped_count: usize = groups.iter().map(|g| g.units.len()).sum();
        prop_assert_eq!(grouped_count, army.len());
        for group in &groups {
            prop_assert!(group.units.iter().all(|u| u.category == group.category));
        }
    }

    /// Clearing any list leaves it empty, and clearing again changes nothing
    #[test]
    fn prop_clear_idempotent(picks in prop::collection::vec(0usize..57, 0..20)) {
        let catalog = UnitCatalog::with_defaults();
        let units = all_units(&catalog);
        let mut army = ArmyList::new("Salamanders", 5_000).unwrap();
        for i in picks {
            let _ = army.add_unit(&units[i]);
        }

        army.clear();
        prop_assert_eq!(army.total_points(), 0);
        prop_assert!(army.is_empty());
        army.clear();
        prop_assert_eq!(army.total_points(), 0);
        prop_assert!(army.is_empty());
    }
}
