//! FILENAME: core/filter-engine/src/tests.rs
//! PURPOSE: Consolidated tests for selection resolution and option cascading.

use engine::{Dataset, HierarchyLevel, Record, SelectionSet};

use crate::definition::HierarchySelection;
use crate::engine::{
    available_cities, available_options, available_regions, available_states, matching_rows,
    resolve, resolve_selection, retain_available, retain_below, row_matches,
};

// ========================================
// FIXTURES
// ========================================

fn set(values: &[&str]) -> SelectionSet {
    values.iter().copied().collect()
}

/// Two cities named "Springfield" and two named "Columbus" in different
/// states, so city-only selections cross state and region boundaries.
fn locations() -> Dataset {
    let rows = [
        ("East", "New York", "New York City", 100.0),
        ("East", "Ohio", "Columbus", 40.0),
        ("South", "Georgia", "Columbus", 25.0),
        ("Central", "Illinois", "Springfield", 10.0),
        ("Central", "Illinois", "Chicago", 75.0),
        ("Central", "Missouri", "Springfield", 12.0),
        ("West", "California", "Los Angeles", 90.0),
        ("West", "California", "San Francisco", 60.0),
        ("West", "Washington", "Seattle", 55.0),
        ("West", "California", "Los Angeles", 30.0),
    ];
    let records = rows
        .iter()
        .map(|(r, s, c, sales)| Record::new(r, s, c).with_sales(*sales))
        .collect();
    Dataset::from_records(
        vec!["Region".into(), "State".into(), "City".into(), "Sales".into()],
        records,
    )
}

fn cities(ds: &Dataset) -> Vec<&str> {
    ds.iter().map(|r| r.city.as_str()).collect()
}

/// Every selection triple drawn from a few interesting sets per level,
/// including empty sets and values that exist nowhere.
fn selection_grid() -> Vec<HierarchySelection> {
    let regions = [set(&[]), set(&["West"]), set(&["East", "Central"]), set(&["North"])];
    let states = [set(&[]), set(&["California"]), set(&["Ohio", "Georgia"]), set(&["Illinois", "Missouri"])];
    let cities = [set(&[]), set(&["Columbus"]), set(&["Springfield", "Seattle"]), set(&["Atlantis"])];

    let mut grid = Vec::new();
    for r in &regions {
        for s in &states {
            for c in &cities {
                grid.push(HierarchySelection::new(r.clone(), s.clone(), c.clone()));
            }
        }
    }
    grid
}

// ========================================
// THE EIGHT PRESENCE COMBINATIONS
// ========================================

#[test]
fn test_nothing_selected_returns_dataset_unchanged() {
    let ds = locations();
    assert_eq!(resolve(&ds, &set(&[]), &set(&[]), &set(&[])), ds);
}

#[test]
fn test_region_only() {
    let ds = locations();
    let out = resolve(&ds, &set(&["Central"]), &set(&[]), &set(&[]));
    assert_eq!(cities(&out), vec!["Springfield", "Chicago", "Springfield"]);
}

#[test]
fn test_state_only() {
    let ds = locations();
    let out = resolve(&ds, &set(&[]), &set(&["California"]), &set(&[]));
    assert_eq!(cities(&out), vec!["Los Angeles", "San Francisco", "Los Angeles"]);
}

#[test]
fn test_city_only_crosses_states() {
    let ds = locations();
    let out = resolve(&ds, &set(&[]), &set(&[]), &set(&["Columbus"]));
    let states: Vec<&str> = out.iter().map(|r| r.state.as_str()).collect();
    assert_eq!(states, vec!["Ohio", "Georgia"]);
}

#[test]
fn test_region_and_state() {
    let ds = locations();
    let out = resolve(&ds, &set(&["Central", "West"]), &set(&["Missouri", "Washington"]), &set(&[]));
    assert_eq!(cities(&out), vec!["Springfield", "Seattle"]);
}

#[test]
fn test_region_and_city() {
    let ds = locations();
    let out = resolve(&ds, &set(&["South"]), &set(&[]), &set(&["Columbus"]));
    assert_eq!(out.len(), 1);
    assert_eq!(out.records[0].state, "Georgia");
}

#[test]
fn test_state_and_city() {
    let ds = locations();
    let out = resolve(&ds, &set(&[]), &set(&["Missouri"]), &set(&["Springfield"]));
    assert_eq!(out.len(), 1);
    assert_eq!(out.records[0].sales, 12.0);
}

#[test]
fn test_all_three_levels() {
    let ds = locations();
    let out = resolve(&ds, &set(&["West"]), &set(&["California"]), &set(&["Los Angeles"]));
    assert_eq!(out.len(), 2);
    assert_eq!(out.total_sales(), 120.0);
}

#[test]
fn test_mismatched_levels_yield_empty_not_error() {
    let ds = locations();
    let out = resolve(&ds, &set(&["East"]), &set(&["California"]), &set(&[]));
    assert!(out.is_empty());
    assert_eq!(out.headers, ds.headers);
}

#[test]
fn test_reference_scenario() {
    let ds = Dataset::from_records(
        vec![],
        vec![
            Record::new("East", "NY", "NYC"),
            Record::new("West", "CA", "LA"),
            Record::new("West", "CA", "SF"),
        ],
    );
    let out = resolve(&ds, &set(&["West"]), &set(&[]), &set(&["SF"]));
    assert_eq!(out.records, vec![Record::new("West", "CA", "SF")]);

    let out = resolve(&ds, &set(&[]), &set(&["CA"]), &set(&[]));
    assert_eq!(cities(&out), vec!["LA", "SF"]);
}

// ========================================
// PROPERTIES OVER THE SELECTION GRID
// ========================================

#[test]
fn test_result_rows_satisfy_every_non_empty_level() {
    let ds = locations();
    for sel in selection_grid() {
        let out = resolve_selection(&ds, &sel);
        for record in &out {
            for level in HierarchyLevel::ALL {
                assert!(
                    sel.get(level).accepts(record.level_value(level)),
                    "{:?} leaked through {:?}",
                    record,
                    sel
                );
            }
        }
    }
}

#[test]
fn test_no_matching_row_is_dropped() {
    let ds = locations();
    for sel in selection_grid() {
        let expected = ds.iter().filter(|r| row_matches(r, &sel)).count();
        assert_eq!(resolve_selection(&ds, &sel).len(), expected, "{:?}", sel);
    }
}

#[test]
fn test_resolution_is_idempotent() {
    let ds = locations();
    for sel in selection_grid() {
        let once = resolve_selection(&ds, &sel);
        let twice = resolve_selection(&once, &sel);
        assert_eq!(once, twice);
    }
}

#[test]
fn test_resolution_commutes_with_level_order() {
    // Applying one level at a time, in any order, lands on the same rows.
    let ds = locations();
    for sel in selection_grid() {
        let direct = resolve_selection(&ds, &sel);
        let city_first = resolve(&ds, &set(&[]), &set(&[]), &sel.city);
        let then_state = resolve(&city_first, &set(&[]), &sel.state, &set(&[]));
        let then_region = resolve(&then_state, &sel.region, &set(&[]), &set(&[]));
        assert_eq!(direct, then_region);
    }
}

#[test]
fn test_input_is_not_mutated() {
    let ds = locations();
    let before = ds.clone();
    for sel in selection_grid() {
        let _ = resolve_selection(&ds, &sel);
    }
    assert_eq!(ds, before);
}

#[test]
fn test_matching_rows_agrees_with_resolve() {
    let ds = locations();
    for sel in selection_grid() {
        let rows = matching_rows(&ds, &sel);
        assert_eq!(ds.subset(&rows), resolve_selection(&ds, &sel));
    }
}

// ========================================
// CASCADING OPTION LISTS
// ========================================

#[test]
fn test_available_states_under_region() {
    let ds = locations();
    assert_eq!(available_states(&ds, &set(&["West"])), vec!["California", "Washington"]);
    assert_eq!(
        available_states(&ds, &set(&[])),
        vec!["New York", "Ohio", "Georgia", "Illinois", "Missouri", "California", "Washington"]
    );
    assert!(available_states(&ds, &set(&["North"])).is_empty());
}

#[test]
fn test_available_states_only_from_selected_regions() {
    let ds = locations();
    for region in available_regions(&ds) {
        let sel = set(&[region.as_str()]);
        for state in available_states(&ds, &sel) {
            assert!(ds.iter().any(|r| r.region == region && r.state == state));
        }
    }
}

#[test]
fn test_available_cities_under_region_and_state() {
    let ds = locations();
    assert_eq!(
        available_cities(&ds, &set(&["Central"]), &set(&[])),
        vec!["Springfield", "Chicago"]
    );
    assert_eq!(
        available_cities(&ds, &set(&[]), &set(&["Georgia", "Ohio"])),
        vec!["Columbus"]
    );
    assert_eq!(
        available_cities(&ds, &set(&["West"]), &set(&["California"])),
        vec!["Los Angeles", "San Francisco"]
    );
}

#[test]
fn test_offered_options_never_empty_the_result() {
    // Any single offered value, added to a selection, keeps at least one row.
    let ds = locations();
    let base = HierarchySelection::new(set(&["West", "Central"]), set(&[]), set(&[]));
    for state in available_options(&ds, HierarchyLevel::State, &base) {
        let mut sel = base.clone();
        sel.state.insert(state.clone());
        assert!(!resolve_selection(&ds, &sel).is_empty(), "state {}", state);

        for city in available_options(&ds, HierarchyLevel::City, &sel) {
            let mut with_city = sel.clone();
            with_city.city.insert(city.clone());
            assert!(!resolve_selection(&ds, &with_city).is_empty(), "city {}", city);
        }
    }
}

#[test]
fn test_options_ignore_own_and_lower_levels() {
    let ds = locations();
    let sel = HierarchySelection::new(set(&["West"]), set(&["Washington"]), set(&["Seattle"]));
    assert_eq!(
        available_options(&ds, HierarchyLevel::State, &sel),
        vec!["California", "Washington"]
    );
    assert_eq!(available_options(&ds, HierarchyLevel::Region, &sel).len(), 4);
}

// ========================================
// SELECTION PRUNING
// ========================================

#[test]
fn test_retain_available_drops_orphaned_states_and_cities() {
    let ds = locations();
    let sel = HierarchySelection::new(
        set(&["West"]),
        set(&["California", "Ohio"]),
        set(&["Los Angeles", "Columbus"]),
    );
    let pruned = retain_available(&ds, &sel);
    assert_eq!(pruned.region, set(&["West"]));
    assert_eq!(pruned.state, set(&["California"]));
    assert_eq!(pruned.city, set(&["Los Angeles"]));
}

#[test]
fn test_retain_available_keeps_regions_missing_from_dataset() {
    let ds = locations();
    let sel = HierarchySelection::new(set(&["North", "South"]), set(&[]), set(&[]));
    let pruned = retain_available(&ds, &sel);
    assert_eq!(pruned.region, set(&["North", "South"]));

    let only_missing = HierarchySelection::new(set(&["North"]), set(&[]), set(&[]));
    let pruned = retain_available(&ds, &only_missing);
    assert_eq!(pruned.region, set(&["North"]));
    assert!(resolve_selection(&ds, &pruned).is_empty());
}

#[test]
fn test_retain_below_keeps_the_level_being_set() {
    let ds = locations();
    let sel = HierarchySelection::new(set(&["West"]), set(&["Ohio"]), set(&["Columbus"]));

    let pruned = retain_below(&ds, &sel, HierarchyLevel::State);
    assert_eq!(pruned.region, set(&["West"]));
    assert_eq!(pruned.state, set(&["Ohio"]));
    assert!(pruned.city.is_empty());
    assert!(resolve_selection(&ds, &pruned).is_empty());

    let pruned = retain_below(&ds, &sel, HierarchyLevel::City);
    assert_eq!(pruned, sel);
}

#[test]
fn test_retain_below_region_drops_orphans_of_new_region() {
    let ds = locations();
    let sel = HierarchySelection::new(set(&["East"]), set(&["Washington", "New York"]), set(&["Seattle"]));
    let pruned = retain_below(&ds, &sel, HierarchyLevel::Region);
    assert_eq!(pruned.region, set(&["East"]));
    assert_eq!(pruned.state, set(&["New York"]));
    assert!(pruned.city.is_empty());
}

#[test]
fn test_retain_available_is_a_fixed_point() {
    let ds = locations();
    for sel in selection_grid() {
        let pruned = retain_available(&ds, &sel);
        assert_eq!(retain_available(&ds, &pruned), pruned);
        assert_eq!(pruned.region, sel.region);
        for &level in HierarchyLevel::Region.descendants() {
            let offered = available_options(&ds, level, &pruned);
            assert!(pruned.get(level).iter().all(|v| offered.iter().any(|o| o == v)));
        }
    }
}
