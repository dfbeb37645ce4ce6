//! FILENAME: core/filter-engine/src/engine.rs
//! Filter Engine - Resolves a hierarchy selection against a dataset.
//!
//! Every non-empty selection set contributes one membership predicate and the
//! predicates are combined with AND. An empty set contributes nothing. This
//! single rule covers all eight presence combinations of (region, state, city):
//!
//! | region | state | city | rows kept                                  |
//! |--------|-------|------|--------------------------------------------|
//! | -      | -     | -    | all                                        |
//! | R      | -     | -    | Region in R                                |
//! | -      | S     | -    | State in S                                 |
//! | -      | -     | C    | City in C                                  |
//! | R      | S     | -    | Region in R and State in S                 |
//! | R      | -     | C    | Region in R and City in C                  |
//! | -      | S     | C    | State in S and City in C                   |
//! | R      | S     | C    | Region in R and State in S and City in C   |
//!
//! Option lists use the same predicates, restricted to the levels above the
//! one being offered.

use engine::{Dataset, HierarchyLevel, Record, SelectionSet};
use rustc_hash::FxHashSet;

use crate::definition::{constraints_of, Constraints, HierarchySelection};

// ============================================================================
// PREDICATES
// ============================================================================

fn satisfies(record: &Record, constraints: &Constraints<'_>) -> bool {
    constraints
        .iter()
        .all(|(level, set)| set.contains(record.level_value(*level)))
}

/// True when `record` satisfies every non-empty level of `selection`.
pub fn row_matches(record: &Record, selection: &HierarchySelection) -> bool {
    satisfies(record, &selection.constraints())
}

fn rows_satisfying(dataset: &Dataset, constraints: &Constraints<'_>) -> Vec<usize> {
    if constraints.is_empty() {
        return (0..dataset.len()).collect();
    }
    dataset
        .iter()
        .enumerate()
        .filter(|(_, record)| satisfies(record, constraints))
        .map(|(idx, _)| idx)
        .collect()
}

/// Indices (ascending) of the rows kept by `selection`.
pub fn matching_rows(dataset: &Dataset, selection: &HierarchySelection) -> Vec<usize> {
    rows_satisfying(dataset, &selection.constraints())
}

// ============================================================================
// RESOLUTION
// ============================================================================

/// Filters `dataset` by the three selection sets. Empty sets mean "any value".
/// The input is never modified; headers and row order are preserved.
pub fn resolve(
    dataset: &Dataset,
    region: &SelectionSet,
    state: &SelectionSet,
    city: &SelectionSet,
) -> Dataset {
    let constraints = constraints_of(region, state, city);
    if constraints.is_empty() {
        return dataset.clone();
    }
    dataset.subset(&rows_satisfying(dataset, &constraints))
}

/// `resolve` taking the three levels as one value.
pub fn resolve_selection(dataset: &Dataset, selection: &HierarchySelection) -> Dataset {
    resolve(dataset, &selection.region, &selection.state, &selection.city)
}

// ============================================================================
// OPTION LISTS
// ============================================================================

/// Distinct values of `level` among rows matching the levels above it in
/// `selection`, in first-appearance order. Selections at `level` itself and
/// below are ignored.
pub fn available_options(
    dataset: &Dataset,
    level: HierarchyLevel,
    selection: &HierarchySelection,
) -> Vec<String> {
    let scoped = selection.above(level);
    let constraints = scoped.constraints();

    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut options = Vec::new();
    for record in dataset.iter().filter(|r| satisfies(r, &constraints)) {
        let value = record.level_value(level);
        if seen.insert(value) {
            options.push(value.to_string());
        }
    }
    options
}

pub fn available_regions(dataset: &Dataset) -> Vec<String> {
    available_options(dataset, HierarchyLevel::Region, &HierarchySelection::default())
}

/// States present among rows whose Region is in `region` (all rows if empty).
pub fn available_states(dataset: &Dataset, region: &SelectionSet) -> Vec<String> {
    let selection = HierarchySelection {
        region: region.clone(),
        ..Default::default()
    };
    available_options(dataset, HierarchyLevel::State, &selection)
}

/// Cities present among rows matching both the region and state selections.
pub fn available_cities(
    dataset: &Dataset,
    region: &SelectionSet,
    state: &SelectionSet,
) -> Vec<String> {
    let selection = HierarchySelection {
        region: region.clone(),
        state: state.clone(),
        ..Default::default()
    };
    available_options(dataset, HierarchyLevel::City, &selection)
}

/// Drops, top-down, every selected value below `level` that the cascade
/// would no longer offer. Values at `level` and above are kept as given, so a
/// selection that matches nothing stays a selection that matches nothing.
///
/// A lower level whose values are all dropped becomes empty, i.e.
/// unconstrained under the surviving parents.
pub fn retain_below(
    dataset: &Dataset,
    selection: &HierarchySelection,
    level: HierarchyLevel,
) -> HierarchySelection {
    let mut pruned = selection.clone();
    for &lower in level.descendants() {
        let offered: FxHashSet<String> = available_options(dataset, lower, &pruned)
            .into_iter()
            .collect();
        pruned.get_mut(lower).retain(|value| offered.contains(value));
    }
    pruned
}

/// Drops states not offered under the selected regions, then cities not
/// offered under the surviving region and state selections. Region values
/// are never dropped.
pub fn retain_available(dataset: &Dataset, selection: &HierarchySelection) -> HierarchySelection {
    retain_below(dataset, selection, HierarchyLevel::Region)
}
