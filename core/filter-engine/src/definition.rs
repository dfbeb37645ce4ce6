//! FILENAME: core/filter-engine/src/definition.rs
//! Filter Definition - The serializable selection state.
//!
//! A `HierarchySelection` is an immutable snapshot of what the user picked at
//! each level. It carries no reference to a dataset, so it can be stored in
//! session state, sent to a frontend, and used as a cache key.

use engine::{HierarchyLevel, SelectionSet};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// The non-empty levels of a selection, top-down. At most three entries.
pub type Constraints<'a> = SmallVec<[(HierarchyLevel, &'a SelectionSet); 3]>;

/// Collects the non-empty selections among (region, state, city).
pub fn constraints_of<'a>(
    region: &'a SelectionSet,
    state: &'a SelectionSet,
    city: &'a SelectionSet,
) -> Constraints<'a> {
    let mut constraints = Constraints::new();
    for (level, set) in [
        (HierarchyLevel::Region, region),
        (HierarchyLevel::State, state),
        (HierarchyLevel::City, city),
    ] {
        if !set.is_empty() {
            constraints.push((level, set));
        }
    }
    constraints
}

// ============================================================================
// HIERARCHY SELECTION
// ============================================================================

/// Selection sets for all three hierarchy levels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HierarchySelection {
    #[serde(default)]
    pub region: SelectionSet,
    #[serde(default)]
    pub state: SelectionSet,
    #[serde(default)]
    pub city: SelectionSet,
}

impl HierarchySelection {
    pub fn new(region: SelectionSet, state: SelectionSet, city: SelectionSet) -> Self {
        HierarchySelection { region, state, city }
    }

    pub fn get(&self, level: HierarchyLevel) -> &SelectionSet {
        match level {
            HierarchyLevel::Region => &self.region,
            HierarchyLevel::State => &self.state,
            HierarchyLevel::City => &self.city,
        }
    }

    pub fn get_mut(&mut self, level: HierarchyLevel) -> &mut SelectionSet {
        match level {
            HierarchyLevel::Region => &mut self.region,
            HierarchyLevel::State => &mut self.state,
            HierarchyLevel::City => &mut self.city,
        }
    }

    pub fn set(&mut self, level: HierarchyLevel, selection: SelectionSet) {
        *self.get_mut(level) = selection;
    }

    /// True when no level constrains anything.
    pub fn is_unconstrained(&self) -> bool {
        self.region.is_empty() && self.state.is_empty() && self.city.is_empty()
    }

    pub fn constraints(&self) -> Constraints<'_> {
        constraints_of(&self.region, &self.state, &self.city)
    }

    /// Copy of this selection keeping only the levels above `level`.
    /// This is what restricts the option list offered at `level`.
    pub fn above(&self, level: HierarchyLevel) -> HierarchySelection {
        let mut scoped = HierarchySelection::default();
        for &ancestor in level.ancestors() {
            scoped.set(ancestor, self.get(ancestor).clone());
        }
        scoped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(values: &[&str]) -> SelectionSet {
        values.iter().copied().collect()
    }

    #[test]
    fn constraints_skip_empty_levels() {
        let sel = HierarchySelection::new(set(&["West"]), set(&[]), set(&["Los Angeles"]));
        let levels: Vec<HierarchyLevel> = sel.constraints().iter().map(|(l, _)| *l).collect();
        assert_eq!(levels, vec![HierarchyLevel::Region, HierarchyLevel::City]);
        assert!(!sel.constraints().spilled());
    }

    #[test]
    fn above_keeps_only_ancestors() {
        let sel = HierarchySelection::new(set(&["West"]), set(&["California"]), set(&["Los Angeles"]));
        let for_city = sel.above(HierarchyLevel::City);
        assert_eq!(for_city.region, set(&["West"]));
        assert_eq!(for_city.state, set(&["California"]));
        assert!(for_city.city.is_empty());
        assert!(sel.above(HierarchyLevel::Region).is_unconstrained());
    }

    #[test]
    fn deserializes_with_missing_levels() {
        let sel: HierarchySelection = serde_json::from_str(r#"{"state":["Texas"]}"#).unwrap();
        assert!(sel.region.is_empty());
        assert!(sel.state.contains("Texas"));
    }
}
