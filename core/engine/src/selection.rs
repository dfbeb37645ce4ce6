//! FILENAME: core/engine/src/selection.rs
//! PURPOSE: The set of values a user picked at one hierarchy level.
//! CONTEXT: An empty SelectionSet means "no constraint at this level",
//! never "accept nothing".

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Values chosen for one hierarchy level. Ordered so it can key a cache.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionSet {
    values: BTreeSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        SelectionSet {
            values: BTreeSet::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(value)
    }

    /// True when the selection is empty or contains `value`.
    pub fn accepts(&self, value: &str) -> bool {
        self.values.is_empty() || self.values.contains(value)
    }

    /// Returns true if the value was not already selected.
    pub fn insert(&mut self, value: impl Into<String>) -> bool {
        self.values.insert(value.into())
    }

    pub fn remove(&mut self, value: &str) -> bool {
        self.values.remove(value)
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Keeps only the values for which `keep` returns true.
    pub fn retain<F: FnMut(&str) -> bool>(&mut self, mut keep: F) {
        self.values.retain(|v| keep(v));
    }

    /// Iterates selected values in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        SelectionSet {
            values: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for SelectionSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.values.extend(iter.into_iter().map(Into::into));
    }
}
