//! FILENAME: core/filter-engine/src/cache.rs
//! Filter Cache - memoized row matches keyed by the selection triple.
//!
//! The cache is bound to one working dataset. Whoever owns it must call
//! `invalidate` whenever that dataset changes (new upload, new date range);
//! otherwise stale row indices would be returned.

use engine::Dataset;
use rustc_hash::FxHashMap;

use crate::definition::HierarchySelection;
use crate::engine::matching_rows;

/// Entries kept before the cache is flushed.
pub const DEFAULT_CAPACITY: usize = 64;

#[derive(Debug, Clone)]
pub struct FilterCache {
    /// Bumped on every invalidation.
    generation: u64,
    capacity: usize,
    entries: FxHashMap<HierarchySelection, Vec<usize>>,
    hits: u64,
    misses: u64,
}

impl FilterCache {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        FilterCache {
            generation: 0,
            capacity: capacity.max(1),
            entries: FxHashMap::default(),
            hits: 0,
            misses: 0,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Drops every entry. Call when the working dataset changes.
    pub fn invalidate(&mut self) {
        self.entries.clear();
        self.generation += 1;
    }

    /// Row indices kept by `selection`, computed at most once per generation.
    pub fn matching_rows(&mut self, dataset: &Dataset, selection: &HierarchySelection) -> &[usize] {
        if self.entries.contains_key(selection) {
            self.hits += 1;
        } else {
            self.misses += 1;
            if self.entries.len() >= self.capacity {
                self.entries.clear();
            }
            let rows = matching_rows(dataset, selection);
            self.entries.insert(selection.clone(), rows);
        }
        self.entries
            .get(selection)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Same result as `resolve_selection`, served from the cache when possible.
    pub fn resolve(&mut self, dataset: &Dataset, selection: &HierarchySelection) -> Dataset {
        if selection.is_unconstrained() {
            return dataset.clone();
        }
        let rows = self.matching_rows(dataset, selection);
        dataset.subset(rows)
    }
}

impl Default for FilterCache {
    fn default() -> Self {
        Self::new()
    }
}
