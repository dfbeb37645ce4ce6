//! FILENAME: core/filter-engine/src/lib.rs
//! Hierarchical filter subsystem.
//!
//! Narrows a sales dataset by Region -> State -> City multi-select
//! selections. It depends on `engine` only for shared types (Dataset,
//! Record, SelectionSet, HierarchyLevel).
//!
//! Layers:
//! - `definition`: Serializable selection state (what the user picked)
//! - `engine`: Resolution and cascading option lists (HOW we filter)
//! - `cache`: Optional memoization of resolved row sets

pub mod definition;
pub mod engine;
pub mod cache;

#[cfg(test)]
mod tests;

pub use definition::*;
pub use cache::{FilterCache, DEFAULT_CAPACITY};
pub use engine::{
    available_cities, available_options, available_regions, available_states,
    matching_rows, resolve, resolve_selection, retain_available, retain_below,
    row_matches,
};
