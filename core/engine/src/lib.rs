//! FILENAME: core/engine/src/lib.rs
//! PURPOSE: Main library entry point for the sales data model.
//! CONTEXT: Re-exports the shared types used by the filter, pivot,
//! persistence and app crates.

pub mod dataset;
pub mod record;
pub mod selection;

// Re-export commonly used types at the crate root
pub use dataset::{Dataset, DateRange};
pub use record::{HierarchyLevel, Record};
pub use selection::SelectionSet;
