//! FILENAME: core/pivot-engine/src/lib.rs
//! Summary and pivot subsystem for the sales dashboard.
//!
//! This crate turns an already-filtered dataset into the aggregates the
//! presentation layer draws: group-by tables, pie shares, a monthly time
//! series, a treemap hierarchy, a month-wise pivot and a scatter series.
//! It depends on `engine` only for shared types (Dataset, Record).
//!
//! Layers:
//! - `definition`: What to group by, measure and aggregate
//! - `cache`: Incremental aggregate accumulator
//! - `view`: Renderable output (WHAT we display)
//! - `engine`: Aggregation passes (HOW we calculate)

pub mod definition;
pub mod cache;
pub mod view;
pub mod engine;

pub use definition::*;
pub use cache::AggregateAccumulator;
pub use view::*;
pub use engine::{
    group_aggregate, hierarchy_tree, month_pivot, month_year_label, monthly_series,
    scatter_points, share_breakdown, MONTH_NAMES, MONTH_YEAR_HEADER,
};
