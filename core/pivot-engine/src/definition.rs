//! FILENAME: core/pivot-engine/src/definition.rs
//! Summary Definition - what to group by, what to measure, how to aggregate.
//!
//! These types are plain configuration: serializable, copyable, and free of
//! any reference to the data they will be applied to.

use engine::Record;
use serde::{Deserialize, Serialize};

// ============================================================================
// AGGREGATION
// ============================================================================

/// Supported aggregation functions for a measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AggregationType {
    Sum,
    Count,
    Mean,
    Min,
    Max,
}

impl Default for AggregationType {
    fn default() -> Self {
        AggregationType::Sum
    }
}

// ============================================================================
// DIMENSIONS & MEASURES
// ============================================================================

/// A categorical column records can be grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    Region,
    State,
    City,
    Category,
    SubCategory,
    Segment,
}

impl Dimension {
    /// Column header as it appears in the source data and in exports.
    pub fn column_name(self) -> &'static str {
        match self {
            Dimension::Region => "Region",
            Dimension::State => "State",
            Dimension::City => "City",
            Dimension::Category => "Category",
            Dimension::SubCategory => "Sub-Category",
            Dimension::Segment => "Segment",
        }
    }

    pub fn key(self, record: &Record) -> &str {
        match self {
            Dimension::Region => &record.region,
            Dimension::State => &record.state,
            Dimension::City => &record.city,
            Dimension::Category => &record.category,
            Dimension::SubCategory => &record.sub_category,
            Dimension::Segment => &record.segment,
        }
    }
}

/// A numeric column records are aggregated over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Measure {
    Sales,
    Profit,
    Quantity,
}

impl Measure {
    pub fn column_name(self) -> &'static str {
        match self {
            Measure::Sales => "Sales",
            Measure::Profit => "Profit",
            Measure::Quantity => "Quantity",
        }
    }

    pub fn value(self, record: &Record) -> f64 {
        match self {
            Measure::Sales => record.sales,
            Measure::Profit => record.profit,
            Measure::Quantity => record.quantity,
        }
    }
}

/// Path of the treemap drill-down: Region, then Category, then Sub-Category.
pub const TREEMAP_PATH: [Dimension; 3] = [
    Dimension::Region,
    Dimension::Category,
    Dimension::SubCategory,
];
