//! FILENAME: core/engine/src/record.rs
//! PURPOSE: Defines the fundamental data structure for a single sales row.
//! CONTEXT: This file contains the `Record` struct and the `HierarchyLevel` enum.
//! The categorical fields (Region, State, City) drive the hierarchical filter;
//! the numeric and temporal fields are consumed by the aggregation layer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// HIERARCHY LEVEL
// ============================================================================

/// One level of the Region -> State -> City location hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HierarchyLevel {
    Region,
    State,
    City,
}

impl HierarchyLevel {
    /// All levels, top-down.
    pub const ALL: [HierarchyLevel; 3] = [
        HierarchyLevel::Region,
        HierarchyLevel::State,
        HierarchyLevel::City,
    ];

    /// Column header of this level in the source data.
    pub fn column_name(self) -> &'static str {
        match self {
            HierarchyLevel::Region => "Region",
            HierarchyLevel::State => "State",
            HierarchyLevel::City => "City",
        }
    }

    /// 0 for Region, 1 for State, 2 for City.
    pub fn depth(self) -> usize {
        match self {
            HierarchyLevel::Region => 0,
            HierarchyLevel::State => 1,
            HierarchyLevel::City => 2,
        }
    }

    /// The levels above this one, top-down. Empty for Region.
    pub fn ancestors(self) -> &'static [HierarchyLevel] {
        &Self::ALL[..self.depth()]
    }

    /// The levels below this one, top-down. Empty for City.
    pub fn descendants(self) -> &'static [HierarchyLevel] {
        &Self::ALL[self.depth() + 1..]
    }
}

impl fmt::Display for HierarchyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

impl FromStr for HierarchyLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "region" => Ok(HierarchyLevel::Region),
            "state" => Ok(HierarchyLevel::State),
            "city" => Ok(HierarchyLevel::City),
            other => Err(format!("unknown hierarchy level '{}'", other)),
        }
    }
}

// ============================================================================
// RECORD
// ============================================================================

/// One row of sales data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// `None` when the source cell was blank.
    pub order_date: Option<NaiveDate>,
    pub region: String,
    pub state: String,
    pub city: String,
    pub category: String,
    pub sub_category: String,
    pub segment: String,
    pub sales: f64,
    pub profit: f64,
    pub quantity: f64,

    /// Raw text of every source column, aligned with `Dataset::headers`.
    /// Used for full-row export and the data viewer.
    #[serde(default)]
    pub raw: Vec<String>,
}

impl Record {
    /// Creates a record located at (region, state, city) with zeroed measures.
    pub fn new(region: &str, state: &str, city: &str) -> Self {
        Record {
            order_date: None,
            region: region.to_string(),
            state: state.to_string(),
            city: city.to_string(),
            category: String::new(),
            sub_category: String::new(),
            segment: String::new(),
            sales: 0.0,
            profit: 0.0,
            quantity: 0.0,
            raw: Vec::new(),
        }
    }

    pub fn with_order_date(mut self, date: NaiveDate) -> Self {
        self.order_date = Some(date);
        self
    }

    pub fn with_sales(mut self, sales: f64) -> Self {
        self.sales = sales;
        self
    }

    pub fn with_profit(mut self, profit: f64) -> Self {
        self.profit = profit;
        self
    }

    pub fn with_quantity(mut self, quantity: f64) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_category(mut self, category: &str, sub_category: &str) -> Self {
        self.category = category.to_string();
        self.sub_category = sub_category.to_string();
        self
    }

    pub fn with_segment(mut self, segment: &str) -> Self {
        self.segment = segment.to_string();
        self
    }

    /// Returns this record's value at the given hierarchy level.
    pub fn level_value(&self, level: HierarchyLevel) -> &str {
        match level {
            HierarchyLevel::Region => &self.region,
            HierarchyLevel::State => &self.state,
            HierarchyLevel::City => &self.city,
        }
    }
}
