//! FILENAME: core/pivot-engine/src/engine.rs
//! Summary Engine - turns a (filtered) dataset into presentation aggregates.
//!
//! Every function here is a single pass over the records followed by a sort;
//! nothing is retained between calls. Group keys are ordered ascending, the
//! way a dataframe group-by orders them, except calendar axes which follow
//! the calendar.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, NaiveDate};
use engine::{Dataset, Record};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::cache::AggregateAccumulator;
use crate::definition::{AggregationType, Dimension, Measure};
use crate::view::{PivotRow, PivotView, ScatterPoint, ShareSlice, SummaryRow, SummaryTable, TreeNode};

/// Full English month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// Header of the time series key column.
pub const MONTH_YEAR_HEADER: &str = "month_year";

// ============================================================================
// GROUP-BY
// ============================================================================

/// One row per distinct `dimension` value, sorted ascending by value.
pub fn group_aggregate(
    dataset: &Dataset,
    dimension: Dimension,
    measure: Measure,
    aggregation: AggregationType,
) -> SummaryTable {
    let mut groups: BTreeMap<&str, AggregateAccumulator> = BTreeMap::new();
    for record in dataset {
        groups
            .entry(dimension.key(record))
            .or_default()
            .add(measure.value(record));
    }

    let mut table = SummaryTable::new(dimension.column_name(), measure.column_name());
    table.rows = groups
        .into_iter()
        .map(|(label, acc)| SummaryRow {
            label: label.to_string(),
            value: acc.compute(aggregation),
        })
        .collect();
    table
}

/// Sum of `measure` per `dimension` value with each value's share of the total.
pub fn share_breakdown(dataset: &Dataset, dimension: Dimension, measure: Measure) -> Vec<ShareSlice> {
    let sums = group_aggregate(dataset, dimension, measure, AggregationType::Sum);
    let total = sums.total();
    sums.rows
        .into_iter()
        .map(|row| ShareSlice {
            fraction: if total != 0.0 { row.value / total } else { 0.0 },
            label: row.label,
            value: row.value,
        })
        .collect()
}

// ============================================================================
// TIME SERIES
// ============================================================================

/// Label of the month containing `date`, e.g. "2016 : Nov".
pub fn month_year_label(date: NaiveDate) -> String {
    date.format("%Y : %b").to_string()
}

/// Sum of `measure` per calendar month, in chronological order.
/// Records without an order date are skipped.
pub fn monthly_series(dataset: &Dataset, measure: Measure) -> SummaryTable {
    let mut months: BTreeMap<(i32, u32), f64> = BTreeMap::new();
    for record in dataset {
        if let Some(date) = record.order_date {
            *months.entry((date.year(), date.month())).or_insert(0.0) += measure.value(record);
        }
    }

    let mut table = SummaryTable::new(MONTH_YEAR_HEADER, measure.column_name());
    table.rows = months
        .into_iter()
        .filter_map(|((year, month), value)| {
            let first = NaiveDate::from_ymd_opt(year, month, 1)?;
            Some(SummaryRow {
                label: month_year_label(first),
                value,
            })
        })
        .collect();
    table
}

// ============================================================================
// HIERARCHY (TREEMAP)
// ============================================================================

/// Nested sums of `measure` along `path` (outermost dimension first).
/// Siblings are sorted by label. An empty path yields no nodes.
pub fn hierarchy_tree(dataset: &Dataset, path: &[Dimension], measure: Measure) -> Vec<TreeNode> {
    let records: Vec<&Record> = dataset.iter().collect();
    build_tree_level(&records, path, measure, &SmallVec::new())
}

fn build_tree_level(
    records: &[&Record],
    path: &[Dimension],
    measure: Measure,
    parent_labels: &SmallVec<[String; 4]>,
) -> Vec<TreeNode> {
    let Some((dimension, rest)) = path.split_first() else {
        return Vec::new();
    };

    let mut groups: BTreeMap<&str, Vec<&Record>> = BTreeMap::new();
    for &record in records {
        groups.entry(dimension.key(record)).or_default().push(record);
    }

    groups
        .into_iter()
        .map(|(label, members)| {
            let mut labels = parent_labels.clone();
            labels.push(label.to_string());
            TreeNode {
                label: label.to_string(),
                path: labels.join("/"),
                value: members.iter().map(|r| measure.value(r)).sum(),
                record_count: members.len(),
                children: build_tree_level(&members, rest, measure, &labels),
            }
        })
        .collect()
}

// ============================================================================
// MONTH PIVOT
// ============================================================================

/// Rows are `row_dimension` values (sorted), columns are the month names that
/// occur in the data (calendar order, years folded together). A cell is the
/// aggregate of `measure` over the records in that row and month, or `None`
/// when there are none.
pub fn month_pivot(
    dataset: &Dataset,
    row_dimension: Dimension,
    measure: Measure,
    aggregation: AggregationType,
) -> PivotView {
    let mut cells: FxHashMap<(&str, u32), AggregateAccumulator> = FxHashMap::default();
    let mut row_labels: BTreeSet<&str> = BTreeSet::new();
    let mut months_present = [false; 12];

    for record in dataset {
        let Some(date) = record.order_date else {
            continue;
        };
        let month = date.month0();
        let key = row_dimension.key(record);
        months_present[month as usize] = true;
        row_labels.insert(key);
        cells.entry((key, month)).or_default().add(measure.value(record));
    }

    let month_columns: Vec<u32> = (0..12u32).filter(|&m| months_present[m as usize]).collect();

    let rows = row_labels
        .iter()
        .map(|&label| PivotRow {
            label: label.to_string(),
            cells: month_columns
                .iter()
                .map(|&m| cells.get(&(label, m)).map(|acc| acc.compute(aggregation)))
                .collect(),
        })
        .collect();

    PivotView {
        row_header: row_dimension.column_name().to_string(),
        columns: month_columns
            .iter()
            .map(|&m| MONTH_NAMES[m as usize].to_string())
            .collect(),
        rows,
    }
}

// ============================================================================
// SCATTER
// ============================================================================

/// One point per record: Sales against Profit, sized by Quantity.
pub fn scatter_points(dataset: &Dataset) -> Vec<ScatterPoint> {
    dataset
        .iter()
        .map(|r| ScatterPoint {
            sales: r.sales,
            profit: r.profit,
            size: r.quantity,
        })
        .collect()
}
