//! FILENAME: core/engine/src/dataset.rs
//! PURPOSE: Ordered collection of sales records plus the source column headers.
//! CONTEXT: A Dataset is loaded once per session and never mutated by the
//! filters; every narrowing step (date range, hierarchy) produces a new one.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::record::Record;

// ============================================================================
// DATE RANGE
// ============================================================================

/// Inclusive calendar date range `[start, end]`.
/// A range with `start > end` matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        DateRange { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Records without an order date never fall inside a range.
    pub fn contains_record(&self, record: &Record) -> bool {
        record.order_date.map(|d| self.contains(d)).unwrap_or(false)
    }
}

// ============================================================================
// DATASET
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Source column headers, in source order.
    pub headers: Vec<String>,
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn new(headers: Vec<String>) -> Self {
        Dataset {
            headers,
            records: Vec::new(),
        }
    }

    pub fn from_records(headers: Vec<String>, records: Vec<Record>) -> Self {
        Dataset { headers, records }
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Position of a header, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Builds a new dataset from the given row indices, in the given order.
    /// Out-of-range indices are skipped.
    pub fn subset(&self, indices: &[usize]) -> Dataset {
        let records = indices
            .iter()
            .filter_map(|&i| self.records.get(i).cloned())
            .collect();
        Dataset::from_records(self.headers.clone(), records)
    }

    /// First `n` records.
    pub fn head(&self, n: usize) -> Dataset {
        let end = n.min(self.records.len());
        Dataset::from_records(self.headers.clone(), self.records[..end].to_vec())
    }

    /// Earliest and latest order dates, or `None` if no record has a date.
    pub fn date_bounds(&self) -> Option<DateRange> {
        let mut dates = self.records.iter().filter_map(|r| r.order_date);
        let first = dates.next()?;
        let (min, max) = dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d)));
        Some(DateRange::new(min, max))
    }

    /// Rows whose order date falls inside `range` (both ends inclusive).
    pub fn filter_date_range(&self, range: &DateRange) -> Dataset {
        let records = self
            .records
            .iter()
            .filter(|r| range.contains_record(r))
            .cloned()
            .collect();
        Dataset::from_records(self.headers.clone(), records)
    }

    /// Sum of the Sales column.
    pub fn total_sales(&self) -> f64 {
        self.records.iter().map(|r| r.sales).sum()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
