//! FILENAME: core/pivot-engine/src/view.rs
//! Summary View - renderable output for the presentation layer.
//!
//! Every type here is a finished result: labels are resolved, values are
//! aggregated, and tables can be flattened to string rows for CSV download.

use serde::{Deserialize, Serialize};

// ============================================================================
// SUMMARY TABLE
// ============================================================================

/// One labelled aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub label: String,
    pub value: f64,
}

/// Two-column table: group key and its aggregate (e.g. Category / Sales).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryTable {
    pub key_header: String,
    pub value_header: String,
    pub rows: Vec<SummaryRow>,
}

impl SummaryTable {
    pub fn new(key_header: &str, value_header: &str) -> Self {
        SummaryTable {
            key_header: key_header.to_string(),
            value_header: value_header.to_string(),
            rows: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.rows.iter().map(|r| r.value).sum()
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.rows.iter().find(|r| r.label == label).map(|r| r.value)
    }

    pub fn headers(&self) -> Vec<String> {
        vec![self.key_header.clone(), self.value_header.clone()]
    }

    /// Rows as strings, values in shortest round-trip form.
    pub fn string_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|r| vec![r.label.clone(), r.value.to_string()])
            .collect()
    }
}

// ============================================================================
// SHARE (PIE) SLICES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareSlice {
    pub label: String,
    pub value: f64,
    /// Fraction of the total in `[0, 1]`; 0 when the total is 0.
    pub fraction: f64,
}

// ============================================================================
// TREEMAP
// ============================================================================

/// One node of a drill-down hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    pub label: String,
    /// Slash-joined labels from the root to this node, e.g. "West/Furniture/Chairs".
    pub path: String,
    pub value: f64,
    pub record_count: usize,
    pub children: Vec<TreeNode>,
}

// ============================================================================
// PIVOT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PivotRow {
    pub label: String,
    /// One cell per pivot column; `None` when no record falls in it.
    pub cells: Vec<Option<f64>>,
}

/// Cross-tabulation with a categorical row axis and a column axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PivotView {
    pub row_header: String,
    pub columns: Vec<String>,
    pub rows: Vec<PivotRow>,
}

impl PivotView {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn cell(&self, row_label: &str, column: &str) -> Option<f64> {
        let col = self.column_index(column)?;
        self.rows
            .iter()
            .find(|r| r.label == row_label)
            .and_then(|r| r.cells.get(col).copied().flatten())
    }

    pub fn headers(&self) -> Vec<String> {
        let mut headers = Vec::with_capacity(self.columns.len() + 1);
        headers.push(self.row_header.clone());
        headers.extend(self.columns.iter().cloned());
        headers
    }

    /// Rows as strings; empty cells become empty strings.
    pub fn string_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| {
                let mut out = Vec::with_capacity(row.cells.len() + 1);
                out.push(row.label.clone());
                out.extend(
                    row.cells
                        .iter()
                        .map(|c| c.map(|v| v.to_string()).unwrap_or_default()),
                );
                out
            })
            .collect()
    }
}

// ============================================================================
// SCATTER
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub sales: f64,
    pub profit: f64,
    /// Marker size (order quantity).
    pub size: f64,
}

// ============================================================================
// FORMATTING
// ============================================================================

/// Formats a value as dollars with thousands separators: `$1,234.50`.
pub fn format_currency(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && fixed.trim_matches(|c| c == '0' || c == '.') != "" {
        "-"
    } else {
        ""
    };
    format!("{}${}.{}", sign, grouped, frac_part)
}
