//! FILENAME: app/src/api_types.rs
// PURPOSE: Shared response types for dashboard commands.
// CONTEXT: All structs use camelCase serialization for the JSON output.

use engine::DateRange;
use filter_engine::HierarchySelection;
use pivot_engine::{PivotView, ScatterPoint, ShareSlice, SummaryTable, TreeNode};
use serde::{Deserialize, Serialize};

/// Headers plus string rows, ready to print or download.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableData {
    pub fn from_summary(table: &SummaryTable) -> Self {
        TableData {
            headers: table.headers(),
            rows: table.string_rows(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// State of the loaded dataset after a load or date range change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetSummary {
    pub source_name: Option<String>,
    pub headers: Vec<String>,
    pub total_records: usize,
    /// Earliest and latest order date in the dataset.
    pub date_bounds: Option<DateRange>,
    /// Active date range; `None` means no date filtering.
    pub date_range: Option<DateRange>,
    pub date_filtered_records: usize,
}

/// Cascading option lists plus the selection they were computed for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptionsResponse {
    pub regions: Vec<String>,
    pub states: Vec<String>,
    pub cities: Vec<String>,
    pub selection: HierarchySelection,
    pub filtered_records: usize,
}

/// Everything the dashboard draws for the current filters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardViewResponse {
    pub source_name: Option<String>,
    pub date_range: Option<DateRange>,
    pub selection: HierarchySelection,

    pub total_records: usize,
    pub date_filtered_records: usize,
    pub filtered_records: usize,
    pub filtered_sales: f64,

    pub category_sales: SummaryTable,
    pub region_sales: SummaryTable,
    pub region_share: Vec<ShareSlice>,
    pub segment_share: Vec<ShareSlice>,
    pub category_share: Vec<ShareSlice>,
    pub monthly_sales: SummaryTable,
    pub treemap: Vec<TreeNode>,
    pub sample: TableData,
    pub month_pivot: PivotView,
    pub scatter: Vec<ScatterPoint>,
    pub data_view: TableData,
}

/// Files written by an export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportResult {
    pub directory: String,
    pub files: Vec<String>,
}
