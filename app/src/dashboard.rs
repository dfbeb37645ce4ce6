//! FILENAME: app/src/dashboard.rs
//! PURPOSE: Assembles the full dashboard view for the current filters.
//! CONTEXT: The sample table is drawn from the date-filtered data; every
//! other panel is drawn from the hierarchy-filtered data.

use engine::Dataset;
use pivot_engine::{
    group_aggregate, hierarchy_tree, month_pivot, monthly_series, scatter_points,
    share_breakdown, AggregationType, Dimension, Measure, TREEMAP_PATH,
};

use crate::api_types::{DashboardViewResponse, TableData};
use crate::config::DashboardConfig;
use crate::{
    date_filtered_dataset, hierarchy_filtered_dataset, lock, log_enter, log_exit, AppState,
};

/// Source column positions shown by the data viewer: every second column
/// from index 1 up to (not including) index 20.
pub const DATA_VIEW_COLUMNS: std::ops::Range<usize> = 1..20;
pub const DATA_VIEW_STEP: usize = 2;

/// Columns of the sample table.
pub const SAMPLE_COLUMNS: [&str; 7] = ["Region", "State", "City", "Category", "Sales", "Profit", "Quantity"];

pub fn get_dashboard_view(state: &AppState) -> Result<DashboardViewResponse, String> {
    log_enter!("VIEW", "get_dashboard_view");
    let config = lock(&state.config)?.clone();
    let total_records = lock(&state.dataset)?.len();
    let date_filtered = date_filtered_dataset(state)?;
    let filtered = hierarchy_filtered_dataset(state, &date_filtered)?;

    let mut view = build_dashboard_view(&date_filtered, &filtered, &config);
    view.source_name = lock(&state.source_name)?.clone();
    view.date_range = *lock(&state.date_range)?;
    view.selection = lock(&state.selection)?.clone();
    view.total_records = total_records;

    log_exit!(
        "VIEW",
        "get_dashboard_view",
        "filtered={} of {}",
        view.filtered_records,
        view.date_filtered_records
    );
    Ok(view)
}

/// Builds every panel from already-filtered data. Session fields
/// (source name, date range, selection) are left at their defaults.
pub fn build_dashboard_view(
    date_filtered: &Dataset,
    filtered: &Dataset,
    config: &DashboardConfig,
) -> DashboardViewResponse {
    DashboardViewResponse {
        source_name: None,
        date_range: None,
        selection: Default::default(),

        total_records: date_filtered.len(),
        date_filtered_records: date_filtered.len(),
        filtered_records: filtered.len(),
        filtered_sales: filtered.total_sales(),

        category_sales: group_aggregate(filtered, Dimension::Category, Measure::Sales, AggregationType::Sum),
        region_sales: group_aggregate(filtered, Dimension::Region, Measure::Sales, AggregationType::Sum),
        region_share: share_breakdown(filtered, Dimension::Region, Measure::Sales),
        segment_share: share_breakdown(filtered, Dimension::Segment, Measure::Sales),
        category_share: share_breakdown(filtered, Dimension::Category, Measure::Sales),
        monthly_sales: monthly_series(filtered, Measure::Sales),
        treemap: hierarchy_tree(filtered, &TREEMAP_PATH, Measure::Sales),
        sample: sample_table(date_filtered, config.sample_rows),
        month_pivot: month_pivot(filtered, Dimension::SubCategory, Measure::Sales, AggregationType::Mean),
        scatter: scatter_points(filtered),
        data_view: data_table(filtered, config.max_view_rows),
    }
}

/// First `rows` records, restricted to `SAMPLE_COLUMNS`.
pub fn sample_table(dataset: &Dataset, rows: usize) -> TableData {
    TableData {
        headers: SAMPLE_COLUMNS.iter().map(|c| c.to_string()).collect(),
        rows: dataset
            .iter()
            .take(rows)
            .map(|r| {
                vec![
                    r.region.clone(),
                    r.state.clone(),
                    r.city.clone(),
                    r.category.clone(),
                    r.sales.to_string(),
                    r.profit.to_string(),
                    r.quantity.to_string(),
                ]
            })
            .collect(),
    }
}

/// First `rows` records, restricted to every second source column from
/// `DATA_VIEW_COLUMNS.start`. Datasets with fewer columns show what exists.
pub fn data_table(dataset: &Dataset, rows: usize) -> TableData {
    let columns: Vec<usize> = DATA_VIEW_COLUMNS
        .step_by(DATA_VIEW_STEP)
        .take_while(|&i| i < dataset.headers.len())
        .collect();
    let pick = |fields: &[String]| -> Vec<String> {
        columns.iter().map(|&i| fields.get(i).cloned().unwrap_or_default()).collect()
    };

    TableData {
        headers: pick(&dataset.headers),
        rows: dataset
            .iter()
            .take(rows)
            .map(|r| pick(&persistence::record_fields(&dataset.headers, r)))
            .collect(),
    }
}
