//! FILENAME: app/src/data_source.rs
//! PURPOSE: Commands that load the dataset and set the order date range.
//! CONTEXT: Loading replaces the session's dataset, resets the selection and
//! defaults the date range to the dataset's own bounds.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use engine::{Dataset, DateRange};
use filter_engine::HierarchySelection;

use crate::api_types::DatasetSummary;
use crate::{lock, log_enter, log_error, log_exit, log_info, log_warn, refresh_working_set, AppState};

/// Loads `path`, or the configured default dataset when `path` is `None`.
pub fn load_dataset(state: &AppState, path: Option<String>) -> Result<DatasetSummary, String> {
    let path = match path {
        Some(p) => PathBuf::from(p),
        None => lock(&state.config)?.default_dataset.clone(),
    };
    log_enter!("DATA", "load_dataset", "path={}", path.display());

    let dataset = persistence::load_dataset(&path).map_err(|e| {
        let message = format!("Failed to load {}: {}", path.display(), e);
        log_error!("DATA", "{}", message);
        message
    })?;

    let name = source_name(&path);
    log_info!("DATA", "loaded {} records from {}", dataset.len(), name);
    let summary = install_dataset(state, dataset, Some(name))?;
    log_exit!("DATA", "load_dataset", "records={}", summary.total_records);
    Ok(summary)
}

/// Replaces the session dataset with one already in memory.
pub fn install_dataset(
    state: &AppState,
    dataset: Dataset,
    name: Option<String>,
) -> Result<DatasetSummary, String> {
    let bounds = dataset.date_bounds();
    if bounds.is_none() && !dataset.is_empty() {
        log_warn!("DATA", "dataset has no order dates; date filtering disabled");
    }

    *lock(&state.dataset)? = dataset;
    *lock(&state.source_name)? = name;
    *lock(&state.date_range)? = bounds;
    *lock(&state.selection)? = HierarchySelection::default();
    refresh_working_set(state)?;

    get_dataset_summary(state)
}

/// Sets the inclusive order date range. Dates use the same layouts the
/// loader accepts, e.g. `2016-01-31` or `1/31/2016`.
pub fn set_date_range(state: &AppState, start: &str, end: &str) -> Result<DatasetSummary, String> {
    let start = parse_date_arg("start", start)?;
    let end = parse_date_arg("end", end)?;
    if start > end {
        return Err(format!("Start date {} is after end date {}", start, end));
    }

    log_info!("DATA", "set_date_range {} .. {}", start, end);
    *lock(&state.date_range)? = Some(DateRange::new(start, end));
    refresh_working_set(state)?;
    get_dataset_summary(state)
}

/// Removes date filtering; records without an order date become visible.
pub fn clear_date_range(state: &AppState) -> Result<DatasetSummary, String> {
    log_info!("DATA", "clear_date_range");
    *lock(&state.date_range)? = None;
    refresh_working_set(state)?;
    get_dataset_summary(state)
}

pub fn get_dataset_summary(state: &AppState) -> Result<DatasetSummary, String> {
    let dataset = lock(&state.dataset)?;
    let date_range = *lock(&state.date_range)?;
    let date_filtered_records = match date_range {
        Some(range) => dataset.iter().filter(|r| range.contains_record(r)).count(),
        None => dataset.len(),
    };

    Ok(DatasetSummary {
        source_name: lock(&state.source_name)?.clone(),
        headers: dataset.headers.clone(),
        total_records: dataset.len(),
        date_bounds: dataset.date_bounds(),
        date_range,
        date_filtered_records,
    })
}

fn parse_date_arg(which: &str, text: &str) -> Result<NaiveDate, String> {
    persistence::parse_date(text).ok_or_else(|| format!("Invalid {} date '{}'", which, text))
}

fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
