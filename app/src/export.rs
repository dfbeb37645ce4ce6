//! FILENAME: app/src/export.rs
//! PURPOSE: Writes the dashboard's CSV downloads to a directory.

use std::fs::File;
use std::path::{Path, PathBuf};

use pivot_engine::{group_aggregate, monthly_series, AggregationType, Dimension, Measure};

use crate::{
    date_filtered_dataset, hierarchy_filtered_dataset, lock, log_error, log_info, AppState,
};
use crate::api_types::{ExportResult, TableData};

/// File names written by `export_downloads`, in write order.
pub const DOWNLOAD_FILES: [&str; 4] = ["Category.csv", "Region.csv", "TimeSeries.csv", "Data.csv"];

/// Writes Category.csv, Region.csv and TimeSeries.csv from the filtered
/// data and Data.csv from the date-filtered data into `dir` (the configured
/// export directory when `None`). The directory is created if missing.
pub fn export_downloads(state: &AppState, dir: Option<String>) -> Result<ExportResult, String> {
    let dir = match dir {
        Some(d) => PathBuf::from(d),
        None => lock(&state.config)?.export_dir.clone(),
    };
    log_info!("EXPORT", "export_downloads dir={}", dir.display());

    let date_filtered = date_filtered_dataset(state)?;
    let filtered = hierarchy_filtered_dataset(state, &date_filtered)?;

    std::fs::create_dir_all(&dir)
        .map_err(|e| format!("Failed to create {}: {}", dir.display(), e))?;

    let tables = [
        TableData::from_summary(&group_aggregate(&filtered, Dimension::Category, Measure::Sales, AggregationType::Sum)),
        TableData::from_summary(&group_aggregate(&filtered, Dimension::Region, Measure::Sales, AggregationType::Sum)),
        TableData::from_summary(&monthly_series(&filtered, Measure::Sales)),
    ];

    let mut files = Vec::with_capacity(DOWNLOAD_FILES.len());
    for (name, table) in DOWNLOAD_FILES.iter().zip(tables.iter()) {
        let path = dir.join(name);
        write_table(&path, table)?;
        files.push(path.display().to_string());
    }

    let data_path = dir.join(DOWNLOAD_FILES[3]);
    persistence::save_dataset_csv(&data_path, &date_filtered).map_err(|e| export_error(&data_path, e))?;
    files.push(data_path.display().to_string());

    log_info!("EXPORT", "wrote {} files ({} data rows)", files.len(), date_filtered.len());
    Ok(ExportResult {
        directory: dir.display().to_string(),
        files,
    })
}

fn write_table(path: &Path, table: &TableData) -> Result<(), String> {
    let file = File::create(path).map_err(|e| export_error(path, e))?;
    persistence::write_table_csv(file, &table.headers, &table.rows).map_err(|e| export_error(path, e))
}

fn export_error(path: &Path, err: impl std::fmt::Display) -> String {
    let message = format!("Failed to write {}: {}", path.display(), err);
    log_error!("EXPORT", "{}", message);
    message
}
