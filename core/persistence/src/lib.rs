//! FILENAME: core/persistence/src/lib.rs
//! Sales data persistence.
//!
//! Loads datasets from CSV/TXT exports and XLSX/XLS workbooks, and writes the
//! CSV downloads offered by the dashboard.

mod builder;
mod csv_reader;
mod csv_writer;
mod dates;
mod error;
mod xlsx_reader;

pub use builder::{parse_number, DatasetBuilder, REQUIRED_COLUMNS};
pub use csv_reader::{decode_latin1, load_csv, read_csv};
pub use csv_writer::{
    encode_table_csv, record_fields, save_dataset_csv, write_dataset_csv, write_table_csv,
};
pub use dates::{excel_serial_to_date, parse_date};
pub use error::PersistenceError;
pub use xlsx_reader::load_workbook;

use engine::Dataset;
use std::path::Path;

/// Dataset loaded when the user has not supplied one.
pub const DEFAULT_DATASET_FILE: &str = "Superstore.csv";

/// File kinds the uploader accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Csv,
    Workbook,
}

impl SourceFormat {
    /// Detects the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, PersistenceError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "csv" | "txt" => Ok(SourceFormat::Csv),
            "xlsx" | "xls" => Ok(SourceFormat::Workbook),
            _ => Err(PersistenceError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Loads a dataset, picking the reader from the file extension.
pub fn load_dataset(path: &Path) -> Result<Dataset, PersistenceError> {
    let format = SourceFormat::from_path(path)?;
    log::info!("loading {:?} dataset from {}", format, path.display());
    let dataset = match format {
        SourceFormat::Csv => load_csv(path)?,
        SourceFormat::Workbook => load_workbook(path)?,
    };
    if dataset.is_empty() {
        log::warn!("{} contains a header row but no data", path.display());
    }
    Ok(dataset)
}
