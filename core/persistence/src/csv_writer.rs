//! FILENAME: core/persistence/src/csv_writer.rs
//! PURPOSE: Writes summary tables and datasets as UTF-8 CSV downloads.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use engine::{Dataset, Record};

use crate::PersistenceError;

/// Writes a header row followed by `rows`.
pub fn write_table_csv<W: Write>(
    writer: W,
    headers: &[String],
    rows: &[Vec<String>],
) -> Result<(), PersistenceError> {
    let mut csv_writer = csv::WriterBuilder::new().flexible(true).from_writer(writer);
    csv_writer.write_record(headers)?;
    for row in rows {
        csv_writer.write_record(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// The bytes of a CSV download for a table.
pub fn encode_table_csv(headers: &[String], rows: &[Vec<String>]) -> Result<Vec<u8>, PersistenceError> {
    let mut bytes = Vec::new();
    write_table_csv(&mut bytes, headers, rows)?;
    Ok(bytes)
}

/// Cells of `record` aligned with the dataset headers. Uses the raw source
/// text when the record carries it, otherwise renders the typed fields.
pub fn record_fields(headers: &[String], record: &Record) -> Vec<String> {
    if record.raw.len() == headers.len() {
        return record.raw.clone();
    }
    headers
        .iter()
        .map(|header| match header.as_str() {
            "Order Date" => record
                .order_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            "Region" => record.region.clone(),
            "State" => record.state.clone(),
            "City" => record.city.clone(),
            "Category" => record.category.clone(),
            "Sub-Category" => record.sub_category.clone(),
            "Segment" => record.segment.clone(),
            "Sales" => record.sales.to_string(),
            "Profit" => record.profit.to_string(),
            "Quantity" => record.quantity.to_string(),
            _ => String::new(),
        })
        .collect()
}

/// Writes every record of `dataset` under its source headers.
pub fn write_dataset_csv<W: Write>(writer: W, dataset: &Dataset) -> Result<(), PersistenceError> {
    let rows: Vec<Vec<String>> = dataset
        .iter()
        .map(|r| record_fields(&dataset.headers, r))
        .collect();
    write_table_csv(writer, &dataset.headers, &rows)
}

pub fn save_dataset_csv(path: &Path, dataset: &Dataset) -> Result<(), PersistenceError> {
    let file = File::create(path)?;
    write_dataset_csv(file, dataset)
}
