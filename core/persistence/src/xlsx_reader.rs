// FILENAME: core\persistence\src\xlsx_reader.rs

use crate::builder::DatasetBuilder;
use crate::dates::excel_serial_to_date;
use crate::PersistenceError;
use calamine::{open_workbook_auto, Data, Reader};
use engine::Dataset;
use std::path::Path;

/// Loads the first worksheet of an XLSX/XLS workbook. The first row is the header.
pub fn load_workbook(path: &Path) -> Result<Dataset, PersistenceError> {
    let mut workbook = open_workbook_auto(path)?;
    let sheet_names = workbook.sheet_names().to_vec();

    let first_sheet = sheet_names.first().ok_or(PersistenceError::EmptyWorkbook)?;
    let range = workbook.worksheet_range(first_sheet)?;

    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .map(|header| header.iter().map(cell_to_string).collect())
        .unwrap_or_default();
    let mut builder = DatasetBuilder::new(headers)?;

    for (row_idx, row) in rows.enumerate() {
        if row.iter().all(|cell| matches!(cell, Data::Empty)) {
            continue;
        }
        // Header is sheet row 1, so the first data row is row 2.
        builder.push_row(row_idx + 2, row.iter().map(cell_to_string).collect())?;
    }

    let dataset = builder.finish();
    log::debug!("parsed {} rows from sheet '{}'", dataset.len(), first_sheet);
    Ok(dataset)
}

/// Renders a workbook cell the way it would appear in a CSV export.
/// Date cells become ISO dates so the shared builder can parse them.
pub(crate) fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::Error(e) => format!("{:?}", e),
        Data::DateTime(dt) => {
            let serial = dt.as_f64();
            excel_serial_to_date(serial)
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| serial.to_string())
        }
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}
