//! FILENAME: core/persistence/src/csv_reader.rs
//! PURPOSE: Reads delimited text exports (CSV/TXT) into a Dataset.
//! CONTEXT: Sales exports are commonly Windows-1252/Latin-1 encoded, so the
//! bytes are decoded as ISO-8859-1 before parsing. That decoding never fails.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use engine::Dataset;

use crate::builder::DatasetBuilder;
use crate::PersistenceError;

/// Decodes ISO-8859-1: every byte maps to the code point of the same value.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// Parses CSV with a header row from any reader.
pub fn read_csv<R: Read>(mut reader: R) -> Result<Dataset, PersistenceError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let text = decode_latin1(&bytes);

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = csv_reader.headers()?.iter().map(str::to_string).collect();
    let mut builder = DatasetBuilder::new(headers)?;

    for (idx, result) in csv_reader.records().enumerate() {
        let record = result?;
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(idx + 2);
        builder.push_row(line, record.iter().map(str::to_string).collect())?;
    }

    let dataset = builder.finish();
    log::debug!("parsed {} csv rows", dataset.len());
    Ok(dataset)
}

pub fn load_csv(path: &Path) -> Result<Dataset, PersistenceError> {
    let file = File::open(path)?;
    read_csv(BufReader::new(file))
}
