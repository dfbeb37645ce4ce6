//! FILENAME: core/persistence/src/builder.rs
//! PURPOSE: Turns a header row plus string rows into a typed Dataset.
//! CONTEXT: Shared by the CSV and workbook readers, so both formats apply
//! the same column requirements and value parsing.

use engine::{Dataset, Record};

use crate::dates::parse_date;
use crate::PersistenceError;

pub const ORDER_DATE_COLUMN: &str = "Order Date";
pub const SALES_COLUMN: &str = "Sales";

/// Columns a dataset cannot be analysed without.
pub const REQUIRED_COLUMNS: [&str; 5] = [ORDER_DATE_COLUMN, "Region", "State", "City", SALES_COLUMN];

/// Resolved positions of the known columns within a header row.
#[derive(Debug, Clone)]
struct ColumnMap {
    order_date: usize,
    region: usize,
    state: usize,
    city: usize,
    sales: usize,
    category: Option<usize>,
    sub_category: Option<usize>,
    segment: Option<usize>,
    profit: Option<usize>,
    quantity: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &[String]) -> Result<Self, PersistenceError> {
        let find = |name: &str| headers.iter().position(|h| h == name);
        let require = |name: &str| {
            find(name).ok_or_else(|| PersistenceError::MissingColumn(name.to_string()))
        };

        Ok(ColumnMap {
            order_date: require(ORDER_DATE_COLUMN)?,
            region: require("Region")?,
            state: require("State")?,
            city: require("City")?,
            sales: require(SALES_COLUMN)?,
            category: find("Category"),
            sub_category: find("Sub-Category"),
            segment: find("Segment"),
            profit: find("Profit"),
            quantity: find("Quantity"),
        })
    }
}

/// Accumulates rows into a Dataset.
pub struct DatasetBuilder {
    columns: ColumnMap,
    dataset: Dataset,
}

impl DatasetBuilder {
    /// Validates the header row. Header cells are trimmed and a leading
    /// byte-order mark is dropped.
    pub fn new(headers: Vec<String>) -> Result<Self, PersistenceError> {
        let headers: Vec<String> = headers
            .into_iter()
            .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
            .collect();
        let columns = ColumnMap::from_headers(&headers)?;
        Ok(DatasetBuilder {
            columns,
            dataset: Dataset::new(headers),
        })
    }

    pub fn headers(&self) -> &[String] {
        &self.dataset.headers
    }

    /// Parses one data row. `line` is the 1-based source line, for errors.
    /// Short rows are padded with empty cells; extra cells are dropped.
    pub fn push_row(&mut self, line: usize, mut fields: Vec<String>) -> Result<(), PersistenceError> {
        fields.resize(self.dataset.headers.len(), String::new());
        let cols = &self.columns;

        let text = |idx: usize| fields[idx].trim().to_string();
        let optional_text = |idx: Option<usize>| idx.map(|i| fields[i].trim().to_string()).unwrap_or_default();

        let order_date = {
            let raw = fields[cols.order_date].trim();
            if raw.is_empty() {
                None
            } else {
                Some(parse_date(raw).ok_or_else(|| invalid(line, ORDER_DATE_COLUMN, raw))?)
            }
        };

        let record = Record {
            order_date,
            region: text(cols.region),
            state: text(cols.state),
            city: text(cols.city),
            category: optional_text(cols.category),
            sub_category: optional_text(cols.sub_category),
            segment: optional_text(cols.segment),
            sales: parse_number(line, SALES_COLUMN, &fields[cols.sales])?,
            profit: match cols.profit {
                Some(i) => parse_number(line, "Profit", &fields[i])?,
                None => 0.0,
            },
            quantity: match cols.quantity {
                Some(i) => parse_number(line, "Quantity", &fields[i])?,
                None => 0.0,
            },
            raw: fields.clone(),
        };

        self.dataset.push(record);
        Ok(())
    }

    pub fn finish(self) -> Dataset {
        self.dataset
    }
}

fn invalid(line: usize, column: &str, value: &str) -> PersistenceError {
    PersistenceError::InvalidValue {
        line,
        column: column.to_string(),
        value: value.to_string(),
    }
}

/// Parses a numeric cell. Blank cells are 0; a leading `$` and thousands
/// separators are accepted.
pub fn parse_number(line: usize, column: &str, text: &str) -> Result<f64, PersistenceError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    let (negative, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    let cleaned: String = body
        .trim_start_matches('$')
        .chars()
        .filter(|&c| c != ',')
        .collect();
    let value: f64 = cleaned.parse().map_err(|_| invalid(line, column, trimmed))?;
    Ok(if negative { -value } else { value })
}
