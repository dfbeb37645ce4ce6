//! FILENAME: core/persistence/src/dates.rs
//! PURPOSE: Order Date parsing for text cells and workbook serial numbers.

use chrono::{Days, NaiveDate, NaiveDateTime};

/// Date-only layouts, tried in order. US month-first comes before
/// day-first so "11/8/2016" reads as November 8th.
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d", "%d-%m-%Y"];

/// Date-time layouts; the time part is discarded.
const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%m/%d/%Y %H:%M"];

/// Parses a date cell. Returns `None` when no known layout matches.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
                .map(|dt| dt.date())
        })
}

/// Converts an Excel serial day number (1900 date system) to a date.
/// The fractional part (time of day) is dropped.
pub fn excel_serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }
    // Serial 1 is 1900-01-01, but Excel counts a 1900-02-29 that never
    // existed; anchoring at 1899-12-30 is exact for every serial >= 61.
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    epoch.checked_add_days(Days::new(serial.floor() as u64))
}
