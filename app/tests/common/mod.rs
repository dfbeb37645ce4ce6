//! FILENAME: tests/common/mod.rs
//! Test harness and fixtures for dashboard integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use dashboard_lib::{create_app_state, install_dataset, AppState};
use engine::{Dataset, Record};

/// Test harness for creating and managing test state.
pub struct TestHarness {
    pub state: AppState,
}

impl TestHarness {
    /// Create a new test harness with no dataset loaded.
    pub fn new() -> Self {
        TestHarness {
            state: create_app_state(),
        }
    }

    /// Create a harness with the sales fixture installed.
    pub fn with_sales_data() -> Self {
        let harness = Self::new();
        install_dataset(&harness.state, SalesFixture::dataset(), Some("fixture".to_string()))
            .expect("fixture installs");
        harness
    }
}

// ============================================================================
// FIXTURES
// ============================================================================

/// Small Superstore-shaped dataset. Two different states each contain a
/// city named "Springfield".
pub struct SalesFixture;

impl SalesFixture {
    pub fn headers() -> Vec<&'static str> {
        vec![
            "Order Date", "Region", "State", "City", "Category", "Sub-Category",
            "Segment", "Sales", "Profit", "Quantity",
        ]
    }

    #[allow(clippy::type_complexity)]
    pub fn data() -> Vec<(&'static str, &'static str, &'static str, &'static str, &'static str, &'static str, &'static str, f64, f64, f64)> {
        vec![
            ("2016-01-15", "East", "New York", "New York City", "Technology", "Phones", "Consumer", 500.0, 120.0, 2.0),
            ("2016-02-03", "West", "California", "Los Angeles", "Furniture", "Chairs", "Corporate", 300.0, 30.0, 3.0),
            ("2016-02-20", "West", "California", "San Francisco", "Office Supplies", "Binders", "Consumer", 40.0, 12.0, 5.0),
            ("2016-03-11", "West", "Washington", "Seattle", "Technology", "Accessories", "Home Office", 150.0, 45.0, 1.0),
            ("2016-04-02", "Central", "Illinois", "Springfield", "Furniture", "Tables", "Consumer", 800.0, -90.0, 4.0),
            ("2016-05-19", "Central", "Missouri", "Springfield", "Office Supplies", "Paper", "Corporate", 25.0, 11.0, 6.0),
            ("2016-06-07", "South", "Florida", "Miami", "Technology", "Phones", "Consumer", 650.0, 80.0, 2.0),
            ("2017-01-09", "West", "California", "Los Angeles", "Office Supplies", "Labels", "Home Office", 20.0, 9.0, 4.0),
            ("2017-03-30", "East", "New York", "Buffalo", "Furniture", "Bookcases", "Consumer", 410.0, -20.0, 2.0),
            ("2017-06-14", "South", "Florida", "Miami", "Furniture", "Chairs", "Corporate", 270.0, 27.0, 3.0),
        ]
    }

    pub fn dataset() -> Dataset {
        let headers = Self::headers().into_iter().map(String::from).collect();
        let records = Self::data()
            .into_iter()
            .map(|(date, region, state, city, category, sub, segment, sales, profit, quantity)| {
                Record::new(region, state, city)
                    .with_order_date(NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap())
                    .with_category(category, sub)
                    .with_segment(segment)
                    .with_sales(sales)
                    .with_profit(profit)
                    .with_quantity(quantity)
            })
            .collect();
        Dataset::from_records(headers, records)
    }

    pub fn total_sales() -> f64 {
        Self::data().iter().map(|row| row.7).sum()
    }

    /// Writes the fixture as CSV into `dir` and returns the file path.
    pub fn write_csv(dir: &Path, name: &str) -> PathBuf {
        let mut text = Self::headers().join(",");
        text.push('\n');
        for (date, region, state, city, category, sub, segment, sales, profit, quantity) in Self::data() {
            text.push_str(&format!(
                "{},{},{},{},{},{},{},{},{},{}\n",
                date, region, state, city, category, sub, segment, sales, profit, quantity
            ));
        }
        let path = dir.join(name);
        std::fs::write(&path, text).unwrap();
        path
    }
}

// ============================================================================
// ASSERTION HELPERS
// ============================================================================

/// Assert two amounts are equal to the cent.
pub fn assert_amount(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 0.005,
        "expected {} but got {}",
        expected,
        actual
    );
}

pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}
