//! FILENAME: tests/test_filters.rs
//! Integration tests for the hierarchy filter and date range commands.

mod common;

use common::{assert_amount, strings, SalesFixture, TestHarness};
use dashboard_lib::{
    clear_date_range, clear_selection, get_filter_options, get_filtered_dataset, load_dataset,
    set_date_range, set_level_selection,
};

// ============================================================================
// LOADING
// ============================================================================

#[test]
fn test_load_sets_date_range_to_bounds() {
    let dir = tempfile::tempdir().unwrap();
    let path = SalesFixture::write_csv(dir.path(), "Superstore.csv");
    let harness = TestHarness::new();

    let summary = load_dataset(&harness.state, Some(path.display().to_string())).unwrap();
    assert_eq!(summary.source_name.as_deref(), Some("Superstore.csv"));
    assert_eq!(summary.total_records, 10);
    assert_eq!(summary.date_filtered_records, 10);
    let range = summary.date_range.unwrap();
    assert_eq!(range.start.to_string(), "2016-01-15");
    assert_eq!(range.end.to_string(), "2017-06-14");
}

#[test]
fn test_load_failure_keeps_previous_dataset() {
    let harness = TestHarness::with_sales_data();
    let err = load_dataset(&harness.state, Some("missing/file.csv".to_string())).unwrap_err();
    assert!(err.contains("missing/file.csv"));
    assert_eq!(get_filtered_dataset(&harness.state).unwrap().len(), 10);
}

#[test]
fn test_load_rejects_unknown_extension() {
    let harness = TestHarness::new();
    assert!(load_dataset(&harness.state, Some("sales.json".to_string())).is_err());
}

// ============================================================================
// HIERARCHY SELECTION
// ============================================================================

#[test]
fn test_no_selection_returns_everything() {
    let harness = TestHarness::with_sales_data();
    let filtered = get_filtered_dataset(&harness.state).unwrap();
    assert_eq!(filtered, SalesFixture::dataset());
}

#[test]
fn test_region_selection() {
    let harness = TestHarness::with_sales_data();
    let options = set_level_selection(&harness.state, "region", strings(&["West"])).unwrap();

    assert_eq!(options.filtered_records, 4);
    assert_eq!(options.regions, strings(&["East", "West", "Central", "South"]));
    assert_eq!(options.states, strings(&["California", "Washington"]));
    assert_eq!(options.cities, strings(&["Los Angeles", "San Francisco", "Seattle"]));

    let filtered = get_filtered_dataset(&harness.state).unwrap();
    assert!(filtered.iter().all(|r| r.region == "West"));
}

#[test]
fn test_region_and_city_is_a_conjunction() {
    let harness = TestHarness::with_sales_data();
    set_level_selection(&harness.state, "Region", strings(&["West"])).unwrap();
    set_level_selection(&harness.state, "City", strings(&["San Francisco"])).unwrap();

    let filtered = get_filtered_dataset(&harness.state).unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered.records[0].city, "San Francisco");
}

#[test]
fn test_state_only_selection() {
    let harness = TestHarness::with_sales_data();
    set_level_selection(&harness.state, "state", strings(&["California"])).unwrap();
    let filtered = get_filtered_dataset(&harness.state).unwrap();
    assert_eq!(filtered.len(), 3);
    assert!(filtered.iter().all(|r| r.state == "California"));
}

#[test]
fn test_duplicate_city_names_are_scoped_by_state() {
    let harness = TestHarness::with_sales_data();
    set_level_selection(&harness.state, "state", strings(&["Missouri"])).unwrap();
    set_level_selection(&harness.state, "city", strings(&["Springfield"])).unwrap();

    let filtered = get_filtered_dataset(&harness.state).unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered.records[0].state, "Missouri");
    assert_amount(filtered.total_sales(), 25.0);
}

#[test]
fn test_changing_region_prunes_lower_levels() {
    let harness = TestHarness::with_sales_data();
    set_level_selection(&harness.state, "region", strings(&["West"])).unwrap();
    set_level_selection(&harness.state, "state", strings(&["Washington"])).unwrap();

    let options = set_level_selection(&harness.state, "region", strings(&["East"])).unwrap();
    assert!(options.selection.state.is_empty());
    assert_eq!(options.filtered_records, 2);
}

#[test]
fn test_selection_with_no_matches_is_empty_not_error() {
    let harness = TestHarness::with_sales_data();
    set_level_selection(&harness.state, "region", strings(&["West"])).unwrap();
    let options = set_level_selection(&harness.state, "city", strings(&["Miami"])).unwrap();
    assert_eq!(options.selection.city.iter().collect::<Vec<_>>(), vec!["Miami"]);
    assert_eq!(options.filtered_records, 0);
    assert!(get_filtered_dataset(&harness.state).unwrap().is_empty());
}

#[test]
fn test_unmatched_region_yields_empty_result() {
    let harness = TestHarness::with_sales_data();
    let options = set_level_selection(&harness.state, "region", strings(&["North"])).unwrap();
    assert_eq!(options.selection.region.iter().collect::<Vec<_>>(), vec!["North"]);
    assert_eq!(options.filtered_records, 0);
    assert!(options.states.is_empty());
    assert!(options.cities.is_empty());
    assert_eq!(get_filtered_dataset(&harness.state).unwrap().len(), 0);
}

#[test]
fn test_unknown_level_is_an_error() {
    let harness = TestHarness::with_sales_data();
    assert!(set_level_selection(&harness.state, "country", strings(&["US"])).is_err());
}

#[test]
fn test_clear_selection() {
    let harness = TestHarness::with_sales_data();
    set_level_selection(&harness.state, "region", strings(&["South"])).unwrap();
    let options = clear_selection(&harness.state).unwrap();
    assert_eq!(options.filtered_records, 10);
    assert_eq!(options.cities.len(), 7);
}

// ============================================================================
// DATE RANGE
// ============================================================================

#[test]
fn test_date_range_is_inclusive_and_feeds_options() {
    let harness = TestHarness::with_sales_data();
    let summary = set_date_range(&harness.state, "2016-02-03", "2016-04-02").unwrap();
    assert_eq!(summary.date_filtered_records, 4);

    let options = get_filter_options(&harness.state).unwrap();
    assert_eq!(options.regions, strings(&["West", "Central"]));
    assert_eq!(options.filtered_records, 4);
}

#[test]
fn test_date_range_keeps_region_and_prunes_lower_levels() {
    let harness = TestHarness::with_sales_data();
    set_level_selection(&harness.state, "region", strings(&["South"])).unwrap();
    set_level_selection(&harness.state, "state", strings(&["Florida"])).unwrap();
    set_date_range(&harness.state, "2016-01-01", "2016-03-31").unwrap();

    let options = get_filter_options(&harness.state).unwrap();
    assert_eq!(options.selection.region.iter().collect::<Vec<_>>(), vec!["South"]);
    assert!(options.selection.state.is_empty());
    assert_eq!(options.filtered_records, 0);

    set_date_range(&harness.state, "2016-01-01", "2016-12-31").unwrap();
    let options = get_filter_options(&harness.state).unwrap();
    assert_eq!(options.filtered_records, 1);
}

#[test]
fn test_invalid_date_range() {
    let harness = TestHarness::with_sales_data();
    assert!(set_date_range(&harness.state, "2017-01-01", "2016-01-01").is_err());
    assert!(set_date_range(&harness.state, "soon", "2016-01-01").is_err());
}

#[test]
fn test_clear_date_range() {
    let harness = TestHarness::with_sales_data();
    set_date_range(&harness.state, "2017-01-01", "2017-12-31").unwrap();
    let summary = clear_date_range(&harness.state).unwrap();
    assert!(summary.date_range.is_none());
    assert_eq!(summary.date_filtered_records, 10);
}

#[test]
fn test_filtered_total_matches_fixture() {
    let harness = TestHarness::with_sales_data();
    assert_amount(
        get_filtered_dataset(&harness.state).unwrap().total_sales(),
        SalesFixture::total_sales(),
    );
}
