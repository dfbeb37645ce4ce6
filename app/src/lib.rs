//! FILENAME: app/src/lib.rs
// PURPOSE: Main library entry point for the sales dashboard.
// CONTEXT: Holds the per-session state and the commands that drive it. The
// pipeline for every view is: base dataset -> date range -> hierarchy filter
// -> aggregates.

use std::sync::{Mutex, MutexGuard};

use engine::{Dataset, DateRange};
use filter_engine::{FilterCache, HierarchySelection};

pub mod api_types;
pub mod config;
pub mod dashboard;
pub mod data_source;
pub mod export;
pub mod filter_commands;
pub mod logging;
pub mod render;

pub use api_types::{
    DashboardViewResponse, DatasetSummary, ExportResult, FilterOptionsResponse, TableData,
};
pub use config::{ConfigError, DashboardConfig};
pub use dashboard::{build_dashboard_view, get_dashboard_view};
pub use data_source::{
    clear_date_range, get_dataset_summary, install_dataset, load_dataset, set_date_range,
};
pub use export::{export_downloads, DOWNLOAD_FILES};
pub use filter_commands::{
    clear_selection, get_filter_options, get_filtered_dataset, set_level_selection,
};
pub use logging::{init_log_file, get_log_path, next_seq, write_log};

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// One dashboard session.
pub struct AppState {
    pub config: Mutex<DashboardConfig>,
    /// Dataset as loaded, before any filtering.
    pub dataset: Mutex<Dataset>,
    /// File name the dataset came from.
    pub source_name: Mutex<Option<String>>,
    /// Inclusive order date range; `None` disables date filtering.
    pub date_range: Mutex<Option<DateRange>>,
    pub selection: Mutex<HierarchySelection>,
    /// Memoized hierarchy resolutions over the date-filtered dataset.
    pub filter_cache: Mutex<FilterCache>,
}

pub fn create_app_state() -> AppState {
    create_app_state_with_config(DashboardConfig::default())
}

pub fn create_app_state_with_config(config: DashboardConfig) -> AppState {
    log_info!("SYS", "Creating AppState");
    AppState {
        config: Mutex::new(config),
        dataset: Mutex::new(Dataset::default()),
        source_name: Mutex::new(None),
        date_range: Mutex::new(None),
        selection: Mutex::new(HierarchySelection::default()),
        filter_cache: Mutex::new(FilterCache::new()),
    }
}

/// Locks a state field, turning poisoning into a command error.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, String> {
    mutex.lock().map_err(|e| format!("Lock error: {}", e))
}

// ============================================================================
// PIPELINE
// ============================================================================

/// The base dataset narrowed to the active date range.
pub(crate) fn date_filtered_dataset(state: &AppState) -> Result<Dataset, String> {
    let dataset = lock(&state.dataset)?;
    let range = *lock(&state.date_range)?;
    Ok(match range {
        Some(range) => dataset.filter_date_range(&range),
        None => dataset.clone(),
    })
}

/// The date-filtered dataset narrowed by the current hierarchy selection.
pub(crate) fn hierarchy_filtered_dataset(
    state: &AppState,
    date_filtered: &Dataset,
) -> Result<Dataset, String> {
    let selection = lock(&state.selection)?.clone();
    let mut cache = lock(&state.filter_cache)?;
    let filtered = cache.resolve(date_filtered, &selection);
    log_debug!(
        "FILTER",
        "resolved {} of {} rows (cache hits={} misses={})",
        filtered.len(),
        date_filtered.len(),
        cache.hits(),
        cache.misses()
    );
    Ok(filtered)
}

/// Drops selected states and cities the date-filtered data no longer offers
/// under the selected regions and invalidates cached resolutions. Region
/// values are kept. Called whenever the working set changes.
pub(crate) fn refresh_working_set(state: &AppState) -> Result<Dataset, String> {
    let working = date_filtered_dataset(state)?;
    lock(&state.filter_cache)?.invalidate();

    let mut selection = lock(&state.selection)?;
    let pruned = filter_engine::retain_available(&working, &selection);
    if pruned != *selection {
        log_info!("FILTER", "pruned selection to values present in the working set");
        *selection = pruned;
    }
    Ok(working)
}
