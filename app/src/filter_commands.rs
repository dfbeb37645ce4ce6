//! Hierarchy Filter Commands
//!
//! Bridge between the selection UI and the filter engine. Selections are
//! stored per session; option lists and the filtered dataset are derived from
//! the date-filtered working set on every call.

use engine::{Dataset, HierarchyLevel, SelectionSet};
use filter_engine::{available_options, retain_below, HierarchySelection};

use crate::api_types::FilterOptionsResponse;
use crate::{
    date_filtered_dataset, hierarchy_filtered_dataset, lock, log_debug, log_info, AppState,
};

/// Replaces the selection at `level` ("region", "state" or "city").
///
/// Values below `level` that the new selection no longer offers are dropped,
/// so the lower option lists match what is stored. The values given for
/// `level` itself are kept even when no row carries them; such a selection
/// resolves to an empty dataset.
pub fn set_level_selection(
    state: &AppState,
    level: &str,
    values: Vec<String>,
) -> Result<FilterOptionsResponse, String> {
    let level: HierarchyLevel = level.parse()?;
    log_info!("CMD", "set_level_selection {} = {:?}", level, values);

    let working = date_filtered_dataset(state)?;
    {
        let mut selection = lock(&state.selection)?;
        selection.set(level, values.into_iter().collect::<SelectionSet>());
        let pruned = retain_below(&working, &selection, level);
        if pruned != *selection {
            log_debug!("FILTER", "dropped selections no longer offered under {}", level);
        }
        *selection = pruned;
    }

    options_for(state, &working)
}

/// Clears every level.
pub fn clear_selection(state: &AppState) -> Result<FilterOptionsResponse, String> {
    log_info!("CMD", "clear_selection");
    *lock(&state.selection)? = HierarchySelection::default();
    let working = date_filtered_dataset(state)?;
    options_for(state, &working)
}

pub fn get_filter_options(state: &AppState) -> Result<FilterOptionsResponse, String> {
    let working = date_filtered_dataset(state)?;
    options_for(state, &working)
}

/// The date-filtered dataset narrowed by the current selection.
pub fn get_filtered_dataset(state: &AppState) -> Result<Dataset, String> {
    let working = date_filtered_dataset(state)?;
    hierarchy_filtered_dataset(state, &working)
}

fn options_for(state: &AppState, working: &Dataset) -> Result<FilterOptionsResponse, String> {
    let selection = lock(&state.selection)?.clone();
    let filtered_records = hierarchy_filtered_dataset(state, working)?.len();

    Ok(FilterOptionsResponse {
        regions: available_options(working, HierarchyLevel::Region, &selection),
        states: available_options(working, HierarchyLevel::State, &selection),
        cities: available_options(working, HierarchyLevel::City, &selection),
        selection,
        filtered_records,
    })
}
