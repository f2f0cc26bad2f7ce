//! Persisted table state: per-table filters and sort.

use serde::{Deserialize, Serialize};

use gridkit_core::engine::{FilterState, SortState};

use crate::settings::SettingsProvider;

/// Current persisted-state schema version.
///
/// Older releases shipped incompatible shapes (filters-only, then
/// filters+sort); anything that doesn't carry this exact version loads as
/// "no saved state" — no migration is attempted.
pub const SCHEMA_VERSION: u32 = 1;

/// The filter/sort snapshot saved per table identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedTableState {
    /// Schema version; payloads with any other version are discarded.
    #[serde(default)]
    pub version: u32,
    /// Active per-column filters.
    #[serde(default)]
    pub filters: FilterState,
    /// Sort column and direction, if any.
    #[serde(default)]
    pub sort: Option<SortState>,
}

impl PersistedTableState {
    /// Creates a snapshot at the current schema version.
    pub fn new(filters: FilterState, sort: Option<SortState>) -> Self {
        Self {
            version: SCHEMA_VERSION,
            filters,
            sort,
        }
    }
}

fn storage_key(table_id: &str) -> String {
    format!("table.state.{table_id}")
}

/// Loads the saved state for a table identifier.
///
/// Missing keys, malformed payloads, and unknown schema versions all load
/// as the default empty state; failures are logged and never surface.
pub fn load(settings: &SettingsProvider, table_id: &str) -> PersistedTableState {
    match settings.get::<PersistedTableState>(&storage_key(table_id)) {
        Ok(Some(state)) if state.version == SCHEMA_VERSION => state,
        Ok(Some(state)) => {
            log::warn!(
                "discarding saved state for table '{table_id}': unknown schema version {}",
                state.version
            );
            PersistedTableState::default()
        }
        Ok(None) => PersistedTableState::default(),
        Err(err) => {
            log::warn!("failed to load saved state for table '{table_id}': {err}");
            PersistedTableState::default()
        }
    }
}

/// Saves the state for a table identifier, overwriting only its entry.
///
/// Failures are logged and swallowed — persistence is best-effort.
pub fn save(settings: &SettingsProvider, table_id: &str, state: &PersistedTableState) {
    if let Err(err) = settings.set(&storage_key(table_id), state) {
        log::warn!("failed to save state for table '{table_id}': {err}");
    }
}
