//! Change notifications from the data table shell.

use std::sync::Arc;

/// What changed in a [`DataTable`](super::DataTable).
///
/// Emitted through the table's `on_change` callback after the state has
/// been updated, so handlers reading back through accessors see the new
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableEvent {
    /// The source row set was replaced.
    RowsChanged,
    /// A per-column filter was set or cleared.
    FilterChanged,
    /// The sort column or direction changed.
    SortChanged,
    /// The current page or page size changed.
    PageChanged,
    /// The loading flag was toggled.
    LoadingChanged,
}

/// Callback invoked after every table state change.
pub type ChangeHandler = Arc<dyn Fn(TableEvent) + Send + Sync>;
