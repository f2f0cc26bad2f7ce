//! Data table component state.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use gridkit_core::engine::{
    self, Direction, FilterState, PaginationState, SortState, TableView,
};
use gridkit_core::model::{Column, Row};

use crate::settings::SettingsProvider;

use super::events::{ChangeHandler, TableEvent};
use super::persist::{self, PersistedTableState};

/// Unique identifier for a DataTable instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DataTableId(usize);

impl DataTableId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for DataTableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__datatable_{}", self.0)
    }
}

/// Internal state for the DataTable component.
struct DataTableInner {
    /// Declared columns, in display order.
    columns: Vec<Column>,
    /// The full source row set.
    rows: Vec<Row>,
    /// Active per-column filters.
    filter: FilterState,
    /// Current sort column and direction.
    sort: SortState,
    /// Page size and requested page.
    pagination: PaginationState,
    /// Whether the host is loading the row set.
    loading: bool,
    /// Change callback.
    on_change: Option<ChangeHandler>,
    /// Settings provider plus table identifier, when persistence is on.
    store: Option<(SettingsProvider, String)>,
}

impl Default for DataTableInner {
    fn default() -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            filter: FilterState::new(),
            sort: SortState::none(),
            pagination: PaginationState::disabled(),
            loading: false,
            on_change: None,
            store: None,
        }
    }
}

/// A stateful data table: sortable/filterable columns plus pagination.
///
/// `DataTable` holds the canonical UI state for one table. Every mutator
/// updates the state, saves it when persistence is attached, and fires the
/// `on_change` callback; [`visible`](DataTable::visible) derives the rows
/// to paint through the pure engine, fresh on every call.
///
/// Handles are cheap clones sharing one state, the way sibling UI pieces
/// (header, body, pager) share a table.
pub struct DataTable {
    /// Unique identifier.
    id: DataTableId,
    /// Internal state.
    inner: Arc<RwLock<DataTableInner>>,
    /// Dirty flag for re-render.
    dirty: Arc<AtomicBool>,
}

impl DataTable {
    /// Create a new table with no columns.
    pub fn new() -> Self {
        Self {
            id: DataTableId::new(),
            inner: Arc::new(RwLock::new(DataTableInner::default())),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a table with declared columns.
    pub fn with_columns(columns: Vec<Column>) -> Self {
        Self {
            id: DataTableId::new(),
            inner: Arc::new(RwLock::new(DataTableInner {
                columns,
                ..Default::default()
            })),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get the unique ID.
    pub fn id(&self) -> DataTableId {
        self.id
    }

    /// Get the ID as a string.
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    // -------------------------------------------------------------------------
    // Columns and rows
    // -------------------------------------------------------------------------

    /// Get the declared columns.
    pub fn columns(&self) -> Vec<Column> {
        self.inner
            .read()
            .map(|g| g.columns.clone())
            .unwrap_or_default()
    }

    /// Replace the source row set.
    pub fn set_rows(&self, rows: Vec<Row>) {
        if let Ok(mut g) = self.inner.write() {
            g.rows = rows;
        }
        self.dirty.store(true, Ordering::SeqCst);
        self.emit(TableEvent::RowsChanged);
    }

    /// Get the full source row set.
    pub fn rows(&self) -> Vec<Row> {
        self.inner.read().map(|g| g.rows.clone()).unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Loading flag
    // -------------------------------------------------------------------------

    /// Set the loading flag. While loading, hosts typically paint a spinner
    /// in place of the body.
    pub fn set_loading(&self, loading: bool) {
        let changed = self
            .inner
            .write()
            .map(|mut g| {
                let changed = g.loading != loading;
                g.loading = loading;
                changed
            })
            .unwrap_or(false);
        if changed {
            self.dirty.store(true, Ordering::SeqCst);
            self.emit(TableEvent::LoadingChanged);
        }
    }

    /// Check the loading flag.
    pub fn is_loading(&self) -> bool {
        self.inner.read().map(|g| g.loading).unwrap_or(false)
    }

    // -------------------------------------------------------------------------
    // Filtering
    // -------------------------------------------------------------------------

    /// Get the active filter state.
    pub fn filter(&self) -> FilterState {
        self.inner
            .read()
            .map(|g| g.filter.clone())
            .unwrap_or_default()
    }

    /// Set the raw filter text for a column; empty text clears it.
    ///
    /// Ignored for unknown and non-filterable columns.
    pub fn set_filter(&self, column: &str, raw: impl Into<String>) {
        let changed = self
            .inner
            .write()
            .map(|mut g| {
                let filterable = g
                    .columns
                    .iter()
                    .any(|c| c.key == column && c.filterable);
                if !filterable {
                    return false;
                }
                g.filter.set(column, raw.into());
                true
            })
            .unwrap_or(false);
        if changed {
            self.save_state();
            self.dirty.store(true, Ordering::SeqCst);
            self.emit(TableEvent::FilterChanged);
        }
    }

    /// Clear every active filter.
    pub fn clear_filters(&self) {
        let changed = self
            .inner
            .write()
            .map(|mut g| {
                if g.filter.is_empty() {
                    return false;
                }
                g.filter.clear_all();
                true
            })
            .unwrap_or(false);
        if changed {
            self.save_state();
            self.dirty.store(true, Ordering::SeqCst);
            self.emit(TableEvent::FilterChanged);
        }
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Get the current sort state.
    pub fn sort(&self) -> SortState {
        self.inner
            .read()
            .map(|g| g.sort.clone())
            .unwrap_or_default()
    }

    /// Toggle sorting on a column, as a header click does.
    ///
    /// Clicking a new column sorts it ascending; clicking the current
    /// column flips the direction. Unknown and non-sortable columns are
    /// ignored. Returns the resulting sort when one was applied.
    pub fn toggle_sort(&self, column: &str) -> Option<SortState> {
        let applied = self.inner.write().ok().and_then(|mut g| {
            let sortable = g.columns.iter().any(|c| c.key == column && c.sortable);
            if !sortable {
                return None;
            }
            let direction = if g.sort.column == column {
                g.sort.direction.toggled()
            } else {
                Direction::Ascending
            };
            g.sort = SortState {
                column: column.to_string(),
                direction,
            };
            Some(g.sort.clone())
        });
        if applied.is_some() {
            self.save_state();
            self.dirty.store(true, Ordering::SeqCst);
            self.emit(TableEvent::SortChanged);
        }
        applied
    }

    // -------------------------------------------------------------------------
    // Pagination
    // -------------------------------------------------------------------------

    /// Get the pagination state.
    pub fn pagination(&self) -> PaginationState {
        self.inner
            .read()
            .map(|g| g.pagination)
            .unwrap_or_default()
    }

    /// Set the page size; `None` disables pagination.
    pub fn set_page_size(&self, page_size: Option<usize>) {
        if let Ok(mut g) = self.inner.write() {
            g.pagination.page_size = page_size;
        }
        self.dirty.store(true, Ordering::SeqCst);
        self.emit(TableEvent::PageChanged);
    }

    /// Request a page. Out-of-range pages are clamped when the view is
    /// derived, never an error.
    pub fn set_page(&self, page: usize) {
        if let Ok(mut g) = self.inner.write() {
            g.pagination.current_page = page.max(1);
        }
        self.dirty.store(true, Ordering::SeqCst);
        self.emit(TableEvent::PageChanged);
    }

    /// Advance to the next page, stopping at the last one.
    pub fn next_page(&self) {
        let total = self.visible().total_pages;
        let current = self.pagination().current_page;
        if current < total {
            self.set_page(current + 1);
        }
    }

    /// Step back to the previous page, stopping at page 1.
    pub fn prev_page(&self) {
        let current = self.pagination().current_page;
        if current > 1 {
            self.set_page(current - 1);
        }
    }

    // -------------------------------------------------------------------------
    // Derived view
    // -------------------------------------------------------------------------

    /// Derive the visible rows plus pagination metadata.
    ///
    /// Pure recomputation through the engine — nothing is cached between
    /// calls, so the view can never go stale relative to the state.
    pub fn visible(&self) -> TableView {
        match self.inner.read() {
            Ok(g) => engine::compute(&g.rows, &g.filter, &g.sort, &g.pagination),
            Err(_) => TableView {
                rows: Vec::new(),
                total_pages: 0,
                current_page: 1,
            },
        }
    }

    // -------------------------------------------------------------------------
    // Change notification
    // -------------------------------------------------------------------------

    /// Register the change callback, replacing any previous one.
    pub fn on_change(&self, handler: impl Fn(TableEvent) + Send + Sync + 'static) {
        if let Ok(mut g) = self.inner.write() {
            g.on_change = Some(Arc::new(handler));
        }
    }

    fn emit(&self, event: TableEvent) {
        // Take the handler out of the lock before calling it so handlers
        // may read the table without deadlocking.
        let handler = self
            .inner
            .read()
            .ok()
            .and_then(|g| g.on_change.clone());
        if let Some(handler) = handler {
            handler(event);
        }
    }

    // -------------------------------------------------------------------------
    // Persistence
    // -------------------------------------------------------------------------

    /// Attach settings persistence under the given table identifier.
    ///
    /// Loads the saved filters and sort immediately (one-shot read) and
    /// saves on every subsequent filter/sort change. Malformed or missing
    /// saved state loads as empty and is never an error.
    pub fn persist_with(&self, settings: SettingsProvider, table_id: impl Into<String>) {
        let table_id = table_id.into();
        let saved = persist::load(&settings, &table_id);
        if let Ok(mut g) = self.inner.write() {
            g.filter = saved.filters;
            if let Some(sort) = saved.sort {
                g.sort = sort;
            }
            g.store = Some((settings, table_id));
        }
        self.dirty.store(true, Ordering::SeqCst);
    }

    fn save_state(&self) {
        let snapshot = self.inner.read().ok().and_then(|g| {
            g.store.as_ref().map(|(settings, table_id)| {
                let sort = (!g.sort.is_none()).then(|| g.sort.clone());
                (
                    settings.clone(),
                    table_id.clone(),
                    PersistedTableState::new(g.filter.clone(), sort),
                )
            })
        });
        if let Some((settings, table_id, state)) = snapshot {
            persist::save(&settings, &table_id, &state);
        }
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the table state has changed since the last render.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl Clone for DataTable {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl Default for DataTable {
    fn default() -> Self {
        Self::new()
    }
}
