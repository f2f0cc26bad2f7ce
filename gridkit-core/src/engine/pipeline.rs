//! The filter → sort → paginate pipeline.

use crate::model::Row;

use super::filter::{FilterState, matches_row};
use super::page::{PaginationState, page_info};
use super::sort::{SortState, compare};

/// The final ordered, filtered, paginated subset shown to the user, plus
/// the pagination metadata a pager needs.
#[derive(Debug, Clone)]
pub struct TableView {
    /// The visible rows, in display order.
    pub rows: Vec<Row>,
    /// Total page count over the filtered set; 0 when nothing survives.
    pub total_pages: usize,
    /// The page actually served, after clamping.
    pub current_page: usize,
}

/// Derives the visible rows from the full row set and the current state.
///
/// Fixed order: filter, then a stable sort, then pagination. Each call
/// recomputes from scratch — callers re-invoke on any input change rather
/// than patching a previous result, which rules out stale-derived-state
/// bugs at the scale a UI table handles.
pub fn compute(
    rows: &[Row],
    filter: &FilterState,
    sort: &SortState,
    pagination: &PaginationState,
) -> TableView {
    let mut filtered: Vec<Row> = rows
        .iter()
        .filter(|row| matches_row(row, filter))
        .cloned()
        .collect();

    // Stable, so an empty sort column leaves the filtered order untouched.
    filtered.sort_by(|a, b| compare(a, b, sort));

    let info = page_info(filtered.len(), pagination);
    let rows = filtered.drain(info.start..info.end).collect();

    TableView {
        rows,
        total_pages: info.total_pages,
        current_page: info.page,
    }
}
