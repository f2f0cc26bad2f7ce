//! Pagination: fixed-size page slicing with clamping.

use serde::{Deserialize, Serialize};

use crate::model::Row;

/// Page size and current page.
///
/// `page_size: None` (or `Some(0)`) disables pagination: every row is
/// returned on a single page. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
    /// Rows per page; `None` or `Some(0)` disables pagination.
    pub page_size: Option<usize>,
    /// Requested page, 1-based. Out-of-range values are clamped, not errors.
    pub current_page: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            page_size: None,
            current_page: 1,
        }
    }
}

impl PaginationState {
    /// Creates a disabled pagination state.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Creates pagination with the given page size, starting on page 1.
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            page_size: Some(page_size),
            current_page: 1,
        }
    }

    /// Sets the requested page, consuming and returning the state.
    pub fn page(mut self, page: usize) -> Self {
        self.current_page = page;
        self
    }

    /// Returns `true` if pagination is disabled.
    pub fn is_disabled(&self) -> bool {
        matches!(self.page_size, None | Some(0))
    }
}

/// Resolved slice bounds and page metadata for an ordered row count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// Start index of the page slice (inclusive).
    pub start: usize,
    /// End index of the page slice (exclusive).
    pub end: usize,
    /// Total page count; 0 when there are no rows.
    pub total_pages: usize,
    /// The page actually served, after clamping.
    pub page: usize,
}

/// Computes page bounds for `count` ordered rows.
///
/// The requested page is clamped into `[1, max(total_pages, 1)]` — when
/// filtering shrinks the result set below the requested page, the last
/// valid page is served instead of an error. The final page may be short.
pub fn page_info(count: usize, state: &PaginationState) -> PageInfo {
    match state.page_size {
        Some(size) if size > 0 => {
            let total_pages = count.div_ceil(size);
            let page = state.current_page.clamp(1, total_pages.max(1));
            let start = ((page - 1) * size).min(count);
            let end = (start + size).min(count);
            PageInfo {
                start,
                end,
                total_pages,
                page,
            }
        }
        _ => PageInfo {
            start: 0,
            end: count,
            total_pages: if count == 0 { 0 } else { 1 },
            page: state.current_page.max(1),
        },
    }
}

/// Carves an ordered row sequence into the requested page.
pub fn paginate<'a>(rows: &'a [Row], state: &PaginationState) -> (&'a [Row], PageInfo) {
    let info = page_info(rows.len(), state);
    (&rows[info.start..info.end], info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_last_page() {
        let info = page_info(7, &PaginationState::with_page_size(3).page(3));
        assert_eq!(info.total_pages, 3);
        assert_eq!(info.page, 3);
        assert_eq!((info.start, info.end), (6, 7));
    }

    #[test]
    fn test_clamp_to_last_page() {
        let info = page_info(7, &PaginationState::with_page_size(3).page(999));
        assert_eq!(info.page, 3);
        assert_eq!((info.start, info.end), (6, 7));
    }

    #[test]
    fn test_clamp_up_to_first_page() {
        let info = page_info(7, &PaginationState::with_page_size(3).page(0));
        assert_eq!(info.page, 1);
        assert_eq!((info.start, info.end), (0, 3));
    }

    #[test]
    fn test_empty_rows() {
        let info = page_info(0, &PaginationState::with_page_size(3).page(2));
        assert_eq!(info.total_pages, 0);
        assert_eq!(info.page, 1);
        assert_eq!((info.start, info.end), (0, 0));
    }

    #[test]
    fn test_disabled_returns_everything() {
        let info = page_info(7, &PaginationState::disabled());
        assert_eq!(info.total_pages, 1);
        assert_eq!((info.start, info.end), (0, 7));

        let info = page_info(0, &PaginationState::disabled());
        assert_eq!(info.total_pages, 0);
    }

    #[test]
    fn test_zero_page_size_is_disabled() {
        let state = PaginationState {
            page_size: Some(0),
            current_page: 5,
        };
        assert!(state.is_disabled());
        let info = page_info(4, &state);
        assert_eq!((info.start, info.end), (0, 4));
    }
}
