//! The table data engine: filter, sort, and paginate row sets.
//!
//! Composition order is fixed: filter → sort → paginate. The orchestrating
//! [`compute`] function re-derives the visible rows from scratch on every
//! call — no incremental patching, no caching between recomputations.

mod filter;
mod page;
mod pipeline;
mod sort;

pub use filter::{FilterState, matches_cell, matches_row};
pub use page::{PageInfo, PaginationState, page_info, paginate};
pub use pipeline::{TableView, compute};
pub use sort::{Direction, SortState, collate, compare};
