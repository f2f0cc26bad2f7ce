//! gridkit-core: the pure data engine behind gridkit's table component.
//!
//! The engine turns a raw row set plus filter/sort/pagination state into the
//! exact ordered slice of rows to display. It is stateless: every call to
//! [`engine::compute`] is a pure function of its inputs, and no function in
//! this crate panics on malformed input — everything degrades to a sane
//! default (empty effective values, substring fallback, clamped pages).

pub mod engine;
pub mod model;

pub mod prelude {
    pub use crate::engine::{
        Direction, FilterState, PageInfo, PaginationState, SortState, TableView, compute,
    };
    pub use crate::model::{Cell, CellDisplay, Column, EffectiveValue, RichCell, Row, Scalar};
}
