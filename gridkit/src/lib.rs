//! gridkit: a small data-table component kit.
//!
//! The heart of the kit is [`components::table::DataTable`], a stateful
//! shell over the pure row engine in `gridkit-core`: it owns the current
//! per-column filters, the sort column/direction, and the page number, and
//! re-derives the visible rows through the engine whenever any of them
//! change. Around it sit a type-ahead suggestion input, a loading-spinner
//! widget, key-value settings persistence, and small utilities (Base64
//! codecs, file helpers, HTTP constants).
//!
//! Rendering is deliberately out of scope: components expose state and row
//! views, and the host UI paints them however it likes.

pub mod components;
pub mod http;
pub mod settings;
pub mod util;
pub mod widgets;

pub use gridkit_core::engine;
pub use gridkit_core::model;

pub mod prelude {
    pub use crate::components::suggest::{SuggestInput, SuggestItem, SuggestMode, SuggestOutcome};
    pub use crate::components::table::{DataTable, DataTableId, PersistedTableState, TableEvent};
    pub use crate::settings::{JsonFileBackend, MemoryBackend, SettingsBackend, SettingsProvider};
    pub use crate::widgets::Spinner;
    pub use gridkit_core::engine::{
        Direction, FilterState, PaginationState, SortState, TableView,
    };
    pub use gridkit_core::model::{Cell, Column, EffectiveValue, RichCell, Row, Scalar};
}
