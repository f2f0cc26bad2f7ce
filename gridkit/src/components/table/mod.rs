//! Data table component - a stateful shell over the pure row engine.
//!
//! The shell owns the canonical filter/sort/pagination state for one table
//! and re-derives the visible rows on demand. Sibling UI pieces (header,
//! body, pager) read snapshots from it and report user actions back through
//! its mutators; state changes surface through a single `on_change`
//! callback, never through hidden back-references between siblings.
//!
//! # Example
//!
//! ```
//! use gridkit::components::table::DataTable;
//! use gridkit::model::{Column, Row};
//!
//! let table = DataTable::with_columns(vec![
//!     Column::new("name", "Name").sortable().filterable(),
//!     Column::new("age", "Age").sortable().filterable(),
//! ]);
//! table.set_rows(vec![
//!     Row::new().set("name", "alice").set("age", 30),
//!     Row::new().set("name", "Bob").set("age", 5),
//! ]);
//! table.set_filter("age", ">10");
//! table.toggle_sort("name");
//!
//! let view = table.visible();
//! assert_eq!(view.rows.len(), 1);
//! ```

mod events;
mod persist;
mod state;

pub use events::{ChangeHandler, TableEvent};
pub use persist::{PersistedTableState, SCHEMA_VERSION};
pub use state::{DataTable, DataTableId};
