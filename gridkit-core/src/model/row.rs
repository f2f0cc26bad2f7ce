//! Dynamic row model.

use std::collections::HashMap;

use super::cell::{Cell, EffectiveValue};

/// A table row: a mapping from column key to [`Cell`].
///
/// Rows need not cover every declared column; a missing key yields an empty
/// effective value, so sparse data filters and sorts without special cases.
///
/// # Example
///
/// ```
/// use gridkit_core::model::Row;
///
/// let row = Row::new()
///     .set("name", "Contoso")
///     .set("age", 30);
///
/// assert_eq!(row.effective_value("name").to_text(), "Contoso");
/// assert_eq!(row.effective_value("missing").to_text(), "");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Row {
    cells: HashMap<String, Cell>,
}

impl Row {
    /// Creates an empty row.
    pub fn new() -> Self {
        Self {
            cells: HashMap::new(),
        }
    }

    /// Sets a cell, consuming and returning the row for chaining.
    pub fn set(mut self, key: impl Into<String>, cell: impl Into<Cell>) -> Self {
        self.cells.insert(key.into(), cell.into());
        self
    }

    /// Inserts a cell in place.
    pub fn insert(&mut self, key: impl Into<String>, cell: impl Into<Cell>) {
        self.cells.insert(key.into(), cell.into());
    }

    /// Returns the cell for a column key, if present.
    pub fn get(&self, key: &str) -> Option<&Cell> {
        self.cells.get(key)
    }

    /// Extracts the effective value for a column key.
    ///
    /// Missing keys yield empty text; see [`Cell::effective_value`].
    pub fn effective_value(&self, key: &str) -> EffectiveValue {
        match self.cells.get(key) {
            Some(cell) => cell.effective_value(),
            None => EffectiveValue::Text(String::new()),
        }
    }

    /// Returns the number of cells in this row.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterates over the row's column keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }
}
