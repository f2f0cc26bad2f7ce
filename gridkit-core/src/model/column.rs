//! Column declarations.

/// Column configuration.
///
/// Columns define the structure of the table: the row key they read, the
/// header label, and whether the column participates in sorting and
/// filtering. Declared once per table and immutable for its lifetime.
///
/// # Examples
///
/// ```
/// use gridkit_core::model::Column;
///
/// let columns = vec![
///     Column::new("id", "ID"),
///     Column::new("name", "Name").sortable().filterable(),
///     Column::new("age", "Age").sortable(),
/// ];
/// ```
#[derive(Debug, Clone)]
pub struct Column {
    /// Row key this column reads (unique per table).
    pub key: String,
    /// Column header text.
    pub label: String,
    /// Whether this column is sortable.
    pub sortable: bool,
    /// Whether this column accepts a filter.
    pub filterable: bool,
}

impl Column {
    /// Create a new column reading the given row key.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            sortable: false,
            filterable: false,
        }
    }

    /// Make the column sortable.
    ///
    /// Sortable columns respond to header clicks by toggling the sort
    /// direction.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Make the column filterable.
    pub fn filterable(mut self) -> Self {
        self.filterable = true;
        self
    }
}
