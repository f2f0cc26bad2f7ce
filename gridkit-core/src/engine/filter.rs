//! Row filtering: per-column text filters with numeric operators.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::{EffectiveValue, Row};

/// Active filters, keyed by column.
///
/// Keys are present only for columns with an active filter; setting an
/// empty string removes the entry. A row survives the filter state iff it
/// matches every entry (logical AND across columns).
///
/// # Example
///
/// ```
/// use gridkit_core::engine::FilterState;
///
/// let mut filter = FilterState::new();
/// filter.set("age", ">10");
/// filter.set("name", "con");
/// filter.set("name", ""); // removes the name filter
/// assert_eq!(filter.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterState {
    entries: HashMap<String, String>,
}

impl FilterState {
    /// Creates an empty filter state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the raw filter for a column; an empty string removes it.
    pub fn set(&mut self, column: impl Into<String>, raw: impl Into<String>) {
        let column = column.into();
        let raw = raw.into();
        if raw.is_empty() {
            self.entries.remove(&column);
        } else {
            self.entries.insert(column, raw);
        }
    }

    /// Sets a filter, consuming and returning the state for chaining.
    pub fn with(mut self, column: impl Into<String>, raw: impl Into<String>) -> Self {
        self.set(column, raw);
        self
    }

    /// Removes the filter for a column.
    pub fn clear(&mut self, column: &str) {
        self.entries.remove(column);
    }

    /// Removes all filters.
    pub fn clear_all(&mut self) {
        self.entries.clear();
    }

    /// Returns the raw filter for a column, if active.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.entries.get(column).map(String::as_str)
    }

    /// Returns the number of active filters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no filter is active.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over active `(column, raw filter)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Returns `true` if the row matches every active filter.
pub fn matches_row(row: &Row, filter: &FilterState) -> bool {
    filter.iter().all(|(column, raw)| matches_cell(row, column, raw))
}

/// Decides whether a row survives a single per-column filter.
///
/// Numeric effective values recognize a leading relational operator
/// (`>=`, `<=`, `==`, `>`, `<`) followed by a numeric literal. Everything
/// else — string values, missing operators, unparsable literals — degrades
/// to a case-insensitive substring test against the stringified value.
pub fn matches_cell(row: &Row, column: &str, raw: &str) -> bool {
    if raw.is_empty() {
        return true;
    }
    match row.effective_value(column) {
        EffectiveValue::Number(value) => matches_number(value, raw),
        EffectiveValue::Text(text) => contains_ci(&text, raw),
    }
}

#[derive(Clone, Copy)]
enum Relation {
    Ge,
    Le,
    Eq,
    Gt,
    Lt,
}

fn matches_number(value: f64, raw: &str) -> bool {
    if let Some((relation, rest)) = split_relation(raw)
        && let Ok(bound) = rest.trim().parse::<f64>()
    {
        return match relation {
            Relation::Ge => value >= bound,
            Relation::Le => value <= bound,
            Relation::Eq => value == bound,
            Relation::Gt => value > bound,
            Relation::Lt => value < bound,
        };
    }
    contains_ci(&EffectiveValue::Number(value).to_text(), raw)
}

fn split_relation(raw: &str) -> Option<(Relation, &str)> {
    // Two-character operators first so ">=" never parses as ">" plus "=5".
    const RELATIONS: [(&str, Relation); 5] = [
        (">=", Relation::Ge),
        ("<=", Relation::Le),
        ("==", Relation::Eq),
        (">", Relation::Gt),
        ("<", Relation::Lt),
    ];
    RELATIONS
        .iter()
        .find_map(|(symbol, relation)| raw.strip_prefix(symbol).map(|rest| (*relation, rest)))
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(age: i64, name: &str) -> Row {
        Row::new().set("age", age).set("name", name)
    }

    #[test]
    fn test_relational_operators() {
        let r = row(30, "Bob");
        assert!(matches_cell(&r, "age", ">10"));
        assert!(matches_cell(&r, "age", ">=30"));
        assert!(matches_cell(&r, "age", "<=30"));
        assert!(matches_cell(&r, "age", "==30"));
        assert!(!matches_cell(&r, "age", "<30"));
        assert!(!matches_cell(&r, "age", ">30"));
    }

    #[test]
    fn test_operator_remainder_may_have_spaces() {
        let r = row(30, "Bob");
        assert!(matches_cell(&r, "age", ">= 30"));
    }

    #[test]
    fn test_unparsable_literal_falls_back_to_substring() {
        let r = row(30, "Bob");
        // ">x" is not a relation on 30; "30" does not contain ">x".
        assert!(!matches_cell(&r, "age", ">x"));
        // Plain digits substring-match the stringified value.
        assert!(matches_cell(&r, "age", "3"));
        assert!(matches_cell(&r, "age", "30"));
        assert!(!matches_cell(&r, "age", "31"));
    }

    #[test]
    fn test_string_filter_is_case_insensitive() {
        let r = row(30, "Bob");
        assert!(matches_cell(&r, "name", "bo"));
        assert!(matches_cell(&r, "name", "OB"));
        assert!(!matches_cell(&r, "name", "alice"));
    }

    #[test]
    fn test_empty_filter_always_matches() {
        let r = row(30, "Bob");
        assert!(matches_cell(&r, "age", ""));
        assert!(matches_cell(&r, "missing", ""));
    }

    #[test]
    fn test_missing_column_matches_only_empty_needle() {
        let r = row(30, "Bob");
        assert!(!matches_cell(&r, "missing", "x"));
    }

    #[test]
    fn test_and_across_columns() {
        let r = row(30, "Bob");
        let filter = FilterState::new().with("age", ">10").with("name", "bob");
        assert!(matches_row(&r, &filter));
        let filter = filter.with("name", "alice");
        assert!(!matches_row(&r, &filter));
    }
}
