//! Row ordering: sort state and the column comparator.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::model::{EffectiveValue, Row};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    /// Descending order (Z-A, 9-0).
    #[serde(rename = "desc")]
    Descending,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }
}

/// The current sort column and direction.
///
/// An empty column means "no sort": the comparator reports every pair as
/// equal, which leaves the filtered order untouched under a stable sort.
///
/// # Example
///
/// ```
/// use gridkit_core::engine::SortState;
///
/// let sort = SortState::ascending("age");
/// assert!(!sort.is_none());
/// assert!(SortState::none().is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SortState {
    /// Column key to sort by; empty = no sort.
    pub column: String,
    /// Sort direction.
    pub direction: Direction,
}

impl SortState {
    /// Creates the no-sort state.
    pub fn none() -> Self {
        Self::default()
    }

    /// Creates an ascending sort on a column.
    pub fn ascending(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: Direction::Ascending,
        }
    }

    /// Creates a descending sort on a column.
    pub fn descending(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: Direction::Descending,
        }
    }

    /// Returns `true` if no sort column is chosen.
    pub fn is_none(&self) -> bool {
        self.column.is_empty()
    }
}

/// Orders two rows by the chosen sort column.
///
/// Two numeric effective values compare numerically; any other pairing is
/// coerced to text and collated. Descending flips the result, so
/// `compare(a, b, s) == compare(b, a, s).reverse()` for every pair.
pub fn compare(a: &Row, b: &Row, sort: &SortState) -> Ordering {
    if sort.is_none() {
        return Ordering::Equal;
    }
    let va = a.effective_value(&sort.column);
    let vb = b.effective_value(&sort.column);

    let ordering = match (&va, &vb) {
        (EffectiveValue::Number(x), EffectiveValue::Number(y)) => x.total_cmp(y),
        // One non-numeric operand forces text comparison for both.
        _ => collate(&va.to_text(), &vb.to_text()),
    };

    match sort.direction {
        Direction::Ascending => ordering,
        Direction::Descending => ordering.reverse(),
    }
}

/// Locale-ish lexicographic collation.
///
/// Primary pass is case-insensitive, so `"alice"` sorts before `"Bob"`.
/// Strings equal under case folding tie-break case-aware with lowercase
/// first (`"a"` before `"A"`); identical strings compare equal.
pub fn collate(a: &str, b: &str) -> Ordering {
    let folded = a.to_lowercase().cmp(&b.to_lowercase());
    if folded != Ordering::Equal {
        return folded;
    }
    b.cmp(a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collate_is_case_insensitive_first() {
        assert_eq!(collate("alice", "Bob"), Ordering::Less);
        assert_eq!(collate("Bob", "alice"), Ordering::Greater);
    }

    #[test]
    fn test_collate_lowercase_before_uppercase_on_tie() {
        assert_eq!(collate("a", "A"), Ordering::Less);
        assert_eq!(collate("abc", "abc"), Ordering::Equal);
    }

    #[test]
    fn test_no_sort_is_equal() {
        let a = Row::new().set("age", 1);
        let b = Row::new().set("age", 2);
        assert_eq!(compare(&a, &b, &SortState::none()), Ordering::Equal);
    }

    #[test]
    fn test_numeric_compare_and_direction() {
        let a = Row::new().set("age", 5);
        let b = Row::new().set("age", 30);
        assert_eq!(compare(&a, &b, &SortState::ascending("age")), Ordering::Less);
        assert_eq!(
            compare(&a, &b, &SortState::descending("age")),
            Ordering::Greater
        );
    }

    #[test]
    fn test_mixed_types_compare_as_text() {
        // "30" (number) vs "x" (text): both coerced to text, "3" < "x".
        let a = Row::new().set("v", 30);
        let b = Row::new().set("v", "x");
        assert_eq!(compare(&a, &b, &SortState::ascending("v")), Ordering::Less);
    }
}
