//! Suggestion items.

/// One entry of the suggestion list.
///
/// The `value` is what the dropdown shows and what selecting the entry
/// puts into the input. The optional `key` is the canonical token a user
/// can type to commit the entry directly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SuggestItem {
    /// Canonical token committing this entry when typed, if any.
    pub key: Option<String>,
    /// Display text.
    pub value: String,
}

impl SuggestItem {
    /// Creates an entry with display text only.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            key: None,
            value: value.into(),
        }
    }

    /// Creates an entry with a canonical key.
    pub fn with_key(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: value.into(),
        }
    }
}

impl From<&str> for SuggestItem {
    fn from(value: &str) -> Self {
        SuggestItem::new(value)
    }
}

impl From<String> for SuggestItem {
    fn from(value: String) -> Self {
        SuggestItem::new(value)
    }
}
