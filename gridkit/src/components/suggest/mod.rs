//! Suggestion input - a type-ahead text input with a suggestion dropdown.
//!
//! The component owns the input text, the suggestion list, and the
//! filtered dropdown state. Filtering defaults to case-insensitive
//! substring matching; a fuzzy filter is available as an alternative.
//! Dropdown positioning and painting belong to the host UI.

mod filter;
mod item;
mod state;

pub use filter::{FilterMatch, fuzzy_filter, substring_filter};
pub use item::SuggestItem;
pub use state::{SuggestInput, SuggestInputId, SuggestMode, SuggestOutcome};
