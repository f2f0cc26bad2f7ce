//! Suggestion filtering: substring by default, fuzzy as an alternative.

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

use super::item::SuggestItem;

/// Result of a suggestion filter pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterMatch {
    /// Index of the matched item in the original list.
    pub index: usize,
    /// Match score (higher is better; 0 for substring matches).
    pub score: u32,
}

/// Case-insensitive substring filter, preserving list order.
///
/// This is the default: an empty query returns every item.
pub fn substring_filter(query: &str, items: &[SuggestItem]) -> Vec<FilterMatch> {
    let needle = query.to_lowercase();
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| item.value.to_lowercase().contains(&needle))
        .map(|(index, _)| FilterMatch { index, score: 0 })
        .collect()
}

/// Fuzzy filter using nucleo-matcher, best matches first.
///
/// An empty query returns all items with score 0, in list order.
pub fn fuzzy_filter(query: &str, items: &[SuggestItem]) -> Vec<FilterMatch> {
    if query.is_empty() {
        return items
            .iter()
            .enumerate()
            .map(|(index, _)| FilterMatch { index, score: 0 })
            .collect();
    }

    let mut matcher = Matcher::new(Config::DEFAULT);
    let pattern = Pattern::new(
        query,
        CaseMatching::Ignore,
        Normalization::Smart,
        AtomKind::Fuzzy,
    );

    let mut matches: Vec<FilterMatch> = items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let mut buf = Vec::new();
            let haystack = Utf32Str::new(&item.value, &mut buf);
            pattern
                .score(haystack, &mut matcher)
                .map(|score| FilterMatch { index, score })
        })
        .collect();

    matches.sort_by(|a, b| b.score.cmp(&a.score));

    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(values: &[&str]) -> Vec<SuggestItem> {
        values.iter().map(|v| SuggestItem::new(*v)).collect()
    }

    #[test]
    fn test_substring_is_case_insensitive() {
        let items = items(&["Apple", "BANANA", "apricot"]);
        let matches = substring_filter("AP", &items);
        let indices: Vec<usize> = matches.iter().map(|m| m.index).collect();
        assert_eq!(indices, vec![0, 2]);
    }

    #[test]
    fn test_substring_empty_query_returns_all() {
        let items = items(&["a", "b"]);
        assert_eq!(substring_filter("", &items).len(), 2);
    }

    #[test]
    fn test_fuzzy_matches_scattered_letters() {
        let items = items(&["apple", "banana", "apricot"]);
        let matches = fuzzy_filter("apt", &items);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].index, 2);
    }
}
