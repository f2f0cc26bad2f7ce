use gridkit::components::suggest::{
    fuzzy_filter, SuggestInput, SuggestItem, SuggestMode, SuggestOutcome,
};

fn countries() -> Vec<SuggestItem> {
    vec![
        SuggestItem::with_key("us", "United States"),
        SuggestItem::with_key("uk", "United Kingdom"),
        SuggestItem::with_key("ua", "Ukraine"),
    ]
}

#[test]
fn test_typing_filters_the_dropdown() {
    let input = SuggestInput::with_items(SuggestMode::Strict, countries());

    assert_eq!(input.set_value("united"), SuggestOutcome::Pending);
    assert!(input.is_open());
    let values: Vec<String> = input.filtered().into_iter().map(|i| i.value).collect();
    assert_eq!(values, vec!["United States", "United Kingdom"]);
}

#[test]
fn test_typing_a_visible_exact_key_commits() {
    let input = SuggestInput::with_items(
        SuggestMode::Strict,
        vec![
            SuggestItem::with_key("alice", "alice@example.com"),
            SuggestItem::with_key("bob", "bob@example.com"),
        ],
    );
    assert_eq!(
        input.set_value("alice"),
        SuggestOutcome::Committed(SuggestItem::with_key("alice", "alice@example.com"))
    );
}

#[test]
fn test_key_commits_only_among_visible_candidates() {
    // "us" is the key of "United States", but no display value contains
    // "us" as a substring, so the candidate never shows and nothing
    // commits.
    let input = SuggestInput::with_items(SuggestMode::Strict, countries());
    assert_eq!(input.set_value("us"), SuggestOutcome::Cleared);
    assert_eq!(input.filtered_count(), 0);
}

#[test]
fn test_strict_mode_clears_when_nothing_matches() {
    let input = SuggestInput::with_items(SuggestMode::Strict, countries());
    assert_eq!(input.set_value("zzz"), SuggestOutcome::Cleared);
    assert!(!input.is_open());
}

#[test]
fn test_free_mode_keeps_raw_text() {
    let input = SuggestInput::with_items(SuggestMode::Free, countries());
    assert_eq!(
        input.set_value("zzz"),
        SuggestOutcome::Text("zzz".to_string())
    );
}

#[test]
fn test_truncation_to_max_suggestions() {
    let items: Vec<SuggestItem> = (0..10)
        .map(|n| SuggestItem::new(format!("item {n}")))
        .collect();
    let input = SuggestInput::with_items(SuggestMode::Strict, items).max_suggestions(3);

    input.set_value("item");
    assert_eq!(input.filtered_count(), 3);
    assert!(input.is_truncated());
}

#[test]
fn test_select_commits_and_closes() {
    let input = SuggestInput::with_items(SuggestMode::Strict, countries());
    input.set_value("united");

    let item = input.select(1).unwrap();
    assert_eq!(item.value, "United Kingdom");
    assert_eq!(input.value(), "United Kingdom");
    assert!(!input.is_open());
}

#[test]
fn test_select_at_cursor() {
    let input = SuggestInput::with_items(SuggestMode::Strict, countries());
    input.set_value("u");
    input.cursor_down();
    input.cursor_down();

    let item = input.select_at_cursor().unwrap();
    assert_eq!(item.value, "Ukraine");
    assert_eq!(input.cursor(), 0);
}

#[test]
fn test_cursor_stays_in_bounds() {
    let input = SuggestInput::with_items(SuggestMode::Strict, countries());
    input.set_value("u");

    input.cursor_up();
    assert_eq!(input.cursor(), 0);
    for _ in 0..10 {
        input.cursor_down();
    }
    assert_eq!(input.cursor(), 2);
}

#[test]
fn test_out_of_range_select_is_none() {
    let input = SuggestInput::with_items(SuggestMode::Strict, countries());
    input.set_value("united");
    assert!(input.select(5).is_none());
}

#[test]
fn test_set_items_refilters_with_strict_fallback() {
    let input = SuggestInput::with_items(SuggestMode::Strict, countries());
    input.set_value("united");
    assert_eq!(input.filtered_count(), 2);

    // The replacement list matches nothing the user typed; strict mode
    // shows the head of the new list instead of an empty dropdown.
    input.set_items(vec![
        SuggestItem::new("Alpha"),
        SuggestItem::new("Beta"),
    ]);
    let values: Vec<String> = input.filtered().into_iter().map(|i| i.value).collect();
    assert_eq!(values, vec!["Alpha", "Beta"]);
}

#[test]
fn test_clear_resets_value_and_dropdown() {
    let input = SuggestInput::with_items(SuggestMode::Strict, countries());
    input.set_value("united");
    input.clear();

    assert_eq!(input.value(), "");
    assert!(!input.is_open());
    assert_eq!(input.cursor(), 0);
}

#[test]
fn test_fuzzy_filter_can_replace_substring() {
    let input = SuggestInput::with_items(SuggestMode::Strict, countries()).with_filter(fuzzy_filter);

    input.set_value("ukdm");
    let values: Vec<String> = input.filtered().into_iter().map(|i| i.value).collect();
    assert_eq!(values, vec!["United Kingdom"]);
}

#[test]
fn test_clones_share_state() {
    let input = SuggestInput::with_items(SuggestMode::Strict, countries());
    let handle = input.clone();
    input.set_value("united");
    assert_eq!(handle.value(), "united");
    assert_eq!(handle.id(), input.id());
}
