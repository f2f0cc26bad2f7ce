//! Suggestion input state.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use super::filter::{FilterMatch, substring_filter};
use super::item::SuggestItem;

/// Unique identifier for a SuggestInput instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SuggestInputId(usize);

impl SuggestInputId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for SuggestInputId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__suggest_{}", self.0)
    }
}

/// How the input commits values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuggestMode {
    /// Only listed suggestions can be committed.
    #[default]
    Strict,
    /// Arbitrary typed text is committed too.
    Free,
}

/// What a text edit committed.
#[derive(Debug, Clone, PartialEq)]
pub enum SuggestOutcome {
    /// The typed text equals a visible candidate's key; it is committed.
    Committed(SuggestItem),
    /// Free mode with no candidates left: the raw text stands.
    Text(String),
    /// Strict mode with no candidates left: the previous commit is void.
    Cleared,
    /// Candidates are showing but none is committed yet.
    Pending,
}

/// Filter function: query plus items in, matches out.
pub type SuggestFilter = Arc<dyn Fn(&str, &[SuggestItem]) -> Vec<FilterMatch> + Send + Sync>;

const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// Internal state for a SuggestInput.
struct SuggestInner {
    /// Current text value.
    value: String,
    /// All available suggestions.
    items: Vec<SuggestItem>,
    /// Filtered dropdown entries, already truncated to `max_suggestions`.
    filtered: Vec<FilterMatch>,
    /// Whether truncation dropped matches beyond `max_suggestions`.
    truncated: bool,
    /// Dropdown cap.
    max_suggestions: usize,
    /// Commit behavior.
    mode: SuggestMode,
    /// Filter function; substring containment by default.
    filter: SuggestFilter,
}

impl SuggestInner {
    fn new(mode: SuggestMode) -> Self {
        Self {
            value: String::new(),
            items: Vec::new(),
            filtered: Vec::new(),
            truncated: false,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            mode,
            filter: Arc::new(substring_filter),
        }
    }
}

/// A text input with a filtered dropdown of suggestions.
///
/// Typing refilters the suggestion list and reports what, if anything, the
/// edit committed (see [`SuggestOutcome`]); selecting a dropdown entry
/// always commits it. How and where the dropdown paints is the host's
/// concern.
///
/// # Example
///
/// ```
/// use gridkit::components::suggest::{SuggestInput, SuggestItem, SuggestMode, SuggestOutcome};
///
/// let input = SuggestInput::with_items(
///     SuggestMode::Strict,
///     vec![
///         SuggestItem::with_key("alice", "alice@example.com"),
///         SuggestItem::with_key("bob", "bob@example.com"),
///     ],
/// );
/// assert_eq!(
///     input.set_value("alice"),
///     SuggestOutcome::Committed(SuggestItem::with_key("alice", "alice@example.com")),
/// );
/// ```
pub struct SuggestInput {
    /// Unique identifier.
    id: SuggestInputId,
    /// Internal state.
    inner: Arc<RwLock<SuggestInner>>,
    /// Whether the dropdown is open.
    is_open: Arc<AtomicBool>,
    /// Cursor position in the dropdown.
    cursor: Arc<AtomicUsize>,
    /// Dirty flag for re-render.
    dirty: Arc<AtomicBool>,
}

impl SuggestInput {
    /// Create an empty input.
    pub fn new(mode: SuggestMode) -> Self {
        Self {
            id: SuggestInputId::new(),
            inner: Arc::new(RwLock::new(SuggestInner::new(mode))),
            is_open: Arc::new(AtomicBool::new(false)),
            cursor: Arc::new(AtomicUsize::new(0)),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create an input with an initial suggestion list.
    pub fn with_items(mode: SuggestMode, items: Vec<SuggestItem>) -> Self {
        let input = Self::new(mode);
        input.set_items(items);
        input.clear_dirty();
        input
    }

    /// Replace the filter function (e.g. with
    /// [`fuzzy_filter`](super::fuzzy_filter)).
    pub fn with_filter(
        self,
        filter: impl Fn(&str, &[SuggestItem]) -> Vec<FilterMatch> + Send + Sync + 'static,
    ) -> Self {
        if let Ok(mut g) = self.inner.write() {
            g.filter = Arc::new(filter);
            refilter_on_items(&mut g);
        }
        self
    }

    /// Set the dropdown cap (default 5).
    pub fn max_suggestions(self, max: usize) -> Self {
        if let Ok(mut g) = self.inner.write() {
            g.max_suggestions = max.max(1);
            refilter_on_items(&mut g);
        }
        self
    }

    /// Get the unique ID.
    pub fn id(&self) -> SuggestInputId {
        self.id
    }

    /// Get the ID as a string.
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    /// Get the commit mode.
    pub fn mode(&self) -> SuggestMode {
        self.inner
            .read()
            .map(|g| g.mode)
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Text value
    // -------------------------------------------------------------------------

    /// Get the current text value.
    pub fn value(&self) -> String {
        self.inner
            .read()
            .map(|g| g.value.clone())
            .unwrap_or_default()
    }

    /// Set the text value, refilter, and report what the edit committed.
    ///
    /// With candidates showing, typing a candidate's exact key commits it;
    /// otherwise nothing is committed yet. With no candidates left, free
    /// mode commits the raw text and strict mode voids the previous commit.
    pub fn set_value(&self, value: impl Into<String>) -> SuggestOutcome {
        let value = value.into();
        let outcome = match self.inner.write() {
            Ok(mut g) => {
                g.value = value.clone();
                let matches = (g.filter)(&g.value, &g.items);
                g.truncated = matches.len() > g.max_suggestions;
                let max = g.max_suggestions;
                g.filtered = matches.into_iter().take(max).collect();

                if !g.filtered.is_empty() {
                    let committed = g.filtered.iter().find_map(|m| {
                        let item = g.items.get(m.index)?;
                        (item.key.as_deref() == Some(value.as_str())).then(|| item.clone())
                    });
                    match committed {
                        Some(item) => SuggestOutcome::Committed(item),
                        None => SuggestOutcome::Pending,
                    }
                } else if g.mode == SuggestMode::Free {
                    SuggestOutcome::Text(value)
                } else {
                    SuggestOutcome::Cleared
                }
            }
            Err(_) => SuggestOutcome::Cleared,
        };

        let showing = self.filtered_count() > 0;
        self.is_open.store(showing, Ordering::SeqCst);
        self.clamp_cursor();
        self.dirty.store(true, Ordering::SeqCst);
        outcome
    }

    /// Clear the text value and close the dropdown.
    pub fn clear(&self) {
        if let Ok(mut g) = self.inner.write() {
            g.value.clear();
            refilter_on_items(&mut g);
        }
        self.is_open.store(false, Ordering::SeqCst);
        self.cursor.store(0, Ordering::SeqCst);
        self.dirty.store(true, Ordering::SeqCst);
    }

    // -------------------------------------------------------------------------
    // Suggestion list
    // -------------------------------------------------------------------------

    /// Replace the suggestion list, refiltering against the current text.
    ///
    /// In strict mode an input whose text no longer matches anything shows
    /// the head of the new list instead of an empty dropdown.
    pub fn set_items(&self, items: Vec<SuggestItem>) {
        if let Ok(mut g) = self.inner.write() {
            g.items = items;
            refilter_on_items(&mut g);
        }
        self.clamp_cursor();
        self.dirty.store(true, Ordering::SeqCst);
    }

    /// Get the filtered dropdown entries, resolved to items.
    pub fn filtered(&self) -> Vec<SuggestItem> {
        self.inner
            .read()
            .map(|g| {
                g.filtered
                    .iter()
                    .filter_map(|m| g.items.get(m.index).cloned())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Get the number of dropdown entries.
    pub fn filtered_count(&self) -> usize {
        self.inner.read().map(|g| g.filtered.len()).unwrap_or(0)
    }

    /// Whether the dropdown list was truncated to the cap.
    pub fn is_truncated(&self) -> bool {
        self.inner.read().map(|g| g.truncated).unwrap_or(false)
    }

    // -------------------------------------------------------------------------
    // Dropdown state
    // -------------------------------------------------------------------------

    /// Check if the dropdown is open.
    pub fn is_open(&self) -> bool {
        self.is_open.load(Ordering::SeqCst)
    }

    /// Close the dropdown.
    pub fn close(&self) {
        if self.is_open.swap(false, Ordering::SeqCst) {
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Get the dropdown cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor.load(Ordering::SeqCst)
    }

    /// Move the dropdown cursor up.
    pub fn cursor_up(&self) {
        let current = self.cursor();
        if current > 0 {
            self.cursor.store(current - 1, Ordering::SeqCst);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Move the dropdown cursor down.
    pub fn cursor_down(&self) {
        let current = self.cursor();
        let max = self.filtered_count().saturating_sub(1);
        if current < max {
            self.cursor.store(current + 1, Ordering::SeqCst);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Commit a dropdown entry by its filtered index.
    ///
    /// Puts the entry's value into the input and closes the dropdown.
    pub fn select(&self, filtered_index: usize) -> Option<SuggestItem> {
        let item = self.inner.read().ok().and_then(|g| {
            g.filtered
                .get(filtered_index)
                .and_then(|m| g.items.get(m.index).cloned())
        })?;
        if let Ok(mut g) = self.inner.write() {
            g.value = item.value.clone();
            let matches = (g.filter)(&g.value, &g.items);
            g.truncated = matches.len() > g.max_suggestions;
            let max = g.max_suggestions;
            g.filtered = matches.into_iter().take(max).collect();
        }
        self.is_open.store(false, Ordering::SeqCst);
        self.cursor.store(0, Ordering::SeqCst);
        self.dirty.store(true, Ordering::SeqCst);
        Some(item)
    }

    /// Commit the entry at the dropdown cursor.
    pub fn select_at_cursor(&self) -> Option<SuggestItem> {
        self.select(self.cursor())
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the input state has changed.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    fn clamp_cursor(&self) {
        let max = self.filtered_count().saturating_sub(1);
        if self.cursor.load(Ordering::SeqCst) > max {
            self.cursor.store(0, Ordering::SeqCst);
        }
    }
}

/// Refilter after the item list (or config) changed, with the strict-mode
/// fallback to the unfiltered head when nothing matches the current text.
fn refilter_on_items(g: &mut SuggestInner) {
    let matches = (g.filter)(&g.value, &g.items);
    g.truncated = matches.len() > g.max_suggestions;
    if matches.is_empty() && g.mode == SuggestMode::Strict {
        g.truncated = g.items.len() > g.max_suggestions;
        g.filtered = (0..g.items.len().min(g.max_suggestions))
            .map(|index| FilterMatch { index, score: 0 })
            .collect();
        return;
    }
    let max = g.max_suggestions;
    g.filtered = matches.into_iter().take(max).collect();
}

impl Clone for SuggestInput {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            is_open: Arc::clone(&self.is_open),
            cursor: Arc::clone(&self.cursor),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl Default for SuggestInput {
    fn default() -> Self {
        Self::new(SuggestMode::default())
    }
}
