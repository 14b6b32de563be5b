//! # Filter State
//!
//! [`FilterState`] is the value driving which resources are shown: the search
//! text, the selected type labels, the selected tags, the selected year, and
//! the sort key.
//!
//! The state is immutable-per-version: every transition consumes the current
//! value and returns the next one, so a holder replaces it wholesale and no
//! partial state is ever observable to the pipeline. `PartialEq` across
//! versions gives clients a trivial "did anything change" re-render check.
//!
//! There are no error conditions here. Selections are free-form strings;
//! an unrecognized type label, tag, or year is stored as-is and simply
//! matches nothing when the pipeline runs.

use crate::model::SortKey;

/// The current filter and sort selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    /// Free-text search over title and description.
    pub search: String,
    /// Selected type labels in plural display form (e.g. "White Papers").
    /// Empty means no type restriction.
    pub selected_types: Vec<String>,
    /// Selected tags. Empty means no tag restriction.
    pub selected_tags: Vec<String>,
    /// Selected publication year. `None` means no date restriction.
    pub selected_date: Option<String>,
    /// Ordering applied after filtering.
    pub sort_by: SortKey,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the search text.
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search = text.into();
        self
    }

    /// Toggle a type label: add if absent, remove if present.
    pub fn toggle_type(mut self, label: impl Into<String>) -> Self {
        toggle(&mut self.selected_types, label.into());
        self
    }

    /// Toggle a tag: add if absent, remove if present.
    pub fn toggle_tag(mut self, tag: impl Into<String>) -> Self {
        toggle(&mut self.selected_tags, tag.into());
        self
    }

    /// Replace the selected year. An empty string clears the selection.
    pub fn with_date(mut self, year: impl Into<String>) -> Self {
        let year = year.into();
        self.selected_date = if year.is_empty() { None } else { Some(year) };
        self
    }

    /// Replace the sort key.
    pub fn with_sort(mut self, key: SortKey) -> Self {
        self.sort_by = key;
        self
    }

    /// All fields back to defaults in one transition, the sort key included.
    pub fn reset(self) -> Self {
        Self::default()
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Set-semantics toggle on a Vec: no duplicates, insertion order preserved.
fn toggle(values: &mut Vec<String>, value: String) {
    if let Some(pos) = values.iter().position(|v| *v == value) {
        values.remove(pos);
    } else {
        values.push(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_empty() {
        let state = FilterState::new();
        assert!(state.search.is_empty());
        assert!(state.selected_types.is_empty());
        assert!(state.selected_tags.is_empty());
        assert!(state.selected_date.is_none());
        assert_eq!(state.sort_by, SortKey::Relevance);
        assert!(state.is_default());
    }

    #[test]
    fn toggle_adds_then_removes() {
        let state = FilterState::new().toggle_tag("Security");
        assert_eq!(state.selected_tags, vec!["Security".to_string()]);

        let state = state.toggle_tag("Security");
        assert!(state.selected_tags.is_empty());
    }

    #[test]
    fn toggle_never_duplicates() {
        let state = FilterState::new()
            .toggle_type("Videos")
            .toggle_type("White Papers")
            .toggle_type("Videos")
            .toggle_type("Videos");
        assert_eq!(
            state.selected_types,
            vec!["White Papers".to_string(), "Videos".to_string()]
        );
    }

    #[test]
    fn with_date_empty_clears_selection() {
        let state = FilterState::new().with_date("2024");
        assert_eq!(state.selected_date.as_deref(), Some("2024"));

        let state = state.with_date("");
        assert!(state.selected_date.is_none());
    }

    #[test]
    fn reset_restores_every_field() {
        let state = FilterState::new()
            .with_search("mcp")
            .toggle_type("Videos")
            .toggle_tag("Security")
            .with_date("2024")
            .with_sort(SortKey::Date);
        assert!(!state.is_default());

        let state = state.reset();
        assert_eq!(state, FilterState::default());
    }

    #[test]
    fn versions_compare_equal_by_value() {
        let a = FilterState::new().with_search("x").toggle_tag("T");
        let b = FilterState::new().with_search("x").toggle_tag("T");
        assert_eq!(a, b);
        assert_ne!(a, b.clone().with_search("y"));
    }
}
