//! # API Facade
//!
//! [`Library`] is the single entry point a UI drives, regardless of what
//! kind of UI it is. It owns the catalog and the current [`FilterState`],
//! and exposes one method per user action.
//!
//! Each action replaces the state wholesale with its next version and
//! synchronously re-evaluates the pipeline before returning, so a client
//! always gets back the view that matches the state it just produced.
//! Nothing here performs I/O or assumes a terminal.

use crate::catalog::Catalog;
use crate::model::{Resource, SortKey};
use crate::pipeline;
use crate::state::FilterState;

/// A filtering session over a fixed catalog.
pub struct Library {
    catalog: Catalog,
    filters: FilterState,
}

impl Library {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            filters: FilterState::default(),
        }
    }

    /// A session over the built-in sample catalog.
    pub fn with_builtin() -> Self {
        Self::new(Catalog::builtin())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Evaluate the pipeline against the current state without mutating it.
    pub fn view(&self) -> Vec<Resource> {
        pipeline::apply(&self.catalog, &self.filters)
    }

    pub fn set_search(&mut self, text: impl Into<String>) -> Vec<Resource> {
        self.transition(|f| f.with_search(text))
    }

    pub fn toggle_type(&mut self, label: impl Into<String>) -> Vec<Resource> {
        self.transition(|f| f.toggle_type(label))
    }

    pub fn toggle_tag(&mut self, tag: impl Into<String>) -> Vec<Resource> {
        self.transition(|f| f.toggle_tag(tag))
    }

    pub fn set_date(&mut self, year: impl Into<String>) -> Vec<Resource> {
        self.transition(|f| f.with_date(year))
    }

    pub fn set_sort(&mut self, key: SortKey) -> Vec<Resource> {
        self.transition(|f| f.with_sort(key))
    }

    pub fn reset(&mut self) -> Vec<Resource> {
        self.transition(|f| f.reset())
    }

    /// Apply one state transition and re-evaluate.
    fn transition(&mut self, f: impl FnOnce(FilterState) -> FilterState) -> Vec<Resource> {
        self.filters = f(std::mem::take(&mut self.filters));
        self.view()
    }
}
