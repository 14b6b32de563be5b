//! # The Filter/Sort Pipeline
//!
//! Four independent predicates—search, type, tags, date—composed in a fixed
//! order, then a sort stage. Each predicate is the identity transform when
//! its criterion is empty, so the default state passes the whole catalog
//! through untouched.
//!
//! Composition is conjunctive across dimensions (a resource must satisfy
//! every active predicate) and disjunctive within one (a resource matching
//! any of the selected types, or any of the selected tags, passes that
//! stage). The stage order does not affect the result set—each predicate
//! reads independent fields—but is fixed for determinism.
//!
//! Every function here is total. An over-constrained state produces an
//! empty Vec, never an error; rendering that as an explicit empty state is
//! the presentation layer's job.

use crate::catalog::Catalog;
use crate::model::{Resource, ResourceType, SortKey};
use crate::state::FilterState;

/// Case-insensitive substring match against title or description.
///
/// No tokenization, no fuzzy matching. An empty term is the identity.
pub fn filter_by_search(resources: Vec<Resource>, term: &str) -> Vec<Resource> {
    if term.is_empty() {
        return resources;
    }
    let term = term.to_lowercase();
    resources
        .into_iter()
        .filter(|r| {
            r.title.to_lowercase().contains(&term)
                || r.description.to_lowercase().contains(&term)
        })
        .collect()
}

/// Keep resources whose type matches at least one selected label.
///
/// Labels are resolved through the explicit singular/plural mapping on
/// [`ResourceType`]; labels that resolve to nothing match nothing. An empty
/// selection is the identity.
pub fn filter_by_type(resources: Vec<Resource>, selected: &[String]) -> Vec<Resource> {
    if selected.is_empty() {
        return resources;
    }
    let wanted: Vec<ResourceType> = selected
        .iter()
        .filter_map(|label| ResourceType::from_filter_label(label))
        .collect();
    resources
        .into_iter()
        .filter(|r| wanted.contains(&r.kind))
        .collect()
}

/// Keep resources carrying at least one selected tag.
///
/// An empty selection is the identity.
pub fn filter_by_tags(resources: Vec<Resource>, selected: &[String]) -> Vec<Resource> {
    if selected.is_empty() {
        return resources;
    }
    resources
        .into_iter()
        .filter(|r| selected.iter().any(|tag| r.has_tag(tag)))
        .collect()
}

/// Keep resources whose year equals the selection exactly.
///
/// Resources without a date never match a non-empty selection. `None` is
/// the identity.
pub fn filter_by_date(resources: Vec<Resource>, selected: Option<&str>) -> Vec<Resource> {
    let Some(year) = selected else {
        return resources;
    };
    resources
        .into_iter()
        .filter(|r| r.date.as_deref() == Some(year))
        .collect()
}

/// Apply the sort stage. All orderings are stable with respect to ties.
pub fn sort_resources(mut resources: Vec<Resource>, key: SortKey) -> Vec<Resource> {
    match key {
        SortKey::Relevance => {}
        SortKey::Date => resources.sort_by(|a, b| b.date_key().cmp(a.date_key())),
        SortKey::Title => resources.sort_by(|a, b| a.title.cmp(&b.title)),
    }
    resources
}

/// Evaluate the full pipeline: search → type → tags → date, then sort.
pub fn apply(catalog: &Catalog, filters: &FilterState) -> Vec<Resource> {
    let resources = catalog.resources().to_vec();
    let resources = filter_by_search(resources, &filters.search);
    let resources = filter_by_type(resources, &filters.selected_types);
    let resources = filter_by_tags(resources, &filters.selected_tags);
    let resources = filter_by_date(resources, filters.selected_date.as_deref());
    sort_resources(resources, filters.sort_by)
}
