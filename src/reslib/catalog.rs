//! # The Resource Catalog
//!
//! A [`Catalog`] is the read-only collection the pipeline filters. There is
//! no mutation, no persistence, and no external data source: the catalog is
//! built once (from the hardcoded sample set or from caller-supplied
//! records) and shared by every pipeline evaluation.
//!
//! The one invariant the catalog enforces is id uniqueness—construction
//! rejects duplicate ids. Everything else is read access: resource lookup
//! by id, and the facet counts the presentation layer shows next to its
//! filter controls (computed from the data, never hardcoded).

use crate::error::{ReslibError, Result};
use crate::model::{Resource, ResourceType};
use std::collections::BTreeMap;
use std::collections::HashSet;

/// Read-only, ordered collection of resources.
///
/// Insertion order is significant: it is the "relevance" ordering the
/// pipeline preserves when no sort is selected.
#[derive(Debug, Clone)]
pub struct Catalog {
    resources: Vec<Resource>,
}

impl Catalog {
    /// Build a catalog, enforcing id uniqueness.
    pub fn new(resources: Vec<Resource>) -> Result<Self> {
        let mut seen = HashSet::new();
        for r in &resources {
            if !seen.insert(r.id.as_str()) {
                return Err(ReslibError::DuplicateId(r.id.clone()));
            }
        }
        Ok(Self { resources })
    }

    /// The built-in sample data set.
    pub fn builtin() -> Self {
        Self {
            resources: builtin_resources(),
        }
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn get(&self, id: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Resource count per type, in the fixed type order.
    pub fn type_counts(&self) -> Vec<(ResourceType, usize)> {
        ResourceType::ALL
            .iter()
            .map(|&t| (t, self.resources.iter().filter(|r| r.kind == t).count()))
            .collect()
    }

    /// Resource count per tag, sorted by tag name.
    pub fn tag_counts(&self) -> Vec<(String, usize)> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for r in &self.resources {
            for tag in &r.tags {
                *counts.entry(tag.as_str()).or_default() += 1;
            }
        }
        counts
            .into_iter()
            .map(|(tag, n)| (tag.to_string(), n))
            .collect()
    }

    /// Distinct publication years, newest first.
    pub fn years(&self) -> Vec<String> {
        let mut years: Vec<String> = self
            .resources
            .iter()
            .filter_map(|r| r.date.clone())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        years.sort();
        years.reverse();
        years
    }
}

fn builtin_resources() -> Vec<Resource> {
    vec![
        Resource {
            id: "1".into(),
            kind: ResourceType::WhitePaper,
            title: "Understanding and Mitigating MCP Ecosystem Risks".into(),
            description: "Explore key security risks in today's MCP tooling, data on MCP \
                          security prevalence, and guidance for building a secure, \
                          production-ready agent infrastructure."
                .into(),
            url: "#".into(),
            tags: vec!["Docker MCP".into(), "Security".into()],
            date: Some("2024".into()),
        },
        Resource {
            id: "2".into(),
            kind: ResourceType::Infographic,
            title: "MCP Security: Where the Risks Lie and How to Contain Them".into(),
            description: "Learn how MCP works, key MCP security risks, and practical tips \
                          to contain these vulnerabilities."
                .into(),
            url: "#".into(),
            tags: vec!["Docker MCP".into(), "Security".into()],
            date: Some("2024".into()),
        },
        Resource {
            id: "3".into(),
            kind: ResourceType::WhitePaper,
            title: "IDC MCP Security Paper".into(),
            description: "Discover why MCP adoption is rising, the security challenges \
                          slowing it down, and how Docker makes agentic AI enterprise-ready."
                .into(),
            url: "#".into(),
            tags: vec!["Docker MCP".into(), "AI/ML".into(), "Enterprise".into()],
            date: Some("2024".into()),
        },
        Resource {
            id: "4".into(),
            kind: ResourceType::Video,
            title: "The Future of Agentic Apps: Building and Running MCP Servers the Right Way"
                .into(),
            description: "Learn how to run and build an MCP server for your agentic \
                          applications using Docker tools and best practices."
                .into(),
            url: "#".into(),
            tags: vec!["Docker MCP".into()],
            date: Some("2024".into()),
        },
    ]
}
