use serde::{Deserialize, Serialize};

/// The closed set of resource kinds in the catalog.
///
/// The plural/singular relationship is an explicit mapping rather than a
/// string-suffix heuristic: the sidebar shows plural checkbox labels
/// ("White Papers"), the data carries singular labels ("White Paper"), and
/// [`ResourceType::from_filter_label`] accepts either form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceType {
    #[serde(rename = "White Paper")]
    WhitePaper,
    #[serde(rename = "Infographic")]
    Infographic,
    #[serde(rename = "Video")]
    Video,
}

impl ResourceType {
    pub const ALL: [ResourceType; 3] = [
        ResourceType::WhitePaper,
        ResourceType::Infographic,
        ResourceType::Video,
    ];

    /// Singular display label, also the serialization form.
    pub fn label(&self) -> &'static str {
        match self {
            ResourceType::WhitePaper => "White Paper",
            ResourceType::Infographic => "Infographic",
            ResourceType::Video => "Video",
        }
    }

    /// Plural label as shown on filter checkboxes.
    pub fn plural_label(&self) -> &'static str {
        match self {
            ResourceType::WhitePaper => "White Papers",
            ResourceType::Infographic => "Infographics",
            ResourceType::Video => "Videos",
        }
    }

    /// Resolve a filter label (singular or plural form) to a type.
    ///
    /// Unknown labels resolve to `None`—they match no resources, which is
    /// not an error.
    pub fn from_filter_label(label: &str) -> Option<ResourceType> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.label() == label || t.plural_label() == label)
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single catalog entry.
///
/// Immutable once constructed; the pipeline only ever clones and reorders
/// resources, never edits them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ResourceType,
    pub title: String,
    pub description: String,
    pub url: String,
    pub tags: Vec<String>,
    /// Publication year. Absent dates never match a year filter and sort
    /// last under the date ordering.
    pub date: Option<String>,
}

impl Resource {
    /// The date as a sort/match key, with absent dates as the empty string.
    pub fn date_key(&self) -> &str {
        self.date.as_deref().unwrap_or("")
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Ordering applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Leave the catalog's insertion order untouched.
    #[default]
    Relevance,
    /// Newest first; resources without a date sort last.
    Date,
    /// Alphabetical by title.
    Title,
}

impl SortKey {
    /// Total parse: unrecognized input falls back to `Relevance` rather
    /// than failing.
    pub fn parse(s: &str) -> SortKey {
        match s {
            "date" => SortKey::Date,
            "title" => SortKey::Title,
            _ => SortKey::Relevance,
        }
    }
}
