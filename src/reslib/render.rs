//! # Rendering Module
//!
//! Turns pipeline output into terminal text. Layout (wrapping, padding)
//! is done with Unicode-aware width measurement; style selection lives in
//! `styles.rs`. Nothing here touches the library state—render functions
//! take data and return strings.

use crate::styles;
use reslib::catalog::Catalog;
use reslib::model::{Resource, ResourceType};
use unicode_width::UnicodeWidthStr;

/// Wrap width for card body text.
pub const LINE_WIDTH: usize = 72;

/// Greedy word wrap by display width.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.width() + 1 + word.width() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn action_label(kind: ResourceType) -> &'static str {
    match kind {
        ResourceType::Video => "Watch now",
        _ => "Read now",
    }
}

/// Render one resource card.
pub fn render_card(resource: &Resource) -> String {
    let mut out = String::new();

    let badge = styles::badge_style(resource.kind)
        .apply_to(format!("[{}]", resource.kind.label().to_uppercase()));
    let mut meta = Vec::new();
    if let Some(date) = &resource.date {
        meta.push(date.clone());
    }
    if !resource.tags.is_empty() {
        meta.push(resource.tags.join(", "));
    }
    if meta.is_empty() {
        out.push_str(&format!("{}\n", badge));
    } else {
        out.push_str(&format!(
            "{} {}\n",
            badge,
            styles::META.apply_to(meta.join(" · "))
        ));
    }

    for line in wrap(&resource.title, LINE_WIDTH) {
        out.push_str(&format!("{}\n", styles::TITLE.apply_to(line)));
    }
    for line in wrap(&resource.description, LINE_WIDTH) {
        out.push_str(&format!("{}\n", styles::DESCRIPTION.apply_to(line)));
    }
    out.push_str(&format!(
        "{} {}\n",
        styles::ACTION
            .apply_to(format!("{} →", action_label(resource.kind))),
        resource.url
    ));

    out
}

/// Render a list of cards, or the explicit empty state.
pub fn render_list(resources: &[Resource]) -> String {
    if resources.is_empty() {
        return format!(
            "{}\n{}\n",
            "No resources found.",
            styles::EMPTY.apply_to("Try adjusting your filters.")
        );
    }

    let mut out = String::new();
    for (i, resource) in resources.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&render_card(resource));
    }
    out
}

/// Render the available filters: types, tags and years with counts.
pub fn render_facets(catalog: &Catalog) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", styles::TITLE.apply_to("Type")));
    for (kind, count) in catalog.type_counts() {
        out.push_str(&format!(
            "  {} {}\n",
            kind.plural_label(),
            styles::META.apply_to(format!("({})", count))
        ));
    }

    out.push_str(&format!("\n{}\n", styles::TITLE.apply_to("Tags")));
    for (tag, count) in catalog.tag_counts() {
        out.push_str(&format!(
            "  {} {}\n",
            tag,
            styles::META.apply_to(format!("({})", count))
        ));
    }

    out.push_str(&format!("\n{}\n", styles::TITLE.apply_to("Date")));
    for year in catalog.years() {
        out.push_str(&format!("  {}\n", year));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_respects_width() {
        let lines = wrap("one two three four five", 9);
        assert_eq!(lines, vec!["one two", "three", "four five"]);
    }

    #[test]
    fn wrap_of_empty_text_is_empty() {
        assert!(wrap("", 10).is_empty());
    }

    #[test]
    fn card_shows_badge_title_and_action() {
        let catalog = Catalog::builtin();
        let card = render_card(catalog.get("4").unwrap());
        assert!(card.contains("[VIDEO]"));
        assert!(card.contains("The Future of Agentic Apps"));
        assert!(card.contains("Watch now"));
    }

    #[test]
    fn non_video_cards_say_read_now() {
        let catalog = Catalog::builtin();
        let card = render_card(catalog.get("1").unwrap());
        assert!(card.contains("Read now"));
    }

    #[test]
    fn empty_list_renders_explicit_empty_state() {
        let out = render_list(&[]);
        assert!(out.contains("No resources found."));
        assert!(out.contains("Try adjusting your filters."));
    }

    #[test]
    fn facets_list_plural_labels_with_counts() {
        let out = render_facets(&Catalog::builtin());
        assert!(out.contains("White Papers"));
        assert!(out.contains("(2)"));
        assert!(out.contains("Docker MCP"));
        assert!(out.contains("2024"));
    }
}
