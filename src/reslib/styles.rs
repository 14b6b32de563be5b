use console::Style;
use once_cell::sync::Lazy;
use reslib::model::ResourceType;

// Badge colors mirror the web palette: green for white papers, blue for
// infographics, orange for videos.
static BADGE_WHITE_PAPER: Lazy<Style> = Lazy::new(|| Style::new().green());
static BADGE_INFOGRAPHIC: Lazy<Style> = Lazy::new(|| Style::new().blue());
static BADGE_VIDEO: Lazy<Style> = Lazy::new(|| Style::new().color256(208));

pub static TITLE: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static DESCRIPTION: Lazy<Style> = Lazy::new(|| Style::new().dim());
pub static META: Lazy<Style> = Lazy::new(|| Style::new().color256(245).italic());
pub static ACTION: Lazy<Style> = Lazy::new(|| Style::new().cyan().bold());
pub static EMPTY: Lazy<Style> = Lazy::new(|| Style::new().dim());

pub fn badge_style(kind: ResourceType) -> &'static Style {
    match kind {
        ResourceType::WhitePaper => &BADGE_WHITE_PAPER,
        ResourceType::Infographic => &BADGE_INFOGRAPHIC,
        ResourceType::Video => &BADGE_VIDEO,
    }
}
