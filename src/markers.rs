//! Marker vocabulary: the selector and attribute contract with the page.
//!
//! The engine finds its working elements by class markers, the `section` tag,
//! and two data attributes. This module is the single place those names live;
//! the markup and the stylesheet agree to the same contract.
//!
//! ## Conventions
//!
//! - Content containers are located by class (`skills-cloud`, `cards`, ...).
//!   A missing container deactivates that feature and nothing else.
//! - `data-delay` holds a reveal delay in seconds (`"0.2"` → 200 ms).
//!   Missing, malformed, or negative values mean no delay.
//! - `data-depth` holds a parallax depth factor. Missing, malformed, or
//!   negative values mean the stock depth of 0.1.
//! - Nav link fragments tie links to sections: a link with `href="#about"`
//!   tracks the section with `id="about"`.

use crate::dom::{Document, NodeId};

// =============================================================================
// Class markers: content containers
// =============================================================================

pub const LOGO: &str = "logo";
pub const EYEBROW: &str = "eyebrow";
pub const HEADLINE: &str = "headline";
pub const SUBHEAD: &str = "subhead";
pub const ABOUT_INTRO: &str = "about-intro";
pub const BULLETS: &str = "bullets";
pub const SKILLS_CLOUD: &str = "skills-cloud";
pub const CARDS: &str = "cards";
pub const SOCIALS: &str = "socials";
pub const CONTACT_LEAD: &str = "contact-lead";

// =============================================================================
// Class markers: chrome and effects
// =============================================================================

pub const NAV_TOGGLE: &str = "nav-toggle";
pub const NAV_LIST: &str = "nav-list";
pub const NAV_LINK: &str = "nav-link";
pub const SCROLL_PROGRESS: &str = "scroll-progress";
pub const LAYER: &str = "layer";
pub const FOOTER_YEAR: &str = "footer-year";
pub const REVEAL_UP: &str = "reveal-up";
pub const REVEAL_FADE: &str = "reveal-fade";

// State classes written by the engine, styled by the page.
pub const OPEN: &str = "open";
pub const ACTIVE: &str = "active";
pub const VISIBLE: &str = "is-visible";

// Classes the renderer stamps on generated elements.
pub const SKILL_TAG: &str = "tag";
pub const CARD: &str = "card";
pub const CARD_MEDIA: &str = "card-media";
pub const CARD_BODY: &str = "card-body";
pub const CARD_LINK: &str = "card-link";
pub const CARD_LINK_SECONDARY: &str = "card-link-secondary";
pub const CARD_BADGE: &str = "card-badge";
pub const SOCIAL: &str = "social";

// =============================================================================
// Attributes and tags
// =============================================================================

pub const DELAY_ATTR: &str = "data-delay";
pub const DEPTH_ATTR: &str = "data-depth";
pub const SECTION_TAG: &str = "section";
pub const ANCHOR_TAG: &str = "a";

/// Stock parallax depth when `data-depth` is absent or unusable.
pub const DEFAULT_DEPTH: f64 = 0.1;

// =============================================================================
// Parsers
// =============================================================================

/// Extract the target id from an in-page `href` fragment.
///
/// - `"#about"` → `Some("about")`
/// - `"#"` → `None` (bare hash points nowhere)
/// - `"/about"` → `None` (not an in-page link)
pub fn fragment(href: &str) -> Option<&str> {
    let rest = href.strip_prefix('#')?;
    if rest.is_empty() { None } else { Some(rest) }
}

/// Reveal delay in seconds from `data-delay`, defaulting to 0.
pub fn delay_seconds(doc: &Document, id: NodeId) -> f64 {
    parse_non_negative(doc.attr(id, DELAY_ATTR)).unwrap_or(0.0)
}

/// Parallax depth from `data-depth`, defaulting to [`DEFAULT_DEPTH`].
pub fn depth(doc: &Document, id: NodeId) -> f64 {
    parse_non_negative(doc.attr(id, DEPTH_ATTR)).unwrap_or(DEFAULT_DEPTH)
}

fn parse_non_negative(attr: Option<&str>) -> Option<f64> {
    let value: f64 = attr?.trim().parse().ok()?;
    if value.is_finite() && value >= 0.0 {
        Some(value)
    } else {
        None
    }
}

// =============================================================================
// Lookups
// =============================================================================

/// All attached reveal elements (`reveal-up` or `reveal-fade`) in tree order.
/// An element carrying both markers appears once.
pub fn reveal_targets(doc: &Document) -> Vec<NodeId> {
    doc.attached_elements()
        .into_iter()
        .filter(|id| doc.has_class(*id, REVEAL_UP) || doc.has_class(*id, REVEAL_FADE))
        .collect()
}

/// All attached `section` elements in tree order.
pub fn sections(doc: &Document) -> Vec<NodeId> {
    doc.elements_by_tag(SECTION_TAG)
}
