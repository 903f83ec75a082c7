//! Interaction handlers: in-page scrolling, the mobile nav, the footer year.
//!
//! Clicks are delegated: the host forwards every document-level click and
//! [`resolve_click`] answers whether to suppress default handling and where
//! to smooth-scroll. Only anchors with a non-empty `#fragment` href pointing
//! at an element that actually exists are captured; everything else falls
//! through untouched, a bare `"#"` included.
//!
//! The nav toggle flips the list's `open` class and mirrors the state into
//! `aria-expanded` on the toggle button, so assistive tech sees what the
//! stylesheet shows. The footer year is written once at mount.

use log::trace;

use crate::dom::{Document, NodeId};
use crate::markers;
use crate::time::Clock;

/// What the host should do with a click it delegated here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickOutcome {
    /// Suppress the host's default link handling.
    pub prevent_default: bool,
    /// Element whose top edge the host should smooth-scroll to.
    pub scroll_to: Option<NodeId>,
}

impl ClickOutcome {
    /// Let the click fall through untouched.
    pub fn pass() -> Self {
        Self {
            prevent_default: false,
            scroll_to: None,
        }
    }

    fn capture(target: NodeId) -> Self {
        Self {
            prevent_default: true,
            scroll_to: Some(target),
        }
    }
}

/// Resolve a delegated document-level click on `clicked`.
pub fn resolve_click(doc: &Document, clicked: NodeId) -> ClickOutcome {
    if doc.tag(clicked) != Some(markers::ANCHOR_TAG) {
        return ClickOutcome::pass();
    }
    let Some(fragment) = doc.attr(clicked, "href").and_then(markers::fragment) else {
        return ClickOutcome::pass();
    };
    match doc.element_by_id(fragment) {
        Some(destination) => {
            trace!("event=smooth_scroll fragment={fragment}");
            ClickOutcome::capture(destination)
        }
        None => ClickOutcome::pass(),
    }
}

/// The toggle button and the list it controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavHandles {
    pub toggle: NodeId,
    pub list: NodeId,
}

/// Locate the nav pair once at startup. A page missing either piece has no
/// mobile nav and gets `None`.
pub fn find_nav(doc: &Document) -> Option<NavHandles> {
    let toggle = doc
        .elements_by_class(markers::NAV_TOGGLE)
        .into_iter()
        .next()?;
    let list = doc.elements_by_class(markers::NAV_LIST).into_iter().next()?;
    Some(NavHandles { toggle, list })
}

/// Flip the list's `open` class and mirror the new state into
/// `aria-expanded`. Returns whether the nav is open afterwards.
pub fn toggle_nav(doc: &mut Document, nav: NavHandles) -> bool {
    let open = doc.toggle_class(nav.list, markers::OPEN);
    doc.set_attr(nav.toggle, "aria-expanded", if open { "true" } else { "false" });
    trace!("event=nav_toggle open={open}");
    open
}

/// Write the current calendar year into the footer slot, if the page has one.
pub fn stamp_year<C: Clock>(doc: &mut Document, clock: &C) {
    let Some(slot) = doc
        .elements_by_class(markers::FOOTER_YEAR)
        .into_iter()
        .next()
    else {
        return;
    };
    doc.set_text(slot, &clock.year().to_string());
}
