//! Scroll-linked effects: progress bar, parallax layers, active section.
//!
//! Two stateless computations run on every admitted scroll tick:
//!
//! | Effect | Formula | Written as |
//! |--------|---------|------------|
//! | Progress | `scroll_y / (content_height - height) * 100` | inline `width: {p}%` |
//! | Parallax | `scroll_y * depth * 0.25` | inline `transform: translate3d(0, {y}px, 0)` |
//!
//! A document no taller than the viewport reports 0 progress. Per-layer
//! depth comes from `data-depth` (stock 0.1). Working nodes are resolved
//! once at construction; a page without a progress bar or without layers
//! simply skips that effect.
//!
//! [`SectionTracker`] is the third effect: it registers every `section`
//! element with the host's visibility primitive (threshold 0.55) and moves
//! the `active` class between nav links as sections cross the threshold.
//! Batches are processed in delivery order, so the last intersecting entry
//! of a batch ends up owning the highlight.

use log::{debug, trace};

use crate::dom::{Document, NodeId};
use crate::markers;
use crate::observer::{IntersectionEntry, Observer, ObserverOptions};
use crate::throttle::Throttle;

/// Scroll events are admitted at most once per this window.
pub const SCROLL_THROTTLE_MS: u64 = 20;

/// Global speed factor applied on top of each layer's depth.
pub const PARALLAX_FACTOR: f64 = 0.25;

/// Fraction of a section that must be visible to take the nav highlight.
pub const SECTION_THRESHOLD: f64 = 0.55;

/// Viewport geometry delivered by the host with each scroll event.
///
/// The document tree carries no layout, so the numbers the effects need
/// travel with the event instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Scroll offset from the top of the document, in pixels.
    pub scroll_y: f64,
    /// Visible viewport height, in pixels.
    pub height: f64,
    /// Total scrollable height of the document, in pixels.
    pub content_height: f64,
}

impl Viewport {
    pub fn new(scroll_y: f64, height: f64, content_height: f64) -> Self {
        Self {
            scroll_y,
            height,
            content_height,
        }
    }
}

/// Scroll progress as a percentage of the scrollable distance.
pub fn progress_percent(view: Viewport) -> f64 {
    let scrollable = view.content_height - view.height;
    if scrollable <= 0.0 {
        0.0
    } else {
        view.scroll_y / scrollable * 100.0
    }
}

/// Vertical parallax translation for one layer, in pixels.
pub fn parallax_offset(scroll_y: f64, depth: f64) -> f64 {
    scroll_y * depth * PARALLAX_FACTOR
}

/// Progress bar and parallax writer.
#[derive(Debug)]
pub struct ScrollEffects {
    progress_bar: Option<NodeId>,
    layers: Vec<NodeId>,
    gate: Throttle,
}

impl ScrollEffects {
    /// Resolve the working nodes once. Whatever is missing stays off.
    pub fn new(doc: &Document) -> Self {
        let progress_bar = doc
            .elements_by_class(markers::SCROLL_PROGRESS)
            .into_iter()
            .next();
        let layers = doc.elements_by_class(markers::LAYER);
        debug!(
            "event=effects_init progress_bar={} layers={}",
            progress_bar.is_some(),
            layers.len()
        );
        Self {
            progress_bar,
            layers,
            gate: Throttle::new(SCROLL_THROTTLE_MS),
        }
    }

    /// Throttled entry point for scroll events. Returns whether the tick
    /// was admitted.
    pub fn tick(&mut self, doc: &mut Document, view: Viewport, now_ms: u64) -> bool {
        if !self.gate.admit(now_ms) {
            return false;
        }
        self.apply(doc, view);
        true
    }

    /// One unthrottled pass over both effects. Runs once at mount and on
    /// every admitted tick.
    pub fn apply(&self, doc: &mut Document, view: Viewport) {
        if let Some(bar) = self.progress_bar {
            let progress = progress_percent(view);
            doc.set_style(bar, "width", &format!("{progress}%"));
        }
        for layer in &self.layers {
            let depth = markers::depth(doc, *layer);
            let offset = parallax_offset(view.scroll_y, depth);
            doc.set_style(*layer, "transform", &format!("translate3d(0, {offset}px, 0)"));
        }
        trace!(
            "event=scroll_apply scroll_y={} layers={}",
            view.scroll_y,
            self.layers.len()
        );
    }
}

/// Moves the `active` class between nav links as sections scroll by.
#[derive(Debug)]
pub struct SectionTracker {
    observer: Observer,
    links: Vec<NodeId>,
}

impl SectionTracker {
    /// Register every `section` element for observation and cache the nav
    /// links once.
    pub fn new(doc: &Document) -> Self {
        let mut observer = Observer::new(ObserverOptions {
            threshold: SECTION_THRESHOLD,
            root_margin_bottom: 0.0,
        });
        for section in markers::sections(doc) {
            observer.observe(section);
        }
        let links = doc.elements_by_class(markers::NAV_LINK);
        debug!(
            "event=sections_init sections={} links={}",
            observer.len(),
            links.len()
        );
        Self { observer, links }
    }

    /// Sections the host must watch, in registration order.
    pub fn targets(&self) -> &[NodeId] {
        self.observer.targets()
    }

    pub fn options(&self) -> ObserverOptions {
        self.observer.options()
    }

    /// Process one host batch in delivery order.
    ///
    /// Each intersecting entry whose section id matches a nav link fragment
    /// clears every link and highlights that one, so the last match in the
    /// batch wins. Entries without an id, without a matching link, or
    /// reporting a departure are ignored.
    pub fn on_entries(&mut self, doc: &mut Document, entries: &[IntersectionEntry]) {
        for entry in entries {
            if !entry.is_intersecting || !self.observer.is_observing(entry.target) {
                continue;
            }
            let Some(section_id) = doc.attr(entry.target, "id").map(str::to_string) else {
                continue;
            };
            let matched = self.links.iter().copied().find(|link| {
                doc.attr(*link, "href").and_then(markers::fragment) == Some(section_id.as_str())
            });
            let Some(active_link) = matched else {
                continue;
            };
            for link in &self.links {
                doc.remove_class(*link, markers::ACTIVE);
            }
            doc.add_class(active_link, markers::ACTIVE);
            trace!("event=section_active id={section_id}");
        }
    }
}
