//! Application context: one object owning the page and every moving part.
//!
//! There is no global state anywhere in this crate. [`App`] owns the
//! document, the content, the clock, the reveal timers, and the three
//! effect components, and the host drives it through a small event surface:
//!
//! | Host event | Call |
//! |------------|------|
//! | page load | [`App::mount`] |
//! | scroll (with geometry) | [`App::on_scroll`] |
//! | delegated click | [`App::on_click`] |
//! | nav toggle press | [`App::on_nav_toggle`] |
//! | reveal observer batch | [`App::deliver_reveal_entries`] |
//! | section observer batch | [`App::deliver_section_entries`] |
//! | timer deadline passed | [`App::run_timers`] |
//!
//! The host also reads [`App::reveal_targets`] / [`App::section_targets`]
//! (plus their options) to keep its real visibility primitives in sync, and
//! [`App::next_timer_deadline`] to know when to pump timers next.
//!
//! ## Mount sequence
//!
//! Validate content, observe the page's own reveal elements, stamp the
//! footer year, render the content, observe the freshly rendered reveal
//! elements, then run one unthrottled effects pass so the page is correct
//! before the first scroll.

use log::debug;
use thiserror::Error;

use crate::content::{ContentError, SiteContent};
use crate::dom::{Document, NodeId};
use crate::effects::{ScrollEffects, SectionTracker, Viewport};
use crate::interact::{self, ClickOutcome, NavHandles};
use crate::observer::{IntersectionEntry, ObserverOptions};
use crate::render::{self, RenderError, RenderStats};
use crate::reveal::RevealAnimator;
use crate::time::{Clock, SystemClock, TimerQueue};

#[derive(Error, Debug)]
pub enum MountError {
    #[error("Content error: {0}")]
    Content(#[from] ContentError),
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

/// The page engine. Generic over the clock so tests can drive time.
#[derive(Debug)]
pub struct App<C: Clock = SystemClock> {
    doc: Document,
    content: SiteContent,
    clock: C,
    timers: TimerQueue<NodeId>,
    effects: ScrollEffects,
    sections: SectionTracker,
    reveals: RevealAnimator,
    nav: Option<NavHandles>,
}

impl App<SystemClock> {
    /// Build a context over the system clock.
    pub fn new(doc: Document, content: SiteContent) -> Self {
        Self::with_clock(doc, content, SystemClock)
    }
}

impl<C: Clock> App<C> {
    /// Build a context over an explicit clock.
    ///
    /// Element lookups the components need (progress bar, layers, sections,
    /// nav links, the toggle pair) are resolved here, once.
    pub fn with_clock(doc: Document, content: SiteContent, clock: C) -> Self {
        let effects = ScrollEffects::new(&doc);
        let sections = SectionTracker::new(&doc);
        let nav = interact::find_nav(&doc);
        Self {
            doc,
            content,
            clock,
            timers: TimerQueue::new(),
            effects,
            sections,
            reveals: RevealAnimator::new(),
            nav,
        }
    }

    /// Bring the page up: validate, render, register observers, stamp the
    /// year, and run the initial effects pass.
    pub fn mount(&mut self, view: Viewport) -> Result<RenderStats, MountError> {
        self.content.validate()?;
        self.reveals.register_all(&self.doc);
        interact::stamp_year(&mut self.doc, &self.clock);
        let stats = render::populate(&mut self.doc, &self.content)?;
        // Rendered skill tags and cards join the same reveal observer
        self.reveals.register_all(&self.doc);
        self.effects.apply(&mut self.doc, view);
        debug!(
            "event=mount status=ok reveals={} sections={}",
            self.reveals.targets().len(),
            self.sections.targets().len()
        );
        Ok(stats)
    }

    // =========================================================================
    // Host events
    // =========================================================================

    /// Scroll happened. Runs the effects at most once per throttle window;
    /// returns whether this tick was admitted.
    pub fn on_scroll(&mut self, view: Viewport) -> bool {
        let now = self.clock.now_ms();
        self.effects.tick(&mut self.doc, view, now)
    }

    /// A delegated click landed on `clicked`.
    pub fn on_click(&self, clicked: NodeId) -> ClickOutcome {
        interact::resolve_click(&self.doc, clicked)
    }

    /// The nav toggle was pressed. `None` when the page has no mobile nav.
    pub fn on_nav_toggle(&mut self) -> Option<bool> {
        let nav = self.nav?;
        Some(interact::toggle_nav(&mut self.doc, nav))
    }

    /// The host's reveal observer reported visibility changes.
    pub fn deliver_reveal_entries(&mut self, entries: &[IntersectionEntry]) {
        let now = self.clock.now_ms();
        self.reveals
            .on_entries(&self.doc, entries, &mut self.timers, now);
    }

    /// The host's section observer reported visibility changes.
    pub fn deliver_section_entries(&mut self, entries: &[IntersectionEntry]) {
        self.sections.on_entries(&mut self.doc, entries);
    }

    /// Fire every reveal timer due by now. Returns how many fired.
    pub fn run_timers(&mut self) -> usize {
        let now = self.clock.now_ms();
        let due = self.timers.fire_due(now);
        let count = due.len();
        for target in due {
            self.reveals.on_timer(&mut self.doc, target);
        }
        count
    }

    // =========================================================================
    // Host wiring
    // =========================================================================

    /// Earliest pending reveal deadline, for the host's own scheduling.
    pub fn next_timer_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    /// Elements the host's reveal observer must watch right now.
    pub fn reveal_targets(&self) -> &[NodeId] {
        self.reveals.targets()
    }

    pub fn reveal_options(&self) -> ObserverOptions {
        self.reveals.options()
    }

    /// Sections the host's section observer must watch.
    pub fn section_targets(&self) -> &[NodeId] {
        self.sections.targets()
    }

    pub fn section_options(&self) -> ObserverOptions {
        self.sections.options()
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.doc
    }

    pub fn content(&self) -> &SiteContent {
        &self.content
    }
}
