//! One-shot reveal animations.
//!
//! Elements marked `reveal-up` or `reveal-fade` start hidden (the stylesheet
//! handles that) and gain `is-visible` once they scroll into view. The
//! lifecycle per element:
//!
//! 1. registered with the host's visibility primitive (threshold 0.12,
//!    bottom inset 40 px, so elements trigger a little before the edge),
//! 2. on the first intersection, a one-shot timer is scheduled `data-delay`
//!    seconds out and the element leaves the observation set for good,
//! 3. when the timer fires, the element gains `is-visible`.
//!
//! Each element runs this exactly once. Re-registering after a render,
//! duplicate intersection entries, and even detaching the node between
//! schedule and fire are all quiet no-ops or tolerated writes.

use std::collections::BTreeSet;

use log::{debug, trace};

use crate::dom::{Document, NodeId};
use crate::markers;
use crate::observer::{IntersectionEntry, Observer, ObserverOptions};
use crate::time::TimerQueue;

/// Fraction of a reveal element that must be visible to trigger it.
pub const REVEAL_THRESHOLD: f64 = 0.12;

/// Bottom inset of the reveal observation area, in pixels.
pub const REVEAL_MARGIN_BOTTOM: f64 = 40.0;

/// Schedules one reveal per marked element, ever.
#[derive(Debug)]
pub struct RevealAnimator {
    observer: Observer,
    done: BTreeSet<NodeId>,
}

impl Default for RevealAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl RevealAnimator {
    pub fn new() -> Self {
        Self {
            observer: Observer::new(ObserverOptions {
                threshold: REVEAL_THRESHOLD,
                root_margin_bottom: REVEAL_MARGIN_BOTTOM,
            }),
            done: BTreeSet::new(),
        }
    }

    /// Observe every reveal element not already scheduled or revealed.
    ///
    /// Runs at mount and again after each render so freshly built elements
    /// join the same observer. Elements that already ran their reveal stay
    /// done. Returns how many elements were newly observed.
    pub fn register_all(&mut self, doc: &Document) -> usize {
        let mut added = 0;
        for target in markers::reveal_targets(doc) {
            if self.done.contains(&target) {
                continue;
            }
            if self.observer.observe(target) {
                added += 1;
            }
        }
        if added > 0 {
            debug!(
                "event=reveal_register added={added} watching={}",
                self.observer.len()
            );
        }
        added
    }

    /// Elements the host must watch, in registration order.
    pub fn targets(&self) -> &[NodeId] {
        self.observer.targets()
    }

    pub fn options(&self) -> ObserverOptions {
        self.observer.options()
    }

    /// Handle one host batch: each first intersection schedules the reveal
    /// timer and permanently unobserves the element.
    pub fn on_entries(
        &mut self,
        doc: &Document,
        entries: &[IntersectionEntry],
        timers: &mut TimerQueue<NodeId>,
        now_ms: u64,
    ) {
        for entry in entries {
            if !entry.is_intersecting || !self.observer.is_observing(entry.target) {
                continue;
            }
            let delay_ms = (markers::delay_seconds(doc, entry.target) * 1000.0).round() as u64;
            // Cast and addition both saturate; an oversized data-delay parks
            // the timer rather than wrapping the deadline.
            timers.schedule(now_ms.saturating_add(delay_ms), entry.target);
            self.done.insert(entry.target);
            self.observer.unobserve(entry.target);
            trace!("event=reveal_schedule node={} delay_ms={delay_ms}", entry.target);
        }
    }

    /// A reveal timer fired: mark the element visible. The write lands even
    /// if the node was detached in the meantime.
    pub fn on_timer(&self, doc: &mut Document, target: NodeId) {
        doc.add_class(target, markers::VISIBLE);
        trace!("event=reveal_fire node={target}");
    }
}
