//! Observation registries: the seam to the host's visibility primitive.
//!
//! The engine never measures visibility itself. It keeps an ordered registry
//! of nodes it wants watched plus the options the watcher must apply; the
//! host wires those into its real intersection primitive and reports changes
//! back as [`IntersectionEntry`] batches. Tests play the host and hand-craft
//! the batches.
//!
//! Entry order matters: consumers process a batch front to back and later
//! entries win ties.

use crate::dom::NodeId;

/// Configuration the host applies to the visibility primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    /// Fraction of the target that must be visible to count as intersecting.
    pub threshold: f64,
    /// Inset in pixels shrinking the observation area upward from the
    /// viewport's bottom edge.
    pub root_margin_bottom: f64,
}

/// One visibility change reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntersectionEntry {
    pub target: NodeId,
    pub is_intersecting: bool,
}

impl IntersectionEntry {
    pub fn visible(target: NodeId) -> Self {
        Self {
            target,
            is_intersecting: true,
        }
    }

    pub fn hidden(target: NodeId) -> Self {
        Self {
            target,
            is_intersecting: false,
        }
    }
}

/// Ordered, duplicate-free set of observed nodes.
#[derive(Debug, Clone)]
pub struct Observer {
    options: ObserverOptions,
    targets: Vec<NodeId>,
}

impl Observer {
    pub fn new(options: ObserverOptions) -> Self {
        Self {
            options,
            targets: Vec::new(),
        }
    }

    pub fn options(&self) -> ObserverOptions {
        self.options
    }

    /// Start observing a node. Returns false when it was already observed.
    pub fn observe(&mut self, id: NodeId) -> bool {
        if self.is_observing(id) {
            return false;
        }
        self.targets.push(id);
        true
    }

    /// Stop observing a node. Returns whether it was observed.
    pub fn unobserve(&mut self, id: NodeId) -> bool {
        let before = self.targets.len();
        self.targets.retain(|t| *t != id);
        self.targets.len() != before
    }

    pub fn is_observing(&self, id: NodeId) -> bool {
        self.targets.contains(&id)
    }

    /// Observed nodes in registration order.
    pub fn targets(&self) -> &[NodeId] {
        &self.targets
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
