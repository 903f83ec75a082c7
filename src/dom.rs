//! In-memory document tree.
//!
//! The engine never assumes a browser. All reads and writes go through this
//! arena-backed tree: nodes live in a flat `Vec`, handles are integer
//! [`NodeId`]s, and the tree shape is stored as per-element child lists. The
//! host page hands the engine a populated `Document`; tests build small ones
//! by hand.
//!
//! ## Node kinds
//!
//! - **Element**: tag name, attributes, class list, inline style properties,
//!   ordered children.
//! - **Text**: a string payload, no children.
//!
//! ## Queries
//!
//! `element_by_id`, `elements_by_class`, and `elements_by_tag` walk the
//! attached subtree in tree order (depth-first, document order). Detached
//! nodes never match a query, but they stay alive in the arena and accept
//! mutation; a reveal animation landing on a node that was removed in the
//! meantime writes its class and nothing breaks.
//!
//! ## Mutation policy
//!
//! Element-only operations (attributes, classes, style) are no-ops on text
//! nodes and on stale ids. Only structural mistakes are hard errors:
//! appending under a text node or appending a node into its own subtree
//! returns [`DomError`].

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum DomError {
    #[error("node {0} is not an element and cannot take children")]
    NotAnElement(NodeId),
    #[error("appending node {child} under node {parent} would create a cycle")]
    WouldCycle { parent: NodeId, child: NodeId },
}

/// Handle to a node in a [`Document`] arena.
///
/// Ids are minted by the document that owns the node and are never reused;
/// a detached node keeps its id for as long as the document lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone)]
struct ElementData {
    tag: String,
    attrs: BTreeMap<String, String>,
    classes: Vec<String>,
    style: BTreeMap<String, String>,
    children: Vec<NodeId>,
}

impl ElementData {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attrs: BTreeMap::new(),
            classes: Vec::new(),
            style: BTreeMap::new(),
            children: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
enum NodeData {
    Element(ElementData),
    Text(String),
}

#[derive(Debug, Clone)]
struct Node {
    data: NodeData,
    parent: Option<NodeId>,
}

/// Arena-backed element/text tree with a fixed root element.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty document whose root is a `body` element.
    pub fn new() -> Self {
        let root_node = Node {
            data: NodeData::Element(ElementData::new("body")),
            parent: None,
        };
        Self {
            nodes: vec![root_node],
            root: NodeId(0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    // =========================================================================
    // Node creation and tree structure
    // =========================================================================

    /// Create a detached element. Attach it with [`Document::append_child`].
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(NodeData::Element(ElementData::new(tag)))
    }

    /// Create a detached text node.
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push(NodeData::Text(text.to_string()))
    }

    fn push(&mut self, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node { data, parent: None });
        id
    }

    /// Append `child` as the last child of `parent`, detaching it from its
    /// current parent first.
    ///
    /// Errors when `parent` is a text node or when `child` sits on the
    /// ancestor chain of `parent` (including `child == parent`).
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        if !matches!(self.node(parent).map(|n| &n.data), Some(NodeData::Element(_))) {
            return Err(DomError::NotAnElement(parent));
        }
        let mut cursor = Some(parent);
        while let Some(id) = cursor {
            if id == child {
                return Err(DomError::WouldCycle { parent, child });
            }
            cursor = self.node(id).and_then(|n| n.parent);
        }
        self.detach(child);
        if let Some(el) = self.element_mut(parent) {
            el.children.push(child);
        }
        if let Some(node) = self.node_mut(child) {
            node.parent = Some(parent);
        }
        Ok(())
    }

    /// Remove `id` from its parent's child list. The node and its subtree
    /// stay alive in the arena and keep accepting writes.
    pub fn detach(&mut self, id: NodeId) {
        let Some(parent) = self.node(id).and_then(|n| n.parent) else {
            return;
        };
        if let Some(el) = self.element_mut(parent) {
            el.children.retain(|c| *c != id);
        }
        if let Some(node) = self.node_mut(id) {
            node.parent = None;
        }
    }

    /// Detach every child of `id`. No-op on text nodes.
    pub fn clear_children(&mut self, id: NodeId) {
        let children: Vec<NodeId> = self.children(id).to_vec();
        for child in children {
            self.detach(child);
        }
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match self.node(id).map(|n| &n.data) {
            Some(NodeData::Element(el)) => &el.children,
            _ => &[],
        }
    }

    /// Tag name, or `None` for text nodes.
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        match self.node(id).map(|n| &n.data) {
            Some(NodeData::Element(el)) => Some(el.tag.as_str()),
            _ => None,
        }
    }

    /// Whether the node is reachable from the root.
    pub fn is_attached(&self, id: NodeId) -> bool {
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            if current == self.root {
                return true;
            }
            cursor = self.node(current).and_then(|n| n.parent);
        }
        false
    }

    // =========================================================================
    // Text
    // =========================================================================

    /// Replace the node's textual content.
    ///
    /// On an element this detaches all children and installs a single text
    /// child (the `textContent` write semantics). On a text node it replaces
    /// the payload.
    pub fn set_text(&mut self, id: NodeId, text: &str) {
        match self.node(id).map(|n| &n.data) {
            Some(NodeData::Element(_)) => {
                self.clear_children(id);
                let child = self.create_text(text);
                // Cannot fail: id is an element and child is brand new.
                let _ = self.append_child(id, child);
            }
            Some(NodeData::Text(_)) => {
                if let Some(node) = self.node_mut(id) {
                    node.data = NodeData::Text(text.to_string());
                }
            }
            None => {}
        }
    }

    /// Concatenated text of the node and its descendants, in tree order.
    pub fn text(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        match self.node(id).map(|n| &n.data) {
            Some(NodeData::Text(value)) => out.push_str(value),
            Some(NodeData::Element(el)) => {
                for child in &el.children {
                    self.collect_text(*child, out);
                }
            }
            None => {}
        }
    }

    // =========================================================================
    // Attributes, classes, inline style
    // =========================================================================

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        match self.node(id).map(|n| &n.data) {
            Some(NodeData::Element(el)) => el.attrs.get(name).map(String::as_str),
            _ => None,
        }
    }

    pub fn set_attr(&mut self, id: NodeId, name: &str, value: &str) {
        if let Some(el) = self.element_mut(id) {
            el.attrs.insert(name.to_string(), value.to_string());
        }
    }

    pub fn remove_attr(&mut self, id: NodeId, name: &str) {
        if let Some(el) = self.element_mut(id) {
            el.attrs.remove(name);
        }
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        match self.node(id).map(|n| &n.data) {
            Some(NodeData::Element(el)) => el.classes.iter().any(|c| c == class),
            _ => false,
        }
    }

    /// Add a class if absent. Duplicates are never stored.
    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if self.has_class(id, class) {
            return;
        }
        if let Some(el) = self.element_mut(id) {
            el.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        if let Some(el) = self.element_mut(id) {
            el.classes.retain(|c| c != class);
        }
    }

    /// Toggle a class and report whether it is present afterwards.
    pub fn toggle_class(&mut self, id: NodeId, class: &str) -> bool {
        if self.has_class(id, class) {
            self.remove_class(id, class);
            false
        } else {
            self.add_class(id, class);
            self.has_class(id, class)
        }
    }

    pub fn classes(&self, id: NodeId) -> Vec<&str> {
        match self.node(id).map(|n| &n.data) {
            Some(NodeData::Element(el)) => el.classes.iter().map(String::as_str).collect(),
            _ => Vec::new(),
        }
    }

    pub fn style(&self, id: NodeId, prop: &str) -> Option<&str> {
        match self.node(id).map(|n| &n.data) {
            Some(NodeData::Element(el)) => el.style.get(prop).map(String::as_str),
            _ => None,
        }
    }

    pub fn set_style(&mut self, id: NodeId, prop: &str, value: &str) {
        if let Some(el) = self.element_mut(id) {
            el.style.insert(prop.to_string(), value.to_string());
        }
    }

    // =========================================================================
    // Queries: attached subtree, tree order
    // =========================================================================

    /// Every attached element in tree order, root included.
    pub fn attached_elements(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.walk(self.root, &mut out);
        out
    }

    fn walk(&self, id: NodeId, out: &mut Vec<NodeId>) {
        if let Some(NodeData::Element(el)) = self.node(id).map(|n| &n.data) {
            out.push(id);
            for child in &el.children {
                self.walk(*child, out);
            }
        }
    }

    /// First attached element whose `id` attribute equals `id_value`.
    pub fn element_by_id(&self, id_value: &str) -> Option<NodeId> {
        self.attached_elements()
            .into_iter()
            .find(|n| self.attr(*n, "id") == Some(id_value))
    }

    pub fn elements_by_class(&self, class: &str) -> Vec<NodeId> {
        self.attached_elements()
            .into_iter()
            .filter(|n| self.has_class(*n, class))
            .collect()
    }

    pub fn elements_by_tag(&self, tag: &str) -> Vec<NodeId> {
        self.attached_elements()
            .into_iter()
            .filter(|n| self.tag(*n) == Some(tag))
            .collect()
    }

    // =========================================================================
    // Arena access
    // =========================================================================

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    fn element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        match self.node_mut(id).map(|n| &mut n.data) {
            Some(NodeData::Element(el)) => Some(el),
            _ => None,
        }
    }
}
