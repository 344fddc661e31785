//! Arena layout snapshot.
//!
//! A [`LayoutSnapshot`] is a frozen picture of one already-laid-out document:
//! every node's border box in document coordinates, its geometry-affecting
//! computed style, the tree structure linking them, and the viewport/scroll
//! state of the rendering surface.
//!
//! # Design
//!
//! Nodes live in an arena indexed by [`NodeId`], giving O(1) access and
//! parent traversal without borrow-checker friction. The snapshot is built
//! once and then only read; rebuilding after a layout-affecting mutation is
//! the caller's responsibility and the engine's only invalidation rule.

use serde::Serialize;

use mensura_geom::{Offset, Rect};

use crate::style::ComputedGeometry;

/// A type-safe index into a [`LayoutSnapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The root (document element) node is always at index 0.
    pub const ROOT: NodeId = NodeId(0);
}

/// One measured node: its computed style, border box, and tree links.
#[derive(Debug, Clone, Serialize)]
pub struct LayoutNode {
    /// Geometry-affecting computed style of this node.
    pub style: ComputedGeometry,
    /// Border box in document coordinates (fractional, as a native
    /// bounding-box API reports it).
    pub border_box: Rect,
    /// Client area size (padding box minus scrollbar space), when it differs
    /// from the derived `border box - borders`. `None` means the node shows
    /// no scrollbars.
    pub client_size: Option<(f32, f32)>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl LayoutNode {
    /// A node with the given border box, default style, and no scrollbars.
    #[must_use]
    pub fn new(border_box: Rect) -> Self {
        Self {
            style: ComputedGeometry::default(),
            border_box,
            client_size: None,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Replace the node's computed style.
    #[must_use]
    pub fn with_style(mut self, style: ComputedGeometry) -> Self {
        self.style = style;
        self
    }

    /// Style the node from a `;`-separated declaration list.
    #[must_use]
    pub fn with_declarations(mut self, declarations: &str) -> Self {
        self.style = ComputedGeometry::from_declarations(declarations);
        self
    }

    /// Give the node an explicit client area (simulates scrollbar space).
    #[must_use]
    pub const fn with_client_size(mut self, width: f32, height: f32) -> Self {
        self.client_size = Some((width, height));
        self
    }

    /// The node's parent, if any.
    #[must_use]
    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// The node's children, in insertion order.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// A frozen layout snapshot of one document plus its rendering surface.
#[derive(Debug, Clone, Serialize)]
pub struct LayoutSnapshot {
    nodes: Vec<LayoutNode>,
    viewport: (f32, f32),
    viewport_client: (f32, f32),
    scroll: Offset,
    scroll_size: (f32, f32),
}

impl LayoutSnapshot {
    /// Create a snapshot whose root (document element) border box fills a
    /// viewport of the given size. The viewport client size and document
    /// scrollable extent default to the same size (no scrollbars, nothing
    /// scrolled out of view); adjust them with the setters below.
    #[must_use]
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            nodes: vec![LayoutNode::new(Rect::new(
                0.0,
                0.0,
                viewport_width,
                viewport_height,
            ))],
            viewport: (viewport_width, viewport_height),
            viewport_client: (viewport_width, viewport_height),
            scroll: Offset::default(),
            scroll_size: (viewport_width, viewport_height),
        }
    }

    /// Insert a node under `parent` and return its id.
    ///
    /// # Panics
    /// Panics if `parent` is not a node of this snapshot.
    pub fn insert(&mut self, parent: NodeId, mut node: LayoutNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        node.parent = Some(parent);
        self.nodes[parent.0].children.push(id);
        self.nodes.push(node);
        id
    }

    /// Borrow a node.
    ///
    /// # Panics
    /// Panics if `id` is not a node of this snapshot.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &LayoutNode {
        &self.nodes[id.0]
    }

    /// Mutably borrow a node (snapshot construction only).
    ///
    /// # Panics
    /// Panics if `id` is not a node of this snapshot.
    pub fn node_mut(&mut self, id: NodeId) -> &mut LayoutNode {
        &mut self.nodes[id.0]
    }

    /// Number of nodes in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A snapshot always holds at least the root node.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Viewport size including any classic window scrollbar.
    #[must_use]
    pub const fn viewport(&self) -> (f32, f32) {
        self.viewport
    }

    /// Viewport size with window scrollbar space excluded.
    #[must_use]
    pub const fn viewport_client(&self) -> (f32, f32) {
        self.viewport_client
    }

    /// Record the viewport client size (excluding window scrollbars).
    pub fn set_viewport_client(&mut self, width: f32, height: f32) {
        self.viewport_client = (width, height);
    }

    /// Current window scroll position.
    #[must_use]
    pub const fn scroll(&self) -> Offset {
        self.scroll
    }

    /// Record the window scroll position.
    pub fn set_scroll(&mut self, scroll: Offset) {
        self.scroll = scroll;
    }

    /// Scrollable extent of the whole document.
    #[must_use]
    pub const fn scroll_size(&self) -> (f32, f32) {
        self.scroll_size
    }

    /// Record the document's scrollable extent.
    pub fn set_scroll_size(&mut self, width: f32, height: f32) {
        self.scroll_size = (width, height);
    }
}
