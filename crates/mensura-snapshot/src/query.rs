//! The style/layout query capability.
//!
//! Everything the measuring code knows about a document flows through this
//! trait: it is the seam between the pure geometry algorithms and whatever
//! inspector produced the numbers (a real browser binding, or a synthetic
//! [`LayoutSnapshot`] in tests). The resolver logic thereby becomes a pure
//! function of the sequence of styles an ancestor walk yields.

use mensura_geom::{Offset, Rect};

use crate::style::ComputedGeometry;
use crate::tree::{LayoutSnapshot, NodeId};

/// Read access to one already-computed layout.
///
/// All methods are cheap, side-effect-free reads of the same frozen layout
/// state; calls are independently re-entrant and order-insensitive.
pub trait LayoutQuery {
    /// Parent of `node`, or `None` for the root.
    fn parent(&self, node: NodeId) -> Option<NodeId>;

    /// Geometry-affecting computed style of `node`.
    fn style(&self, node: NodeId) -> &ComputedGeometry;

    /// Border box of `node` in document coordinates.
    fn border_box(&self, node: NodeId) -> Rect;

    /// Client area of `node`: padding box with scrollbar space excluded.
    fn client_size(&self, node: NodeId) -> (f32, f32);

    /// The document element.
    fn root(&self) -> NodeId;

    /// Viewport size including any classic window scrollbar.
    fn viewport_size(&self) -> (f32, f32);

    /// Viewport size with window scrollbar space excluded.
    fn viewport_client_size(&self) -> (f32, f32);

    /// Current window scroll position.
    fn scroll_offset(&self) -> Offset;

    /// Scrollable extent of the whole document.
    fn document_scroll_size(&self) -> (f32, f32);
}

impl LayoutQuery for LayoutSnapshot {
    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).parent()
    }

    fn style(&self, node: NodeId) -> &ComputedGeometry {
        &self.node(node).style
    }

    fn border_box(&self, node: NodeId) -> Rect {
        self.node(node).border_box
    }

    fn client_size(&self, node: NodeId) -> (f32, f32) {
        let measured = self.node(node);
        measured.client_size.unwrap_or_else(|| {
            // No scrollbars recorded: the client area is the padding box.
            let border = measured.style.border;
            (
                measured.border_box.width - border.left - border.right,
                measured.border_box.height - border.top - border.bottom,
            )
        })
    }

    fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    fn viewport_size(&self) -> (f32, f32) {
        self.viewport()
    }

    fn viewport_client_size(&self) -> (f32, f32) {
        self.viewport_client()
    }

    fn scroll_offset(&self) -> Offset {
        self.scroll()
    }

    fn document_scroll_size(&self) -> (f32, f32) {
        self.scroll_size()
    }
}
