//! Measurable entities and argument normalization.
//!
//! Geometry queries accept four kinds of measurable things: an element of
//! the snapshot, the window (visual viewport), the whole document, or a
//! literal rectangle. Instead of duck typing at every call site, the union
//! is closed here and normalized once into a [`BoxTarget`].

use serde::Serialize;

use mensura_geom::{Edge, Offset, Rect};
use mensura_snapshot::NodeId;

/// Something that can be measured.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Entity {
    /// An element node of the layout snapshot.
    Element(NodeId),
    /// The window: viewport-sized, offset by the current scroll position.
    Window,
    /// The whole document: never smaller than what is visible, offset at
    /// the document origin.
    Document,
    /// A literal rectangle, measured as-is (the identity case).
    Rect(Rect),
}

/// An entity pinned to one box-model layer.
///
/// The "bare entity or 2-tuple" calling convention: a bare [`Entity`]
/// converts with the default [`Edge::Border`] layer, an `(Entity, Edge)`
/// pair selects the layer explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoxTarget {
    /// The entity to measure.
    pub entity: Entity,
    /// The box-model layer to measure it at.
    pub edge: Edge,
}

impl BoxTarget {
    /// Pin `entity` to `edge`.
    #[must_use]
    pub const fn new(entity: Entity, edge: Edge) -> Self {
        Self { entity, edge }
    }
}

impl From<Entity> for BoxTarget {
    fn from(entity: Entity) -> Self {
        Self::new(entity, Edge::Border)
    }
}

impl From<(Entity, Edge)> for BoxTarget {
    fn from((entity, edge): (Entity, Edge)) -> Self {
        Self::new(entity, edge)
    }
}

impl From<NodeId> for BoxTarget {
    fn from(node: NodeId) -> Self {
        Entity::Element(node).into()
    }
}

impl From<(NodeId, Edge)> for BoxTarget {
    fn from((node, edge): (NodeId, Edge)) -> Self {
        Self::new(Entity::Element(node), edge)
    }
}

impl From<Rect> for BoxTarget {
    fn from(rect: Rect) -> Self {
        Entity::Rect(rect).into()
    }
}

/// The origin a measurement can be translated into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum RelativeTo {
    /// Another measured entity's offset becomes the origin.
    Target(BoxTarget),
    /// A literal point becomes the origin.
    Point(Offset),
}

impl From<BoxTarget> for RelativeTo {
    fn from(target: BoxTarget) -> Self {
        Self::Target(target)
    }
}

impl From<Entity> for RelativeTo {
    fn from(entity: Entity) -> Self {
        Self::Target(entity.into())
    }
}

impl From<(Entity, Edge)> for RelativeTo {
    fn from(pair: (Entity, Edge)) -> Self {
        Self::Target(pair.into())
    }
}

impl From<NodeId> for RelativeTo {
    fn from(node: NodeId) -> Self {
        Self::Target(node.into())
    }
}

impl From<(NodeId, Edge)> for RelativeTo {
    fn from(pair: (NodeId, Edge)) -> Self {
        Self::Target(pair.into())
    }
}

impl From<Rect> for RelativeTo {
    fn from(rect: Rect) -> Self {
        Self::Target(rect.into())
    }
}

impl From<Offset> for RelativeTo {
    fn from(point: Offset) -> Self {
        Self::Point(point)
    }
}
