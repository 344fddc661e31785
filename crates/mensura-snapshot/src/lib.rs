//! Frozen layout snapshots and the style/layout query capability.
//!
//! # Scope
//!
//! The measuring code in `mensura-measure` never touches a live document.
//! It reads everything through the [`LayoutQuery`] trait defined here: parent
//! links, computed geometry-affecting style, document-relative border boxes,
//! client sizes, and the viewport/scroll state of the rendering surface.
//!
//! This crate provides:
//! - **Computed geometry style** ([CSS Cascading Level 4 § 4.4](https://www.w3.org/TR/css-cascade-4/#computed))
//!   - the subset of computed values that affect measurement: display,
//!     position, overflow, box-layer thicknesses, and the properties that
//!     promote an ancestor to a containing block
//! - **Engine quirks** - an injected profile for the browser-conditional
//!   branches of containing-block resolution (no runtime engine sniffing)
//! - **Layout snapshot** - an arena tree of measured nodes implementing
//!   [`LayoutQuery`], used both as the test double and as the bridge format
//!   a real document inspector fills in
//!
//! A snapshot is immutable once handed to the measuring code. It doubles as
//! the style memo: callers rebuild it after any layout-affecting mutation,
//! which is the only invalidation the engine needs.

/// The engine-quirk profile consulted by containing-block predicates.
pub mod quirks;
/// The style/layout query capability consumed by all measuring code.
pub mod query;
/// Computed geometry-affecting style per [CSS Cascading Level 4](https://www.w3.org/TR/css-cascade-4/).
pub mod style;
/// Arena layout snapshot: nodes, border boxes, and tree structure.
pub mod tree;

pub use quirks::EngineQuirks;
pub use query::LayoutQuery;
pub use style::{ComputedGeometry, Display, Overflow, Position};
pub use tree::{LayoutNode, LayoutSnapshot, NodeId};
