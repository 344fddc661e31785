//! Containing-block and offset-container resolution.
//!
//! [CSS Positioned Layout Level 3 § 2.1](https://www.w3.org/TR/css-position-3/#def-cb)
//!
//! "The containing block of an element is the ancestor box against which
//! percentage-based sizes and the inset properties are resolved."
//!
//! The resolvers walk the ancestor chain and classify each ancestor with
//! predicates over its computed style. Shipping engines diverge on a handful
//! of triggers (filters, `content-visibility`), so the predicates consult an
//! injected [`EngineQuirks`] profile instead of sniffing the runtime.

use serde::Serialize;

use mensura_snapshot::{ComputedGeometry, Display, EngineQuirks, LayoutQuery, NodeId, Position};

/// The frame that resolves an element's percentage sizes and inset offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ContainingBlock {
    /// A concrete ancestor element.
    Element(NodeId),
    /// No ancestor matched; the viewport (initial containing block) applies.
    Window,
}

/// The frame that actually anchors `top/left/right/bottom` offsets.
///
/// For absolutely positioned elements falling through to the global frame,
/// offsets are measured against the document rather than the visual
/// viewport, hence the extra variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OffsetContainer {
    /// A concrete element (for `relative`, the element itself).
    Element(NodeId),
    /// The viewport (fixed elements with no matching ancestor).
    Window,
    /// The owning document (absolute elements with no matching ancestor).
    Document,
}

/// Options for a resolution call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ResolveOptions {
    /// Resolve as if the element had this position scheme instead of its
    /// computed one.
    pub position: Option<Position>,
    /// Pass over `display: none` ancestors instead of treating them as
    /// blocking the walk.
    pub skip_display_none: bool,
}

impl ResolveOptions {
    /// Override the element's position scheme.
    #[must_use]
    pub const fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Override the element's position scheme from its CSS keyword.
    ///
    /// # Errors
    /// Fails on an unrecognized keyword.
    pub fn with_position_keyword(self, keyword: &str) -> Result<Self, strum::ParseError> {
        Ok(self.with_position(keyword.trim().to_ascii_lowercase().parse()?))
    }

    /// Pass over `display: none` ancestors during the walk.
    #[must_use]
    pub const fn skipping_display_none(mut self) -> Self {
        self.skip_display_none = true;
        self
    }
}

/// How one ancestor walk ended.
enum WalkOutcome {
    /// An ancestor satisfied the predicate.
    Found(NodeId),
    /// The walk ran off the root without a match.
    Root,
    /// A non-skipped `display: none` ancestor blocked resolution.
    Blocked,
}

/// Walk the ancestor chain of `element`, returning the first ancestor that
/// `qualifies`. `display: none` ancestors block or are skipped per
/// `skip_display_none`; they are checked before the predicate runs.
fn walk<Q: LayoutQuery + ?Sized>(
    q: &Q,
    element: NodeId,
    skip_display_none: bool,
    qualifies: impl Fn(&ComputedGeometry) -> bool,
) -> WalkOutcome {
    let mut current = q.parent(element);
    while let Some(ancestor) = current {
        let style = q.style(ancestor);
        if style.display == Display::None {
            if !skip_display_none {
                return WalkOutcome::Blocked;
            }
        } else if qualifies(style) {
            return WalkOutcome::Found(ancestor);
        }
        current = q.parent(ancestor);
    }
    WalkOutcome::Root
}

/// [§ 2.1 Containing Blocks](https://www.w3.org/TR/css-position-3/#def-cb)
///
/// Resolve the containing block of `element` under its effective position
/// scheme:
///
/// - `static`/`relative`/`sticky`: the nearest block-level ancestor, falling
///   back to the root element.
/// - `absolute`: the nearest ancestor that establishes a containing block
///   for absolutely positioned elements, falling back to the viewport.
/// - `fixed`: likewise with the fixed-element predicate.
///
/// Returns `None` when resolution is blocked by a non-skipped
/// `display: none` ancestor — an expected outcome, not a failure.
#[must_use]
pub fn containing_block<Q: LayoutQuery + ?Sized>(
    q: &Q,
    quirks: &EngineQuirks,
    element: NodeId,
    options: &ResolveOptions,
) -> Option<ContainingBlock> {
    let position = options
        .position
        .unwrap_or_else(|| q.style(element).position);

    match position {
        Position::Static | Position::Relative | Position::Sticky => {
            match walk(q, element, options.skip_display_none, |style| {
                style.display.is_block_level()
            }) {
                WalkOutcome::Found(ancestor) => Some(ContainingBlock::Element(ancestor)),
                WalkOutcome::Root => Some(ContainingBlock::Element(q.root())),
                WalkOutcome::Blocked => None,
            }
        }
        Position::Absolute => {
            resolve_walk(q, element, options, |style| {
                establishes_for_absolute(style, quirks)
            })
        }
        Position::Fixed => {
            resolve_walk(q, element, options, |style| {
                establishes_for_fixed(style, quirks)
            })
        }
    }
}

/// The out-of-flow walk: a matching ancestor wins, otherwise the viewport.
fn resolve_walk<Q: LayoutQuery + ?Sized>(
    q: &Q,
    element: NodeId,
    options: &ResolveOptions,
    qualifies: impl Fn(&ComputedGeometry) -> bool,
) -> Option<ContainingBlock> {
    match walk(q, element, options.skip_display_none, qualifies) {
        WalkOutcome::Found(ancestor) => Some(ContainingBlock::Element(ancestor)),
        WalkOutcome::Root => Some(ContainingBlock::Window),
        WalkOutcome::Blocked => None,
    }
}

/// [§ 3.3 Fixed positioning](https://www.w3.org/TR/css-position-3/#fixed-position)
///
/// Does this ancestor establish a containing block for fixed elements?
///
/// On engines implementing the filter trigger (Blink, Gecko), any ancestor
/// with a non-`none` filter or backdrop-filter (or a `will-change` hint for
/// either) qualifies regardless of display type. The remaining triggers
/// apply to block-level ancestors only.
fn establishes_for_fixed(style: &ComputedGeometry, quirks: &EngineQuirks) -> bool {
    if quirks.filter_forces_fixed_containing_block
        && (style.filter.is_some()
            || style.backdrop_filter.is_some()
            || style.will_change_any(&["filter", "backdrop-filter"]))
    {
        return true;
    }

    if !style.display.is_block_level() {
        return false;
    }

    style.transform.is_some()
        || style.perspective.is_some()
        || (quirks.content_visibility_forces_containing_block && style.content_visibility_auto())
        || style.contain_forces_containing_block()
        || style.will_change_any(&["transform", "perspective", "contain"])
        || (quirks.will_change_filter_on_block_level && style.will_change_any(&["filter"]))
}

/// [§ 3.5 Absolute positioning](https://www.w3.org/TR/css-position-3/#absolute-position)
///
/// Any positioned ancestor establishes a containing block for absolute
/// elements; otherwise the fixed-element triggers apply.
fn establishes_for_absolute(style: &ComputedGeometry, quirks: &EngineQuirks) -> bool {
    style.position != Position::Static || establishes_for_fixed(style, quirks)
}

/// [CSSOM View § 6](https://www.w3.org/TR/cssom-view-1/#dom-htmlelement-offsetparent)
///
/// Resolve the frame that anchors the element's inset properties:
///
/// - an element generating no box (`display: none`/`contents`) has none;
/// - `relative`: the element itself;
/// - `fixed`: its containing block (viewport when nothing matched);
/// - `absolute`: its containing block, except a viewport fall-through is
///   remapped to the document — absolute offsets are measured against the
///   document, not the visual viewport;
/// - any other scheme: the inset properties have no effect, so `None`.
#[must_use]
pub fn offset_container<Q: LayoutQuery + ?Sized>(
    q: &Q,
    quirks: &EngineQuirks,
    element: NodeId,
    options: &ResolveOptions,
) -> Option<OffsetContainer> {
    let style = q.style(element);
    if !style.display.generates_box() {
        return None;
    }

    let position = options.position.unwrap_or(style.position);
    let forced = ResolveOptions {
        position: Some(position),
        skip_display_none: options.skip_display_none,
    };

    match position {
        Position::Relative => Some(OffsetContainer::Element(element)),
        Position::Fixed => match containing_block(q, quirks, element, &forced)? {
            ContainingBlock::Element(ancestor) => Some(OffsetContainer::Element(ancestor)),
            ContainingBlock::Window => Some(OffsetContainer::Window),
        },
        Position::Absolute => match containing_block(q, quirks, element, &forced)? {
            ContainingBlock::Element(ancestor) => Some(OffsetContainer::Element(ancestor)),
            ContainingBlock::Window => Some(OffsetContainer::Document),
        },
        Position::Static | Position::Sticky => None,
    }
}
