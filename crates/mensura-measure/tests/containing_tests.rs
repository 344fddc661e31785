//! Integration tests for containing-block and offset-container resolution.

use mensura_geom::Rect;
use mensura_measure::{
    containing_block, offset_container, ContainingBlock, OffsetContainer, ResolveOptions,
};
use mensura_snapshot::{EngineQuirks, LayoutNode, LayoutSnapshot, NodeId, Position};

const BOX: Rect = Rect::new(0.0, 0.0, 100.0, 100.0);

/// Root -> chain of styled ancestors -> leaf element (returned last).
fn chain(declarations: &[&str]) -> (LayoutSnapshot, Vec<NodeId>) {
    let mut snapshot = LayoutSnapshot::new(800.0, 600.0);
    let mut ids = Vec::new();
    let mut parent = NodeId::ROOT;
    for style in declarations {
        parent = snapshot.insert(parent, LayoutNode::new(BOX).with_declarations(style));
        ids.push(parent);
    }
    (snapshot, ids)
}

#[test]
fn in_flow_elements_resolve_to_the_nearest_block_level_ancestor() {
    let (snapshot, ids) = chain(&["display: block", "display: inline", "position: static"]);
    let quirks = EngineQuirks::default();

    // The inline ancestor is passed over.
    assert_eq!(
        containing_block(&snapshot, &quirks, ids[2], &ResolveOptions::default()),
        Some(ContainingBlock::Element(ids[0]))
    );
}

#[test]
fn in_flow_elements_fall_back_to_the_root() {
    let (snapshot, ids) = chain(&["display: inline", ""]);
    let quirks = EngineQuirks::default();

    assert_eq!(
        containing_block(&snapshot, &quirks, ids[1], &ResolveOptions::default()),
        Some(ContainingBlock::Element(NodeId::ROOT))
    );
}

#[test]
fn display_none_blocks_unless_skipped() {
    let (snapshot, ids) = chain(&["display: none", "position: static"]);
    let quirks = EngineQuirks::default();

    assert_eq!(
        containing_block(&snapshot, &quirks, ids[1], &ResolveOptions::default()),
        None
    );
    assert_eq!(
        containing_block(
            &snapshot,
            &quirks,
            ids[1],
            &ResolveOptions::default().skipping_display_none()
        ),
        Some(ContainingBlock::Element(NodeId::ROOT))
    );
}

#[test]
fn absolute_elements_resolve_to_the_nearest_positioned_ancestor() {
    let (snapshot, ids) = chain(&[
        "position: relative",
        "position: static",
        "position: absolute",
    ]);
    let quirks = EngineQuirks::default();

    assert_eq!(
        containing_block(&snapshot, &quirks, ids[2], &ResolveOptions::default()),
        Some(ContainingBlock::Element(ids[0]))
    );
}

#[test]
fn absolute_elements_fall_through_to_the_viewport() {
    let (snapshot, ids) = chain(&["display: block", "position: absolute"]);
    let quirks = EngineQuirks::default();

    assert_eq!(
        containing_block(&snapshot, &quirks, ids[1], &ResolveOptions::default()),
        Some(ContainingBlock::Window)
    );
}

#[test]
fn transforms_trap_fixed_elements() {
    let (snapshot, ids) = chain(&["transform: translateX(10px)", "position: fixed"]);
    let quirks = EngineQuirks::default();

    assert_eq!(
        containing_block(&snapshot, &quirks, ids[1], &ResolveOptions::default()),
        Some(ContainingBlock::Element(ids[0]))
    );
}

#[test]
fn filter_trigger_ignores_display_type_only_off_webkit() {
    let (snapshot, ids) = chain(&["display: inline; filter: blur(2px)", "position: fixed"]);
    let options = ResolveOptions::default();

    assert_eq!(
        containing_block(&snapshot, &EngineQuirks::blink(), ids[1], &options),
        Some(ContainingBlock::Element(ids[0]))
    );
    // WebKit has no filter trigger, and the inline ancestor disqualifies
    // the block-level ones.
    assert_eq!(
        containing_block(&snapshot, &EngineQuirks::webkit(), ids[1], &options),
        Some(ContainingBlock::Window)
    );
}

#[test]
fn webkit_honors_will_change_filter_on_block_level_ancestors() {
    let (snapshot, ids) = chain(&["will-change: filter", "position: fixed"]);
    let options = ResolveOptions::default();

    assert_eq!(
        containing_block(&snapshot, &EngineQuirks::webkit(), ids[1], &options),
        Some(ContainingBlock::Element(ids[0]))
    );

    // On an inline ancestor the hint only matters where the general filter
    // trigger exists.
    let (snapshot, ids) = chain(&["display: inline; will-change: filter", "position: fixed"]);
    assert_eq!(
        containing_block(&snapshot, &EngineQuirks::blink(), ids[1], &options),
        Some(ContainingBlock::Element(ids[0]))
    );
    assert_eq!(
        containing_block(&snapshot, &EngineQuirks::webkit(), ids[1], &options),
        Some(ContainingBlock::Window)
    );
}

#[test]
fn content_visibility_auto_is_a_blink_only_trigger() {
    let (snapshot, ids) = chain(&["content-visibility: auto", "position: absolute"]);
    let options = ResolveOptions::default();

    assert_eq!(
        containing_block(&snapshot, &EngineQuirks::blink(), ids[1], &options),
        Some(ContainingBlock::Element(ids[0]))
    );
    assert_eq!(
        containing_block(&snapshot, &EngineQuirks::webkit(), ids[1], &options),
        Some(ContainingBlock::Window)
    );
}

#[test]
fn paint_containment_traps_on_every_engine() {
    let (snapshot, ids) = chain(&["contain: paint", "position: fixed"]);
    let options = ResolveOptions::default();

    for quirks in [EngineQuirks::blink(), EngineQuirks::webkit()] {
        assert_eq!(
            containing_block(&snapshot, &quirks, ids[1], &options),
            Some(ContainingBlock::Element(ids[0]))
        );
    }
}

#[test]
fn position_override_changes_the_walk() {
    let (snapshot, ids) = chain(&["position: relative", "display: block", ""]);
    let quirks = EngineQuirks::default();

    // Resolved as static, the nearest block-level ancestor wins.
    assert_eq!(
        containing_block(&snapshot, &quirks, ids[2], &ResolveOptions::default()),
        Some(ContainingBlock::Element(ids[1]))
    );
    // Resolved as absolute, only the positioned ancestor qualifies.
    let absolute = ResolveOptions::default()
        .with_position_keyword("absolute")
        .unwrap();
    assert_eq!(
        containing_block(&snapshot, &quirks, ids[2], &absolute),
        Some(ContainingBlock::Element(ids[0]))
    );
}

#[test]
fn position_keyword_override_rejects_garbage() {
    assert!(ResolveOptions::default()
        .with_position_keyword("floating")
        .is_err());
}

#[test]
fn undisplayed_elements_have_no_offset_container() {
    let quirks = EngineQuirks::default();
    for style in ["display: none; position: relative", "display: contents"] {
        let (snapshot, ids) = chain(&[style]);
        assert_eq!(
            offset_container(&snapshot, &quirks, ids[0], &ResolveOptions::default()),
            None
        );
    }
}

#[test]
fn relative_elements_anchor_to_themselves() {
    let (snapshot, ids) = chain(&["position: relative"]);
    let quirks = EngineQuirks::default();

    assert_eq!(
        offset_container(&snapshot, &quirks, ids[0], &ResolveOptions::default()),
        Some(OffsetContainer::Element(ids[0]))
    );
}

#[test]
fn absolute_fall_through_remaps_to_the_document() {
    let (snapshot, ids) = chain(&["display: block", "position: absolute"]);
    let quirks = EngineQuirks::default();

    assert_eq!(
        offset_container(&snapshot, &quirks, ids[1], &ResolveOptions::default()),
        Some(OffsetContainer::Document)
    );
}

#[test]
fn fixed_fall_through_keeps_the_window() {
    let (snapshot, ids) = chain(&["display: block", "position: fixed"]);
    let quirks = EngineQuirks::default();

    assert_eq!(
        offset_container(&snapshot, &quirks, ids[1], &ResolveOptions::default()),
        Some(OffsetContainer::Window)
    );
}

#[test]
fn absolute_elements_anchor_to_their_containing_block() {
    let (snapshot, ids) = chain(&["position: relative", "position: absolute"]);
    let quirks = EngineQuirks::default();

    assert_eq!(
        offset_container(&snapshot, &quirks, ids[1], &ResolveOptions::default()),
        Some(OffsetContainer::Element(ids[0]))
    );
}

#[test]
fn inset_properties_are_inert_elsewhere() {
    let quirks = EngineQuirks::default();
    for style in ["position: static", "position: sticky"] {
        let (snapshot, ids) = chain(&[style]);
        assert_eq!(
            offset_container(&snapshot, &quirks, ids[0], &ResolveOptions::default()),
            None
        );
    }
}

#[test]
fn offset_container_honors_the_position_override() {
    let (snapshot, ids) = chain(&["position: relative", ""]);
    let quirks = EngineQuirks::default();

    let as_absolute = ResolveOptions::default().with_position(Position::Absolute);
    assert_eq!(
        offset_container(&snapshot, &quirks, ids[1], &as_absolute),
        Some(OffsetContainer::Element(ids[0]))
    );
}
