//! Integration tests for width/height measurement across box edges.

use mensura_geom::{Edge, Rect};
use mensura_measure::{height, width, Entity};
use mensura_snapshot::{LayoutNode, LayoutSnapshot, NodeId};

fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-4,
        "expected {expected}, got {actual}"
    );
}

/// A 120x80 border box wearing 10px margins, 5px borders, and 8px paddings.
fn boxed_snapshot() -> (LayoutSnapshot, NodeId) {
    let mut snapshot = LayoutSnapshot::new(800.0, 600.0);
    let node = snapshot.insert(
        NodeId::ROOT,
        LayoutNode::new(Rect::new(20.0, 30.0, 120.0, 80.0))
            .with_declarations("margin: 10px; border-width: 5px; padding: 8px"),
    );
    (snapshot, node)
}

#[test]
fn element_width_at_every_edge() {
    let (snapshot, node) = boxed_snapshot();

    assert_close(width(&snapshot, (node, Edge::Margin)), 140.0);
    assert_close(width(&snapshot, (node, Edge::Border)), 120.0);
    assert_close(width(&snapshot, (node, Edge::Scrollbar)), 110.0);
    assert_close(width(&snapshot, (node, Edge::Padding)), 110.0);
    assert_close(width(&snapshot, (node, Edge::Content)), 94.0);
}

#[test]
fn element_height_at_every_edge() {
    let (snapshot, node) = boxed_snapshot();

    assert_close(height(&snapshot, (node, Edge::Margin)), 100.0);
    assert_close(height(&snapshot, (node, Edge::Border)), 80.0);
    assert_close(height(&snapshot, (node, Edge::Padding)), 70.0);
    assert_close(height(&snapshot, (node, Edge::Content)), 54.0);
}

#[test]
fn border_is_the_default_edge() {
    let (snapshot, node) = boxed_snapshot();
    assert_close(width(&snapshot, node), width(&snapshot, (node, Edge::Border)));
}

#[test]
fn box_edges_are_monotonic() {
    let (snapshot, node) = boxed_snapshot();
    let widths: Vec<f32> = [
        Edge::Margin,
        Edge::Border,
        Edge::Scrollbar,
        Edge::Padding,
        Edge::Content,
    ]
    .into_iter()
    .map(|edge| width(&snapshot, (node, edge)))
    .collect();

    for pair in widths.windows(2) {
        assert!(
            pair[0] >= pair[1],
            "outer edge measured smaller than inner: {pair:?}"
        );
    }
}

#[test]
fn negative_margins_do_not_shrink_the_margin_box() {
    let mut snapshot = LayoutSnapshot::new(800.0, 600.0);
    let node = snapshot.insert(
        NodeId::ROOT,
        LayoutNode::new(Rect::new(0.0, 0.0, 100.0, 50.0)).with_declarations("margin: -10px"),
    );

    assert_close(
        width(&snapshot, (node, Edge::Margin)),
        width(&snapshot, (node, Edge::Border)),
    );
}

#[test]
fn scrollbar_space_is_subtracted_below_the_scrollbar_edge() {
    let mut snapshot = LayoutSnapshot::new(800.0, 600.0);
    let node = snapshot.insert(
        NodeId::ROOT,
        LayoutNode::new(Rect::new(0.0, 0.0, 200.0, 100.0))
            .with_declarations("border-width: 5px; overflow: scroll")
            .with_client_size(175.0, 75.0),
    );

    // Padding box is 190x90; the client area reports 175x75, leaving a
    // 15px scrollbar footprint on each axis.
    assert_close(width(&snapshot, (node, Edge::Scrollbar)), 190.0);
    assert_close(width(&snapshot, (node, Edge::Padding)), 175.0);
    assert_close(width(&snapshot, (node, Edge::Content)), 175.0);
    assert_close(height(&snapshot, (node, Edge::Padding)), 75.0);
}

#[test]
fn scrollbar_gate_is_the_perpendicular_axis() {
    // A vertical scrollbar eats width, so width consults overflow-y.
    let mut snapshot = LayoutSnapshot::new(800.0, 600.0);
    let node = snapshot.insert(
        NodeId::ROOT,
        LayoutNode::new(Rect::new(0.0, 0.0, 200.0, 100.0))
            .with_declarations("border-width: 5px; overflow-x: scroll")
            .with_client_size(175.0, 75.0),
    );

    assert_close(width(&snapshot, (node, Edge::Padding)), 190.0);
    assert_close(height(&snapshot, (node, Edge::Padding)), 75.0);
}

#[test]
fn root_element_never_loses_scrollbar_space() {
    let mut snapshot = LayoutSnapshot::new(800.0, 600.0);
    {
        let root = snapshot.node_mut(NodeId::ROOT);
        root.style.apply_declaration("overflow", "scroll");
        root.client_size = Some((785.0, 585.0));
    }

    // The window scrollbar belongs to the viewport, not the root box.
    assert_close(width(&snapshot, (NodeId::ROOT, Edge::Padding)), 800.0);
}

#[test]
fn window_size_switches_on_the_scrollbar_edge() {
    let mut snapshot = LayoutSnapshot::new(800.0, 600.0);
    snapshot.set_viewport_client(785.0, 585.0);

    assert_close(width(&snapshot, Entity::Window), 800.0);
    assert_close(width(&snapshot, (Entity::Window, Edge::Scrollbar)), 800.0);
    assert_close(width(&snapshot, (Entity::Window, Edge::Padding)), 785.0);
    assert_close(width(&snapshot, (Entity::Window, Edge::Content)), 785.0);
    assert_close(height(&snapshot, (Entity::Window, Edge::Content)), 585.0);
}

#[test]
fn document_is_never_smaller_than_what_is_visible() {
    let mut snapshot = LayoutSnapshot::new(800.0, 600.0);
    assert_close(width(&snapshot, Entity::Document), 800.0);

    snapshot.set_scroll_size(1600.0, 2400.0);
    assert_close(width(&snapshot, Entity::Document), 1600.0);
    assert_close(height(&snapshot, Entity::Document), 2400.0);

    // A root box wider than the scrollable extent still wins.
    snapshot.node_mut(NodeId::ROOT).border_box = Rect::new(0.0, 0.0, 1800.0, 600.0);
    assert_close(width(&snapshot, Entity::Document), 1800.0);
}

#[test]
fn literal_rects_measure_as_themselves() {
    let snapshot = LayoutSnapshot::new(800.0, 600.0);
    let rect = Rect::new(5.0, 5.0, 42.5, 17.25);

    assert_close(width(&snapshot, rect), 42.5);
    assert_close(height(&snapshot, (Entity::Rect(rect), Edge::Content)), 17.25);
}

#[test]
fn measurement_is_idempotent() {
    let (snapshot, node) = boxed_snapshot();
    let first = width(&snapshot, (node, Edge::Content));
    let second = width(&snapshot, (node, Edge::Content));
    assert_close(first, second);
}
