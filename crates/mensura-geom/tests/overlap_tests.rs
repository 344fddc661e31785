//! Integration tests for overlap geometry.

use mensura_geom::{EdgeSizes, Rect, distance, intersection, overflow};

/// Absolute-difference float assertion; sub-pixel math forbids exact compares.
fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-4,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn intersection_of_overlapping_rects() {
    let a = Rect::new(0.0, 0.0, 100.0, 100.0);
    let b = Rect::new(50.0, 50.0, 100.0, 100.0);

    let shared = intersection(a, &[b]).expect("rects overlap");
    assert_eq!(shared, Rect::new(50.0, 50.0, 50.0, 50.0));
}

#[test]
fn intersection_is_symmetric_for_two_rects() {
    let a = Rect::new(0.0, 0.0, 100.0, 100.0);
    let b = Rect::new(25.0, -25.0, 100.0, 100.0);

    assert_eq!(intersection(a, &[b]), intersection(b, &[a]));
}

#[test]
fn intersection_of_disjoint_rects_is_none() {
    // Concrete scenario from the measurement contract.
    let a = Rect::new(0.0, 0.0, 100.0, 100.0);
    let b = Rect::new(200.0, 200.0, 100.0, 100.0);

    assert_eq!(intersection(a, &[b]), None);
}

#[test]
fn touching_edges_do_not_intersect() {
    let a = Rect::new(0.0, 0.0, 100.0, 100.0);
    let b = Rect::new(100.0, 0.0, 100.0, 100.0);

    assert_eq!(intersection(a, &[b]), None);
}

#[test]
fn single_input_returns_detached_copy() {
    let a = Rect::new(1.5, 2.5, 3.0, 4.0);
    assert_eq!(intersection(a, &[]), Some(a));
}

#[test]
fn three_way_intersection_narrows_left_to_right() {
    let a = Rect::new(0.0, 0.0, 100.0, 100.0);
    let b = Rect::new(40.0, 40.0, 100.0, 100.0);
    let c = Rect::new(60.0, 0.0, 100.0, 100.0);

    // a ∩ b = (40,40)-(100,100); narrowed again by c = (60,40)-(100,100).
    let shared = intersection(a, &[b, c]).expect("all three share area");
    assert_eq!(shared, Rect::new(60.0, 40.0, 40.0, 60.0));
}

#[test]
fn three_way_intersection_can_be_empty_via_consecutive_narrowing() {
    let a = Rect::new(0.0, 0.0, 50.0, 50.0);
    let b = Rect::new(25.0, 0.0, 50.0, 50.0);
    // c overlaps b but not the accumulated a ∩ b.
    let c = Rect::new(55.0, 0.0, 50.0, 50.0);

    assert_eq!(intersection(a, &[b, c]), None);
}

#[test]
fn distance_is_none_for_overlapping_rects() {
    let a = Rect::new(0.0, 0.0, 100.0, 100.0);
    let b = Rect::new(99.0, 99.0, 10.0, 10.0);

    assert_eq!(distance(a, b), None);
}

#[test]
fn distance_of_touching_rects_is_zero() {
    let a = Rect::new(0.0, 0.0, 100.0, 100.0);
    let b = Rect::new(100.0, 100.0, 10.0, 10.0);

    assert_close(distance(a, b).expect("touching rects have a distance"), 0.0);
}

#[test]
fn side_zone_uses_perpendicular_gap() {
    let a = Rect::new(0.0, 0.0, 100.0, 100.0);
    // Directly to the right, vertically overlapping: gap is purely horizontal.
    let b = Rect::new(130.0, 20.0, 10.0, 10.0);

    assert_close(distance(a, b).expect("disjoint"), 30.0);
}

#[test]
fn corner_zone_uses_euclidean_corner_distance() {
    let a = Rect::new(0.0, 0.0, 100.0, 100.0);
    // Past the bottom-right corner by (30, 40): a 3-4-5 triangle.
    let b = Rect::new(130.0, 140.0, 10.0, 10.0);

    assert_close(distance(a, b).expect("disjoint"), 50.0);
}

#[test]
fn distance_is_symmetric() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(40.0, 70.0, 10.0, 10.0);

    let forward = distance(a, b).expect("disjoint");
    let backward = distance(b, a).expect("disjoint");
    assert_close(forward, backward);
}

#[test]
fn overflow_of_rect_against_itself_is_zero() {
    let rect = Rect::new(12.5, -3.0, 40.0, 80.0);
    assert_eq!(overflow(rect, rect), EdgeSizes::uniform(0.0));
}

#[test]
fn overflow_is_negative_when_target_fully_inside() {
    // Concrete scenario from the measurement contract.
    let target = Rect::new(50.0, 50.0, 100.0, 100.0);
    let container = Rect::new(0.0, 0.0, 200.0, 200.0);

    assert_eq!(overflow(target, container), EdgeSizes::uniform(-50.0));
}

#[test]
fn overflow_is_positive_past_each_side() {
    let target = Rect::new(-10.0, -20.0, 240.0, 260.0);
    let container = Rect::new(0.0, 0.0, 200.0, 200.0);

    let report = overflow(target, container);
    assert_close(report.left, 10.0);
    assert_close(report.top, 20.0);
    assert_close(report.right, 30.0);
    assert_close(report.bottom, 40.0);
}

#[test]
fn overflow_is_defined_for_disjoint_rects() {
    let target = Rect::new(300.0, 0.0, 50.0, 50.0);
    let container = Rect::new(0.0, 0.0, 200.0, 200.0);

    let report = overflow(target, container);
    assert_close(report.left, -300.0);
    assert_close(report.right, 150.0);
}
