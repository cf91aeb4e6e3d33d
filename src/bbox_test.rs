#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn from_rect_sets_edges() {
    let b = BBox::from_rect(10.0, 20.0, 100.0, 50.0);
    assert_eq!(b, BBox::new(10.0, 20.0, 110.0, 70.0));
    assert_eq!(b.width(), 100.0);
    assert_eq!(b.height(), 50.0);
}

#[test]
fn contains_interior_point() {
    let b = BBox::new(0.0, 0.0, 200.0, 200.0);
    assert!(b.contains(100.0, 100.0));
}

#[test]
fn contains_is_inclusive_on_edges() {
    let b = BBox::new(0.0, 0.0, 200.0, 200.0);
    assert!(b.contains(0.0, 0.0));
    assert!(b.contains(200.0, 200.0));
    assert!(b.contains(0.0, 150.0));
}

#[test]
fn contains_rejects_outside_points() {
    let b = BBox::new(0.0, 0.0, 200.0, 200.0);
    assert!(!b.contains(-1.0, 100.0));
    assert!(!b.contains(100.0, 201.0));
    assert!(!b.contains(250.0, 250.0));
}

#[test]
fn contains_rejects_nan() {
    let b = BBox::new(0.0, 0.0, 200.0, 200.0);
    assert!(!b.contains(f64::NAN, 10.0));
}

#[test]
fn edge_distances_order_is_left_right_top_bottom() {
    let b = BBox::new(0.0, 0.0, 200.0, 100.0);
    assert_eq!(b.edge_distances(30.0, 40.0), [30.0, 170.0, 40.0, 60.0]);
}
