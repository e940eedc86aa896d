#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn size_is_larger_dimension() {
    assert_eq!(ripple_geometry(120.0, 40.0, 0.0, 0.0).size, 120.0);
    assert_eq!(ripple_geometry(40.0, 120.0, 0.0, 0.0).size, 120.0);
    assert_eq!(ripple_geometry(64.0, 64.0, 0.0, 0.0).size, 64.0);
}

#[test]
fn circle_is_centered_on_click_point() {
    let geo = ripple_geometry(100.0, 40.0, 30.0, 20.0);
    // Center = top-left offset + radius.
    assert_eq!(geo.x + geo.size / 2.0, 30.0);
    assert_eq!(geo.y + geo.size / 2.0, 20.0);
}

#[test]
fn corner_click_offsets_go_negative() {
    let geo = ripple_geometry(100.0, 100.0, 0.0, 0.0);
    assert_eq!(geo.x, -50.0);
    assert_eq!(geo.y, -50.0);
}
