#![allow(clippy::float_cmp)]

use super::*;

fn sections() -> Vec<Section> {
    vec![
        Section { id: "features".to_owned(), top: 600.0 },
        Section { id: "pricing".to_owned(), top: 1400.0 },
        Section { id: "contact".to_owned(), top: 2200.0 },
    ]
}

// --- Navbar shadow ---

#[test]
fn no_shadow_at_top() {
    assert!(!navbar_shadow(0.0));
}

#[test]
fn no_shadow_at_exact_threshold() {
    assert!(!navbar_shadow(100.0));
}

#[test]
fn shadow_just_past_threshold() {
    assert!(navbar_shadow(101.0));
    assert!(navbar_shadow(5000.0));
}

// --- Hero parallax ---

#[test]
fn hero_at_rest_is_identity() {
    let style = hero_style(ScrollSample { y: 0.0, viewport_height: 800.0 }).expect("on screen");
    assert_eq!(style.translate_y, 0.0);
    assert_eq!(style.opacity, 1.0);
}

#[test]
fn hero_translation_is_proportional() {
    let style = hero_style(ScrollSample { y: 400.0, viewport_height: 800.0 }).expect("on screen");
    assert_eq!(style.translate_y, 120.0);
    assert_eq!(style.opacity, 0.5);
}

#[test]
fn hero_stops_updating_at_viewport_height() {
    assert_eq!(hero_style(ScrollSample { y: 800.0, viewport_height: 800.0 }), None);
    assert_eq!(hero_style(ScrollSample { y: 900.0, viewport_height: 800.0 }), None);
}

#[test]
fn hero_skipped_for_degenerate_viewport() {
    assert_eq!(hero_style(ScrollSample { y: 10.0, viewport_height: 0.0 }), None);
}

// --- Current section scan ---

#[test]
fn no_section_current_above_first_window() {
    assert_eq!(current_section(0.0, &sections()), None);
    assert_eq!(current_section(399.0, &sections()), None);
}

#[test]
fn lookahead_promotes_section_early() {
    assert_eq!(current_section(400.0, &sections()), Some("features"));
}

#[test]
fn later_sections_win() {
    assert_eq!(current_section(1200.0, &sections()), Some("pricing"));
    assert_eq!(current_section(9999.0, &sections()), Some("contact"));
}

#[test]
fn empty_section_list_yields_none() {
    assert_eq!(current_section(500.0, &[]), None);
}

#[test]
fn scan_is_order_dependent_not_sorted() {
    // Mirrors document-order scanning: a later entry overwrites an earlier
    // one even if its top is smaller.
    let out_of_order = vec![
        Section { id: "b".to_owned(), top: 1000.0 },
        Section { id: "a".to_owned(), top: 100.0 },
    ];
    assert_eq!(current_section(900.0, &out_of_order), Some("a"));
}
