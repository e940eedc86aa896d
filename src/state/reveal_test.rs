use super::*;

#[test]
fn starts_fully_hidden() {
    let set = RevealSet::new(3);
    assert_eq!(set.len(), 3);
    assert!(!set.is_revealed(0));
    assert!(!set.is_revealed(2));
}

#[test]
fn intersection_reveals_and_requests_styles() {
    let mut set = RevealSet::new(2);
    assert!(set.notify(1, true));
    assert!(set.is_revealed(1));
    assert!(!set.is_revealed(0));
}

#[test]
fn reveal_is_monotonic() {
    let mut set = RevealSet::new(1);
    set.notify(0, true);
    assert!(!set.notify(0, false));
    assert!(set.is_revealed(0));
}

#[test]
fn redundant_notifications_are_idempotent() {
    let mut set = RevealSet::new(1);
    assert!(set.notify(0, true));
    assert!(set.notify(0, true));
    assert!(set.is_revealed(0));
}

#[test]
fn non_intersecting_never_reveals() {
    let mut set = RevealSet::new(1);
    assert!(!set.notify(0, false));
    assert!(!set.is_revealed(0));
}

#[test]
fn out_of_range_index_is_ignored() {
    let mut set = RevealSet::new(1);
    assert!(!set.notify(5, true));
    assert!(!set.is_revealed(5));
}

#[test]
fn empty_set_tracks_nothing() {
    let set = RevealSet::new(0);
    assert!(set.is_empty());
}
