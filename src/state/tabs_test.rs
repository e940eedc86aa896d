use super::*;

fn strip() -> PlatformTabs {
    PlatformTabs::new(vec!["mac".to_owned(), "windows".to_owned()])
}

#[test]
fn nothing_active_before_first_click() {
    assert_eq!(strip().active(), None);
}

#[test]
fn activate_selects_tab_and_matching_group() {
    let mut tabs = strip();
    let sel = tabs.activate("windows");
    assert_eq!(sel.tab, "windows");
    assert_eq!(sel.group.as_deref(), Some("windows"));
    assert_eq!(tabs.active(), Some("windows"));
}

#[test]
fn activate_replaces_previous_selection() {
    let mut tabs = strip();
    tabs.activate("windows");
    let sel = tabs.activate("mac");
    assert_eq!(sel.tab, "mac");
    assert_eq!(sel.group.as_deref(), Some("mac"));
    assert_eq!(tabs.active(), Some("mac"));
}

#[test]
fn tab_without_matching_group_activates_alone() {
    let mut tabs = strip();
    let sel = tabs.activate("linux");
    assert_eq!(sel.tab, "linux");
    assert_eq!(sel.group, None);
    assert_eq!(tabs.active(), Some("linux"));
}

#[test]
fn selection_names_at_most_one_tab_and_group() {
    let mut tabs = strip();
    for key in ["mac", "windows", "mac", "linux", "windows"] {
        let sel = tabs.activate(key);
        assert_eq!(sel.tab, key);
        assert!(sel.group.iter().all(|g| g == key));
    }
}
