use super::*;

#[test]
fn both_cases_trigger() {
    assert!(is_theme_shortcut("t", Some("BODY")));
    assert!(is_theme_shortcut("T", Some("A")));
}

#[test]
fn other_keys_do_not_trigger() {
    assert!(!is_theme_shortcut("x", Some("BODY")));
    assert!(!is_theme_shortcut("Tab", Some("BODY")));
    assert!(!is_theme_shortcut("", Some("BODY")));
}

#[test]
fn text_entry_targets_swallow_the_shortcut() {
    assert!(!is_theme_shortcut("t", Some("INPUT")));
    assert!(!is_theme_shortcut("T", Some("TEXTAREA")));
}

#[test]
fn missing_target_still_triggers() {
    assert!(is_theme_shortcut("t", None));
}

#[test]
fn tag_matching_ignores_case() {
    assert!(is_text_entry("input"));
    assert!(is_text_entry("TextArea"));
    assert!(!is_text_entry("SELECT"));
}
