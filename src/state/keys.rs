//! Keyboard shortcut handling.

#[cfg(test)]
#[path = "keys_test.rs"]
mod keys_test;

/// Whether the focused element swallows plain-letter shortcuts.
///
/// `tag` is an element tag name as reported by the browser (upper case).
#[must_use]
pub fn is_text_entry(tag: &str) -> bool {
    tag.eq_ignore_ascii_case("input") || tag.eq_ignore_ascii_case("textarea")
}

/// Whether a key press should trigger the theme toggle: `t`/`T` while the
/// event target is not a text entry element.
#[must_use]
pub fn is_theme_shortcut(key: &str, target_tag: Option<&str>) -> bool {
    if key != "t" && key != "T" {
        return false;
    }
    !target_tag.is_some_and(is_text_entry)
}
