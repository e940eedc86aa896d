//! Exclusive platform tab selection for the screenshot switcher.

#[cfg(test)]
#[path = "tabs_test.rs"]
mod tabs_test;

/// Result of activating a tab: the keys the host must mark active after
/// clearing every other tab and screenshot group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSelection {
    /// Key of the tab to mark active.
    pub tab: String,
    /// Key of the matching screenshot group, when one exists.
    pub group: Option<String>,
}

/// Tab strip state: known tab and group keys plus the active selection.
#[derive(Debug, Clone, Default)]
pub struct PlatformTabs {
    group_keys: Vec<String>,
    active: Option<String>,
}

impl PlatformTabs {
    /// Build from the screenshot group keys present in the document.
    #[must_use]
    pub fn new(group_keys: Vec<String>) -> Self {
        Self { group_keys, active: None }
    }

    /// The active tab key, if any tab has been clicked yet.
    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Activate the tab identified by `key`.
    ///
    /// A tab without a matching screenshot group is still activated; no
    /// group is shown in that case.
    pub fn activate(&mut self, key: &str) -> TabSelection {
        self.active = Some(key.to_owned());
        let group = self
            .group_keys
            .iter()
            .find(|g| g.as_str() == key)
            .cloned();
        TabSelection { tab: key.to_owned(), group }
    }
}
