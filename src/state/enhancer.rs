//! The page enhancer core: one object, constructed once at startup, owning
//! every piece of mutable state the enhancement layer has.
//!
//! Separated from the DOM bindings so it can be tested without a browser.
//! Handlers accept plain event samples and return effect values; the host
//! converts DOM events on the way in and applies effects on the way out.

#[cfg(test)]
#[path = "enhancer_test.rs"]
mod enhancer_test;

use crate::state::keys;
use crate::state::reveal::RevealSet;
use crate::state::scroll::{self, HeroStyle, ScrollSample, Section};
use crate::state::tabs::{PlatformTabs, TabSelection};
use crate::state::theme::{ThemeChange, ThemeController};

/// Everything a single scroll tick asks of the host.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollEffects {
    /// Whether the navbar casts a shadow.
    pub navbar_shadow: bool,
    /// Hero translation/opacity, absent once the hero scrolled away.
    pub hero: Option<HeroStyle>,
    /// Id of the section whose nav link is highlighted, if any.
    pub current_section: Option<String>,
}

/// Core enhancement state.
pub struct EnhancerCore {
    pub theme: ThemeController,
    pub tabs: PlatformTabs,
    pub reveal: RevealSet,
    /// Offset seen by the previous scroll tick.
    pub last_scroll: f64,
}

impl EnhancerCore {
    /// Build the core from the page's startup inputs and return it together
    /// with the initial theme change to apply.
    #[must_use]
    pub fn new(
        stored_theme: Option<&str>,
        system_prefers_dark: bool,
        group_keys: Vec<String>,
        reveal_count: usize,
        now_ms: f64,
    ) -> (Self, ThemeChange) {
        let (theme, initial) = ThemeController::resolve(stored_theme, system_prefers_dark, now_ms);
        let core = Self {
            theme,
            tabs: PlatformTabs::new(group_keys),
            reveal: RevealSet::new(reveal_count),
            last_scroll: 0.0,
        };
        (core, initial)
    }

    /// Process one scroll tick against the current section layout.
    pub fn on_scroll(&mut self, sample: ScrollSample, sections: &[Section]) -> ScrollEffects {
        self.last_scroll = sample.y;
        ScrollEffects {
            navbar_shadow: scroll::navbar_shadow(sample.y),
            hero: scroll::hero_style(sample),
            current_section: scroll::current_section(sample.y, sections).map(ToOwned::to_owned),
        }
    }

    /// Process a platform tab click.
    pub fn on_tab_click(&mut self, key: &str) -> TabSelection {
        self.tabs.activate(key)
    }

    /// Process a click on the theme toggle control.
    pub fn on_theme_toggle(&mut self, now_ms: f64) -> ThemeChange {
        self.theme.toggle(now_ms)
    }

    /// Process a live OS color-scheme change.
    pub fn on_system_theme(&mut self, prefers_dark: bool, now_ms: f64) -> Option<ThemeChange> {
        self.theme.system_changed(prefers_dark, now_ms)
    }

    /// Process an intersection notification for reveal element `index`.
    pub fn on_reveal(&mut self, index: usize, intersecting: bool) -> bool {
        self.reveal.notify(index, intersecting)
    }

    /// Whether a key press should run the same path as a toggle click.
    #[must_use]
    pub fn wants_theme_toggle(&self, key: &str, target_tag: Option<&str>) -> bool {
        keys::is_theme_shortcut(key, target_tag)
    }
}
