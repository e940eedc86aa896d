//! Theme preference resolution, toggling, and badge URL construction.
//!
//! The controller caches the active theme and whether an explicit preference
//! exists in storage. Resolution order at startup: stored value, else the
//! OS-reported color scheme, else light. Live OS changes are honored only
//! while no explicit preference is persisted.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::consts::{BADGE_ENDPOINT, BADGE_POST_ID};

/// Binary visual mode, reflected as the `data-theme` document attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The attribute / storage string for this theme.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored string. Unrecognized values are treated as absent.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The opposite theme.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// A theme transition for the host to apply.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeChange {
    /// Theme to reflect in the document attribute.
    pub theme: Theme,
    /// Whether the value must be written to storage.
    pub persist: bool,
    /// Rebuilt badge image URL matching the theme.
    pub badge_url: String,
    /// Whether to play the rotation animation on the toggle control.
    pub spin: bool,
}

/// Cached theme state.
#[derive(Debug, Clone)]
pub struct ThemeController {
    current: Theme,
    has_stored_preference: bool,
}

impl ThemeController {
    /// Resolve the initial theme from the stored preference and the OS
    /// color scheme, returning the controller and the change to apply.
    ///
    /// An empty slot with a dark OS preference resolves to dark and writes
    /// it back, so later OS changes no longer track.
    #[must_use]
    pub fn resolve(stored: Option<&str>, system_prefers_dark: bool, now_ms: f64) -> (Self, ThemeChange) {
        let stored = stored.and_then(Theme::parse);
        let (theme, persist) = match stored {
            Some(theme) => (theme, false),
            None if system_prefers_dark => (Theme::Dark, true),
            None => (Theme::Light, false),
        };
        let controller = Self {
            current: theme,
            has_stored_preference: stored.is_some() || persist,
        };
        let change = ThemeChange {
            theme,
            persist,
            badge_url: badge_url(theme, now_ms),
            spin: false,
        };
        (controller, change)
    }

    /// The active theme.
    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Whether an explicit preference is persisted.
    #[must_use]
    pub fn has_stored_preference(&self) -> bool {
        self.has_stored_preference
    }

    /// Flip the theme in response to a user toggle.
    pub fn toggle(&mut self, now_ms: f64) -> ThemeChange {
        self.current = self.current.flipped();
        self.has_stored_preference = true;
        ThemeChange {
            theme: self.current,
            persist: true,
            badge_url: badge_url(self.current, now_ms),
            spin: true,
        }
    }

    /// React to a live OS color-scheme change.
    ///
    /// Ignored once an explicit preference exists; never persists.
    pub fn system_changed(&mut self, prefers_dark: bool, now_ms: f64) -> Option<ThemeChange> {
        if self.has_stored_preference {
            return None;
        }
        self.current = if prefers_dark { Theme::Dark } else { Theme::Light };
        Some(ThemeChange {
            theme: self.current,
            persist: false,
            badge_url: badge_url(self.current, now_ms),
            spin: false,
        })
    }
}

/// Build the themed badge image URL with a cache-busting timestamp.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn badge_url(theme: Theme, now_ms: f64) -> String {
    format!(
        "{BADGE_ENDPOINT}?post_id={BADGE_POST_ID}&theme={}&t={}",
        theme.as_str(),
        now_ms as u64
    )
}
