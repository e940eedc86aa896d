//! Shared constants for the enhancement layer.

// ── Theme ───────────────────────────────────────────────────────

/// localStorage slot holding the persisted theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Fixed Product Hunt post id embedded in the badge URL.
pub const BADGE_POST_ID: &str = "1064408";

/// Base endpoint for the themed badge image.
pub const BADGE_ENDPOINT: &str = "https://api.producthunt.com/widgets/embed-image/v1/featured.svg";

/// Duration of the toggle control's rotation animation, in milliseconds.
pub const TOGGLE_SPIN_MS: u32 = 300;

// ── Scroll ──────────────────────────────────────────────────────

/// Vertical offset in pixels past which the navbar casts a shadow.
pub const NAVBAR_SHADOW_OFFSET: f64 = 100.0;

/// Lookahead in pixels when deciding which section a nav link points at.
pub const NAV_LINK_LOOKAHEAD: f64 = 200.0;

/// Fraction of the scroll offset applied as hero translation.
pub const HERO_PARALLAX_FACTOR: f64 = 0.3;

// ── Reveal ──────────────────────────────────────────────────────

/// Intersection ratio at which a watched element counts as visible.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Root margin shrinking the viewport bottom for reveal detection.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";

// ── Interaction ─────────────────────────────────────────────────

/// Lifetime of a ripple element before removal, in milliseconds.
pub const RIPPLE_LIFETIME_MS: u32 = 600;
