//! Cosmetic enhancement layer for a static marketing page, compiled to
//! WebAssembly. Attaches behavior to existing markup: a light/dark theme
//! toggle, platform screenshot tabs, scroll-driven effects, and assorted
//! interaction polish (ripples, link hardening, lazy images).
//!
//! The crate is split into a browser-independent core and a thin host layer.
//! The core owns all state and decides what should happen; the host applies
//! those decisions to the document. Everything that touches `web-sys` is
//! gated behind the `hydrate` feature, so the core is tested natively.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`state`] | Testable core: [`state::enhancer::EnhancerCore`] and per-concern logic |
//! | [`dom`] | Browser bindings: queries, listeners, observers, timers |

pub mod dom;
pub mod state;
