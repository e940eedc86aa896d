//! Anchor behavior applied once at load: smooth scrolling for in-page
//! links and attribute hardening for external ones. Links inserted after
//! initialization are not covered.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Document, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::state::links::{EXTERNAL_REL, needs_hardening, scroll_target};

const INTERNAL_ANCHOR_SELECTOR: &str = "a[href^='#']";
const EXTERNAL_ANCHOR_SELECTOR: &str = "a[href^='http']";

/// Register smooth-scroll click handlers on in-page anchors.
pub(crate) fn register_smooth_scroll(document: &Document) {
    for anchor in super::query_all(document, INTERNAL_ANCHOR_SELECTOR) {
        let doc = document.clone();
        let href = anchor.get_attribute("href").unwrap_or_default();
        let on_click = Closure::<dyn Fn(web_sys::Event)>::new(move |event: web_sys::Event| {
            let Some(selector) = scroll_target(&href) else {
                return;
            };
            event.prevent_default();
            if let Ok(Some(target)) = doc.query_selector(selector) {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            }
        });
        let _ = anchor.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        on_click.forget();
    }
}

/// Add `target`/`rel` attributes to external links lacking an explicit
/// target. Applied once; a failure on one anchor skips only that anchor.
pub(crate) fn harden_external(document: &Document) {
    for anchor in super::query_all(document, EXTERNAL_ANCHOR_SELECTOR) {
        let href = anchor.get_attribute("href").unwrap_or_default();
        if needs_hardening(&href, anchor.has_attribute("target")) {
            let _ = anchor.set_attribute("target", "_blank");
            let _ = anchor.set_attribute("rel", EXTERNAL_REL);
        }
    }
}
