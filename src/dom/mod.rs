//! Browser bindings for the enhancement layer.
//!
//! Everything here requires a live document and is compiled only under the
//! `hydrate` feature. Each module registers listeners or observers at
//! startup and applies the effects the core hands back. A missing element
//! silently skips its effect; the page works without the enhancement.
//!
//! Listener closures are registered once and intentionally leaked with
//! `Closure::forget`; their lifetime equals the page lifetime.

#[cfg(feature = "hydrate")]
pub mod boot;
#[cfg(feature = "hydrate")]
mod interact;
#[cfg(feature = "hydrate")]
mod links;
#[cfg(feature = "hydrate")]
mod observe;
#[cfg(feature = "hydrate")]
mod scroll;
#[cfg(feature = "hydrate")]
mod tabs;
#[cfg(feature = "hydrate")]
mod theme;

/// Module entry point: set up logging and wire the page once the wasm
/// module is instantiated.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    boot::init();
}

/// Collect every element matching `selector`, skipping non-element nodes.
#[cfg(feature = "hydrate")]
pub(crate) fn query_all(document: &web_sys::Document, selector: &str) -> Vec<web_sys::Element> {
    use wasm_bindgen::JsCast;

    let mut elements = Vec::new();
    let Ok(list) = document.query_selector_all(selector) else {
        return elements;
    };
    for i in 0..list.length() {
        if let Some(node) = list.item(i) {
            if let Ok(el) = node.dyn_into::<web_sys::Element>() {
                elements.push(el);
            }
        }
    }
    elements
}
