//! Viewport-intersection watchers: one-shot reveal animations and lazy
//! image loading.
//!
//! The reveal watcher never unobserves; the core's monotonic flags make
//! repeat notifications harmless. The lazy watcher unobserves each image
//! after its real source is swapped in.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen::prelude::Closure;
use web_sys::{Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::state::consts::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use crate::state::enhancer::EnhancerCore;

/// Elements animated into view as they become visible.
const REVEAL_SELECTOR: &str = ".feature-card, .step, .metric-card, .pricing-card";

/// Images whose real source is deferred until they near the viewport.
const LAZY_SELECTOR: &str = "img[data-src]";

/// Registration-order index carried on each reveal target.
const INDEX_ATTR: &str = "data-reveal-index";

/// Reveal targets in registration order; the count seeds the core's flags.
pub(crate) fn reveal_targets(document: &Document) -> Vec<Element> {
    super::query_all(document, REVEAL_SELECTOR)
}

/// Hide each target, then watch it for the one-shot reveal.
pub(crate) fn register_reveal(
    targets: Vec<Element>,
    core: &Rc<RefCell<EnhancerCore>>,
) {
    if targets.is_empty() {
        return;
    }

    let core = Rc::clone(core);
    let on_entries = Closure::<dyn Fn(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry = entry.unchecked_into::<IntersectionObserverEntry>();
                let target = entry.target();
                let Some(index) = target
                    .get_attribute(INDEX_ATTR)
                    .and_then(|v| v.parse::<usize>().ok())
                else {
                    continue;
                };
                if core.borrow_mut().on_reveal(index, entry.is_intersecting()) {
                    reveal(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let Ok(observer) =
        IntersectionObserver::new_with_options(on_entries.as_ref().unchecked_ref(), &options)
    else {
        return;
    };
    on_entries.forget();

    for (index, target) in targets.iter().enumerate() {
        let _ = target.set_attribute(INDEX_ATTR, &index.to_string());
        hide(target);
        observer.observe(target);
    }
}

/// Watch deferred images and swap their sources in on first intersection.
pub(crate) fn register_lazy(document: &Document) {
    let images = super::query_all(document, LAZY_SELECTOR);
    if images.is_empty() {
        return;
    }

    let on_entries = Closure::<dyn Fn(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry = entry.unchecked_into::<IntersectionObserverEntry>();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if let Some(src) = target.get_attribute("data-src") {
                    let _ = target.set_attribute("src", &src);
                }
                let _ = target.class_list().add_1("loaded");
                observer.unobserve(&target);
            }
        },
    );

    let Ok(observer) = IntersectionObserver::new(on_entries.as_ref().unchecked_ref()) else {
        return;
    };
    on_entries.forget();

    for image in &images {
        observer.observe(image);
    }
}

/// Initial hidden state plus the transition that animates the reveal.
fn hide(target: &Element) {
    let Some(target) = target.dyn_ref::<HtmlElement>() else {
        return;
    };
    let style = target.style();
    let _ = style.set_property("opacity", "0");
    let _ = style.set_property("transform", "translateY(30px)");
    let _ = style.set_property("transition", "opacity 0.6s ease, transform 0.6s ease");
}

/// Revealed state; idempotent, applied on every intersecting notification.
fn reveal(target: &Element) {
    let Some(target) = target.dyn_ref::<HtmlElement>() else {
        return;
    };
    let style = target.style();
    let _ = style.set_property("opacity", "1");
    let _ = style.set_property("transform", "translateY(0)");
}
