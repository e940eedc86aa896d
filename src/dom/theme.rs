//! Theme application and the three ways a theme change is triggered:
//! toggle click, `t` shortcut, and a live OS color-scheme change.
//!
//! Reads go through the core controller; this module only mirrors the
//! resulting [`ThemeChange`] into the document, storage, and badge image.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Document, HtmlElement, Window};

use crate::state::consts::{THEME_STORAGE_KEY, TOGGLE_SPIN_MS};
use crate::state::enhancer::EnhancerCore;
use crate::state::theme::ThemeChange;

/// Id of the toggle control in the markup contract.
const TOGGLE_ID: &str = "themeToggle";

/// Selector for the themed badge image, when the page carries one.
const BADGE_SELECTOR: &str = ".producthunt-badge img";

/// Mirror a theme change into the page.
pub(crate) fn apply_change(document: &Document, change: &ThemeChange) {
    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("data-theme", change.theme.as_str());
    }

    if change.persist {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(THEME_STORAGE_KEY, change.theme.as_str());
            }
        }
    }

    if let Ok(Some(badge)) = document.query_selector(BADGE_SELECTOR) {
        let _ = badge.set_attribute("src", &change.badge_url);
    }

    if change.spin {
        spin_toggle(document);
    }
}

/// Flip the theme through the core and apply the result. Shared by the
/// click handler and the keyboard shortcut.
pub(crate) fn run_toggle(document: &Document, core: &Rc<RefCell<EnhancerCore>>) {
    let change = core.borrow_mut().on_theme_toggle(js_sys::Date::now());
    apply_change(document, &change);
}

/// Register the toggle click handler, the keyboard shortcut, and the OS
/// color-scheme subscription.
pub(crate) fn register(window: &Window, document: &Document, core: &Rc<RefCell<EnhancerCore>>) {
    register_toggle_click(document, core);
    register_shortcut(document, core);
    register_system_listener(window, document, core);
}

fn register_toggle_click(document: &Document, core: &Rc<RefCell<EnhancerCore>>) {
    let Some(toggle) = document.get_element_by_id(TOGGLE_ID) else {
        return;
    };
    let doc = document.clone();
    let core = Rc::clone(core);
    let on_click = Closure::<dyn Fn()>::new(move || {
        run_toggle(&doc, &core);
    });
    let _ = toggle.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    on_click.forget();
}

fn register_shortcut(document: &Document, core: &Rc<RefCell<EnhancerCore>>) {
    let doc = document.clone();
    let core = Rc::clone(core);
    let on_key = Closure::<dyn Fn(web_sys::KeyboardEvent)>::new(move |event: web_sys::KeyboardEvent| {
        let tag = event
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .map(|el| el.tag_name());
        let wants = core.borrow().wants_theme_toggle(&event.key(), tag.as_deref());
        if wants {
            run_toggle(&doc, &core);
        }
    });
    let _ = document.add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref());
    on_key.forget();
}

fn register_system_listener(window: &Window, document: &Document, core: &Rc<RefCell<EnhancerCore>>) {
    let Ok(Some(media)) = window.match_media("(prefers-color-scheme: dark)") else {
        return;
    };
    let doc = document.clone();
    let core = Rc::clone(core);
    let on_change =
        Closure::<dyn Fn(web_sys::MediaQueryListEvent)>::new(move |event: web_sys::MediaQueryListEvent| {
            let change = core.borrow_mut().on_system_theme(event.matches(), js_sys::Date::now());
            if let Some(change) = change {
                apply_change(&doc, &change);
            }
        });
    let _ = media.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref());
    on_change.forget();
}

/// Play the rotation animation on the toggle control, resetting it with an
/// uncancelled delayed callback. Rapid re-toggling can reset a rotation
/// mid-flight.
fn spin_toggle(document: &Document) {
    let Some(toggle) = document.get_element_by_id(TOGGLE_ID) else {
        return;
    };
    let Some(toggle) = toggle.dyn_ref::<HtmlElement>().cloned() else {
        return;
    };
    let _ = toggle.style().set_property("transform", "rotate(360deg)");
    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(TOGGLE_SPIN_MS))).await;
        let _ = toggle.style().set_property("transform", "rotate(0deg)");
    });
}
