//! Button polish (ripples, hover transition) and the body `loaded` marker.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::state::consts::RIPPLE_LIFETIME_MS;
use crate::state::ripple::ripple_geometry;

const BUTTON_SELECTOR: &str = ".btn";
const RIPPLE_CLASS: &str = "ripple";

/// Register button handlers and the window `load` marker.
pub(crate) fn register(window: &Window, document: &Document) {
    for button in super::query_all(document, BUTTON_SELECTOR) {
        register_ripple(document, &button);
        register_hover(&button);
    }
    register_loaded_marker(window, document);
}

/// Emit a transient ripple circle from the click point, removed by an
/// uncancelled delayed callback.
fn register_ripple(document: &Document, button: &Element) {
    let doc = document.clone();
    let target = button.clone();
    let on_click = Closure::<dyn Fn(web_sys::MouseEvent)>::new(move |event: web_sys::MouseEvent| {
        let rect = target.get_bounding_client_rect();
        let geo = ripple_geometry(
            rect.width(),
            rect.height(),
            f64::from(event.client_x()) - rect.left(),
            f64::from(event.client_y()) - rect.top(),
        );

        let Ok(ripple) = doc.create_element("span") else {
            return;
        };
        if let Some(el) = ripple.dyn_ref::<HtmlElement>() {
            let style = el.style();
            let _ = style.set_property("width", &format!("{}px", geo.size));
            let _ = style.set_property("height", &format!("{}px", geo.size));
            let _ = style.set_property("left", &format!("{}px", geo.x));
            let _ = style.set_property("top", &format!("{}px", geo.y));
        }
        let _ = ripple.class_list().add_1(RIPPLE_CLASS);
        if target.append_child(&ripple).is_err() {
            return;
        }

        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
                RIPPLE_LIFETIME_MS,
            )))
            .await;
            ripple.remove();
        });
    });
    let _ = button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    on_click.forget();
}

/// Ease all property changes once the pointer enters a button.
fn register_hover(button: &Element) {
    let Some(target) = button.dyn_ref::<HtmlElement>().cloned() else {
        return;
    };
    let on_enter = Closure::<dyn Fn()>::new(move || {
        let _ = target.style().set_property("transition", "all 0.3s ease");
    });
    let _ = button.add_event_listener_with_callback("mouseenter", on_enter.as_ref().unchecked_ref());
    on_enter.forget();
}

/// Mark `body` once every subresource has loaded.
fn register_loaded_marker(window: &Window, document: &Document) {
    let doc = document.clone();
    let on_load = Closure::<dyn Fn()>::new(move || {
        if let Some(body) = doc.body() {
            let _ = body.class_list().add_1("loaded");
        }
    });
    let _ = window.add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref());
    on_load.forget();
}
