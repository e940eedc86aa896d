//! The consolidated scroll listener: navbar shadow, hero parallax, and
//! active nav-link highlighting, all recomputed on every scroll event.
//!
//! Section offsets are re-read from the live elements each tick, so layout
//! shifts after load never leave stale positions behind.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::state::enhancer::{EnhancerCore, ScrollEffects};
use crate::state::scroll::{ScrollSample, Section};

const NAVBAR_SELECTOR: &str = ".navbar";
const HERO_SELECTOR: &str = ".hero-content";
const SECTION_SELECTOR: &str = "section[id]";
const NAV_LINK_SELECTOR: &str = ".nav-links a";
const ACTIVE_CLASS: &str = "active";

const NAVBAR_SHADOW: &str = "0 2px 10px var(--shadow)";

/// Register the scroll listener against the cached page elements.
pub(crate) fn register(window: &Window, document: &Document, core: &Rc<RefCell<EnhancerCore>>) {
    let navbar = document
        .query_selector(NAVBAR_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    let hero = document
        .query_selector(HERO_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    let sections: Vec<HtmlElement> = super::query_all(document, SECTION_SELECTOR)
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect();
    let nav_links = super::query_all(document, NAV_LINK_SELECTOR);

    let win = window.clone();
    let core = Rc::clone(core);
    let on_scroll = Closure::<dyn Fn()>::new(move || {
        let sample = sample_window(&win);
        let layout = section_layout(&sections);
        let effects = core.borrow_mut().on_scroll(sample, &layout);
        apply(navbar.as_ref(), hero.as_ref(), &nav_links, &effects);
    });
    let _ = window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
    on_scroll.forget();
}

/// Read the current scroll offset and viewport height.
fn sample_window(window: &Window) -> ScrollSample {
    let y = window.scroll_y().unwrap_or(0.0);
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    ScrollSample { y, viewport_height }
}

/// Current section ids and top offsets, in document order.
fn section_layout(sections: &[HtmlElement]) -> Vec<Section> {
    sections
        .iter()
        .filter_map(|el| {
            let id = el.id();
            if id.is_empty() {
                return None;
            }
            Some(Section { id, top: f64::from(el.offset_top()) })
        })
        .collect()
}

fn apply(
    navbar: Option<&HtmlElement>,
    hero: Option<&HtmlElement>,
    nav_links: &[Element],
    effects: &ScrollEffects,
) {
    if let Some(navbar) = navbar {
        let shadow = if effects.navbar_shadow { NAVBAR_SHADOW } else { "none" };
        let _ = navbar.style().set_property("box-shadow", shadow);
    }

    if let (Some(hero), Some(style)) = (hero, effects.hero) {
        let _ = hero
            .style()
            .set_property("transform", &format!("translateY({}px)", style.translate_y));
        let _ = hero.style().set_property("opacity", &style.opacity.to_string());
    }

    let target_href = effects.current_section.as_ref().map(|id| format!("#{id}"));
    for link in nav_links {
        let _ = link.class_list().remove_1(ACTIVE_CLASS);
        if let Some(target) = &target_href {
            if link.get_attribute("href").as_deref() == Some(target) {
                let _ = link.class_list().add_1(ACTIVE_CLASS);
            }
        }
    }
}
