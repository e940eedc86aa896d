//! One-time page wiring: build the core from the document's startup state,
//! apply the initial theme, and register every listener and observer.

use std::cell::RefCell;
use std::rc::Rc;

use crate::dom::{interact, links, observe, scroll, tabs, theme};
use crate::state::consts::THEME_STORAGE_KEY;
use crate::state::enhancer::EnhancerCore;

/// Wire the page. A non-browser environment (or a page missing the whole
/// markup contract) degrades to a silent no-op.
pub fn init() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let stored = match window.local_storage() {
        Ok(Some(storage)) => storage.get_item(THEME_STORAGE_KEY).ok().flatten(),
        _ => None,
    };
    let system_prefers_dark = window
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .is_some_and(|media| media.matches());

    let group_keys = tabs::group_keys(&document);
    let reveal_targets = observe::reveal_targets(&document);

    let (core, initial) = EnhancerCore::new(
        stored.as_deref(),
        system_prefers_dark,
        group_keys,
        reveal_targets.len(),
        js_sys::Date::now(),
    );
    let core = Rc::new(RefCell::new(core));

    theme::apply_change(&document, &initial);
    theme::register(&window, &document, &core);
    tabs::register(&document, &core);
    scroll::register(&window, &document, &core);
    links::register_smooth_scroll(&document);
    links::harden_external(&document);
    observe::register_reveal(reveal_targets, &core);
    observe::register_lazy(&document);
    interact::register(&window, &document);

    log::info!("page enhancer ready");
}
