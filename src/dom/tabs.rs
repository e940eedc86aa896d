//! Platform tab click handling and active-class application.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Document, Element};

use crate::state::enhancer::EnhancerCore;
use crate::state::tabs::TabSelection;

const TAB_SELECTOR: &str = ".platform-tab";
const GROUP_SELECTOR: &str = ".platform-screenshots";
const ACTIVE_CLASS: &str = "active";

/// Platform key carried by tabs and screenshot groups.
const PLATFORM_ATTR: &str = "data-platform";

/// Screenshot group keys present in the document, for the core's matching.
pub(crate) fn group_keys(document: &Document) -> Vec<String> {
    super::query_all(document, GROUP_SELECTOR)
        .iter()
        .filter_map(|el| el.get_attribute(PLATFORM_ATTR))
        .collect()
}

/// Register a click handler on every platform tab.
pub(crate) fn register(document: &Document, core: &Rc<RefCell<EnhancerCore>>) {
    let tabs = Rc::new(super::query_all(document, TAB_SELECTOR));
    let groups = Rc::new(super::query_all(document, GROUP_SELECTOR));

    for tab in tabs.iter() {
        let Some(key) = tab.get_attribute(PLATFORM_ATTR) else {
            continue;
        };
        let core = Rc::clone(core);
        let tabs = Rc::clone(&tabs);
        let groups = Rc::clone(&groups);
        let on_click = Closure::<dyn Fn()>::new(move || {
            let selection = core.borrow_mut().on_tab_click(&key);
            apply(&tabs, &groups, &selection);
        });
        let _ = tab.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        on_click.forget();
    }
}

/// Clear every active marker, then re-add it per the selection.
fn apply(tabs: &[Element], groups: &[Element], selection: &TabSelection) {
    for el in tabs.iter().chain(groups.iter()) {
        let _ = el.class_list().remove_1(ACTIVE_CLASS);
    }
    if let Some(tab) = find_by_key(tabs, &selection.tab) {
        let _ = tab.class_list().add_1(ACTIVE_CLASS);
    }
    if let Some(group_key) = &selection.group {
        if let Some(group) = find_by_key(groups, group_key) {
            let _ = group.class_list().add_1(ACTIVE_CLASS);
        }
    }
}

fn find_by_key<'a>(elements: &'a [Element], key: &str) -> Option<&'a Element> {
    elements
        .iter()
        .find(|el| el.get_attribute(PLATFORM_ATTR).as_deref() == Some(key))
}
