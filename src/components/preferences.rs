//! Dark-mode and font-size controls bound to the `<html>` element.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::config::{SiteConfig, dom};
use crate::state::preferences::{FONT_SCALE_STEP, PreferenceStore, Preferences, Presentation};
use crate::util::dom::{on, set_attr, set_class, set_style, set_text};
use crate::util::storage::KeyValueStore;

/// The document root as a preference render target.
pub struct RootPresentation {
    root: Element,
}

impl Presentation for RootPresentation {
    fn set_dark_mode(&self, enabled: bool) {
        set_class(&self.root, dom::DARK_CLASS, enabled);
    }

    fn set_font_scale(&self, scale: f64) {
        match self.root.dyn_ref::<HtmlElement>() {
            Some(root) => set_style(root, dom::FONT_SCALE_VAR, &scale.to_string()),
            None => log::warn!("document root is not an HTML element; font scale not applied"),
        }
    }
}

type Store = PreferenceStore<Rc<dyn KeyValueStore>>;

/// Apply stored preferences now and bind the three controls.
pub fn install(document: &Document, storage: Rc<dyn KeyValueStore>, config: &SiteConfig) {
    let Some(root) = document.document_element() else {
        log::warn!("no document root; preferences not applied");
        return;
    };
    let target = Rc::new(RootPresentation { root });
    let store: Rc<Store> = Rc::new(PreferenceStore::new(storage, config.storage.clone()));
    let initial = store.apply(target.as_ref());

    if let Some(button) = document.get_element_by_id(dom::TOGGLE_DARK_ID) {
        reflect_dark_button(&button, initial);
        let (store, target, label) = (Rc::clone(&store), Rc::clone(&target), button.clone());
        on(&button, "click", move |_| {
            let prefs = store.toggle_dark_mode(target.as_ref());
            reflect_dark_button(&label, prefs);
        });
    }

    for (id, delta) in [(dom::INCREASE_FONT_ID, FONT_SCALE_STEP), (dom::DECREASE_FONT_ID, -FONT_SCALE_STEP)] {
        if let Some(button) = document.get_element_by_id(id) {
            let (store, target) = (Rc::clone(&store), Rc::clone(&target));
            on(&button, "click", move |_| {
                store.adjust_font_scale(delta, target.as_ref());
            });
        }
    }
}

fn reflect_dark_button(button: &Element, prefs: Preferences) {
    set_attr(button, "aria-pressed", if prefs.dark_mode { "true" } else { "false" });
    set_text(button, prefs.dark_toggle_label());
}
