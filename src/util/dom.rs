//! Thin `web-sys` helpers shared by the browser components.
//!
//! Every DOM mutation here is best-effort: a throwing call is logged at `warn`
//! and the component carries on.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, EventTarget, HtmlElement, NodeList};

use crate::error::SiteError;

/// The current page's document.
///
/// # Errors
///
/// Returns [`SiteError::MissingElement`] outside a browser window.
pub fn document() -> Result<Document, SiteError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| SiteError::MissingElement("document".to_owned()))
}

/// Milliseconds since the Unix epoch, from the JS clock.
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Log a failed DOM call instead of propagating it.
pub fn warn_on_err<T>(result: Result<T, JsValue>, context: &str) {
    if let Err(err) = result {
        log::warn!("{context}: {}", SiteError::from(err));
    }
}

/// Downcast a JS object, logging what it turned out to be on mismatch.
pub fn cast<T: JsCast>(value: impl JsCast + std::fmt::Debug) -> Option<T> {
    match value.dyn_into::<T>() {
        Ok(cast) => Some(cast),
        Err(other) => {
            log::debug!("{other:?} is not a {}", std::any::type_name::<T>());
            None
        }
    }
}

fn collect(list: NodeList) -> Vec<Element> {
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(node) = list.item(i) {
            if let Ok(el) = node.dyn_into::<Element>() {
                out.push(el);
            }
        }
    }
    out
}

/// All elements in the document matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    match document.query_selector_all(selector) {
        Ok(list) => collect(list),
        Err(err) => {
            log::warn!("bad selector {selector}: {}", SiteError::from(err));
            Vec::new()
        }
    }
}

/// All descendants of `root` matching `selector`.
pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    match root.query_selector_all(selector) {
        Ok(list) => collect(list),
        Err(err) => {
            log::warn!("bad selector {selector}: {}", SiteError::from(err));
            Vec::new()
        }
    }
}

/// First descendant of `root` matching `selector`.
pub fn query_in(root: &Element, selector: &str) -> Option<Element> {
    match root.query_selector(selector) {
        Ok(found) => found,
        Err(err) => {
            log::warn!("bad selector {selector}: {}", SiteError::from(err));
            None
        }
    }
}

/// First element in the document matching `selector`.
pub fn query(document: &Document, selector: &str) -> Option<Element> {
    match document.query_selector(selector) {
        Ok(found) => found,
        Err(err) => {
            log::warn!("bad selector {selector}: {}", SiteError::from(err));
            None
        }
    }
}

/// Nearest ancestor-or-self of `el` matching `selector`.
pub fn closest(el: &Element, selector: &str) -> Option<Element> {
    match el.closest(selector) {
        Ok(found) => found,
        Err(err) => {
            log::warn!("bad selector {selector}: {}", SiteError::from(err));
            None
        }
    }
}

/// Element with `id`, cast to `HtmlElement`.
pub fn html_by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document.get_element_by_id(id).and_then(cast::<HtmlElement>)
}

/// Text content of the element with `id`, if present.
pub fn embedded_text(document: &Document, id: &str) -> Option<String> {
    document.get_element_by_id(id).and_then(|el| el.text_content())
}

/// The element an event was dispatched to.
pub fn event_element(event: &web_sys::Event) -> Option<Element> {
    event.target().and_then(cast::<Element>)
}

/// Add or remove `class` on `el`.
pub fn set_class(el: &Element, class: &str, on: bool) {
    warn_on_err(el.class_list().toggle_with_force(class, on), "classList.toggle");
}

pub fn set_attr(el: &Element, name: &str, value: &str) {
    warn_on_err(el.set_attribute(name, value), "setAttribute");
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    warn_on_err(el.style().set_property(property, value), "style.setProperty");
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

/// Attach a listener for the life of the page.
pub fn on<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(web_sys::Event) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    warn_on_err(
        target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()),
        "addEventListener",
    );
    cb.forget();
}
