//! Page-level analytics listeners: page view, delegated clicks, form
//! submissions, and time-on-page at unload.

use std::rc::Rc;

use web_sys::{Document, HtmlFormElement};

use super::SiteLogger;
use crate::config::dom;
use crate::error::SiteError;
use crate::state::analytics::{ClickTarget, SiteEvent, click_events, elapsed_seconds};
use crate::util::dom::{cast, event_element, now_ms, on};

fn current_path() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    match window.location().pathname() {
        Ok(path) => path,
        Err(err) => {
            log::warn!("location.pathname: {}", SiteError::from(err));
            String::new()
        }
    }
}

pub fn install(document: &Document, logger: &SiteLogger) {
    let started_ms = now_ms();

    logger.log(&SiteEvent::PageView { page: current_path(), referrer: document.referrer() });

    let clicks = Rc::clone(logger);
    on(document, "click", move |event| {
        let Some(el) = event_element(&event) else {
            return;
        };
        let href = if el.tag_name().eq_ignore_ascii_case("a") { el.get_attribute("href") } else { None };
        let text = el.text_content().unwrap_or_default();
        let target = ClickTarget {
            anchor_href: href.as_deref(),
            is_primary_cta: el.class_list().contains(dom::PRIMARY_CTA_CLASS),
            text: &text,
        };
        for event in click_events(&target) {
            clicks.log(&event);
        }
    });

    let submits = Rc::clone(logger);
    on(document, "submit", move |event| {
        let Some(form) = event.target().and_then(cast::<HtmlFormElement>) else {
            return;
        };
        let id = form.id();
        submits.log(&SiteEvent::FormSubmit { form_id: (!id.is_empty()).then_some(id) });
    });

    let Some(window) = web_sys::window() else {
        return;
    };
    let unload = Rc::clone(logger);
    on(&window, "beforeunload", move |_| {
        let seconds = elapsed_seconds(started_ms, now_ms());
        unload.log(&SiteEvent::PageTimeSpent { page: current_path(), seconds });
    });
}
