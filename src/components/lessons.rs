//! Lesson "Mark Complete" buttons and per-topic progress bars.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element, HtmlElement};

use super::SiteLogger;
use crate::config::{SiteConfig, dom};
use crate::net::api::HttpBeacon;
use crate::state::progress::{LessonToggle, LessonTracker, ProgressBook, ProgressSummary};
use crate::util::dom::{cast, closest, event_element, on, query_all, query_all_in, query_in, set_class, set_style, set_text};

fn lesson_id_of(item: &Element) -> String {
    query_in(item, dom::COMPLETE_BUTTON)
        .and_then(|button| button.get_attribute(dom::LESSON_ID_ATTR))
        .or_else(|| item.get_attribute(dom::LESSON_ID_ATTR))
        .unwrap_or_default()
}

fn render_summary(card: &Element, summary: ProgressSummary) {
    if let Some(text) = query_in(card, dom::PROGRESS_TEXT) {
        set_text(&text, &summary.text());
    }
    if let Some(fill) = query_in(card, dom::PROGRESS_FILL).and_then(cast::<HtmlElement>) {
        set_style(&fill, "width", &summary.bar_width());
    }
}

fn render_toggle(button: &Element, card: Option<&Element>, toggle: &LessonToggle) {
    if let Some(item) = closest(button, dom::LESSON_ITEM) {
        set_class(&item, dom::COMPLETED_CLASS, toggle.completed);
    }
    set_class(button, dom::COMPLETED_CLASS, toggle.completed);
    if let Some(label) = query_in(button, dom::COMPLETE_TEXT) {
        set_text(&label, toggle.label());
    }
    if let Some(card) = card {
        render_summary(card, toggle.summary);
    }
}

/// Seed the progress book from the rendered markers, draw every topic once,
/// and handle completion clicks.
pub fn install(document: &Document, logger: &SiteLogger, config: &SiteConfig) {
    let cards = query_all(document, dom::TOPIC_CARD);
    let mut book = ProgressBook::new();
    for card in &cards {
        let lessons = query_all_in(card, dom::LESSON_ITEM)
            .into_iter()
            .map(|item| (lesson_id_of(&item), item.class_list().contains(dom::COMPLETED_CLASS)));
        let topic = book.add_topic(lessons);
        render_summary(card, book.summary(topic));
    }

    let tracker = Rc::new(RefCell::new(LessonTracker::new(book, HttpBeacon, config.endpoints.progress.clone())));
    let cards = Rc::new(cards);
    let logger = Rc::clone(logger);
    on(document, "click", move |event| {
        let Some(button) = event_element(&event).and_then(|el| closest(&el, dom::COMPLETE_BUTTON)) else {
            return;
        };
        let Some(lesson_id) = button.get_attribute(dom::LESSON_ID_ATTR) else {
            log::warn!("completion button without {}", dom::LESSON_ID_ATTR);
            return;
        };
        let result = tracker.borrow_mut().toggle(&lesson_id, &*logger);
        match result {
            Ok(toggle) => render_toggle(&button, cards.get(toggle.topic), &toggle),
            Err(err) => log::warn!("{err}"),
        }
    });
}
