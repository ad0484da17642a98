//! Page chrome: mobile nav toggle, footer year, pricing-card highlight.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element};

use crate::config::dom;
use crate::state::accordion::ExclusiveSet;
use crate::util::dom::{on, query, query_all, set_attr, set_class, set_text};

pub fn install(document: &Document) {
    install_nav_toggle(document);
    install_footer_year(document);
    install_pricing_hover(document);
}

fn install_nav_toggle(document: &Document) {
    let (Some(toggle), Some(links)) = (query(document, dom::NAV_TOGGLE), document.get_element_by_id(dom::NAV_LINKS_ID))
    else {
        return;
    };
    let button = toggle.clone();
    on(&toggle, "click", move |_| {
        let expanded = button.get_attribute("aria-expanded").as_deref() == Some("true");
        set_attr(&button, "aria-expanded", if expanded { "false" } else { "true" });
        set_class(&links, dom::OPEN_CLASS, !expanded);
    });
}

fn install_footer_year(document: &Document) {
    if let Some(year) = document.get_element_by_id(dom::YEAR_ID) {
        set_text(&year, &js_sys::Date::new_0().get_full_year().to_string());
    }
}

fn install_pricing_hover(document: &Document) {
    let cards = Rc::new(query_all(document, dom::PRICING_CARD));
    if cards.is_empty() {
        return;
    }
    let highlight = Rc::new(RefCell::new(ExclusiveSet::new(cards.len())));
    for (i, card) in cards.iter().enumerate() {
        let cards = Rc::clone(&cards);
        let highlight = Rc::clone(&highlight);
        on(card, "mouseover", move |_| {
            let active = highlight.borrow_mut().select(i);
            render_active(&cards, active);
        });
    }
}

fn render_active(cards: &[Element], active: Option<usize>) {
    for (i, card) in cards.iter().enumerate() {
        set_class(card, dom::ACTIVE_CLASS, active == Some(i));
    }
}
