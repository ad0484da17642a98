//! FAQ list and generic accordion. Opening one item closes the rest.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element};

use crate::config::dom;
use crate::state::accordion::ExclusiveSet;
use crate::util::dom::{on, query_all, query_in, set_attr, set_class};

struct FaqItem {
    trigger: Element,
    answer: Element,
    icon: Option<Element>,
}

/// Each `.faq-answer` is driven by its preceding sibling; the open marker
/// goes on the answer and on the trigger's `.faq-icon`.
pub fn install_faq(document: &Document) {
    let items: Vec<FaqItem> = query_all(document, dom::FAQ_ANSWER)
        .into_iter()
        .filter_map(|answer| {
            let trigger = answer.previous_element_sibling()?;
            let icon = query_in(&trigger, dom::FAQ_ICON);
            Some(FaqItem { trigger, answer, icon })
        })
        .collect();
    if items.is_empty() {
        return;
    }
    let items = Rc::new(items);
    let open = Rc::new(RefCell::new(ExclusiveSet::new(items.len())));
    render_faq(&items, None);

    for (i, item) in items.iter().enumerate() {
        let (items, open) = (Rc::clone(&items), Rc::clone(&open));
        on(&item.trigger, "click", move |_| {
            let now = open.borrow_mut().toggle(i);
            render_faq(&items, now);
        });
    }
}

fn render_faq(items: &[FaqItem], open: Option<usize>) {
    for (i, item) in items.iter().enumerate() {
        let is_open = open == Some(i);
        set_class(&item.answer, dom::OPEN_CLASS, is_open);
        if let Some(icon) = &item.icon {
            set_class(icon, dom::OPEN_CLASS, is_open);
        }
    }
}

/// `.accordion button` headers reflecting state through `aria-expanded`.
pub fn install_generic(document: &Document) {
    let buttons = Rc::new(query_all(document, dom::ACCORDION_BUTTON));
    if buttons.is_empty() {
        return;
    }
    let open = Rc::new(RefCell::new(ExclusiveSet::new(buttons.len())));
    render_expanded(&buttons, None);

    for (i, button) in buttons.iter().enumerate() {
        let (buttons, open) = (Rc::clone(&buttons), Rc::clone(&open));
        on(button, "click", move |_| {
            let now = open.borrow_mut().toggle(i);
            render_expanded(&buttons, now);
        });
    }
}

fn render_expanded(buttons: &[Element], open: Option<usize>) {
    for (i, button) in buttons.iter().enumerate() {
        set_attr(button, "aria-expanded", if open == Some(i) { "true" } else { "false" });
    }
}
