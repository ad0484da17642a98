//! Data-driven testimonial panel fed by the page's embedded JSON.
//!
//! Each arrow click runs the four-step transition owned by
//! [`SlidePanel`]; clicks during a transition are dropped.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{Document, Element, HtmlElement};

use super::SiteLogger;
use crate::config::{CarouselTimings, SiteConfig, dom};
use crate::state::carousel::{PanelControl, PanelFrame, SlidePanel, Testimonial, parse_testimonials, person_at};
use crate::util::dom::{embedded_text, html_by_id, on, set_style, set_text};

struct PanelView {
    wrap: HtmlElement,
    photo: Option<HtmlElement>,
    name: Option<Element>,
    role: Option<Element>,
    quote: Option<Element>,
    people: Vec<Testimonial>,
    placeholder_photo: String,
    timings: CarouselTimings,
    state: RefCell<SlidePanel>,
    logger: SiteLogger,
}

impl PanelView {
    fn render_person(&self, index: usize) {
        let Some(person) = person_at(&self.people, index) else {
            return;
        };
        let card = person.card(&self.placeholder_photo);
        if let Some(photo) = &self.photo {
            set_style(photo, "background-image", &card.background_image());
        }
        for (el, text) in [(&self.name, &card.name), (&self.role, &card.role), (&self.quote, &card.quote)] {
            if let Some(el) = el {
                set_text(el, text);
            }
        }
    }

    fn apply_frame(&self, frame: &PanelFrame) {
        let width = f64::from(self.wrap.offset_width());
        set_style(&self.wrap, "transition", &frame.transition(self.timings.slide_ms));
        set_style(&self.wrap, "opacity", frame.opacity_css());
        set_style(&self.wrap, "transform", &frame.transform(width));
    }
}

fn slide(view: &Rc<PanelView>, control: PanelControl) {
    let Some(frame) = view.state.borrow_mut().request(control, &*view.logger) else {
        return;
    };
    view.apply_frame(&frame);

    let view = Rc::clone(view);
    Timeout::new(view.timings.slide_ms, move || {
        let Some((frame, index)) = view.state.borrow_mut().swap() else {
            return;
        };
        view.apply_frame(&frame);
        view.render_person(index);

        Timeout::new(view.timings.paint_tick_ms, move || {
            let Some(frame) = view.state.borrow_mut().fade_in() else {
                return;
            };
            view.apply_frame(&frame);
            Timeout::new(view.timings.slide_ms, move || {
                view.state.borrow_mut().finish();
            })
            .forget();
        })
        .forget();
    })
    .forget();
}

fn load_people(document: &Document) -> Vec<Testimonial> {
    let Some(raw) = embedded_text(document, dom::TESTIMONIALS_DATA_ID) else {
        return Vec::new();
    };
    match parse_testimonials(&raw) {
        Ok(people) => people,
        Err(err) => {
            log::warn!("{err}; testimonial panel disabled");
            Vec::new()
        }
    }
}

pub fn install(document: &Document, logger: &SiteLogger, config: &SiteConfig) {
    let Some(wrap) = html_by_id(document, dom::REVIEW_WRAP_ID) else {
        return;
    };
    let people = load_people(document);
    if people.is_empty() {
        return;
    }
    let view = Rc::new(PanelView {
        wrap,
        photo: html_by_id(document, dom::PHOTO_ID),
        name: document.get_element_by_id(dom::PERSON_NAME_ID),
        role: document.get_element_by_id(dom::PROFESSION_ID),
        quote: document.get_element_by_id(dom::DESCRIPTION_ID),
        state: RefCell::new(SlidePanel::new(people.len())),
        people,
        placeholder_photo: config.placeholder_photo.clone(),
        timings: config.carousel,
        logger: Rc::clone(logger),
    });
    view.render_person(0);

    for (id, control) in [(dom::LEFT_ARROW_ID, PanelControl::Left), (dom::RIGHT_ARROW_ID, PanelControl::Right)] {
        if let Some(arrow) = document.get_element_by_id(id) {
            let view = Rc::clone(&view);
            on(&arrow, "click", move |_| slide(&view, control));
        }
    }
}
