//! Class-toggling testimonial slide show with 5-second auto-advance.
//!
//! Prev/next controls are any element carrying
//! `data-testimonial-step="1"` or `data-testimonial-step="-1"`.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use web_sys::{Document, Element};

use super::SiteLogger;
use crate::config::{SiteConfig, dom};
use crate::state::carousel::{Direction, SlideShow};
use crate::util::dom::{closest, event_element, on, query_all, set_class};

struct SlideShowView {
    slides: Vec<Element>,
    state: RefCell<SlideShow>,
    logger: SiteLogger,
}

impl SlideShowView {
    fn render(&self) {
        let show = *self.state.borrow();
        for (i, slide) in self.slides.iter().enumerate() {
            set_class(slide, dom::ACTIVE_CLASS, show.is_active(i));
        }
    }

    fn navigate(&self, direction: Direction) {
        let moved = self.state.borrow_mut().navigate(direction, &*self.logger);
        if moved.is_some() {
            self.render();
        }
    }
}

pub fn install(document: &Document, logger: &SiteLogger, config: &SiteConfig) {
    let slides = query_all(document, dom::TESTIMONIAL_SLIDE);
    log::debug!("found {} testimonial slides", slides.len());
    if slides.is_empty() {
        return;
    }
    let view = Rc::new(SlideShowView {
        state: RefCell::new(SlideShow::new(slides.len())),
        slides,
        logger: Rc::clone(logger),
    });
    view.render();

    let controls = Rc::clone(&view);
    on(document, "click", move |event| {
        let Some(control) = event_element(&event).and_then(|el| closest(&el, dom::TESTIMONIAL_STEP)) else {
            return;
        };
        let step = control.get_attribute(dom::TESTIMONIAL_STEP_ATTR);
        controls.navigate(Direction::from_step_attr(step.as_deref()));
    });

    if view.state.borrow().should_auto_advance() {
        let ticker = Rc::clone(&view);
        Interval::new(config.carousel.auto_advance_ms, move || ticker.navigate(Direction::Next)).forget();
    }
}
