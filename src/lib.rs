//! Browser behavior layer for a server-rendered course website.
//!
//! Compiled to WebAssembly with the `hydrate` feature, the crate attaches to
//! the page the server already rendered: it applies reading preferences,
//! records anonymous analytics events, tracks lesson completion, runs the
//! testimonial carousels and FAQ accordions, and submits the lead-capture
//! forms without a page reload. Without `hydrate` only the browser-free state
//! modules build, which is how the test suite runs.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Endpoints, storage keys, timings, and DOM ids |
//! | [`error`] | Crate-wide [`error::SiteError`] |
//! | [`state`] | Per-component state machines, testable natively |
//! | [`net`] | Beacon and form transport seams plus wire types |
//! | [`util`] | Key-value storage and `web-sys` helpers |
//! | `components` | Browser wiring for each component (`hydrate`) |
//! | `app` | Page boot sequence (`hydrate`) |
//!
//! ## Page markup
//!
//! Listeners are attached from Rust; the crate exports no JavaScript globals.
//! Templates written for the older inline-handler script need two changes:
//!
//! - Slide-show controls carry `data-testimonial-step="1"` (next) or
//!   `data-testimonial-step="-1"` (previous) in place of
//!   `onclick="changeTestimonial(1)"` / `onclick="changeTestimonial(-1)"`.
//! - FAQ questions drop `onclick="toggleFAQ(this)"`. The element directly
//!   before each `.faq-answer` is bound as its trigger.
//!
//! All other ids and classes are listed in [`config::dom`].

pub mod config;
pub mod error;
pub mod net;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
pub mod app;
#[cfg(feature = "hydrate")]
pub mod components;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    if let Err(err) = app::boot() {
        log::error!("site script not started: {err}");
    }
}
