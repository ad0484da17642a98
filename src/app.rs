//! Page boot: logging, config, identity, then every component in turn.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server renders complete HTML. This module runs once per page load and
//! enhances whatever markup is present; components absent from the page are
//! skipped by their own `install`.

use std::rc::Rc;

use web_sys::Document;

use crate::components::{accordion, analytics, chrome, forms, lessons, preferences, slide_panel, slideshow};
use crate::config::{SiteConfig, dom};
use crate::error::SiteError;
use crate::net::api::HttpBeacon;
use crate::state::analytics::EventLogger;
use crate::state::forms::FormKind;
use crate::state::session::SessionIdentity;
use crate::util::dom::{document, embedded_text, now_ms, on};
use crate::util::storage::browser_store;

/// Entry point called from the wasm start hook.
///
/// # Errors
///
/// Returns [`SiteError::MissingElement`] when there is no document to enhance.
pub fn boot() -> Result<(), SiteError> {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed.
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    console_log::init_with_level(level).unwrap_or_default();

    let document = document()?;
    if document.ready_state() == "loading" {
        let target = document.clone();
        on(&document, "DOMContentLoaded", move |_| init(&target));
    } else {
        init(&document);
    }
    Ok(())
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn init(document: &Document) {
    let config = SiteConfig::from_embedded(embedded_text(document, dom::SITE_CONFIG_ID).as_deref());
    let storage = browser_store();
    let identity = SessionIdentity::establish(&storage, &config.storage.user_id, now_ms() as u64);
    log::info!("session {} for {}", identity.session_id, identity.user_id);
    let logger = Rc::new(EventLogger::new(identity, HttpBeacon, config.endpoints.log.clone()));

    chrome::install(document);
    preferences::install(document, storage, &config);
    analytics::install(document, &logger);
    lessons::install(document, &logger, &config);
    slideshow::install(document, &logger, &config);
    slide_panel::install(document, &logger, &config);
    accordion::install_faq(document);
    accordion::install_generic(document);
    forms::install(document, FormKind::Booking, &config);
    forms::install(document, FormKind::Seminar, &config);
}
