//! Browser wiring: attaches listeners to the server-rendered page and renders
//! component state back into it.
//!
//! Each `install` looks up its elements once; a component whose elements are
//! missing from the current page silently does nothing.

use std::rc::Rc;

use crate::net::api::HttpBeacon;
use crate::state::analytics::EventLogger;

pub mod accordion;
pub mod analytics;
pub mod chrome;
pub mod forms;
pub mod lessons;
pub mod preferences;
pub mod slide_panel;
pub mod slideshow;

/// Page-wide logger handle shared by every component.
pub type SiteLogger = Rc<EventLogger<HttpBeacon>>;
