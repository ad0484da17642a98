//! Component state that runs without a browser.
//!
//! DESIGN
//! ======
//! Each component owns one explicit state object, built once at page
//! initialization and handed to its listeners. Browser wiring in
//! `components` renders these objects but never holds state of its own.

pub mod accordion;
pub mod analytics;
pub mod carousel;
pub mod forms;
pub mod preferences;
pub mod progress;
pub mod session;
