//! Site configuration: endpoint paths, storage keys, and carousel timings.
//!
//! Every field has a default matching the stock page templates. A page may
//! override any subset by embedding
//! `<script id="site-config" type="application/json">{ ... }</script>`;
//! a malformed payload falls back to defaults with a console warning.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::SiteError;

pub const DEFAULT_LOG_ENDPOINT: &str = "/api/log";
pub const DEFAULT_PROGRESS_ENDPOINT: &str = "/api/progress";
pub const DEFAULT_BOOK_ENDPOINT: &str = "/book";
pub const DEFAULT_SEMINAR_ENDPOINT: &str = "/seminar";

pub const DEFAULT_AUTO_ADVANCE_MS: u32 = 5_000;
pub const DEFAULT_SLIDE_MS: u32 = 400;
pub const DEFAULT_PAINT_TICK_MS: u32 = 10;

pub const DEFAULT_PLACEHOLDER_PHOTO: &str = "https://via.placeholder.com/240x240.png?text=%F0%9F%98%8A";

/// Element ids and selectors the page templates provide.
pub mod dom {
    // ── Page data ───────────────────────────────────────────────────
    pub const SITE_CONFIG_ID: &str = "site-config";
    pub const TESTIMONIALS_DATA_ID: &str = "testimonials-data";

    // ── Chrome ──────────────────────────────────────────────────────
    pub const NAV_TOGGLE: &str = ".nav-toggle";
    pub const NAV_LINKS_ID: &str = "nav-links";
    pub const YEAR_ID: &str = "year";
    pub const PRICING_CARD: &str = ".pricing-card";

    // ── Preferences ─────────────────────────────────────────────────
    pub const TOGGLE_DARK_ID: &str = "toggle-dark";
    pub const INCREASE_FONT_ID: &str = "increase-font";
    pub const DECREASE_FONT_ID: &str = "decrease-font";
    pub const DARK_CLASS: &str = "dark";
    pub const FONT_SCALE_VAR: &str = "--font-scale";

    // ── Analytics ───────────────────────────────────────────────────
    pub const PRIMARY_CTA_CLASS: &str = "btn-primary";

    // ── Lessons ─────────────────────────────────────────────────────
    pub const TOPIC_CARD: &str = ".topic-card";
    pub const LESSON_ITEM: &str = ".lesson-item";
    pub const COMPLETE_BUTTON: &str = ".complete-btn";
    pub const COMPLETE_TEXT: &str = ".complete-text";
    pub const PROGRESS_TEXT: &str = ".progress-text";
    pub const PROGRESS_FILL: &str = ".progress-fill";
    pub const LESSON_ID_ATTR: &str = "data-lesson-id";
    pub const COMPLETED_CLASS: &str = "completed";

    // ── Carousels ───────────────────────────────────────────────────
    pub const TESTIMONIAL_SLIDE: &str = ".testimonial-slide";
    pub const TESTIMONIAL_STEP: &str = "[data-testimonial-step]";
    pub const TESTIMONIAL_STEP_ATTR: &str = "data-testimonial-step";
    pub const ACTIVE_CLASS: &str = "active";
    pub const REVIEW_WRAP_ID: &str = "reviewWrap";
    pub const LEFT_ARROW_ID: &str = "leftArrow";
    pub const RIGHT_ARROW_ID: &str = "rightArrow";
    pub const PHOTO_ID: &str = "imgDiv";
    pub const PERSON_NAME_ID: &str = "personName";
    pub const PROFESSION_ID: &str = "profession";
    pub const DESCRIPTION_ID: &str = "description";

    // ── Accordions ──────────────────────────────────────────────────
    pub const FAQ_ANSWER: &str = ".faq-answer";
    pub const FAQ_ICON: &str = ".faq-icon";
    pub const ACCORDION_BUTTON: &str = ".accordion button";
    pub const OPEN_CLASS: &str = "open";

    // ── Forms ───────────────────────────────────────────────────────
    pub const SUBMIT_BUTTON: &str = "button[type=\"submit\"]";
    pub const LOADING_CLASS: &str = "loading";
}

/// Backend paths the client talks to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub log: String,
    pub progress: String,
    pub book: String,
    pub seminar: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            log: DEFAULT_LOG_ENDPOINT.to_owned(),
            progress: DEFAULT_PROGRESS_ENDPOINT.to_owned(),
            book: DEFAULT_BOOK_ENDPOINT.to_owned(),
            seminar: DEFAULT_SEMINAR_ENDPOINT.to_owned(),
        }
    }
}

/// Keys used for persisted client-side entries.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub user_id: String,
    pub dark_mode: String,
    pub font_scale: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            user_id: "user_id".to_owned(),
            dark_mode: "prefers-dark".to_owned(),
            font_scale: "font-scale".to_owned(),
        }
    }
}

/// Carousel timer durations in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CarouselTimings {
    pub auto_advance_ms: u32,
    pub slide_ms: u32,
    pub paint_tick_ms: u32,
}

impl Default for CarouselTimings {
    fn default() -> Self {
        Self {
            auto_advance_ms: DEFAULT_AUTO_ADVANCE_MS,
            slide_ms: DEFAULT_SLIDE_MS,
            paint_tick_ms: DEFAULT_PAINT_TICK_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub endpoints: Endpoints,
    pub storage: StorageKeys,
    pub carousel: CarouselTimings,
    pub placeholder_photo: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            storage: StorageKeys::default(),
            carousel: CarouselTimings::default(),
            placeholder_photo: DEFAULT_PLACEHOLDER_PHOTO.to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON override payload. Absent fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::EmbeddedData`] when the payload is not a valid
    /// config object.
    pub fn parse(raw: &str) -> Result<Self, SiteError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw).map_err(|err| SiteError::EmbeddedData {
            source_id: dom::SITE_CONFIG_ID.to_owned(),
            message: err.to_string(),
        })
    }

    /// Build config from the page-embedded payload, if any.
    #[must_use]
    pub fn from_embedded(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        match Self::parse(raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("{err}; using default site config");
                Self::default()
            }
        }
    }
}
