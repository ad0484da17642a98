//! Analytics events and the fire-and-forget event logger.
//!
//! SYSTEM CONTEXT
//! ==============
//! Other components report interactions through [`EventLogger::log`]. Records
//! are built, handed to a [`Beacon`], and forgotten: there is no local queue
//! and no retry.

#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;

use serde::Serialize;
use serde_json::{Map, Value, json};

use super::carousel::Direction;
use super::session::SessionIdentity;
use crate::net::api::Beacon;

/// Body of `POST /api/log`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EventRecord {
    pub event_type: String,
    pub session_id: String,
    pub user_id: String,
    pub metadata: Map<String, Value>,
}

/// Every interaction the site reports.
#[derive(Clone, Debug, PartialEq)]
pub enum SiteEvent {
    PageView { page: String, referrer: String },
    ContactClick { source: String },
    SeminarClick { source: String },
    CtaClick { button_text: String },
    LessonComplete { lesson_id: String, completed: bool },
    TestimonialNavigate { direction: Direction },
    FormSubmit { form_id: Option<String> },
    PageTimeSpent { page: String, seconds: u64 },
}

impl SiteEvent {
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::PageView { .. } => "page_view",
            Self::ContactClick { .. } => "contact_click",
            Self::SeminarClick { .. } => "seminar_click",
            Self::CtaClick { .. } => "cta_click",
            Self::LessonComplete { .. } => "lesson_complete",
            Self::TestimonialNavigate { .. } => "testimonial_navigate",
            Self::FormSubmit { .. } => "form_submit",
            Self::PageTimeSpent { .. } => "page_time_spent",
        }
    }

    #[must_use]
    pub fn metadata(&self) -> Map<String, Value> {
        let value = match self {
            Self::PageView { page, referrer } => json!({ "page": page, "referrer": referrer }),
            Self::ContactClick { source } | Self::SeminarClick { source } => json!({ "source": source }),
            Self::CtaClick { button_text } => json!({ "button_text": button_text }),
            Self::LessonComplete { lesson_id, completed } => {
                json!({ "lesson_id": lesson_id, "completed": completed })
            }
            Self::TestimonialNavigate { direction } => json!({ "direction": direction.as_str() }),
            Self::FormSubmit { form_id } => {
                let id = form_id.as_deref().filter(|id| !id.is_empty()).unwrap_or("unknown");
                json!({ "form_id": id })
            }
            Self::PageTimeSpent { page, seconds } => json!({ "page": page, "seconds": seconds }),
        };
        match value {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }
}

/// What a click landed on, reduced to the fields the trigger table needs.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClickTarget<'a> {
    /// `href` attribute when the clicked element is an anchor.
    pub anchor_href: Option<&'a str>,
    /// Whether the element carries the primary call-to-action marker.
    pub is_primary_cta: bool,
    pub text: &'a str,
}

/// Events a single click produces, in table order. May be empty or several.
#[must_use]
pub fn click_events(target: &ClickTarget<'_>) -> Vec<SiteEvent> {
    let mut events = Vec::new();
    if let Some(href) = target.anchor_href {
        if href.contains("contact") {
            events.push(SiteEvent::ContactClick { source: target.text.to_owned() });
        }
        if href.contains("seminar") {
            events.push(SiteEvent::SeminarClick { source: target.text.to_owned() });
        }
    }
    if target.is_primary_cta {
        events.push(SiteEvent::CtaClick { button_text: target.text.to_owned() });
    }
    events
}

/// Whole seconds between two JS clock readings, never negative.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn elapsed_seconds(start_ms: f64, now_ms: f64) -> u64 {
    ((now_ms - start_ms) / 1000.0).round().max(0.0) as u64
}

/// Builds event records for one page load and hands them to a beacon.
pub struct EventLogger<B> {
    identity: SessionIdentity,
    beacon: B,
    endpoint: String,
}

impl<B: Beacon> EventLogger<B> {
    pub fn new(identity: SessionIdentity, beacon: B, endpoint: impl Into<String>) -> Self {
        Self { identity, beacon, endpoint: endpoint.into() }
    }

    pub fn identity(&self) -> &SessionIdentity {
        &self.identity
    }

    pub fn beacon(&self) -> &B {
        &self.beacon
    }

    #[must_use]
    pub fn record(&self, event_type: &str, metadata: Map<String, Value>) -> EventRecord {
        EventRecord {
            event_type: event_type.to_owned(),
            session_id: self.identity.session_id.clone(),
            user_id: self.identity.user_id.clone(),
            metadata,
        }
    }

    /// Send one record. Returns immediately; delivery is best-effort.
    pub fn log_event(&self, event_type: &str, metadata: Map<String, Value>) {
        let record = self.record(event_type, metadata);
        match serde_json::to_value(&record) {
            Ok(body) => self.beacon.dispatch(&self.endpoint, body),
            Err(err) => log::warn!("dropping {event_type} event: {err}"),
        }
    }

    pub fn log(&self, event: &SiteEvent) {
        self.log_event(event.event_type(), event.metadata());
    }
}
