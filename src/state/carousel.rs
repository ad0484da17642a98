//! Testimonial carousel state: a wrapping cursor, the class-toggling slide
//! show, and the data-driven sliding panel with its transition state machine.
//!
//! DESIGN
//! ======
//! The sliding panel animates in four steps (fade out, snap, fade in, settle).
//! [`SlidePanel`] owns the phase so a click that lands mid-animation is
//! rejected instead of stacking a second set of timers on the first.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

use serde::Deserialize;

use super::analytics::{EventLogger, SiteEvent};
use crate::config::dom::TESTIMONIALS_DATA_ID;
use crate::error::SiteError;
use crate::net::api::Beacon;

/// Navigation direction, as reported to analytics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

impl Direction {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Next => "next",
            Self::Previous => "previous",
        }
    }

    /// Positive steps go forward; anything else goes back.
    #[must_use]
    pub fn from_step(step: i32) -> Self {
        if step > 0 { Self::Next } else { Self::Previous }
    }

    /// Direction for a `data-testimonial-step` value. Missing or unparsable
    /// values step forward.
    #[must_use]
    pub fn from_step_attr(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::Next;
        };
        match raw.trim().parse::<i32>() {
            Ok(step) => Self::from_step(step),
            Err(err) => {
                log::warn!("bad testimonial step {raw:?} ({err}); stepping forward");
                Self::Next
            }
        }
    }
}

/// Index into a fixed-length sequence with wrap-around in both directions.
///
/// Invariant: `index < len` whenever `len > 0`. A zero-length cursor is inert.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    index: usize,
    len: usize,
}

impl Cursor {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    #[must_use]
    pub fn index(self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Index one step away in `direction`, without moving.
    #[must_use]
    pub fn peek(self, direction: Direction) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        Some(match direction {
            Direction::Next => (self.index + 1) % self.len,
            Direction::Previous => (self.index + self.len - 1) % self.len,
        })
    }

    /// Move one step and return the new index. `None` when inert.
    pub fn step(&mut self, direction: Direction) -> Option<usize> {
        let next = self.peek(direction)?;
        self.index = next;
        Some(next)
    }

    /// Jump to `index` (reduced modulo `len`).
    pub fn set(&mut self, index: usize) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        self.index = index % self.len;
        Some(self.index)
    }
}

// =============================================================================
// SLIDE SHOW
// =============================================================================

/// Class-toggling slide show over page-rendered slides.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SlideShow {
    cursor: Cursor,
}

impl SlideShow {
    #[must_use]
    pub fn new(slide_count: usize) -> Self {
        Self { cursor: Cursor::new(slide_count) }
    }

    #[must_use]
    pub fn slide_count(self) -> usize {
        self.cursor.len()
    }

    /// Auto-advance only makes sense with something to advance to.
    #[must_use]
    pub fn should_auto_advance(self) -> bool {
        self.cursor.len() > 1
    }

    /// Whether slide `i` carries the active marker.
    #[must_use]
    pub fn is_active(self, i: usize) -> bool {
        !self.cursor.is_empty() && i == self.cursor.index()
    }

    /// Step one slide and emit `testimonial_navigate`. An empty show does
    /// neither.
    pub fn navigate<B: Beacon>(&mut self, direction: Direction, logger: &EventLogger<B>) -> Option<usize> {
        if self.cursor.is_empty() {
            return None;
        }
        logger.log(&SiteEvent::TestimonialNavigate { direction });
        self.cursor.step(direction)
    }
}

// =============================================================================
// TESTIMONIAL RECORDS
// =============================================================================

pub const FALLBACK_NAME: &str = "Happy Client";

/// One embedded testimonial. Every field is optional in the page payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Testimonial {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub quote: Option<String>,
    #[serde(default, alias = "photoUrl", alias = "photo_url")]
    pub photo: Option<String>,
}

/// Display-ready testimonial with fallbacks substituted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PersonCard {
    pub name: String,
    pub role: String,
    pub quote: String,
    pub photo_url: String,
}

fn non_blank(field: Option<&String>) -> Option<&str> {
    field.map(String::as_str).filter(|s| !s.is_empty())
}

impl Testimonial {
    #[must_use]
    pub fn card(&self, placeholder_photo: &str) -> PersonCard {
        PersonCard {
            name: non_blank(self.name.as_ref()).unwrap_or(FALLBACK_NAME).to_owned(),
            role: non_blank(self.role.as_ref()).unwrap_or_default().to_owned(),
            quote: non_blank(self.quote.as_ref()).unwrap_or_default().to_owned(),
            photo_url: non_blank(self.photo.as_ref()).unwrap_or(placeholder_photo).to_owned(),
        }
    }
}

impl PersonCard {
    /// CSS `background-image` value for the photo region.
    #[must_use]
    pub fn background_image(&self) -> String {
        format!("url('{}')", self.photo_url)
    }
}

/// Parse the page-embedded testimonial array. Blank input is an empty list.
///
/// # Errors
///
/// Returns [`SiteError::EmbeddedData`] when the payload is not a JSON array
/// of testimonial objects.
pub fn parse_testimonials(raw: &str) -> Result<Vec<Testimonial>, SiteError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(raw).map_err(|err| SiteError::EmbeddedData {
        source_id: TESTIMONIALS_DATA_ID.to_owned(),
        message: err.to_string(),
    })
}

/// Record for `index`, wrapping modulo the sequence length.
#[must_use]
pub fn person_at(people: &[Testimonial], index: usize) -> Option<&Testimonial> {
    if people.is_empty() {
        return None;
    }
    people.get(index % people.len())
}

// =============================================================================
// SLIDING PANEL
// =============================================================================

/// The two arrow controls of the sliding panel.
///
/// `Left` advances and `Right` goes back; the pairing matches the markup's
/// historical behavior and is kept as-is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelControl {
    Left,
    Right,
}

impl PanelControl {
    #[must_use]
    pub fn direction(self) -> Direction {
        match self {
            Self::Left => Direction::Next,
            Self::Right => Direction::Previous,
        }
    }

    /// Sign of the horizontal offset the card leaves toward.
    fn exit_sign(self) -> i8 {
        match self {
            Self::Left => 1,
            Self::Right => -1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionPhase {
    Idle,
    FadingOut { control: PanelControl, target: usize },
    Swapped,
    FadingIn,
}

/// Style snapshot for one step of the panel transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelFrame {
    pub animated: bool,
    pub opacity: f64,
    /// -1, 0, or 1: multiples of the panel width.
    pub offset_sign: i8,
}

impl PanelFrame {
    /// CSS `transition` value for a transition lasting `duration_ms`.
    #[must_use]
    pub fn transition(&self, duration_ms: u32) -> String {
        if self.animated {
            let secs = f64::from(duration_ms) / 1000.0;
            format!("opacity {secs}s, transform {secs}s")
        } else {
            "none".to_owned()
        }
    }

    /// CSS `transform` value for a panel `width_px` wide.
    #[must_use]
    pub fn transform(&self, width_px: f64) -> String {
        if self.offset_sign == 0 {
            "translateX(0)".to_owned()
        } else {
            format!("translateX({}px)", f64::from(self.offset_sign) * width_px)
        }
    }

    #[must_use]
    pub fn opacity_css(&self) -> &'static str {
        if self.opacity > 0.0 { "1" } else { "0" }
    }
}

/// Cursor plus transition phase for the data-driven panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlidePanel {
    cursor: Cursor,
    phase: TransitionPhase,
}

impl SlidePanel {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { cursor: Cursor::new(len), phase: TransitionPhase::Idle }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.cursor.index()
    }

    #[must_use]
    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.phase == TransitionPhase::Idle
    }

    /// Start a transition and emit `testimonial_navigate`. Rejected (returns
    /// `None`, logs nothing) when the panel is empty or a transition is
    /// already running; the cursor does not move.
    pub fn request<B: Beacon>(&mut self, control: PanelControl, logger: &EventLogger<B>) -> Option<PanelFrame> {
        if !self.is_idle() {
            log::debug!("panel busy ({:?}); ignoring {control:?}", self.phase);
            return None;
        }
        let target = self.cursor.peek(control.direction())?;
        self.phase = TransitionPhase::FadingOut { control, target };
        logger.log(&SiteEvent::TestimonialNavigate { direction: control.direction() });
        Some(PanelFrame { animated: true, opacity: 0.0, offset_sign: control.exit_sign() })
    }

    /// Fade-out finished: commit the cursor and snap to the entry side.
    /// Returns the snap frame and the index whose content should be shown.
    pub fn swap(&mut self) -> Option<(PanelFrame, usize)> {
        let TransitionPhase::FadingOut { control, target } = self.phase else {
            return None;
        };
        let index = self.cursor.set(target)?;
        self.phase = TransitionPhase::Swapped;
        Some((PanelFrame { animated: false, opacity: 0.0, offset_sign: -control.exit_sign() }, index))
    }

    /// Next paint tick after the swap: animate back to rest.
    pub fn fade_in(&mut self) -> Option<PanelFrame> {
        if self.phase != TransitionPhase::Swapped {
            return None;
        }
        self.phase = TransitionPhase::FadingIn;
        Some(PanelFrame { animated: true, opacity: 1.0, offset_sign: 0 })
    }

    /// Fade-in finished; accept requests again.
    pub fn finish(&mut self) -> bool {
        if self.phase != TransitionPhase::FadingIn {
            return false;
        }
        self.phase = TransitionPhase::Idle;
        true
    }
}
