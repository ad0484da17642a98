//! Lesson completion tracking.
//!
//! DESIGN
//! ======
//! Completion lives in [`ProgressBook`], keyed by lesson id and grouped by
//! topic; the page's markers are only a render target. The book is seeded
//! from the markers the server rendered, so a reload shows whatever the
//! template marked complete.
//!
//! Backend sync is optimistic: the local toggle always sticks, and the
//! `/api/progress` mirror is fire-and-forget.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

use std::collections::HashMap;

use super::analytics::{EventLogger, SiteEvent};
use crate::error::SiteError;
use crate::net::api::Beacon;
use crate::net::types::ProgressUpdate;

pub const MARK_COMPLETE_LABEL: &str = "Mark Complete";
pub const COMPLETED_LABEL: &str = "Completed";

/// Aggregate completion for one topic group.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProgressSummary {
    pub completed: usize,
    pub total: usize,
}

impl ProgressSummary {
    /// Rounded completion percentage. An empty topic is 0%.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn percent(self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.completed as f64 / self.total as f64 * 100.0).round() as u32
    }

    #[must_use]
    pub fn text(self) -> String {
        format!("{}/{} completed", self.completed, self.total)
    }

    /// CSS width for the progress fill.
    #[must_use]
    pub fn bar_width(self) -> String {
        format!("{}%", self.percent())
    }
}

/// Result of flipping one lesson.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonToggle {
    pub lesson_id: String,
    pub topic: usize,
    pub completed: bool,
    pub summary: ProgressSummary,
}

impl LessonToggle {
    /// Trigger label after the toggle.
    #[must_use]
    pub fn label(&self) -> &'static str {
        if self.completed { COMPLETED_LABEL } else { MARK_COMPLETE_LABEL }
    }

    #[must_use]
    pub fn sync_payload(&self) -> ProgressUpdate {
        ProgressUpdate { lesson_id: self.lesson_id.clone(), completed: self.completed, time_spent: 0 }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct LessonEntry {
    id: String,
    completed: bool,
}

/// In-memory completion state for every topic on the page.
#[derive(Clone, Debug, Default)]
pub struct ProgressBook {
    topics: Vec<Vec<LessonEntry>>,
    index: HashMap<String, (usize, usize)>,
}

impl ProgressBook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a topic's lessons in page order and return its topic index.
    ///
    /// Lessons with a blank id still count toward the total but cannot be
    /// toggled. A repeated id keeps its first registration.
    pub fn add_topic<I, S>(&mut self, lessons: I) -> usize
    where
        I: IntoIterator<Item = (S, bool)>,
        S: Into<String>,
    {
        let topic = self.topics.len();
        let mut entries = Vec::new();
        for (slot, (id, completed)) in lessons.into_iter().enumerate() {
            let id = id.into();
            if !id.is_empty() {
                if self.index.contains_key(&id) {
                    log::warn!("lesson {id} appears more than once; keeping the first");
                } else {
                    self.index.insert(id.clone(), (topic, slot));
                }
            }
            entries.push(LessonEntry { id, completed });
        }
        self.topics.push(entries);
        topic
    }

    #[must_use]
    pub fn topic_count(&self) -> usize {
        self.topics.len()
    }

    /// Summary for `topic`; unknown topics are empty.
    #[must_use]
    pub fn summary(&self, topic: usize) -> ProgressSummary {
        self.topics.get(topic).map_or_else(ProgressSummary::default, |lessons| ProgressSummary {
            completed: lessons.iter().filter(|l| l.completed).count(),
            total: lessons.len(),
        })
    }

    #[must_use]
    pub fn is_completed(&self, lesson_id: &str) -> Option<bool> {
        let &(topic, slot) = self.index.get(lesson_id)?;
        self.topics.get(topic)?.get(slot).map(|l| l.completed)
    }

    /// Flip one lesson and report the new topic summary.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::UnknownLesson`] when `lesson_id` was never registered.
    pub fn toggle(&mut self, lesson_id: &str) -> Result<LessonToggle, SiteError> {
        let &(topic, slot) = self
            .index
            .get(lesson_id)
            .ok_or_else(|| SiteError::UnknownLesson(lesson_id.to_owned()))?;
        let entry = self
            .topics
            .get_mut(topic)
            .and_then(|lessons| lessons.get_mut(slot))
            .ok_or_else(|| SiteError::UnknownLesson(lesson_id.to_owned()))?;
        entry.completed = !entry.completed;
        let completed = entry.completed;
        let lesson_id = entry.id.clone();
        Ok(LessonToggle { lesson_id, topic, completed, summary: self.summary(topic) })
    }
}

/// Toggles lessons and mirrors each change to the backend and analytics.
pub struct LessonTracker<B> {
    book: ProgressBook,
    beacon: B,
    endpoint: String,
}

impl<B: Beacon> LessonTracker<B> {
    pub fn new(book: ProgressBook, beacon: B, endpoint: impl Into<String>) -> Self {
        Self { book, beacon, endpoint: endpoint.into() }
    }

    pub fn book(&self) -> &ProgressBook {
        &self.book
    }

    pub fn beacon(&self) -> &B {
        &self.beacon
    }

    /// Flip `lesson_id`, send the progress update, and emit `lesson_complete`.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::UnknownLesson`]; nothing is sent in that case.
    pub fn toggle<L: Beacon>(&mut self, lesson_id: &str, logger: &EventLogger<L>) -> Result<LessonToggle, SiteError> {
        let toggle = self.book.toggle(lesson_id)?;
        match serde_json::to_value(toggle.sync_payload()) {
            Ok(body) => self.beacon.dispatch(&self.endpoint, body),
            Err(err) => log::warn!("progress update for {lesson_id} not sent: {err}"),
        }
        logger.log(&SiteEvent::LessonComplete { lesson_id: toggle.lesson_id.clone(), completed: toggle.completed });
        Ok(toggle)
    }
}
