//! Booking and seminar form submission.
//!
//! Validation runs locally and short-circuits before any request. A passing
//! form is posted once; the loading marker is cleared on every exit path by
//! [`LoadingGuard`].

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::config::Endpoints;
use crate::error::SiteError;
use crate::net::api::FormTransport;
use crate::net::types::FormFields;

pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill required fields.";
pub const THANK_YOU_MESSAGE: &str = "Thanks! We will contact you within 24 hours.";
pub const PROBLEM_MESSAGE: &str = "There was a problem. Please try again.";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

/// The two lead-capture forms on the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    Booking,
    Seminar,
}

impl FormKind {
    #[must_use]
    pub fn form_id(self) -> &'static str {
        match self {
            Self::Booking => "booking-form",
            Self::Seminar => "seminar-form",
        }
    }

    #[must_use]
    pub fn status_id(self) -> &'static str {
        match self {
            Self::Booking => "form-status",
            Self::Seminar => "seminar-status",
        }
    }

    #[must_use]
    pub fn required_fields(self) -> &'static [&'static str] {
        match self {
            Self::Booking => &["name", "phone", "topic"],
            Self::Seminar => &["org", "contact", "phone"],
        }
    }

    #[must_use]
    pub fn endpoint(self, endpoints: &Endpoints) -> &str {
        match self {
            Self::Booking => &endpoints.book,
            Self::Seminar => &endpoints.seminar,
        }
    }
}

/// Check every required field is non-blank after trimming.
///
/// # Errors
///
/// Returns [`SiteError::MissingFields`] naming each blank field in order.
pub fn validate(kind: FormKind, fields: &FormFields) -> Result<(), SiteError> {
    let missing: Vec<String> = kind
        .required_fields()
        .iter()
        .filter(|name| fields.trimmed(name).is_empty())
        .map(|name| (*name).to_owned())
        .collect();
    if missing.is_empty() { Ok(()) } else { Err(SiteError::MissingFields(missing)) }
}

/// How a submission ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Required fields missing; nothing was sent.
    Invalid,
    /// Server accepted (`ok: true`); the form was reset.
    Accepted,
    /// Server answered without `ok: true`.
    Rejected,
    /// Transport failure, bad status, or unreadable reply.
    Failed,
}

impl SubmitOutcome {
    #[must_use]
    pub fn status_message(self) -> &'static str {
        match self {
            Self::Invalid => REQUIRED_FIELDS_MESSAGE,
            Self::Accepted => THANK_YOU_MESSAGE,
            Self::Rejected => PROBLEM_MESSAGE,
            Self::Failed => NETWORK_ERROR_MESSAGE,
        }
    }
}

/// The parts of a form the submitter reads and writes.
pub trait FormView {
    fn fields(&self) -> FormFields;
    fn set_status(&self, message: &str);
    fn set_loading(&self, loading: bool);
    fn reset(&self);
}

/// Sets the loading marker on creation and clears it on drop.
pub struct LoadingGuard<'a, V: FormView + ?Sized> {
    view: &'a V,
}

impl<'a, V: FormView + ?Sized> LoadingGuard<'a, V> {
    pub fn new(view: &'a V) -> Self {
        view.set_loading(true);
        Self { view }
    }
}

impl<V: FormView + ?Sized> Drop for LoadingGuard<'_, V> {
    fn drop(&mut self) {
        self.view.set_loading(false);
    }
}

/// Submits one kind of form to its endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormSubmitter {
    kind: FormKind,
    endpoint: String,
}

impl FormSubmitter {
    #[must_use]
    pub fn new(kind: FormKind, endpoints: &Endpoints) -> Self {
        Self { kind, endpoint: kind.endpoint(endpoints).to_owned() }
    }

    #[must_use]
    pub fn kind(&self) -> FormKind {
        self.kind
    }

    /// Validate, post, and reflect the result into `view`.
    pub async fn submit<V, T>(&self, view: &V, transport: &T) -> SubmitOutcome
    where
        V: FormView + ?Sized,
        T: FormTransport + ?Sized,
    {
        view.set_status("");
        let fields = view.fields();
        if let Err(err) = validate(self.kind, &fields) {
            log::debug!("{} not sent: {err}", self.kind.form_id());
            view.set_status(SubmitOutcome::Invalid.status_message());
            return SubmitOutcome::Invalid;
        }

        let _loading = LoadingGuard::new(view);
        let outcome = match transport.post_form(&self.endpoint, &fields).await {
            Ok(reply) if reply.ok => SubmitOutcome::Accepted,
            Ok(reply) => {
                log::info!(
                    "{} rejected: {}",
                    self.kind.form_id(),
                    reply.error.as_deref().unwrap_or("no reason given")
                );
                SubmitOutcome::Rejected
            }
            Err(err) => {
                log::warn!("{} submission failed: {err}", self.kind.form_id());
                SubmitOutcome::Failed
            }
        };
        view.set_status(outcome.status_message());
        if outcome == SubmitOutcome::Accepted {
            view.reset();
        }
        outcome
    }
}
