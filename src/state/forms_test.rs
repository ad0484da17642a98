use std::cell::{Cell, RefCell};

use futures::executor::block_on;

use super::*;
use crate::net::mock::ScriptedTransport;
use crate::net::types::FormReply;

/// Form double that records what the submitter did to it.
struct FakeForm {
    fields: RefCell<FormFields>,
    status: RefCell<String>,
    loading: Cell<bool>,
    loading_changes: RefCell<Vec<bool>>,
}

impl FakeForm {
    fn with(pairs: &[(&str, &str)]) -> Self {
        Self {
            fields: RefCell::new(pairs.iter().copied().collect()),
            status: RefCell::new("stale".to_owned()),
            loading: Cell::new(false),
            loading_changes: RefCell::new(Vec::new()),
        }
    }
}

impl FormView for FakeForm {
    fn fields(&self) -> FormFields {
        self.fields.borrow().clone()
    }

    fn set_status(&self, message: &str) {
        *self.status.borrow_mut() = message.to_owned();
    }

    fn set_loading(&self, loading: bool) {
        self.loading.set(loading);
        self.loading_changes.borrow_mut().push(loading);
    }

    fn reset(&self) {
        *self.fields.borrow_mut() = FormFields::new();
    }
}

const BOOKING: &[(&str, &str)] = &[("name", "Asha"), ("phone", "98765"), ("topic", "algebra"), ("email", "")];

fn booking() -> FormSubmitter {
    FormSubmitter::new(FormKind::Booking, &Endpoints::default())
}

// =============================================================
// validate
// =============================================================

#[test]
fn validate_names_every_blank_required_field() {
    let fields: FormFields = [("name", "  "), ("phone", "1"), ("topic", "")].into_iter().collect();
    assert_eq!(
        validate(FormKind::Booking, &fields),
        Err(SiteError::MissingFields(vec!["name".to_owned(), "topic".to_owned()]))
    );
}

#[test]
fn validate_seminar_required_fields() {
    let fields: FormFields = [("org", "Acme School"), ("contact", "Ravi"), ("phone", "12345")].into_iter().collect();
    assert_eq!(validate(FormKind::Seminar, &fields), Ok(()));
    let missing: FormFields = [("org", "Acme School")].into_iter().collect();
    assert!(validate(FormKind::Seminar, &missing).is_err());
}

#[test]
fn form_kind_wiring() {
    let endpoints = Endpoints::default();
    assert_eq!(FormKind::Booking.endpoint(&endpoints), "/book");
    assert_eq!(FormKind::Seminar.endpoint(&endpoints), "/seminar");
    assert_eq!(FormKind::Booking.form_id(), "booking-form");
    assert_eq!(FormKind::Seminar.status_id(), "seminar-status");
}

// =============================================================
// submit
// =============================================================

#[test]
fn empty_phone_shows_required_message_without_request() {
    let form = FakeForm::with(&[("name", "Asha"), ("phone", "   "), ("topic", "algebra")]);
    let transport = ScriptedTransport::replying(Ok(FormReply { ok: true, error: None }));
    let outcome = block_on(booking().submit(&form, &transport));
    assert_eq!(outcome, SubmitOutcome::Invalid);
    assert_eq!(*form.status.borrow(), "Please fill required fields.");
    assert_eq!(transport.calls.get(), 0);
    assert!(form.loading_changes.borrow().is_empty());
}

#[test]
fn accepted_submission_clears_form_and_thanks() {
    let form = FakeForm::with(BOOKING);
    let transport = ScriptedTransport::replying(Ok(FormReply { ok: true, error: None }));
    let outcome = block_on(booking().submit(&form, &transport));
    assert_eq!(outcome, SubmitOutcome::Accepted);
    assert_eq!(*form.status.borrow(), "Thanks! We will contact you within 24 hours.");
    assert!(form.fields.borrow().is_empty());
    assert_eq!(transport.calls.get(), 1);
}

#[test]
fn submission_posts_all_fields_to_endpoint() {
    let form = FakeForm::with(BOOKING);
    let transport = ScriptedTransport::replying(Ok(FormReply { ok: true, error: None }));
    block_on(booking().submit(&form, &transport));
    let (endpoint, sent) = transport.last.borrow().clone().expect("request sent");
    assert_eq!(endpoint, "/book");
    assert_eq!(sent.len(), 4);
    assert_eq!(sent.get("topic"), Some("algebra"));
}

#[test]
fn network_failure_keeps_form_and_shows_network_message() {
    let form = FakeForm::with(BOOKING);
    let transport = ScriptedTransport::replying(Err(SiteError::Transport("offline".to_owned())));
    let outcome = block_on(booking().submit(&form, &transport));
    assert_eq!(outcome, SubmitOutcome::Failed);
    assert_eq!(*form.status.borrow(), "Network error. Please try again.");
    assert_eq!(form.fields.borrow().get("name"), Some("Asha"));
}

#[test]
fn bad_status_is_treated_as_network_failure() {
    let form = FakeForm::with(BOOKING);
    let transport = ScriptedTransport::replying(Err(SiteError::Status(400)));
    assert_eq!(block_on(booking().submit(&form, &transport)), SubmitOutcome::Failed);
    assert_eq!(form.fields.borrow().len(), 4);
}

#[test]
fn reply_without_ok_flag_shows_problem_message() {
    let form = FakeForm::with(BOOKING);
    let transport = ScriptedTransport::replying(Ok(FormReply { ok: false, error: Some("Missing".to_owned()) }));
    let outcome = block_on(booking().submit(&form, &transport));
    assert_eq!(outcome, SubmitOutcome::Rejected);
    assert_eq!(*form.status.borrow(), "There was a problem. Please try again.");
    assert_eq!(form.fields.borrow().len(), 4);
}

#[test]
fn loading_is_set_then_cleared_on_every_sent_outcome() {
    let replies = [
        Ok(FormReply { ok: true, error: None }),
        Ok(FormReply::default()),
        Err(SiteError::Decode("eof".to_owned())),
    ];
    for reply in replies {
        let form = FakeForm::with(BOOKING);
        let transport = ScriptedTransport::replying(reply);
        block_on(booking().submit(&form, &transport));
        assert_eq!(*form.loading_changes.borrow(), vec![true, false]);
        assert!(!form.loading.get());
    }
}

#[test]
fn seminar_submitter_targets_seminar_endpoint() {
    let form = FakeForm::with(&[("org", "Acme"), ("contact", "Ravi"), ("phone", "555")]);
    let transport = ScriptedTransport::replying(Ok(FormReply { ok: true, error: None }));
    let submitter = FormSubmitter::new(FormKind::Seminar, &Endpoints::default());
    assert_eq!(submitter.kind(), FormKind::Seminar);
    assert_eq!(block_on(submitter.submit(&form, &transport)), SubmitOutcome::Accepted);
    let (endpoint, _) = transport.last.borrow().clone().expect("request sent");
    assert_eq!(endpoint, "/seminar");
}
