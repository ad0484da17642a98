//! In-process doubles for the HTTP seams, shared by unit tests.

use std::cell::{Cell, RefCell};
use std::future::Future;

use serde_json::Value;

use super::api::{Beacon, FormTransport};
use super::types::{FormFields, FormReply};
use crate::error::SiteError;

/// Records every dispatch instead of sending it.
#[derive(Debug, Default)]
pub struct RecordingBeacon {
    pub sent: RefCell<Vec<(String, Value)>>,
}

impl RecordingBeacon {
    pub fn bodies_for(&self, endpoint: &str) -> Vec<Value> {
        self.sent
            .borrow()
            .iter()
            .filter(|(url, _)| url == endpoint)
            .map(|(_, body)| body.clone())
            .collect()
    }
}

impl Beacon for RecordingBeacon {
    fn dispatch(&self, endpoint: &str, body: Value) {
        self.sent.borrow_mut().push((endpoint.to_owned(), body));
    }
}

/// Replies with a canned result and counts requests.
#[derive(Debug)]
pub struct ScriptedTransport {
    pub reply: Result<FormReply, SiteError>,
    pub calls: Cell<usize>,
    pub last: RefCell<Option<(String, FormFields)>>,
}

impl ScriptedTransport {
    pub fn replying(reply: Result<FormReply, SiteError>) -> Self {
        Self { reply, calls: Cell::new(0), last: RefCell::new(None) }
    }
}

impl FormTransport for ScriptedTransport {
    fn post_form(&self, endpoint: &str, fields: &FormFields) -> impl Future<Output = Result<FormReply, SiteError>> {
        self.calls.set(self.calls.get() + 1);
        *self.last.borrow_mut() = Some((endpoint.to_owned(), fields.clone()));
        let reply = self.reply.clone();
        async move { reply }
    }
}
