//! Booking and seminar forms: intercept submit, post in the background,
//! and report through the status element.

use std::rc::Rc;

use web_sys::{Document, Element, FormData, HtmlFormElement};

use crate::config::{SiteConfig, dom};
use crate::error::SiteError;
use crate::net::api::HttpFormTransport;
use crate::net::types::FormFields;
use crate::state::forms::{FormKind, FormSubmitter, FormView};
use crate::util::dom::{cast, on, query_in, set_class, set_text};

/// A live `<form>` with its submit button and status line.
pub struct DomFormView {
    form: HtmlFormElement,
    submit_button: Option<Element>,
    status: Option<Element>,
}

impl DomFormView {
    fn read_fields(&self) -> Result<FormFields, SiteError> {
        let data = FormData::new_with_form(&self.form)?;
        let mut fields = FormFields::new();
        let Some(entries) = js_sys::try_iter(&data)? else {
            return Ok(fields);
        };
        for entry in entries {
            let pair = js_sys::Array::from(&entry?);
            // File inputs carry Blob values; only text fields are sent.
            if let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
                fields.push(name, value);
            }
        }
        Ok(fields)
    }
}

impl FormView for DomFormView {
    fn fields(&self) -> FormFields {
        self.read_fields().unwrap_or_else(|err| {
            log::warn!("could not read {}: {err}", self.form.id());
            FormFields::new()
        })
    }

    fn set_status(&self, message: &str) {
        if let Some(status) = &self.status {
            set_text(status, message);
        }
    }

    fn set_loading(&self, loading: bool) {
        set_class(&self.form, dom::LOADING_CLASS, loading);
        if let Some(button) = &self.submit_button {
            set_class(button, dom::LOADING_CLASS, loading);
        }
    }

    fn reset(&self) {
        self.form.reset();
    }
}

pub fn install(document: &Document, kind: FormKind, config: &SiteConfig) {
    let Some(form) = document.get_element_by_id(kind.form_id()).and_then(cast::<HtmlFormElement>) else {
        return;
    };
    let view = Rc::new(DomFormView {
        submit_button: query_in(&form, dom::SUBMIT_BUTTON),
        status: document.get_element_by_id(kind.status_id()),
        form: form.clone(),
    });
    let submitter = Rc::new(FormSubmitter::new(kind, &config.endpoints));

    on(&form, "submit", move |event| {
        event.prevent_default();
        let (view, submitter) = (Rc::clone(&view), Rc::clone(&submitter));
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = submitter.submit(view.as_ref(), &HttpFormTransport).await;
            log::debug!("{} submission: {outcome:?}", submitter.kind().form_id());
        });
    });
}
