//! HTTP seams for communicating with the site backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, spawned onto the
//! browser event loop.
//!
//! ERROR HANDLING
//! ==============
//! [`Beacon`] is fire-and-forget: the call returns immediately, failures are
//! logged to the console and never retried. [`FormTransport`] hands failures
//! back to the caller so the form can show a status message.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use serde_json::Value;

use super::types::{FormFields, FormReply};
use crate::error::SiteError;

/// Best-effort JSON POST that never blocks the caller.
pub trait Beacon {
    fn dispatch(&self, endpoint: &str, body: Value);
}

impl<T: Beacon + ?Sized> Beacon for std::rc::Rc<T> {
    fn dispatch(&self, endpoint: &str, body: Value) {
        (**self).dispatch(endpoint, body);
    }
}

/// Form submission that reports its outcome.
pub trait FormTransport {
    /// POST `fields` form-encoded to `endpoint` and decode the JSON reply.
    fn post_form(&self, endpoint: &str, fields: &FormFields) -> impl Future<Output = Result<FormReply, SiteError>>;
}

/// Any non-2xx status is a failure regardless of body.
///
/// # Errors
///
/// Returns [`SiteError::Status`] for statuses outside `200..300`.
pub fn check_status(status: u16) -> Result<(), SiteError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(SiteError::Status(status)) }
}

/// `gloo-net` beacon. Each dispatch is an independent spawned request.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpBeacon;

#[cfg(feature = "hydrate")]
impl Beacon for HttpBeacon {
    fn dispatch(&self, endpoint: &str, body: Value) {
        let url = endpoint.to_owned();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = post_json(&url, &body).await {
                log::warn!("beacon to {url} failed: {err}");
            }
        });
    }
}

#[cfg(feature = "hydrate")]
async fn post_json(url: &str, body: &Value) -> Result<(), SiteError> {
    gloo_net::http::Request::post(url).json(body)?.send().await?;
    Ok(())
}

/// `gloo-net` form transport sending `application/x-www-form-urlencoded`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpFormTransport;

#[cfg(feature = "hydrate")]
impl FormTransport for HttpFormTransport {
    fn post_form(&self, endpoint: &str, fields: &FormFields) -> impl Future<Output = Result<FormReply, SiteError>> {
        let url = endpoint.to_owned();
        let fields = fields.clone();
        async move {
            let params = web_sys::UrlSearchParams::new()?;
            for (name, value) in fields.iter() {
                params.append(name, value);
            }
            let resp = gloo_net::http::Request::post(&url).body(params)?.send().await?;
            check_status(resp.status())?;
            let reply = resp.json::<FormReply>().await?;
            Ok(reply)
        }
    }
}
