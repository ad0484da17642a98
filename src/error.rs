//! Crate-wide error type.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here is fatal to the page. Validation errors become status text,
//! best-effort transport errors are logged and dropped, and malformed page
//! data degrades the affected feature to an empty/default state.

use thiserror::Error;

/// Errors produced by site behavior components.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SiteError {
    /// One or more required form fields were blank after trimming.
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    /// The HTTP request could not be built or sent.
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-success HTTP status.
    #[error("unexpected response status {0}")]
    Status(u16),

    /// The response body could not be decoded.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// A page-embedded JSON payload could not be parsed.
    #[error("invalid embedded data in #{source_id}: {message}")]
    EmbeddedData { source_id: String, message: String },

    /// A toggle referenced a lesson the progress book does not know.
    #[error("unknown lesson: {0}")]
    UnknownLesson(String),

    /// A required element is absent from the page.
    #[error("missing element: {0}")]
    MissingElement(String),

    /// A DOM call threw.
    #[error("dom operation failed: {0}")]
    Dom(String),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for SiteError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[cfg(feature = "hydrate")]
impl From<gloo_net::Error> for SiteError {
    fn from(value: gloo_net::Error) -> Self {
        match value {
            gloo_net::Error::SerdeError(err) => Self::Decode(err.to_string()),
            other => Self::Transport(other.to_string()),
        }
    }
}
