//! Networking modules for the site's HTTP endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` defines the transport seams (and their `gloo-net` implementations)
//! and `types` defines the shared wire schema.

pub mod api;
#[cfg(test)]
pub(crate) mod mock;
pub mod types;
