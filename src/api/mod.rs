//! Catalog REST API: endpoint routing and response decoding.
//!
//! Requests themselves are issued by the plugin runtime through Zellij's
//! `web_request`; this module only knows URLs, request context and how to turn
//! a `(status, body)` pair into catalog data.

pub mod decode;
pub mod endpoints;

pub use decode::{decode_response, Payload};
pub use endpoints::{Endpoint, CONTEXT_KEY, DEFAULT_API_BASE_URL};
