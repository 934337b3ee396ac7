//! HTTP transport abstraction
//!
//! This module provides the HTTP layer for the client: the [`HttpTransport`]
//! seam that resources send requests through, the [`ApiRequest`] description
//! of a single call, the [`Response`] it produces, and the default
//! `reqwest`-backed implementation.

pub use request::ApiRequest;
pub use reqwest_transport::{ReqwestTransport, ReqwestTransportBuilder};
pub use response::Response;
pub use transport::HttpTransport;

mod request;
mod reqwest_transport;
mod response;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

// Re-export HTTP types from the http crate for convenience
pub use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
