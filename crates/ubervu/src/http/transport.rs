//! Transport trait for abstracting the HTTP backend
//!
//! The client never talks to an HTTP library directly. Every call is described
//! as an [`ApiRequest`] and handed to an `HttpTransport`, which lets tests and
//! embedders substitute their own implementation.

use crate::{
    error::Result,
    http::{ApiRequest, Response},
};
use async_trait::async_trait;
use std::fmt;

/// Transport trait for sending fully-built requests.
///
/// Implementations perform the network round trip only: the request already
/// carries its absolute URL (authentication query parameters included),
/// headers and body. Status handling and JSON decoding are done by the caller.
#[async_trait]
pub trait HttpTransport: Send + Sync + fmt::Debug {
    /// Send a request and return the raw response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be delivered (connection
    /// failure, timeout). Non-2xx responses are returned as `Ok`.
    async fn send(&self, request: ApiRequest) -> Result<Response>;

    /// Get the transport name for debugging/logging.
    fn transport_name(&self) -> &'static str;
}
