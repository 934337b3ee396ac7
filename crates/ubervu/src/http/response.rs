//! HTTP response handling

use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// HTTP response wrapper.
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl Response {
    /// Create a new response.
    pub fn new(status: StatusCode, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Get the status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Get the headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Get the raw body bytes.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Check if the response is successful (2xx status).
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Fail with [`Error::Status`] unless the status is 2xx.
    pub fn error_for_status(self, endpoint: &str) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(Error::from_status(
                endpoint,
                self.status.as_u16(),
                &self.body,
            ))
        }
    }

    /// Parse a successful response, converting HTTP errors to client errors.
    pub fn parse_result<T: DeserializeOwned>(self, endpoint: &str) -> Result<T> {
        let response = self.error_for_status(endpoint)?;
        serde_json::from_slice(&response.body)
            .map_err(|e| Error::decode(endpoint, &response.body, e))
    }

    /// Parse an acknowledgement payload.
    ///
    /// Like [`parse_result`](Self::parse_result), except that an empty body
    /// (e.g. `204 No Content`) yields `Value::Null`.
    pub fn parse_ack(self, endpoint: &str) -> Result<serde_json::Value> {
        let response = self.error_for_status(endpoint)?;
        if response.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(serde_json::Value::Null);
        }
        serde_json::from_slice(&response.body)
            .map_err(|e| Error::decode(endpoint, &response.body, e))
    }
}
