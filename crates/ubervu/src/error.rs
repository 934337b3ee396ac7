//! Error types for the uberVU client
//!
//! A single error enum covers the whole client, following Rust idioms with the
//! `thiserror` crate. Variants fall into four families which can be tested with
//! the `is_*` predicates:
//!
//! - configuration errors (bad constructor arguments, unusable base URL)
//! - transport errors (network failure, timeout, non-2xx status)
//! - decode errors (response body is not the expected JSON)
//! - lookup misses raised by the [`Streams`](crate::streams::Streams) workflow

use std::time::Duration;
use thiserror::Error;

/// Result type alias for operations that can fail with a client error.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the uberVU client.
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or empty construction parameter.
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Base URL could not be parsed or uses an unsupported scheme.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Invalid argument passed to a resource operation.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The API answered with a non-2xx status.
    #[error("{endpoint} failed with status {status}: {body}")]
    Status {
        /// Method and path of the failed call, e.g. `GET folders/`
        endpoint: String,
        /// HTTP status code
        status: u16,
        /// Response body as returned by the server
        body: String,
    },

    /// Network or connection error.
    #[error("Connection error on {endpoint}: {message}")]
    Connection {
        /// Method and path of the failed call
        endpoint: String,
        /// Underlying transport message
        message: String,
    },

    /// Request timeout.
    #[error("{endpoint} timed out after {timeout:?}")]
    Timeout {
        /// Method and path of the failed call
        endpoint: String,
        /// Configured timeout
        timeout: Duration,
    },

    /// HTTP client configuration or initialization error.
    #[error("HTTP client error: {0}")]
    HttpClient(String),

    /// Response body is not valid JSON for the expected shape.
    #[error("Failed to decode response from {endpoint}: {source}")]
    Decode {
        /// Method and path of the call
        endpoint: String,
        /// Raw body that failed to decode
        body: String,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// Failed to serialize a request body.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A workflow lookup found no matching remote resource.
    #[error("{resource} not found: {criteria}")]
    NotFound {
        /// Kind of resource that was looked up
        resource: &'static str,
        /// Human-readable lookup criteria
        criteria: String,
    },
}

impl Error {
    /// Create a status error for a failed call.
    pub fn from_status(endpoint: impl Into<String>, status: u16, body: &[u8]) -> Self {
        Error::Status {
            endpoint: endpoint.into(),
            status,
            body: String::from_utf8_lossy(body).into_owned(),
        }
    }

    /// Create a decode error for a call whose body could not be parsed.
    pub fn decode(endpoint: impl Into<String>, body: &[u8], source: serde_json::Error) -> Self {
        Error::Decode {
            endpoint: endpoint.into(),
            body: String::from_utf8_lossy(body).into_owned(),
            source,
        }
    }

    /// Bad constructor arguments or an unusable base URL.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::Configuration(_) | Error::InvalidUrl(_))
    }

    /// Network failure, timeout or non-2xx status.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Status { .. }
                | Error::Connection { .. }
                | Error::Timeout { .. }
                | Error::HttpClient(_)
        )
    }

    /// Malformed response body.
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode { .. })
    }

    /// Workflow lookup miss.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    /// Rejected credentials (401 or 403).
    pub fn is_authentication(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }

    /// HTTP status of the failed call, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Endpoint (`METHOD path`) involved in a transport or decode failure.
    pub fn endpoint(&self) -> Option<&str> {
        match self {
            Error::Status { endpoint, .. }
            | Error::Connection { endpoint, .. }
            | Error::Timeout { endpoint, .. }
            | Error::Decode { endpoint, .. } => Some(endpoint),
            _ => None,
        }
    }
}
