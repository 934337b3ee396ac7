//! Structured logging for HTTP calls
//!
//! All requests issued by [`ReqwestTransport`](crate::http::ReqwestTransport)
//! are logged through this layer. Only the resource path is ever logged: the
//! query string carries the API key.

use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// HTTP request metadata for structured logging
#[derive(Debug, Clone)]
pub struct RequestMetadata {
    /// HTTP method (GET, POST, etc.)
    pub method: String,
    /// Resource path relative to the base URL
    pub path: String,
    /// Request body size in bytes (optional)
    pub body_size: Option<usize>,
}

impl RequestMetadata {
    /// Create new request metadata
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            body_size: None,
        }
    }

    /// Set the request body size
    pub fn with_body_size(mut self, size: usize) -> Self {
        self.body_size = Some(size);
        self
    }

    /// Log request being sent
    pub fn log_request(&self) {
        debug!(
            method = %self.method,
            path = %self.path,
            body_size = self.body_size,
            "Sending HTTP request"
        );
    }

    /// Log a request that never produced a response
    pub fn log_failure(&self, elapsed: Duration, error: &str) {
        warn!(
            method = %self.method,
            path = %self.path,
            elapsed_ms = elapsed.as_millis(),
            error = %error,
            "HTTP request could not be completed"
        );
    }
}

/// HTTP response metadata for structured logging
#[derive(Debug, Clone)]
pub struct ResponseMetadata {
    /// HTTP status code
    pub status: u16,
    /// Response body size in bytes
    pub body_size: usize,
    /// Time elapsed for the request
    pub elapsed: Duration,
}

impl ResponseMetadata {
    /// Create new response metadata
    pub fn new(status: u16, body_size: usize, elapsed: Duration) -> Self {
        Self {
            status,
            body_size,
            elapsed,
        }
    }

    /// Log the response, at `info` for 2xx and `warn` otherwise
    pub fn log(&self, request: &RequestMetadata) {
        if (200..300).contains(&self.status) {
            info!(
                method = %request.method,
                path = %request.path,
                status = self.status,
                elapsed_ms = self.elapsed.as_millis(),
                body_size = self.body_size,
                "HTTP request succeeded"
            );
        } else {
            warn!(
                method = %request.method,
                path = %request.path,
                status = self.status,
                elapsed_ms = self.elapsed.as_millis(),
                body_size = self.body_size,
                "HTTP request failed"
            );
        }
    }
}

/// Timer for measuring request duration
pub struct RequestTimer {
    start: Instant,
}

impl RequestTimer {
    /// Start a new timer
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Get elapsed duration
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Install a `fmt` subscriber honouring `RUST_LOG` (default `info`).
///
/// Intended for binaries and examples; libraries should leave subscriber
/// setup to the application.
#[cfg(feature = "trace")]
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
