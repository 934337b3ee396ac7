//! Default transport backed by `reqwest`

use super::{ApiRequest, HttpTransport, Response};
use crate::{
    config::DEFAULT_TIMEOUT,
    error::{Error, Result},
    observability::{RequestMetadata, RequestTimer, ResponseMetadata},
};
use async_trait::async_trait;
use std::time::Duration;

/// HTTP transport using a pooled `reqwest::Client`.
///
/// Performs exactly one round trip per request: no retries, no redirects
/// beyond reqwest's defaults, no caching.
///
/// # Example
///
/// ```rust,no_run
/// use std::time::Duration;
/// use ubervu::http::ReqwestTransport;
///
/// let transport = ReqwestTransport::builder()
///     .timeout(Duration::from_secs(30))
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http_client: reqwest::Client,
    timeout: Duration,
}

impl ReqwestTransport {
    /// Create a transport with default settings.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a new builder for configuring the transport.
    pub fn builder() -> ReqwestTransportBuilder {
        ReqwestTransportBuilder::default()
    }

    /// Wrap an already-configured `reqwest::Client`.
    pub fn from_client(http_client: reqwest::Client, timeout: Duration) -> Self {
        Self {
            http_client,
            timeout,
        }
    }

    /// Per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<Response> {
        let endpoint = request.endpoint();
        let mut metadata = RequestMetadata::new(request.method().as_str(), request.path());
        if let Some(body) = request.body() {
            metadata = metadata.with_body_size(body.len());
        }
        metadata.log_request();

        let mut req = self
            .http_client
            .request(request.method().clone(), request.url().clone())
            .timeout(self.timeout)
            .headers(request.headers().clone());

        if let Some(body) = request.into_body() {
            req = req.body(body);
        }

        let timer = RequestTimer::start();
        let resp = match req.send().await {
            Ok(resp) => resp,
            Err(e) => {
                metadata.log_failure(timer.elapsed(), &e.to_string());
                return Err(map_send_error(e, endpoint, self.timeout));
            }
        };

        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp
            .bytes()
            .await
            .map_err(|e| map_send_error(e, endpoint.clone(), self.timeout))?
            .to_vec();

        ResponseMetadata::new(status.as_u16(), body.len(), timer.elapsed()).log(&metadata);

        Ok(Response::new(status, headers, body))
    }

    fn transport_name(&self) -> &'static str {
        "reqwest"
    }
}

fn map_send_error(error: reqwest::Error, endpoint: String, timeout: Duration) -> Error {
    if error.is_timeout() {
        Error::Timeout { endpoint, timeout }
    } else {
        // Strip the URL: it carries the API key in its query string.
        Error::Connection {
            endpoint,
            message: error.without_url().to_string(),
        }
    }
}

/// Builder for creating a [`ReqwestTransport`].
#[derive(Debug, Default)]
pub struct ReqwestTransportBuilder {
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ReqwestTransportBuilder {
    /// Set the request timeout.
    ///
    /// Defaults to 60 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent.
    ///
    /// Defaults to `ubervu-rust/<version>`.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be created.
    pub fn build(self) -> Result<ReqwestTransport> {
        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("ubervu-rust/{}", crate::VERSION));

        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| Error::HttpClient(e.to_string()))?;

        Ok(ReqwestTransport::from_client(http_client, timeout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let transport = ReqwestTransport::new().unwrap();
        assert_eq!(transport.timeout(), DEFAULT_TIMEOUT);
        assert_eq!(transport.transport_name(), "reqwest");
    }

    #[test]
    fn test_builder_with_custom_config() {
        let transport = ReqwestTransport::builder()
            .timeout(Duration::from_secs(5))
            .user_agent("streams-sync/1.0")
            .build()
            .unwrap();

        assert_eq!(transport.timeout(), Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_connection_error_names_endpoint() {
        // Port 9 (discard) on localhost is expected to refuse connections.
        let transport = ReqwestTransport::builder()
            .timeout(Duration::from_secs(2))
            .build()
            .unwrap();
        let url = url::Url::parse("http://127.0.0.1:9/current/?apikey=hunter2").unwrap();
        let request = ApiRequest::new(http::Method::GET, "current/", url);

        let err = transport.send(request).await.unwrap_err();
        assert!(err.is_transport());
        assert_eq!(err.endpoint(), Some("GET current/"));
        assert!(!err.to_string().contains("hunter2"));
    }
}
