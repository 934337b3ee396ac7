//! Main client implementation for the uberVU Metrics API

use std::sync::Arc;
use std::time::Duration;

use secrecy::SecretString;
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    auth::Credentials,
    config::ClientConfig,
    error::{Error, Result},
    http::{ApiRequest, HttpTransport, Method, ReqwestTransport},
    resources::{Account, Folders, Groups, Keywords},
    streams::Streams,
    types::Id,
};

/// Main client for interacting with the uberVU Metrics API.
///
/// The client owns the credential pair and the base URL and attaches
/// `email`/`apikey` query parameters to every request it builds. Requests are
/// sent through an [`HttpTransport`], `reqwest` by default.
///
/// Cloning is cheap: clones share the same immutable state.
///
/// # Example
///
/// ```rust,no_run
/// use ubervu::Client;
///
/// # async fn example() -> ubervu::Result<()> {
/// let client = Client::new(
///     "ubervu@example.com",
///     "12345678",
///     "https://api.ubervu.com/front-api/v1",
/// )?;
///
/// let me = client.account().me().await?;
/// let folders = client.folders().list(&me.group_id).await?;
/// println!("{} folders", folders.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

#[derive(Debug)]
struct ClientInner {
    /// Transport used to send every request
    transport: Arc<dyn HttpTransport>,
    /// Base URL, always ending with `/`
    base_url: Url,
    credentials: Credentials,
}

impl Client {
    /// Create a client from an email, API key and base URL.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if any argument is empty or the base URL
    /// is not a valid http(s) URL.
    pub fn new(
        email: impl Into<String>,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self> {
        Self::from_config(ClientConfig::new(email, api_key, base_url))
    }

    /// Create a new client builder for advanced configuration.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Create a client from environment variables (see
    /// [`ClientConfig::from_env`]).
    #[cfg(feature = "env")]
    pub fn from_env() -> Result<Self> {
        Self::from_config(ClientConfig::from_env()?)
    }

    /// Create a client from a configuration object, using the default
    /// `reqwest` transport.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let (credentials, base_url) = validate(&config)?;

        let mut transport = ReqwestTransport::builder().timeout(config.timeout);
        if let Some(user_agent) = config.user_agent {
            transport = transport.user_agent(user_agent);
        }

        Ok(Self::from_parts(
            Arc::new(transport.build()?),
            base_url,
            credentials,
        ))
    }

    /// Create a client that sends requests through a caller-supplied
    /// transport.
    ///
    /// `timeout` and `user_agent` from the configuration are left to the
    /// transport.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn HttpTransport>) -> Result<Self> {
        let (credentials, base_url) = validate(&config)?;
        Ok(Self::from_parts(transport, base_url, credentials))
    }

    fn from_parts(transport: Arc<dyn HttpTransport>, base_url: Url, credentials: Credentials) -> Self {
        tracing::debug!(
            base_url = %base_url,
            email = %credentials.email(),
            transport = transport.transport_name(),
            "Created uberVU client"
        );

        Self {
            inner: Arc::new(ClientInner {
                transport,
                base_url,
                credentials,
            }),
        }
    }

    /// Access the current-user endpoint.
    pub fn account(&self) -> Account {
        Account::new(self.clone())
    }

    /// Access the Groups endpoint.
    pub fn groups(&self) -> Groups {
        Groups::new(self.clone())
    }

    /// Access the Folders endpoint.
    pub fn folders(&self) -> Folders {
        Folders::new(self.clone())
    }

    /// Access the Keywords (streams) endpoint.
    pub fn keywords(&self) -> Keywords {
        Keywords::new(self.clone())
    }

    /// Access the stream workflows, which chain several endpoint calls.
    pub fn streams(&self) -> Streams {
        Streams::new(self.clone())
    }

    /// Get the base URL for the API.
    pub fn base_url(&self) -> &str {
        self.inner.base_url.as_str()
    }

    /// Get the account email the client authenticates with.
    pub fn email(&self) -> &str {
        self.inner.credentials.email()
    }

    /// Get the transport name (for debugging).
    pub fn transport_name(&self) -> &'static str {
        self.inner.transport.transport_name()
    }

    /// Build an authenticated request for a path relative to the base URL.
    pub(crate) fn request(&self, method: Method, path: &str) -> Result<ApiRequest> {
        let url = self.inner.base_url.join(path).map_err(|e| {
            Error::InvalidUrl(format!(
                "Failed to construct URL from path '{}': {}",
                path, e
            ))
        })?;

        Ok(self.authenticate(method, path.to_string(), url))
    }

    /// Build an authenticated request for a single member of a collection,
    /// e.g. `keywords/{id}/`. The id is percent-encoded as one path segment.
    pub(crate) fn member_request(
        &self,
        method: Method,
        collection: &str,
        id: &Id,
    ) -> Result<ApiRequest> {
        let mut url = self.inner.base_url.join(collection).map_err(|e| {
            Error::InvalidUrl(format!(
                "Failed to construct URL from path '{}': {}",
                collection, e
            ))
        })?;

        let segment = id.to_string();
        url.path_segments_mut()
            .map_err(|_| Error::InvalidUrl(format!("Base URL cannot hold path '{}'", collection)))?
            .pop_if_empty()
            .push(&segment)
            .push("");

        Ok(self.authenticate(method, format!("{}{}/", collection, segment), url))
    }

    fn authenticate(&self, method: Method, path: String, mut url: Url) -> ApiRequest {
        self.inner.credentials.apply_to_url(&mut url);
        ApiRequest::new(method, path, url)
    }

    /// Send a request and decode the JSON response.
    pub(crate) async fn execute<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let endpoint = request.endpoint();
        let response = self.inner.transport.send(request).await?;
        response.parse_result(&endpoint)
    }

    /// Send a request whose response is an acknowledgement payload.
    pub(crate) async fn execute_ack(&self, request: ApiRequest) -> Result<serde_json::Value> {
        let endpoint = request.endpoint();
        let response = self.inner.transport.send(request).await?;
        response.parse_ack(&endpoint)
    }
}

/// Check the required parameters and normalize the base URL.
fn validate(config: &ClientConfig) -> Result<(Credentials, Url)> {
    let email = config
        .email
        .clone()
        .ok_or_else(|| Error::Configuration("email is required".to_string()))?;
    let api_key = config
        .api_key
        .clone()
        .ok_or_else(|| Error::Configuration("API key is required".to_string()))?;
    let credentials = Credentials::new(email, api_key)?;

    let base_url_string = config
        .base_url
        .as_deref()
        .ok_or_else(|| Error::Configuration("base URL is required".to_string()))?;

    if base_url_string.trim().is_empty() {
        return Err(Error::Configuration(
            "base URL cannot be empty".to_string(),
        ));
    }

    let mut base_url: Url = base_url_string
        .trim()
        .parse()
        .map_err(|e| Error::InvalidUrl(format!("{}", e)))?;

    match base_url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(Error::InvalidUrl(format!(
                "Invalid URL scheme '{}'. Only 'http' and 'https' are supported.",
                scheme
            )));
        }
    }

    // Resource paths are joined beneath the base path.
    if !base_url.path().ends_with('/') {
        let path = format!("{}/", base_url.path());
        base_url.set_path(&path);
    }

    Ok((credentials, base_url))
}

/// Builder for creating a configured [`Client`].
#[derive(Debug, Default)]
pub struct ClientBuilder {
    config: ClientConfig,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl ClientBuilder {
    /// Set the account email.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.config.email = Some(email.into());
        self
    }

    /// Set the API key.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config.api_key = Some(SecretString::new(api_key.into().into_boxed_str()));
        self
    }

    /// Set the base URL for the API.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = Some(base_url.into());
        self
    }

    /// Set the per-request timeout of the default transport.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the user agent of the default transport.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = Some(user_agent.into());
        self
    }

    /// Start from an existing configuration; values set on the builder
    /// afterwards take precedence.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = self.config.merge(config);
        self
    }

    /// Send requests through a custom transport instead of `reqwest`.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client with the configured options.
    pub fn build(self) -> Result<Client> {
        match self.transport {
            Some(transport) => Client::with_transport(self.config, transport),
            None => Client::from_config(self.config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::RecordingTransport;

    #[test]
    fn test_client_builder() {
        let client = Client::builder()
            .email("ubervu@example.com")
            .api_key("12345678")
            .base_url("http://dev.ubervu.local/front-api/v1")
            .timeout(Duration::from_secs(30))
            .build();

        assert!(client.is_ok());
        assert_eq!(client.unwrap().transport_name(), "reqwest");
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let client = Client::new(
            "ubervu@example.com",
            "12345678",
            "http://dev.ubervu.local/front-api/v1",
        )
        .unwrap();
        assert_eq!(client.base_url(), "http://dev.ubervu.local/front-api/v1/");

        let client = Client::new("ubervu@example.com", "12345678", "http://test").unwrap();
        assert_eq!(client.base_url(), "http://test/");
    }

    #[test]
    fn test_empty_arguments_are_configuration_errors() {
        for (email, key, url) in [
            ("", "12345678", "http://test/"),
            ("ubervu@example.com", "", "http://test/"),
            ("ubervu@example.com", "12345678", ""),
            ("ubervu@example.com", "12345678", "   "),
        ] {
            let err = Client::new(email, key, url).unwrap_err();
            assert!(
                matches!(err, Error::Configuration(_)),
                "expected configuration error for ({email:?}, {key:?}, {url:?}), got {err:?}"
            );
        }
    }

    #[test]
    fn test_missing_config_values_are_configuration_errors() {
        let err = Client::from_config(ClientConfig::default()).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_invalid_scheme() {
        let result = Client::new("ubervu@example.com", "12345678", "ftp://invalid.example.com");

        match result {
            Err(Error::InvalidUrl(msg)) => {
                assert!(msg.contains("ftp"), "Error should mention invalid scheme");
            }
            other => panic!("Expected InvalidUrl error, got {other:?}"),
        }
    }

    #[test]
    fn test_request_carries_credentials() {
        let client = Client::new("ubervu@example.com", "12345678", "http://test/v1").unwrap();
        let request = client.request(Method::GET, "current/").unwrap();

        assert_eq!(request.url().path(), "/v1/current/");
        assert_eq!(request.query_value("email").as_deref(), Some("ubervu@example.com"));
        assert_eq!(request.query_value("apikey").as_deref(), Some("12345678"));
        assert_eq!(request.endpoint(), "GET current/");
    }

    #[test]
    fn test_member_request_encodes_id() {
        let client = Client::new("ubervu@example.com", "12345678", "http://test/v1").unwrap();

        let request = client
            .member_request(Method::DELETE, "keywords/", &Id::from("K1"))
            .unwrap();
        assert_eq!(request.url().path(), "/v1/keywords/K1/");
        assert_eq!(request.path(), "keywords/K1/");

        let request = client
            .member_request(Method::DELETE, "keywords/", &Id::from("a/b?c"))
            .unwrap();
        assert_eq!(request.url().path(), "/v1/keywords/a%2Fb%3Fc/");
        assert_eq!(request.query_value("apikey").as_deref(), Some("12345678"));
    }

    #[test]
    fn test_builder_with_transport() {
        let transport = Arc::new(RecordingTransport::new());
        let client = Client::builder()
            .email("ubervu@example.com")
            .api_key("12345678")
            .base_url("http://test/")
            .transport(transport)
            .build()
            .unwrap();

        assert_eq!(client.transport_name(), "recording");
        assert_eq!(client.email(), "ubervu@example.com");
    }

    #[test]
    fn test_client_clone_shares_state() {
        let client1 = Client::new("ubervu@example.com", "12345678", "http://test/").unwrap();
        let client2 = client1.clone();

        assert!(Arc::ptr_eq(&client1.inner, &client2.inner));
        assert_eq!(client1.base_url(), client2.base_url());
    }

    #[test]
    fn test_debug_does_not_leak_api_key() {
        let client = Client::new("ubervu@example.com", "hunter2", "http://test/").unwrap();
        assert!(!format!("{:?}", client).contains("hunter2"));
    }
}
