//! HTTP request description

use crate::error::Result;
use http::{HeaderMap, HeaderName, HeaderValue, Method, header};
use serde::Serialize;
use std::fmt;
use url::Url;

/// A single API call, ready to be handed to a transport.
#[derive(Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    url: Url,
    headers: HeaderMap,
    body: Option<Vec<u8>>,
}

impl ApiRequest {
    /// Create a new request.
    ///
    /// `path` is the resource path relative to the base URL (e.g.
    /// `keywords/`) and is only used for diagnostics; `url` is the absolute
    /// URL that will be requested.
    pub fn new(method: Method, path: impl Into<String>, url: Url) -> Self {
        Self {
            method,
            path: path.into(),
            url,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Append a query parameter.
    pub fn query(mut self, key: &str, value: impl AsRef<str>) -> Self {
        self.url.query_pairs_mut().append_pair(key, value.as_ref());
        self
    }

    /// Set a header.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Serialize `body` as the JSON request body and mark the request as
    /// `application/json`.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        self.body = Some(serde_json::to_vec(body)?);
        Ok(self.header(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        ))
    }

    /// Get the method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Get the resource path relative to the base URL.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Get the absolute URL, including the query string.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Get the headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Get the body, if any.
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    /// Consume the request, returning the body.
    pub fn into_body(self) -> Option<Vec<u8>> {
        self.body
    }

    /// `METHOD path` label used in logs and errors.
    pub fn endpoint(&self) -> String {
        format!("{} {}", self.method, self.path)
    }

    /// First value of a query parameter.
    pub fn query_value(&self, key: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }
}

// The URL carries the API key, so only the path is printed.
impl fmt::Debug for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiRequest")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("headers", &self.headers)
            .field("body_size", &self.body.as_ref().map(Vec::len))
            .finish()
    }
}
