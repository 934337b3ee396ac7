//! In-memory transport for unit tests

use std::sync::Mutex;

use async_trait::async_trait;
use http::{HeaderMap, Method, StatusCode};
use serde_json::Value;

use super::{ApiRequest, HttpTransport, Response};
use crate::error::Result;

/// Transport that answers from canned routes and records every request.
#[derive(Debug, Default)]
pub(crate) struct RecordingTransport {
    routes: Vec<(Method, String, StatusCode, Vec<u8>)>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl RecordingTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Answer `method path` with a 200 JSON body.
    pub(crate) fn route(self, method: Method, path: &str, body: Value) -> Self {
        self.route_with_status(method, path, StatusCode::OK, body.to_string().into_bytes())
    }

    pub(crate) fn route_with_status(
        mut self,
        method: Method,
        path: &str,
        status: StatusCode,
        body: Vec<u8>,
    ) -> Self {
        self.routes.push((method, path.to_string(), status, body));
        self
    }

    /// Requests seen so far, in order.
    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Requests seen so far for one method.
    pub(crate) fn requests_for(&self, method: Method) -> Vec<ApiRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.method() == method)
            .collect()
    }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> Result<Response> {
        let route = self
            .routes
            .iter()
            .find(|(method, path, _, _)| method == request.method() && path == request.path())
            .map(|(_, _, status, body)| (*status, body.clone()));

        self.requests.lock().unwrap().push(request);

        Ok(match route {
            Some((status, body)) => Response::new(status, HeaderMap::new(), body),
            None => Response::new(StatusCode::NOT_FOUND, HeaderMap::new(), b"no route".to_vec()),
        })
    }

    fn transport_name(&self) -> &'static str {
        "recording"
    }
}
