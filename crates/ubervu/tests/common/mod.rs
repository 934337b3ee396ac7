//! Common test utilities and helpers

use std::path::Path;

use ubervu::Client;
use wiremock::matchers::query_param;
use wiremock::{Mock, MockBuilder, MockServer, Request, Respond, ResponseTemplate};

/// Load a response fixture
#[allow(dead_code)]
pub fn load_response_fixture(name: &str) -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let path = Path::new(manifest_dir)
        .join("tests")
        .join("fixtures")
        .join("responses")
        .join(format!("{}.json", name));

    std::fs::read_to_string(&path).unwrap_or_else(|e| {
        panic!(
            "Failed to load response fixture '{}' from {:?}: {}",
            name, path, e
        )
    })
}

/// Test account email
#[allow(dead_code)]
pub const TEST_EMAIL: &str = "ubervu@example.com";

/// Test API key
#[allow(dead_code)]
pub const TEST_API_KEY: &str = "12345678";

/// Client pointed at a mock server
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> Client {
    Client::new(TEST_EMAIL, TEST_API_KEY, server.uri()).expect("Failed to build client")
}

/// Mock builder that only matches authenticated requests
#[allow(dead_code)]
pub fn authenticated(mock: MockBuilder) -> MockBuilder {
    mock.and(query_param("email", TEST_EMAIL))
        .and(query_param("apikey", TEST_API_KEY))
}

/// Responder that echoes the JSON request body with an assigned `id`
#[allow(dead_code)]
pub struct EchoWithId(pub &'static str);

impl Respond for EchoWithId {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let mut body: serde_json::Value =
            serde_json::from_slice(&request.body).expect("request body should be JSON");
        body["id"] = serde_json::Value::from(self.0);
        ResponseTemplate::new(201).set_body_json(body)
    }
}

/// Mount the `current/` endpoint answering with the given group id
#[allow(dead_code)]
pub async fn mount_current_user(server: &MockServer, group_id: &str) {
    authenticated(Mock::given(wiremock::matchers::method("GET")))
        .and(wiremock::matchers::path("/current/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"group_id": group_id})),
        )
        .mount(server)
        .await;
}
