//! A mock Galaxy server for tests of the blocking client.
//!
//! [wiremock] is async, so the mock server is driven by a private tokio
//! runtime while the test itself runs on a plain thread (the blocking
//! reqwest client must not be used from inside a runtime).

#![allow(dead_code)]

use bioblend_contrib::GalaxyInstance;
use tokio::runtime::Runtime;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

pub const EMAIL: &str = "alice@example.org";
pub const PASSWORD: &str = "hunter2";
/// base64 of `alice@example.org:hunter2`
pub const BASIC_AUTH: &str = "Basic YWxpY2VAZXhhbXBsZS5vcmc6aHVudGVyMg==";
pub const AUTH_PATH: &str = "/api/authenticate/baseauth";

pub struct MockGalaxy {
    // dropped before the runtime
    server: MockServer,
    rt: Runtime,
}

impl MockGalaxy {
    pub fn start() -> Self {
        let rt = Runtime::new().unwrap();
        let server = rt.block_on(MockServer::start());
        Self { server, rt }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    pub fn mount(&self, mock: Mock) {
        self.rt.block_on(mock.mount(&self.server))
    }

    pub fn requests(&self) -> Vec<Request> {
        self.rt
            .block_on(self.server.received_requests())
            .unwrap_or_default()
    }

    /// Number of requests received for the given path.
    pub fn count(&self, request_path: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.url.path() == request_path)
            .count()
    }

    /// Answer the authentication exchange for [EMAIL] and [PASSWORD].
    pub fn mount_auth(&self, status: u16, api_key: &str) {
        self.mount(
            Mock::given(method("GET"))
                .and(path(AUTH_PATH))
                .and(header("authorization", BASIC_AUTH))
                .and(header("content-type", "application/json"))
                .respond_with(
                    ResponseTemplate::new(status)
                        .set_body_json(serde_json::json!({ "api_key": api_key })),
                ),
        )
    }

    /// Instance which must log in with [EMAIL] and [PASSWORD].
    pub fn login_instance(&self) -> GalaxyInstance {
        GalaxyInstance::new(&self.uri(), None, Some(EMAIL), Some(PASSWORD)).unwrap()
    }

    /// Instance with an API key.
    pub fn key_instance(&self, key: &str) -> GalaxyInstance {
        GalaxyInstance::new(&self.uri(), Some(key), None, None).unwrap()
    }
}

/// Value of a query parameter of a received request.
pub fn query_param(request: &Request, name: &str) -> Option<String> {
    request
        .url
        .query_pairs()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.into_owned())
}
