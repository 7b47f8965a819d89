//! Shared test utilities for integration tests.
//!
//! [`StubServer`] is a local axum server that answers every request with one
//! canned status/body pair and records what it received, so tests can drive
//! a real [`ApiClient`] over HTTP without reaching the network.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::Router;
use devto_api::ApiClient;
use devto_core::config::ApiConfig;
use tokio::net::TcpListener;

/// API key every stub-backed client sends.
pub const TEST_API_KEY: &str = "test-key";

/// One request as seen by the stub.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body is not JSON")
    }
}

#[derive(Clone)]
struct StubState {
    status: StatusCode,
    body: Arc<String>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

pub struct StubServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubServer {
    /// Start a stub on an ephemeral port answering `status` with `body`.
    pub async fn start(status: u16, body: impl Into<String>) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            status: StatusCode::from_u16(status).expect("invalid status code"),
            body: Arc::new(body.into()),
            requests: Arc::clone(&requests),
        };
        let app = Router::new().fallback(respond).with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind stub listener");
        let addr = listener.local_addr().expect("failed to read stub address");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self { addr, requests }
    }

    /// Start a stub answering 200 with `value` encoded as JSON.
    pub async fn json(value: serde_json::Value) -> Self {
        Self::start(200, value.to_string()).await
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    /// A client pointed at this stub.
    pub fn client(&self) -> ApiClient {
        ApiClient::from_config(&ApiConfig {
            api_key: TEST_API_KEY.into(),
            base_url: self.base_url(),
            api_timeout_ms: 5_000,
        })
        .expect("failed to build client")
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("request log poisoned").clone()
    }

    /// The single request the stub received.
    pub fn only_request(&self) -> RecordedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request, got {requests:?}");
        requests.into_iter().next().expect("no request recorded")
    }
}

async fn respond(
    State(state): State<StubState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, String) {
    let recorded = RecordedRequest {
        method,
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        headers,
        body: String::from_utf8_lossy(&body).into_owned(),
    };
    state
        .requests
        .lock()
        .expect("request log poisoned")
        .push(recorded);
    (state.status, state.body.as_ref().clone())
}
