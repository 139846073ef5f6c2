//! Shared test helpers for integration tests.
//!
//! Each test starts its own mock Greeter server on an ephemeral port and
//! points a real `HttpHandler` at it.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use tokio::net::TcpListener;
use tokio::sync::Notify;

use greeter_core::config::AppConfig;

/// What the mock server saw for one request
#[derive(Debug, Clone)]
pub struct Recorded {
    /// HTTP method
    pub method: String,
    /// Path and query as received
    pub path: String,
    /// `Content-Type` header, if sent
    pub content_type: Option<String>,
    /// Raw request body
    pub body: String,
}

/// Running mock server
#[derive(Debug, Clone)]
pub struct TestServer {
    /// Base URL with trailing slash
    pub base_url: String,
    /// Requests received so far
    pub seen: Arc<Mutex<Vec<Recorded>>>,
    /// Held requests wait here until notified
    pub gate: Arc<Notify>,
    /// Notified each time a request arrives
    pub arrived: Arc<Notify>,
}

impl TestServer {
    /// Requests received so far.
    pub fn requests(&self) -> Vec<Recorded> {
        self.seen.lock().expect("poisoned").clone()
    }

    /// Release one held request.
    pub fn release(&self) {
        self.gate.notify_one();
    }

    /// Configuration pointing the client at this server.
    pub fn config(&self) -> AppConfig {
        config_for(&self.base_url)
    }
}

#[derive(Clone)]
struct Canned {
    status: StatusCode,
    body: String,
    hold: bool,
    delay: Option<Duration>,
    seen: Arc<Mutex<Vec<Recorded>>>,
    gate: Arc<Notify>,
    arrived: Arc<Notify>,
}

async fn canned(
    State(c): State<Canned>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    c.seen.lock().expect("poisoned").push(Recorded {
        method: method.to_string(),
        path: uri
            .path_and_query()
            .map(|p| p.as_str().to_string())
            .unwrap_or_default(),
        content_type: headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body,
    });
    c.arrived.notify_one();

    if c.hold {
        c.gate.notified().await;
    }
    if let Some(delay) = c.delay {
        tokio::time::sleep(delay).await;
    }

    (c.status, [(header::CONTENT_TYPE, "application/json")], c.body).into_response()
}

async fn start(status: StatusCode, body: &str, hold: bool, delay: Option<Duration>) -> TestServer {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let gate = Arc::new(Notify::new());
    let arrived = Arc::new(Notify::new());

    let router = Router::new().fallback(canned).with_state(Canned {
        status,
        body: body.to_string(),
        hold,
        delay,
        seen: Arc::clone(&seen),
        gate: Arc::clone(&gate),
        arrived: Arc::clone(&arrived),
    });

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock server");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Mock server failed");
    });

    TestServer {
        base_url: format!("http://{}/", addr),
        seen,
        gate,
        arrived,
    }
}

/// Serve `body` with `status` for every request.
pub async fn respond_with(status: StatusCode, body: &str) -> TestServer {
    start(status, body, false, None).await
}

/// Like [`respond_with`], but each request waits for [`TestServer::release`].
pub async fn respond_when_released(status: StatusCode, body: &str) -> TestServer {
    start(status, body, true, None).await
}

/// Like [`respond_with`], but each response is delayed.
pub async fn respond_after(delay: Duration, status: StatusCode, body: &str) -> TestServer {
    start(status, body, false, Some(delay)).await
}

/// A base URL nothing is listening on.
pub async fn refused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let addr = listener.local_addr().expect("Failed to read local addr");
    drop(listener);
    format!("http://{}/", addr)
}

/// Default configuration with `client.base_url` replaced.
pub fn config_for(base_url: &str) -> AppConfig {
    let mut config = AppConfig::default();
    config.client.base_url = base_url.to_string();
    config.client.use_system_proxy = false;
    config
}
