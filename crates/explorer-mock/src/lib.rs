//! In-process mock of the explorer REST API.
//!
//! [`MockExplorer`] maps `(method, path)` pairs to canned responses and
//! records every request it receives, so tests can assert on the exact path,
//! method, content type and body a client produced. Unknown routes answer
//! `404` with a plain-text body, like the live service.

pub mod fixtures;

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use serde_json::Value;
use tokio::sync::{oneshot, Mutex};
use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

// ==============================================================================
// Canned Responses
// ==============================================================================

#[derive(Debug, Clone)]
struct Canned {
    status: StatusCode,
    content_type: &'static str,
    body: Vec<u8>,
}

/// One request as the mock saw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: Method,
    /// Path exactly as received, including the leading slash.
    pub path: String,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Shared, append-only log of received requests.
#[derive(Debug, Clone, Default)]
pub struct RequestLog(Arc<Mutex<Vec<RecordedRequest>>>);

impl RequestLog {
    pub async fn snapshot(&self) -> Vec<RecordedRequest> {
        self.0.lock().await.clone()
    }

    pub async fn paths(&self) -> Vec<String> {
        self.0.lock().await.iter().map(|r| r.path.clone()).collect()
    }

    async fn push(&self, request: RecordedRequest) {
        self.0.lock().await.push(request);
    }
}

struct MockState {
    routes: HashMap<(Method, String), Canned>,
    log: RequestLog,
}

// ==============================================================================
// Builder
// ==============================================================================

#[derive(Debug, Default)]
pub struct MockExplorer {
    routes: HashMap<(Method, String), Canned>,
}

impl MockExplorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// `GET path` answers `200` with `value` as JSON.
    pub fn json(self, path: &str, value: Value) -> Self {
        let body = serde_json::to_vec(&value).unwrap_or_default();
        self.respond(Method::GET, path, StatusCode::OK, "application/json", body)
    }

    /// `GET path` answers `200` with a plain-text body.
    pub fn text(self, path: &str, body: impl Into<String>) -> Self {
        self.respond(
            Method::GET,
            path,
            StatusCode::OK,
            "text/plain",
            body.into().into_bytes(),
        )
    }

    /// `GET path` answers `200` with an octet-stream body.
    pub fn bytes(self, path: &str, body: impl Into<Vec<u8>>) -> Self {
        self.respond(
            Method::GET,
            path,
            StatusCode::OK,
            "application/octet-stream",
            body,
        )
    }

    /// `POST path` answers `200` with a plain-text body.
    pub fn post_text(self, path: &str, body: impl Into<String>) -> Self {
        self.respond(
            Method::POST,
            path,
            StatusCode::OK,
            "text/plain",
            body.into().into_bytes(),
        )
    }

    pub fn respond(
        mut self,
        method: Method,
        path: &str,
        status: StatusCode,
        content_type: &'static str,
        body: impl Into<Vec<u8>>,
    ) -> Self {
        self.routes.insert(
            (method, normalize_path(path)),
            Canned {
                status,
                content_type,
                body: body.into(),
            },
        );
        self
    }

    /// The router plus the log it writes to, for driving it without a socket.
    pub fn into_router(self) -> (Router, RequestLog) {
        let log = RequestLog::default();
        let state = Arc::new(MockState {
            routes: self.routes,
            log: log.clone(),
        });
        let router = Router::new()
            .fallback(serve_canned)
            .with_state(state)
            .layer(TraceLayer::new_for_http());
        (router, log)
    }

    /// Bind an ephemeral localhost port and serve in a background task.
    pub async fn spawn(self) -> std::io::Result<MockServer> {
        let (router, log) = self.into_router();
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(async move {
            let result = axum::serve(listener, router)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await;
            if let Err(err) = result {
                warn!(error = %err, "mock explorer server stopped with error");
            }
        });
        debug!(%addr, "mock explorer listening");

        Ok(MockServer {
            addr,
            log,
            shutdown: Some(shutdown_tx),
            handle: Some(handle),
        })
    }
}

fn normalize_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_owned()
    } else {
        format!("/{path}")
    }
}

async fn serve_canned(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri.path().to_owned();
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    state
        .log
        .push(RecordedRequest {
            method: method.clone(),
            path: path.clone(),
            content_type,
            body: body.to_vec(),
        })
        .await;

    match state.routes.get(&(method.clone(), path.clone())) {
        Some(canned) => (
            canned.status,
            [(header::CONTENT_TYPE, canned.content_type)],
            canned.body.clone(),
        )
            .into_response(),
        None => {
            debug!(%method, %path, "no canned response");
            (
                StatusCode::NOT_FOUND,
                [(header::CONTENT_TYPE, "text/plain")],
                format!("no mock route for {method} {path}"),
            )
                .into_response()
        }
    }
}

// ==============================================================================
// Running Server
// ==============================================================================

pub struct MockServer {
    addr: SocketAddr,
    log: RequestLog,
    shutdown: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl MockServer {
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// `http://127.0.0.1:<port>`, without a trailing slash.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.log.snapshot().await
    }

    pub async fn paths(&self) -> Vec<String> {
        self.log.paths().await
    }

    /// Stop accepting connections and wait for the server task to finish.
    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}
