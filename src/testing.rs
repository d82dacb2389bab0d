//! In-process mock of the token backend for client tests
//!
//! Every request is recorded; responses are canned per (method, path).
//! Also holds the helpers that drive a headless `VirtualDom`.

use axum::Json;
use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use dioxus_core::{NoOpMutations, VirtualDom};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub body: Value,
}

#[derive(Clone, Default)]
pub struct MockBackend {
    responses: Arc<Mutex<HashMap<(String, String), (u16, Value)>>>,
    log: Arc<Mutex<Vec<Recorded>>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, method: &str, path: &str, status: u16, body: Value) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert((method.to_string(), path.to_string()), (status, body));
        self
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.log.lock().unwrap().clone()
    }

    pub fn last(&self) -> Recorded {
        self.requests().last().cloned().expect("no request recorded")
    }

    /// Bind on an ephemeral port and return the base URL.
    pub async fn start(&self) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = Router::new().fallback(handle).with_state(self.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }
}

async fn handle(
    State(mock): State<MockBackend>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, Json<Value>) {
    mock.log.lock().unwrap().push(Recorded {
        method: method.to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        authorization: headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: serde_json::from_slice(&body).unwrap_or(Value::Null),
    });

    let key = (method.to_string(), uri.path().to_string());
    let canned = mock.responses.lock().unwrap().get(&key).cloned();
    match canned {
        Some((status, value)) => (
            StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            Json(value),
        ),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "Route not found" })),
        ),
    }
}

pub fn user_json(id: &str, first: &str, balance: i64) -> Value {
    json!({
        "_id": id,
        "firstName": first,
        "lastName": "Tester",
        "email": format!("{}@example.com", first.to_lowercase()),
        "tokenBalance": balance
    })
}

/// Run the dom's tasks and re-render for `ms` milliseconds.
pub async fn drive(dom: &mut VirtualDom, ms: u64) {
    let deadline = tokio::time::Instant::now() + Duration::from_millis(ms);
    loop {
        tokio::select! {
            _ = dom.wait_for_work() => {}
            _ = tokio::time::sleep_until(deadline) => break,
        }
        dom.render_immediate(&mut NoOpMutations);
    }
}

/// Like [`drive`], but stops early once `done` holds. Returns whether it did.
pub async fn drive_until(dom: &mut VirtualDom, ms: u64, mut done: impl FnMut() -> bool) -> bool {
    let deadline = tokio::time::Instant::now() + Duration::from_millis(ms);
    while !done() {
        tokio::select! {
            _ = dom.wait_for_work() => {}
            _ = tokio::time::sleep_until(deadline) => return done(),
        }
        dom.render_immediate(&mut NoOpMutations);
    }
    true
}
