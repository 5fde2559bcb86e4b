//! In-process stand-in for the json-server backend, bound to an ephemeral
//! port. Records every request so tests can assert on the wire.

use std::{
    collections::HashMap,
    net::TcpListener,
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::Value;

#[derive(Clone, Default)]
pub struct FakeBackend {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    transactions: Vec<Value>,
    fail_with: Option<StatusCode>,
    garbage: bool,
    created_at: Option<String>,
    delays: HashMap<String, Duration>,
    gets: Vec<HashMap<String, String>>,
    posts: Vec<Value>,
}

impl FakeBackend {
    pub fn with_transactions(transactions: Vec<Value>) -> Self {
        let backend = FakeBackend::default();
        backend.inner.lock().unwrap().transactions = transactions;
        backend
    }

    pub fn fail_with(&self, status: StatusCode) {
        self.inner.lock().unwrap().fail_with = Some(status);
    }

    pub fn respond_with_garbage(&self) {
        self.inner.lock().unwrap().garbage = true;
    }

    /// Overrides the `createdAt` of records created from now on.
    pub fn stamp_created_at(&self, created_at: &str) {
        self.inner.lock().unwrap().created_at = Some(created_at.to_string());
    }

    /// Delays `GET` responses for the given `q`.
    pub fn delay(&self, q: &str, delay: Duration) {
        self.inner.lock().unwrap().delays.insert(q.to_string(), delay);
    }

    pub fn gets(&self) -> Vec<HashMap<String, String>> {
        self.inner.lock().unwrap().gets.clone()
    }

    pub fn posts(&self) -> Vec<Value> {
        self.inner.lock().unwrap().posts.clone()
    }

    pub async fn spawn(&self) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let app = Router::new()
            .route("/transactions", get(list).post(create))
            .with_state(self.clone());

        tokio::spawn(async move {
            axum::Server::from_tcp(listener)
                .unwrap()
                .serve(app.into_make_service())
                .await
                .unwrap();
        });

        format!("http://{}", addr)
    }

    /// A url nothing listens on.
    pub fn closed_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        format!("http://{}", addr)
    }
}

async fn list(
    State(backend): State<FakeBackend>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let q = params.get("q").cloned().unwrap_or_default();

    let delay = {
        let mut inner = backend.inner.lock().unwrap();
        inner.gets.push(params.clone());
        inner.delays.get(&q).copied()
    };
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }

    let inner = backend.inner.lock().unwrap();
    if let Some(status) = inner.fail_with {
        return status.into_response();
    }

    let needle = q.to_lowercase();
    let mut transactions: Vec<Value> = inner
        .transactions
        .iter()
        .filter(|transaction| needle.is_empty() || matches(transaction, &needle))
        .cloned()
        .collect();

    if params.get("_sort").map(String::as_str) == Some("-createdAt") {
        transactions.sort_by(|a, b| created_at(b).cmp(created_at(a)));
    }

    Json(transactions).into_response()
}

async fn create(State(backend): State<FakeBackend>, Json(mut body): Json<Value>) -> Response {
    let mut inner = backend.inner.lock().unwrap();
    inner.posts.push(body.clone());

    if let Some(status) = inner.fail_with {
        return status.into_response();
    }
    if inner.garbage {
        return (StatusCode::CREATED, "{\"id\":").into_response();
    }

    let next_id = inner
        .transactions
        .iter()
        .filter_map(|transaction| transaction["id"].as_u64())
        .max()
        .unwrap_or(0)
        + 1;

    body["id"] = Value::from(next_id);
    if let Some(created_at) = &inner.created_at {
        body["createdAt"] = Value::from(created_at.as_str());
    }
    inner.transactions.push(body.clone());

    (StatusCode::CREATED, Json(body)).into_response()
}

// json-server's `q` matches any string field, case-insensitively
fn matches(transaction: &Value, needle: &str) -> bool {
    match transaction.as_object() {
        Some(fields) => fields
            .values()
            .filter_map(Value::as_str)
            .any(|value| value.to_lowercase().contains(needle)),
        None => false,
    }
}

fn created_at(transaction: &Value) -> &str {
    transaction["createdAt"].as_str().unwrap_or_default()
}
