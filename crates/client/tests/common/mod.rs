//! Stub dashboard backend for integration tests.
//!
//! Serves `POST /api/login` and `GET /api/dashboard` from an `axum` router
//! bound to an ephemeral local port.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;

pub const EMAIL: &str = "user1@example.com";
pub const PASSWORD: &str = "password123";
pub const TOKEN: &str = "stub-token-1";

#[derive(Default)]
pub struct StubState {
    /// When set, `/api/dashboard` answers 500.
    pub fail_dashboard: AtomicBool,
    pub dashboard_calls: AtomicUsize,
}

pub struct StubBackend {
    pub url: String,
    pub state: Arc<StubState>,
}

impl StubBackend {
    pub fn fail_dashboard(&self, fail: bool) {
        self.state.fail_dashboard.store(fail, Ordering::SeqCst);
    }

    pub fn dashboard_calls(&self) -> usize {
        self.state.dashboard_calls.load(Ordering::SeqCst)
    }
}

#[derive(Deserialize)]
struct LoginBody {
    email: String,
    password: String,
}

async fn login(Json(body): Json<LoginBody>) -> Response {
    if body.password != PASSWORD {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Invalid email or password" })),
        )
            .into_response();
    }
    Json(json!({ "id": 1, "email": body.email, "token": TOKEN })).into_response()
}

async fn dashboard(State(state): State<Arc<StubState>>, headers: HeaderMap) -> Response {
    let authorized = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {TOKEN}"));
    if !authorized {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Unauthorized" })),
        )
            .into_response();
    }

    state.dashboard_calls.fetch_add(1, Ordering::SeqCst);
    if state.fail_dashboard.load(Ordering::SeqCst) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": "Database unavailable" })),
        )
            .into_response();
    }

    Json(snapshot_json()).into_response()
}

/// The payload every successful `/api/dashboard` call returns.
pub fn snapshot_json() -> serde_json::Value {
    json!({
        "overview": { "totalUsers": 1200, "activeUsers": 860, "revenue": 245890, "growth": 12.4 },
        "users": [
            { "id": 1, "name": "Ann Lee", "email": "ann@example.com", "status": "active" },
            { "id": 2, "name": "Bob Stone", "email": "bob@example.com", "status": "inactive" },
            { "id": 3, "name": "Cara Diaz", "email": "cara@example.com", "status": "active" }
        ],
        "products": [
            { "id": 10, "name": "Starter Kit", "category": "Bundles", "sales": 520, "price": 49.0 },
            { "id": 11, "name": "Desk Lamp", "category": "Home", "sales": 120, "price": 1250.0 }
        ],
        "analytics": [
            { "views": 1200, "clicks": 300, "conversions": 45 },
            { "views": 2400, "clicks": 500, "conversions": 60 },
            { "views": 900, "clicks": 200, "conversions": 15 }
        ]
    })
}

/// Start the stub on `127.0.0.1:0` and return its base URL.
pub async fn spawn_backend() -> StubBackend {
    let state = Arc::new(StubState::default());
    let app = Router::new()
        .route("/api/login", post(login))
        .route("/api/dashboard", get(dashboard))
        .with_state(Arc::clone(&state));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubBackend {
        url: format!("http://{addr}"),
        state,
    }
}

/// A base URL on which nothing is listening.
pub async fn dead_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
