#![allow(dead_code)]

//! Test infrastructure for folio-api integration tests

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use folio_api::config::Config;
use folio_api::routes::build_router;
use folio_api::state::AppState;
use folio_api::storage::MemoryStorage;

/// Create AppState for testing. Each state owns a fresh in-memory store;
/// requests dispatched against the same state share it.
pub fn create_test_app_state() -> AppState {
    AppState {
        storage: Arc::new(MemoryStorage::new()),
        config: Config {
            port: 0,
            rust_log: "info".to_string(),
        },
    }
}

/// Send a JSON request through a fresh router over the shared state.
pub async fn send_json(
    state: &AppState,
    method: &str,
    uri: &str,
    body: Value,
) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    dispatch(state, request).await
}

/// Send a bodyless request.
pub async fn send_empty(state: &AppState, method: &str, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    dispatch(state, request).await
}

async fn dispatch(state: &AppState, request: Request<Body>) -> (StatusCode, Value) {
    let response = build_router(state.clone()).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

/// Fetch a rendered document, returning the raw HTML.
pub async fn fetch_html(state: &AppState, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = build_router(state.clone()).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

/// Register a user and return their id.
pub async fn register_user(state: &AppState, username: &str) -> Uuid {
    let (status, body) = send_json(
        state,
        "POST",
        "/api/v1/users",
        json!({ "username": username, "password": "correct-horse-battery" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "registration failed: {body}");
    Uuid::parse_str(body["user"]["id"].as_str().unwrap()).unwrap()
}

/// Submit a wizard step form for the user.
pub async fn wizard_next(state: &AppState, user_id: Uuid, form: Value) -> (StatusCode, Value) {
    send_json(
        state,
        "POST",
        &format!("/api/v1/wizard/next?user_id={user_id}"),
        form,
    )
    .await
}

/// A details form that passes every rule.
pub fn valid_details() -> Value {
    json!({
        "step": "details",
        "firstName": "Alice",
        "lastName": "Doe",
        "title": "Engineer",
        "bio": "Builds reliable backends in Rust.",
        "skills": ["Rust", "SQL"],
        "contactEmail": "alice@example.com"
    })
}

/// An experience form with one valid entry.
pub fn valid_experience() -> Value {
    json!({
        "step": "experience",
        "experiences": [{
            "id": "",
            "company": "Acme",
            "position": "Backend Engineer",
            "startDate": "Jan 2020",
            "isCurrent": true,
            "description": "Owns the billing pipeline."
        }]
    })
}

/// A projects form with one valid entry.
pub fn valid_projects() -> Value {
    json!({
        "step": "projects",
        "projects": [{
            "id": "",
            "title": "Tracker",
            "description": "A small issue tracker.",
            "technologies": ["Rust, Axum"],
            "demoLink": "https://demo.example.com"
        }]
    })
}
