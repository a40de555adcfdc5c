//! Integration tests for registration, the portfolio record, themes, and
//! the rendered documents.
mod common;

use crate::common::{create_test_app_state, fetch_html, register_user, send_empty, send_json};

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn test_register_creates_user_and_default_portfolio() {
    let state = create_test_app_state();
    let (status, body) = send_json(
        &state,
        "POST",
        "/api/v1/users",
        json!({ "username": "alice", "password": "correct-horse" }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["user"]["username"], "alice");
    assert!(body["user"]["id"].is_string());
    // Credentials never appear on the wire.
    assert!(body["user"].get("password").is_none());
    assert!(body["user"].get("credentialDigest").is_none());

    assert_eq!(body["portfolio"]["theme"], "minimal");
    assert_eq!(body["portfolio"]["isPublished"], false);
    assert_eq!(body["portfolio"]["firstName"], "");
    assert_eq!(body["portfolio"]["skills"], json!([]));
    assert_eq!(body["portfolio"]["experiences"], json!([]));
    assert_eq!(body["portfolio"]["userId"], body["user"]["id"]);
}

#[tokio::test]
async fn test_register_duplicate_username_conflicts() {
    let state = create_test_app_state();
    register_user(&state, "alice").await;

    let (status, body) = send_json(
        &state,
        "POST",
        "/api/v1/users",
        json!({ "username": "alice", "password": "another-pass" }),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "CONFLICT");
}

#[tokio::test]
async fn test_register_requires_username_and_password() {
    let state = create_test_app_state();
    let (status, body) = send_json(
        &state,
        "POST",
        "/api/v1/users",
        json!({ "username": "", "password": "pass" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_get_portfolio_unknown_user_is_not_found() {
    let state = create_test_app_state();
    let (status, body) = send_empty(
        &state,
        "GET",
        &format!("/api/v1/portfolio?user_id={}", Uuid::new_v4()),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_patch_merges_disjoint_updates() {
    let state = create_test_app_state();
    let user_id = register_user(&state, "alice").await;
    let uri = format!("/api/v1/portfolio?user_id={user_id}");

    let (status, _) = send_json(
        &state,
        "PATCH",
        &uri,
        json!({ "firstName": "Alice", "bio": "Ten characters or more." }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send_json(&state, "PATCH", &uri, json!({ "lastName": "Doe" })).await;
    assert_eq!(status, StatusCode::OK);

    // Fields from the first update survive the second.
    assert_eq!(body["firstName"], "Alice");
    assert_eq!(body["lastName"], "Doe");
    assert_eq!(body["bio"], "Ten characters or more.");
}

#[tokio::test]
async fn test_patch_explicit_empty_values_overwrite() {
    let state = create_test_app_state();
    let user_id = register_user(&state, "alice").await;
    let uri = format!("/api/v1/portfolio?user_id={user_id}");

    send_json(&state, "PATCH", &uri, json!({ "skills": ["Rust"], "bio": "Something long enough." }))
        .await;
    let (status, body) = send_json(&state, "PATCH", &uri, json!({ "skills": [], "bio": "" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["skills"], json!([]));
    assert_eq!(body["bio"], "");
}

#[tokio::test]
async fn test_patch_dedupes_skills_preserving_order() {
    let state = create_test_app_state();
    let user_id = register_user(&state, "alice").await;

    let (_, body) = send_json(
        &state,
        "PATCH",
        &format!("/api/v1/portfolio?user_id={user_id}"),
        json!({ "skills": ["Rust", "SQL", "Rust", "Go", "SQL"] }),
    )
    .await;

    assert_eq!(body["skills"], json!(["Rust", "SQL", "Go"]));
}

#[tokio::test]
async fn test_patch_ignores_unknown_fields_and_client_timestamp() {
    let state = create_test_app_state();
    let user_id = register_user(&state, "alice").await;

    let (status, body) = send_json(
        &state,
        "PATCH",
        &format!("/api/v1/portfolio?user_id={user_id}"),
        json!({
            "firstName": "Alice",
            "updatedAt": "1999-01-01T00:00:00Z",
            "somethingElse": true
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["firstName"], "Alice");
    // The server stamps the merge time itself.
    assert_ne!(body["updatedAt"], "1999-01-01T00:00:00Z");
}

#[tokio::test]
async fn test_patch_rejects_unknown_theme_without_applying() {
    let state = create_test_app_state();
    let user_id = register_user(&state, "alice").await;
    let uri = format!("/api/v1/portfolio?user_id={user_id}");

    let (status, body) = send_json(
        &state,
        "PATCH",
        &uri,
        json!({ "theme": "neon", "firstName": "Alice" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_THEME");

    // Nothing from the rejected payload landed.
    let (_, body) = send_empty(&state, "GET", &uri).await;
    assert_eq!(body["theme"], "minimal");
    assert_eq!(body["firstName"], "");
}

#[tokio::test]
async fn test_patch_rejects_duplicate_entry_ids_without_applying() {
    let state = create_test_app_state();
    let user_id = register_user(&state, "alice").await;
    let uri = format!("/api/v1/portfolio?user_id={user_id}");

    let entry = json!({
        "id": "exp1",
        "company": "Acme",
        "position": "Engineer",
        "startDate": "2020",
        "description": "Long enough description."
    });
    let (status, body) = send_json(
        &state,
        "PATCH",
        &uri,
        json!({ "experiences": [entry, entry] }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let (_, body) = send_empty(&state, "GET", &uri).await;
    assert_eq!(body["experiences"], json!([]));
}

#[tokio::test]
async fn test_set_theme_accepts_every_known_theme() {
    let state = create_test_app_state();
    let user_id = register_user(&state, "alice").await;

    for theme in ["minimal", "tech", "creative", "elegant", "nature", "modern"] {
        let (status, body) = send_empty(
            &state,
            "PUT",
            &format!("/api/v1/portfolio/theme/{theme}?user_id={user_id}"),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "theme '{theme}' rejected");
        assert_eq!(body["theme"], theme);
    }
}

#[tokio::test]
async fn test_set_theme_rejects_unknown_identifier() {
    let state = create_test_app_state();
    let user_id = register_user(&state, "alice").await;

    let (status, body) = send_empty(
        &state,
        "PUT",
        &format!("/api/v1/portfolio/theme/neon?user_id={user_id}"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_THEME");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("minimal"));
}

#[tokio::test]
async fn test_publish_and_unpublish_toggle_the_flag() {
    let state = create_test_app_state();
    let user_id = register_user(&state, "alice").await;

    let (status, body) = send_empty(
        &state,
        "POST",
        &format!("/api/v1/portfolio/publish?user_id={user_id}"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isPublished"], true);

    let (_, body) = send_empty(
        &state,
        "POST",
        &format!("/api/v1/portfolio/unpublish?user_id={user_id}"),
    )
    .await;
    assert_eq!(body["isPublished"], false);
}

#[tokio::test]
async fn test_theme_catalog_lists_all_six() {
    let state = create_test_app_state();
    let (status, body) = send_empty(&state, "GET", "/api/v1/themes").await;

    assert_eq!(status, StatusCode::OK);
    let themes = body.as_array().unwrap();
    assert_eq!(themes.len(), 6);
    assert_eq!(themes[0]["id"], "minimal");
    for theme in themes {
        assert!(theme["name"].is_string());
        assert!(!theme["description"].as_str().unwrap().is_empty());
    }
}

#[tokio::test]
async fn test_preview_endpoint_serves_html() {
    let state = create_test_app_state();
    let user_id = register_user(&state, "alice").await;

    let (status, html) = fetch_html(
        &state,
        &format!("/api/v1/portfolio/preview?user_id={user_id}"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("About Me"));
}

#[tokio::test]
async fn test_render_endpoints_unknown_user_not_found() {
    let state = create_test_app_state();
    let uri = format!("/api/v1/portfolio/preview?user_id={}", Uuid::new_v4());
    let (status, _) = fetch_html(&state, &uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_reports_service() {
    let state = create_test_app_state();
    let (status, body) = send_empty(&state, "GET", "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "folio-api");
}

/// The whole journey: register, fill the record, pick a theme, publish,
/// and read both rendered documents back.
#[tokio::test]
async fn test_alice_builds_and_renders_her_portfolio() {
    let state = create_test_app_state();
    let user_id = register_user(&state, "alice").await;
    let uri = format!("/api/v1/portfolio?user_id={user_id}");

    send_json(
        &state,
        "PATCH",
        &uri,
        json!({
            "firstName": "Alice",
            "lastName": "Doe",
            "title": "Engineer",
            "bio": "Builds reliable backends in Rust.",
            "skills": ["Rust", "SQL"],
            "experiences": [{
                "id": "exp1",
                "company": "Acme",
                "position": "Backend Engineer",
                "startDate": "Jan 2020",
                "isCurrent": true,
                "description": "Owns the billing pipeline."
            }],
            "projects": [{
                "id": "p1",
                "title": "Tracker",
                "description": "A small issue tracker.",
                "technologies": ["Rust", "Axum"],
                "githubLink": "https://github.com/alice/tracker"
            }],
            "contactEmail": "alice@example.com"
        }),
    )
    .await;

    let (status, body) = send_empty(
        &state,
        "PUT",
        &format!("/api/v1/portfolio/theme/tech?user_id={user_id}"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["theme"], "tech");

    let (_, body) = send_empty(
        &state,
        "POST",
        &format!("/api/v1/portfolio/publish?user_id={user_id}"),
    )
    .await;
    assert_eq!(body["isPublished"], true);

    let (status, preview) = fetch_html(
        &state,
        &format!("/api/v1/portfolio/preview?user_id={user_id}"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(preview.contains("Alice Doe"));
    assert!(preview.contains("Engineer"));
    assert!(preview.contains("#0f172a"), "tech theme tokens expected");
    assert!(preview.contains("Jan 2020 - Present"));
    assert!(!preview.contains("undefined"));

    let (status, print) = fetch_html(
        &state,
        &format!("/api/v1/portfolio/print?user_id={user_id}"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(print.contains("Alice Doe"));
    assert!(print.contains("class=\"page-break\""));
    assert!(print.contains("Email: alice@example.com"));
    assert!(print.contains("window.print()"));
}
