// tests/e2e_users.rs
use axum::http::StatusCode;
use serde_json::json;

mod support;

use support::{get, patch_json, post_json};

#[tokio::test]
async fn register_defaults_to_viewer_and_hides_password() {
    let app = support::make_test_router();

    let (code, body) = post_json(
        &app,
        "/users/register",
        json!({ "username": "ada", "password": "correct horse" }),
    )
    .await;

    assert_eq!(code, StatusCode::CREATED);
    assert_eq!(body["username"], "ada");
    assert_eq!(body["role"], "viewer");
    assert_eq!(body["is_active"], true);
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn register_rejects_duplicates_and_blank_credentials() {
    let app = support::make_test_router();

    let (code, _) = post_json(
        &app,
        "/users/register",
        json!({ "username": "ada", "password": "pw" }),
    )
    .await;
    assert_eq!(code, StatusCode::CREATED);

    let (code, body) = post_json(
        &app,
        "/users/register",
        json!({ "username": "ada", "password": "other" }),
    )
    .await;
    assert_eq!(code, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("already exists"));

    let (code, _) = post_json(
        &app,
        "/users/register",
        json!({ "username": "   ", "password": "pw" }),
    )
    .await;
    assert_eq!(code, StatusCode::BAD_REQUEST);

    let (code, _) = post_json(
        &app,
        "/users/register",
        json!({ "username": "bob", "password": "" }),
    )
    .await;
    assert_eq!(code, StatusCode::BAD_REQUEST);

    let (code, body) = post_json(
        &app,
        "/users/register",
        json!({ "username": "bob", "password": "pw", "role": "boss" }),
    )
    .await;
    assert_eq!(code, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "unknown role: boss");
}

#[tokio::test]
async fn login_verifies_credentials() {
    let app = support::make_test_router();

    post_json(
        &app,
        "/users/register",
        json!({ "username": "editor1", "password": "s3cret", "role": "editor" }),
    )
    .await;

    let (code, body) = post_json(
        &app,
        "/users/login",
        json!({ "username": "editor1", "password": "s3cret" }),
    )
    .await;
    assert_eq!(code, StatusCode::OK);
    assert_eq!(body["role"], "editor");

    let (code, _) = post_json(
        &app,
        "/users/login",
        json!({ "username": "editor1", "password": "wrong" }),
    )
    .await;
    assert_eq!(code, StatusCode::UNAUTHORIZED);

    // Unknown users are indistinguishable from bad passwords.
    let (code, body) = post_json(
        &app,
        "/users/login",
        json!({ "username": "ghost", "password": "whatever" }),
    )
    .await;
    assert_eq!(code, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "invalid credentials");
}

#[tokio::test]
async fn role_can_be_updated() {
    let app = support::make_test_router();

    let (_, created) = post_json(
        &app,
        "/users/register",
        json!({ "username": "carol", "password": "pw" }),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let (code, body) = patch_json(
        &app,
        &format!("/users/{id}/role"),
        json!({ "role": "admin" }),
    )
    .await;
    assert_eq!(code, StatusCode::OK);
    assert_eq!(body["role"], "admin");

    let (code, _) = patch_json(&app, "/users/999/role", json!({ "role": "admin" })).await;
    assert_eq!(code, StatusCode::NOT_FOUND);

    let (code, body) = patch_json(&app, &format!("/users/{id}/role"), json!({ "role": "boss" })).await;
    assert_eq!(code, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Bad Request");
    assert_eq!(body["message"], "unknown role: boss");

    let (code, body) = patch_json(&app, &format!("/users/{id}/role"), json!({})).await;
    assert_eq!(code, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "role is required");
}

#[tokio::test]
async fn listing_returns_registered_users() {
    let app = support::make_test_router();

    post_json(
        &app,
        "/users/register",
        json!({ "username": "u1", "password": "pw" }),
    )
    .await;
    post_json(
        &app,
        "/users/register",
        json!({ "username": "u2", "password": "pw", "role": "admin" }),
    )
    .await;

    let (code, body) = get(&app, "/users").await;
    assert_eq!(code, StatusCode::OK);
    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert!(users.iter().all(|u| u.get("password_hash").is_none()));
}
