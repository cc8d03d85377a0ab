// tests/support/helpers.rs
use super::mocks;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header::CONTENT_TYPE};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

use alejandria_core::application::{
    ports::{security::PasswordHasher, time::Clock, util::SlugGenerator},
    services::ApplicationServices,
};
use alejandria_core::domain::{
    article::{ArticleReadRepository, ArticleWriteRepository},
    user::UserRepository,
};
use alejandria_core::infrastructure::{
    security::password::Argon2PasswordHasher, util::TitleSlugGenerator,
};
use alejandria_core::presentation::http::{routes::build_router, state::HttpState};

pub const TEST_ORIGIN: &str = "http://localhost:5175";

pub fn make_test_router() -> axum::Router {
    let article_repo = Arc::new(mocks::InMemoryArticleRepository::default());
    let article_write: Arc<dyn ArticleWriteRepository> = article_repo.clone();
    let article_read: Arc<dyn ArticleReadRepository> = article_repo;
    let user_repo: Arc<dyn UserRepository> = Arc::new(mocks::InMemoryUserRepository::default());
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::default());
    let clock: Arc<dyn Clock> = Arc::new(mocks::TickingClock::default());
    let slugger: Arc<dyn SlugGenerator> = Arc::new(TitleSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        article_write,
        article_read,
        user_repo,
        password_hasher,
        clock,
        slugger,
    ));

    build_router(HttpState { services }, &[TEST_ORIGIN.to_string()])
}

pub async fn request(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => {
            builder = builder.header(CONTENT_TYPE, "application/json");
            builder.body(Body::from(json.to_string())).unwrap()
        }
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

pub async fn get(app: &axum::Router, uri: &str) -> (StatusCode, Value) {
    request(app, "GET", uri, None).await
}

pub async fn post_json(app: &axum::Router, uri: &str, body: Value) -> (StatusCode, Value) {
    request(app, "POST", uri, Some(body)).await
}

pub async fn put_json(app: &axum::Router, uri: &str, body: Value) -> (StatusCode, Value) {
    request(app, "PUT", uri, Some(body)).await
}

pub async fn patch_json(app: &axum::Router, uri: &str, body: Value) -> (StatusCode, Value) {
    request(app, "PATCH", uri, Some(body)).await
}

pub async fn delete(app: &axum::Router, uri: &str) -> (StatusCode, Value) {
    request(app, "DELETE", uri, None).await
}

/// POST a minimal valid article and return its body.
pub async fn create_article(app: &axum::Router, title: &str, status: &str) -> Value {
    let (code, body) = post_json(
        app,
        "/articles",
        serde_json::json!({
            "title": title,
            "description": format!("{title} description"),
            "category": "General",
            "author": "Test Author",
            "status": status,
        }),
    )
    .await;
    assert_eq!(code, StatusCode::CREATED, "create failed: {body}");
    body
}
