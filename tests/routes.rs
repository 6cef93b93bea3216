//! Router-level tests driving the full middleware stack in-process.
//!
//! The environment is a fixed `StaticEnv`, so these tests never touch
//! process-global state and can run in parallel.
//!
//! Run with: cargo test --test routes
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use tower::ServiceExt;

use message_backend::config::{DEFAULT_MESSAGE, MESSAGE_ENV_VAR};
use message_backend::env::StaticEnv;
use message_backend::routes::message::MessageResponse;
use message_backend::{create_router, AppState};

fn router_with(env: StaticEnv) -> Router {
    create_router(AppState::new(env))
}

async fn send(router: Router, method: Method, uri: &str) -> Response {
    router
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn get(router: Router, uri: &str) -> Response {
    send(router, Method::GET, uri).await
}

async fn body_bytes(response: Response) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

fn header_str<'a>(response: &'a Response, name: &str) -> &'a str {
    response
        .headers()
        .get(name)
        .unwrap_or_else(|| panic!("missing header {}", name))
        .to_str()
        .unwrap()
}

#[tokio::test]
async fn health_returns_fixed_plaintext() {
    let res = get(router_with(StaticEnv::new()), "/").await;

    assert_eq!(res.status(), StatusCode::OK);
    assert!(header_str(&res, "content-type").starts_with("text/plain"));
    assert_eq!(body_bytes(res).await, b"Backend is running!");
}

#[tokio::test]
async fn health_ignores_query_string() {
    let res = get(router_with(StaticEnv::new()), "/?probe=1").await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_bytes(res).await, b"Backend is running!");
}

#[tokio::test]
async fn message_defaults_when_unset() {
    let res = get(router_with(StaticEnv::new()), "/api/message").await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(header_str(&res, "content-type"), "application/json");

    let body: MessageResponse = serde_json::from_slice(&body_bytes(res).await).unwrap();
    assert_eq!(body.message, DEFAULT_MESSAGE);
}

#[tokio::test]
async fn message_uses_environment_override() {
    let env = StaticEnv::new().with_var(MESSAGE_ENV_VAR, "hello-world");
    let res = get(router_with(env), "/api/message").await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_bytes(res).await, br#"{"message":"hello-world"}"#);
}

#[tokio::test]
async fn message_body_has_exactly_one_key() {
    let env = StaticEnv::new().with_var(MESSAGE_ENV_VAR, "quotes \" and unicode \u{e9}");
    let res = get(router_with(env), "/api/message").await;

    let value: serde_json::Value = serde_json::from_slice(&body_bytes(res).await).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 1);
    assert_eq!(object["message"], "quotes \" and unicode \u{e9}");
}

#[tokio::test]
async fn message_keeps_empty_override() {
    let env = StaticEnv::new().with_var(MESSAGE_ENV_VAR, "");
    let res = get(router_with(env), "/api/message").await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_bytes(res).await, br#"{"message":""}"#);
}

#[tokio::test]
async fn repeated_requests_are_byte_identical() {
    let router = router_with(StaticEnv::new().with_var(MESSAGE_ENV_VAR, "stable"));

    let first = body_bytes(get(router.clone(), "/api/message").await).await;
    let second = body_bytes(get(router.clone(), "/api/message").await).await;
    assert_eq!(first, second);

    let first = body_bytes(get(router.clone(), "/").await).await;
    let second = body_bytes(get(router, "/").await).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let res = get(router_with(StaticEnv::new()), "/nonexistent").await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_bytes(res).await, b"Not found: /nonexistent");
}

#[tokio::test]
async fn nested_unknown_path_is_not_found() {
    let res = get(router_with(StaticEnv::new()), "/api/message/extra").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_get_method_is_rejected() {
    let res = send(router_with(StaticEnv::new()), Method::POST, "/api/message").await;
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);

    let res = send(router_with(StaticEnv::new()), Method::DELETE, "/").await;
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn head_returns_ok_without_body() {
    let res = send(router_with(StaticEnv::new()), Method::HEAD, "/").await;

    assert_eq!(res.status(), StatusCode::OK);
    assert!(body_bytes(res).await.is_empty());
}

#[tokio::test]
async fn routed_responses_are_not_cacheable() {
    for uri in ["/", "/api/message"] {
        let res = get(router_with(StaticEnv::new()), uri).await;
        assert_eq!(
            res.headers().get(header::CACHE_CONTROL).unwrap(),
            "no-store",
            "cache-control on {}",
            uri
        );
    }
}

#[tokio::test]
async fn every_response_carries_a_unique_request_id() {
    let router = router_with(StaticEnv::new());

    let ok = get(router.clone(), "/").await;
    let missing = get(router, "/nonexistent").await;

    let ok_id = header_str(&ok, "x-request-id");
    let missing_id = header_str(&missing, "x-request-id");

    assert!(uuid::Uuid::parse_str(ok_id).is_ok());
    assert!(uuid::Uuid::parse_str(missing_id).is_ok());
    assert_ne!(ok_id, missing_id);
}
