//! End-to-end scenarios S1-S5, S7 from `spec.md` §8, driven against an
//! in-process `axum` app via `tower::ServiceExt::oneshot` — no real socket.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use gophkeeper_server::{Server, ServerConfig};
use serde_json::{json, Value};
use tower::ServiceExt;

fn config(auth_expiration_seconds: u64) -> ServerConfig {
    ServerConfig {
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        database_url: ":memory:".to_string(),
        auth_key: "0123456789abcdef".to_string(),
        auth_expiration_seconds,
        hasher_key: "fedcba9876543210".to_string(),
    }
}

fn app(auth_expiration_seconds: u64) -> axum::Router {
    Server::new(&config(auth_expiration_seconds))
        .unwrap()
        .into_router()
}

async fn request(
    app: &axum::Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = if let Some(body) = body {
        builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap()
    } else {
        builder.body(Body::empty()).unwrap()
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn sign_up(app: &axum::Router, email: &str, password: &str) -> String {
    let (status, body) = request(
        app,
        Method::POST,
        "/api/v1/auth/register",
        None,
        Some(json!({ "email": email, "password": password })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "sign up failed: {body:?}");
    body["access_token"].as_str().unwrap().to_string()
}

/// S1: register then use the token end to end.
#[tokio::test]
async fn s1_register_then_use_token() {
    let app = app(3600);

    let token = sign_up(&app, "alice@x", "pw-alice").await;

    let (status, body) = request(
        &app,
        Method::POST,
        "/api/v1/auth/verify",
        None,
        Some(json!({ "access_token": token })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user_id"], 1);

    let (status, body) = request(
        &app,
        Method::POST,
        "/api/v1/secrets",
        Some(&token),
        Some(json!({ "name": "gmail", "content": base64_of(b"ENC1") })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create failed: {body:?}");
    let version = body["version"].as_str().unwrap().to_string();

    let (status, body) = request(&app, Method::GET, "/api/v1/secrets/gmail", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["content"], base64_of(b"ENC1"));
    assert_eq!(body["version"], version);
}

/// S2: duplicate email on SignUp is rejected.
#[tokio::test]
async fn s2_duplicate_email_rejected() {
    let app = app(3600);
    sign_up(&app, "alice@x", "pw-alice").await;

    let (status, body) = request(
        &app,
        Method::POST,
        "/api/v1/auth/register",
        None,
        Some(json!({ "email": "alice@x", "password": "pw-other" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["kind"], "already_exists");
}

/// S3: wrong password on SignIn is Unauthenticated.
#[tokio::test]
async fn s3_invalid_credentials_rejected() {
    let app = app(3600);
    sign_up(&app, "alice@x", "pw-alice").await;

    let (status, body) = request(
        &app,
        Method::POST,
        "/api/v1/auth/login",
        None,
        Some(json!({ "email": "alice@x", "password": "wrong" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["kind"], "unauthenticated");
}

/// S4: Update mints a new version and the new content is observable.
#[tokio::test]
async fn s4_update_mints_new_version() {
    let app = app(3600);
    let token = sign_up(&app, "alice@x", "pw-alice").await;

    let (_, body) = request(
        &app,
        Method::POST,
        "/api/v1/secrets",
        Some(&token),
        Some(json!({ "name": "n", "content": base64_of(b"C1") })),
    )
    .await;
    let v1 = body["version"].as_str().unwrap().to_string();

    let (status, body) = request(
        &app,
        Method::PUT,
        "/api/v1/secrets/n",
        Some(&token),
        Some(json!({ "content": base64_of(b"C2") })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let v2 = body["version"].as_str().unwrap().to_string();
    assert_ne!(v1, v2);

    let (_, body) = request(&app, Method::GET, "/api/v1/secrets/n", Some(&token), None).await;
    assert_eq!(body["content"], base64_of(b"C2"));
    assert_eq!(body["version"], v2);
}

/// S5: cross-user isolation. Bob, holding a valid token, gets `NotFound`
/// (never `PermissionDenied`) for Alice's secret.
#[tokio::test]
async fn s5_cross_user_isolation() {
    let app = app(3600);
    let alice = sign_up(&app, "alice@x", "pw-alice").await;
    let bob = sign_up(&app, "bob@x", "pw-bob").await;

    request(
        &app,
        Method::POST,
        "/api/v1/secrets",
        Some(&alice),
        Some(json!({ "name": "s", "content": base64_of(b"alice-secret") })),
    )
    .await;

    let (status, body) = request(&app, Method::GET, "/api/v1/secrets/s", Some(&bob), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["kind"], "not_found");
}

/// S7: an expired token is rejected with `Unauthenticated`, never `Internal`.
#[tokio::test]
async fn s7_expired_token_rejected() {
    let app = app(0);
    let token = sign_up(&app, "alice@x", "pw-alice").await;
    tokio::time::sleep(std::time::Duration::from_secs(1)).await;

    let (status, body) = request(&app, Method::GET, "/api/v1/secrets", Some(&token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["kind"], "unauthenticated");
}

/// Invariant 7/8: public routes bypass the interceptor; non-public routes
/// reject a missing token without ever reaching the handler.
#[tokio::test]
async fn public_routes_bypass_missing_token_blocks() {
    let app = app(3600);

    let (status, _) = request(
        &app,
        Method::POST,
        "/api/v1/auth/login",
        None,
        Some(json!({ "email": "nobody@x", "password": "pw" })),
    )
    .await;
    assert_ne!(status, StatusCode::UNAUTHORIZED, "login must be public");

    let (status, body) = request(&app, Method::GET, "/api/v1/secrets", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "empty token");
}

/// A secret named like a public auth route must still round-trip and must
/// still require a token — the public/non-public split is by route subtree,
/// not by matching the tail of the URL path.
#[tokio::test]
async fn secret_named_like_a_public_route_stays_protected() {
    let app = app(3600);
    let token = sign_up(&app, "alice@x", "pw-alice").await;

    let (status, body) = request(
        &app,
        Method::POST,
        "/api/v1/secrets",
        Some(&token),
        Some(json!({ "name": "login", "content": base64_of(b"C1") })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create failed: {body:?}");

    let (status, body) = request(&app, Method::GET, "/api/v1/secrets/login", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK, "get failed: {body:?}");
    assert_eq!(body["content"], base64_of(b"C1"));

    let (status, _) = request(&app, Method::GET, "/api/v1/secrets/login", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED, "must still require a token");
}

fn base64_of(bytes: &[u8]) -> String {
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    STANDARD.encode(bytes)
}
