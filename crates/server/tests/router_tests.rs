//! Request-id layering around the portal router.
//!
//! Run with: `cargo test -p server --features server --test router_tests`

#![cfg(feature = "server")]

mod common;

use axum::http::StatusCode;
use common::{get, layered_app};

#[tokio::test]
async fn assigns_request_id_when_missing() {
    let response = get(layered_app(), "/ping", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let id = response
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert_eq!(id.len(), 36, "expected a hyphenated UUID, got {id:?}");
}

#[tokio::test]
async fn keeps_caller_request_id() {
    let response = get(layered_app(), "/ping", Some("trace-me-123")).await;

    assert_eq!(
        response.headers().get("x-request-id").map(|v| v.as_bytes()),
        Some(&b"trace-me-123"[..])
    );
}
