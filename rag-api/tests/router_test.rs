//! Router-level tests driven through `tower::ServiceExt::oneshot`; no socket
//! is bound.

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use rag_api::build_router;
use tower::util::ServiceExt;

async fn get(app: Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, body.to_vec())
}

#[tokio::test]
async fn root_returns_fixed_payload() {
    let (status, headers, body) = get(build_router(), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers["content-type"], "application/json");
    assert_eq!(
        String::from_utf8(body).unwrap(),
        r#"{"message":"RAG API is running","version":"0.1.0"}"#
    );
}

#[tokio::test]
async fn health_returns_fixed_payload() {
    let (status, _, body) = get(build_router(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        String::from_utf8(body).unwrap(),
        r#"{"status":"healthy","service":"rag-api"}"#
    );
}

#[tokio::test]
async fn repeated_calls_are_byte_identical() {
    let app = build_router();

    for uri in ["/", "/health"] {
        let (_, _, first) = get(app.clone(), uri).await;
        for _ in 0..5 {
            let (_, _, again) = get(app.clone(), uri).await;
            assert_eq!(first, again, "payload of {} changed between calls", uri);
        }
    }
}

#[tokio::test]
async fn readiness_returns_ok() {
    let (status, _, body) = get(build_router(), "/ready").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
}

#[tokio::test]
async fn unknown_route_returns_not_found_error() {
    let (status, _, body) = get(build_router(), "/does-not-exist").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("/does-not-exist"));
}

#[tokio::test]
async fn responses_carry_request_id_and_security_headers() {
    let response = build_router()
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("x-request-id", "probe-1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers()["x-request-id"], "probe-1");
    assert_eq!(response.headers()["x-content-type-options"], "nosniff");
}

#[tokio::test]
async fn openapi_document_is_served() {
    let (status, _, body) = get(build_router(), "/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    let doc: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(doc["info"]["title"], "RAG Project");
    assert!(doc["paths"]["/health"]["get"].is_object());
}
