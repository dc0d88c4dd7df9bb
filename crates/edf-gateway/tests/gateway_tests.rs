//! Router-level tests for the gateway, driven with `tower::ServiceExt`
//! against an in-memory app. Stub mode unless a test wires an upstream.

use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use edf_client::SubmissionClient;
use edf_gateway::{create_app, GatewayState};

const BOUNDARY: &str = "edf-gateway-test-boundary";

fn multipart_body(parts: &[(&str, &str, &[u8])]) -> Vec<u8> {
    let mut body = Vec::new();
    for (field, file_name, bytes) in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                field, file_name
            )
            .as_bytes(),
        );
        body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

fn classify_request(body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/classify")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

async fn json_of(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_route() {
    let app = create_app(GatewayState::default());
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_of(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_stub_classification_for_valid_upload() {
    let app = create_app(GatewayState::default());
    let body = multipart_body(&[("file", "scan1.edf", b"edf bytes")]);

    let response = app.oneshot(classify_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_of(response).await;
    assert_eq!(body["classification"], 1);
    assert_eq!(body["confidence"], 0.85);
}

#[tokio::test]
async fn test_missing_file_part_is_rejected() {
    let app = create_app(GatewayState::default());
    // A multipart body whose only part has the wrong field name.
    let body = multipart_body(&[("data", "scan1.edf", b"edf bytes")]);

    let response = app.oneshot(classify_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_of(response).await;
    assert_eq!(body["error"], "No file provided");
}

#[tokio::test]
async fn test_forwarding_failure_is_500() {
    // Port 1 refuses the connection, so forwarding fails immediately.
    let upstream = SubmissionClient::new("http://127.0.0.1:1/classify")
        .with_timeout(Duration::from_millis(200));
    let app = create_app(GatewayState {
        upstream: Some(upstream),
    });
    let body = multipart_body(&[("file", "scan1.edf", b"edf bytes")]);

    let response = app.oneshot(classify_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = json_of(response).await;
    assert_eq!(body["error"], "Classification failed");
}

#[tokio::test]
async fn test_empty_multipart_is_rejected() {
    let app = create_app(GatewayState::default());
    let body = multipart_body(&[]);

    let response = app.oneshot(classify_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unrelated_fields_are_skipped() {
    let app = create_app(GatewayState::default());
    let body = multipart_body(&[
        ("meta", "notes.txt", b"ignore me"),
        ("file", "scan1.edf", b"edf bytes"),
    ]);

    let response = app.oneshot(classify_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
