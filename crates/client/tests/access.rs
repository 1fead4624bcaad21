//! Access contract: JSON body shape, grant payload, rejection defaults.

mod common;

use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

use client::api::client::{ApiClient, ApiError};
use client::api::document::access::AccessRequest;

fn backend() -> Router {
    Router::new().route("/api/access/:doc_id", post(access_handler))
}

async fn access_handler(Path(doc_id): Path<String>, Json(body): Json<Value>) -> Response {
    // The request body must be exactly `{"passcode": ...}`
    let fields = body.as_object().map(|object| object.len()).unwrap_or(0);
    if fields != 1 {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"detail": "unexpected body"})),
        )
            .into_response();
    }
    let passcode = body.get("passcode").and_then(Value::as_str).unwrap_or("");

    match (doc_id.as_str(), passcode) {
        ("doc-1", "hunter2") => Json(json!({
            "message": "Access granted",
            "filename": "notes.txt",
            "mime_type": "text/plain",
            "file_size": 10
        }))
        .into_response(),
        ("bare", _) => (StatusCode::FORBIDDEN, Json(json!({}))).into_response(),
        ("doc-1", _) => (
            StatusCode::FORBIDDEN,
            Json(json!({"detail": "Invalid passcode"})),
        )
            .into_response(),
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({"detail": "Document not found"})),
        )
            .into_response(),
    }
}

fn request(doc_id: &str, passcode: &str) -> AccessRequest {
    AccessRequest {
        doc_id: doc_id.to_string(),
        passcode: passcode.to_string(),
    }
}

#[tokio::test]
async fn test_access_success_decodes_grant() {
    let remote = common::spawn_backend(backend()).await;
    let mut client = ApiClient::new(&remote).unwrap();

    let response = client.call(request("doc-1", "hunter2")).await.unwrap();
    assert_eq!(response.message, "Access granted");
    assert_eq!(response.filename, "notes.txt");
    assert_eq!(response.mime_type.as_deref(), Some("text/plain"));
    assert_eq!(response.file_size, 10);
}

#[tokio::test]
async fn test_access_rejection_detail_field() {
    let remote = common::spawn_backend(backend()).await;
    let mut client = ApiClient::new(&remote).unwrap();

    let err = client.call(request("doc-1", "wrong")).await.unwrap_err();
    match err {
        ApiError::Server { status, message } => {
            assert_eq!(status, StatusCode::FORBIDDEN);
            assert_eq!(message, "Invalid passcode");
        }
        other => panic!("expected server rejection, got {:?}", other),
    }
}

#[tokio::test]
async fn test_access_rejection_without_detail_defaults() {
    let remote = common::spawn_backend(backend()).await;
    let mut client = ApiClient::new(&remote).unwrap();

    let err = client.call(request("bare", "whatever")).await.unwrap_err();
    assert_eq!(err.to_string(), "Access denied");
}

#[tokio::test]
async fn test_access_unknown_document() {
    let remote = common::spawn_backend(backend()).await;
    let mut client = ApiClient::new(&remote).unwrap();

    let err = client.call(request("missing", "p")).await.unwrap_err();
    assert_eq!(err.to_string(), "Document not found");
}
