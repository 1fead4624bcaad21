//! Delete contract: passcode-gated removal.

mod common;

use std::collections::HashMap;

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::delete;
use axum::{Json, Router};
use serde_json::json;

use client::api::client::ApiClient;
use client::api::document::delete::DeleteRequest;

fn backend() -> Router {
    Router::new().route("/api/documents/:doc_id", delete(delete_handler))
}

async fn delete_handler(
    Path(doc_id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let passcode = params.get("passcode").map(String::as_str).unwrap_or("");

    match (doc_id.as_str(), passcode) {
        ("doc-1", "hunter2") => {
            Json(json!({"message": "Document deleted successfully"})).into_response()
        }
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

#[tokio::test]
async fn test_delete_success() {
    let remote = common::spawn_backend(backend()).await;
    let mut client = ApiClient::new(&remote).unwrap();

    let response = client
        .call(DeleteRequest {
            doc_id: "doc-1".to_string(),
            passcode: "hunter2".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(response.message, "Document deleted successfully");
}

#[tokio::test]
async fn test_delete_rejection() {
    let remote = common::spawn_backend(backend()).await;
    let mut client = ApiClient::new(&remote).unwrap();

    let err = client
        .call(DeleteRequest {
            doc_id: "doc-1".to_string(),
            passcode: "wrong".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid passcode");
}
