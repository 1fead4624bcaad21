use reqwest::{Response, StatusCode};
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never reached the server (refused, DNS, offline).
    #[error("Cannot connect to server. Please check if the backend is running.")]
    Connectivity(#[source] reqwest::Error),
    /// Non-success status; message extracted from the rejection body.
    #[error("{message}")]
    Server { status: StatusCode, message: String },
    /// Success status with a body that did not decode as expected.
    #[error("invalid response body: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl ApiError {
    /// Split transport failures into connectivity vs everything else.
    pub(super) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_connect() {
            ApiError::Connectivity(err)
        } else {
            ApiError::Transport(err)
        }
    }

    pub fn is_connectivity(&self) -> bool {
        matches!(self, ApiError::Connectivity(_))
    }
}

/// Error shape the backend uses for rejections.
#[derive(Debug, Deserialize)]
struct RejectionBody {
    detail: Option<String>,
    message: Option<String>,
}

/// Turn a non-success response into a `Server` error. Applied to every
/// operation: decode the body if possible, fall back to the operation
/// default, then to a status-based message.
pub(super) async fn rejection(response: Response, fallback: Option<&'static str>) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    ApiError::Server {
        status,
        message: rejection_message(status, &body, fallback),
    }
}

fn rejection_message(status: StatusCode, body: &str, fallback: Option<&'static str>) -> String {
    match serde_json::from_str::<RejectionBody>(body) {
        Ok(parsed) => parsed
            .detail
            .or(parsed.message)
            .or_else(|| fallback.map(str::to_string))
            .unwrap_or_else(|| status_message(status)),
        Err(_) => status_message(status),
    }
}

fn status_message(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("Server error: {} {}", status.as_u16(), reason),
        None => format!("Server error: {}", status.as_u16()),
    }
}
