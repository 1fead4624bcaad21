use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::api::client::ApiRequest;

/// Passcode check that grants access to a document's metadata.
#[derive(Debug, Clone, Serialize, Deserialize, clap::Args)]
pub struct AccessRequest {
    /// Document ID from the share link (sent as a path segment, not in the body)
    #[serde(skip)]
    #[arg(long)]
    pub doc_id: String,

    /// Passcode protecting the document
    #[arg(long, default_value = "")]
    pub passcode: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessResponse {
    pub message: String,
    pub filename: String,
    pub mime_type: Option<String>,
    pub file_size: u64,
}

impl ApiRequest for AccessRequest {
    type Response = AccessResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url
            .join(&format!("/api/access/{}", self.doc_id))
            .unwrap();
        client.post(full_url).json(&self)
    }

    fn rejection_default(&self) -> Option<&'static str> {
        Some("Access denied")
    }
}
