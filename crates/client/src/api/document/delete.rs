use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::api::client::ApiRequest;

/// Removes a document after passcode verification.
#[derive(Debug, Clone, Serialize, Deserialize, clap::Args)]
pub struct DeleteRequest {
    /// Document ID from the share link
    #[arg(long)]
    pub doc_id: String,

    /// Passcode protecting the document
    #[arg(long, default_value = "")]
    pub passcode: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}

impl ApiRequest for DeleteRequest {
    type Response = DeleteResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url
            .join(&format!("/api/documents/{}", self.doc_id))
            .unwrap();
        client
            .delete(full_url)
            .query(&[("passcode", self.passcode.as_str())])
    }

    fn rejection_default(&self) -> Option<&'static str> {
        Some("Delete failed")
    }
}
