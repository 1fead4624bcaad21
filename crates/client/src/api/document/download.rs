use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::api::client::{ApiRequest, RawBody};

/// Fetches the document body. Success responses are raw bytes (use
/// `ApiClient::fetch`); rejections carry the usual JSON error shape.
#[derive(Debug, Clone, Serialize, Deserialize, clap::Args)]
pub struct DownloadRequest {
    /// Document ID from the share link
    #[arg(long)]
    pub doc_id: String,

    /// Passcode protecting the document
    #[arg(long, default_value = "")]
    pub passcode: String,
}

impl ApiRequest for DownloadRequest {
    type Response = RawBody;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url
            .join(&format!("/api/download/{}", self.doc_id))
            .unwrap();
        client
            .get(full_url)
            .query(&[("passcode", self.passcode.as_str())])
    }

    fn rejection_default(&self) -> Option<&'static str> {
        Some("Download failed")
    }
}
