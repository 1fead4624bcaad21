use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::api::client::ApiRequest;

#[derive(Debug, Clone, Serialize, Deserialize, clap::Args)]
pub struct HealthRequest;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// Storage backend the server reports, e.g. "Local" or "S3"
    pub storage: String,
}

impl ApiRequest for HealthRequest {
    type Response = HealthResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url.join("/api/health").unwrap();
        client.get(full_url)
    }
}
