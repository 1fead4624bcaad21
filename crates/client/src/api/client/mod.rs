use reqwest::{Client, RequestBuilder};
use url::Url;

mod client;
mod error;

pub use client::{ApiClient, RawBody};
pub use error::ApiError;

/// One implementation per backend endpoint. The client owns the shared
/// success/rejection/connectivity handling; an endpoint only describes how
/// to build its request and what a rejection falls back to.
pub trait ApiRequest {
    type Response;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder;

    /// Message used when a rejection body is valid JSON but carries neither
    /// a `detail` nor a `message` field.
    fn rejection_default(&self) -> Option<&'static str> {
        None
    }
}
