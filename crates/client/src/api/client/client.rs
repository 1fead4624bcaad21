use bytes::Bytes;
use reqwest::header;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use url::Url;

use super::error::{self, ApiError};
use super::ApiRequest;

#[derive(Debug, Clone)]
pub struct ApiClient {
    pub remote: Url,
    client: Client,
}

/// Body of an endpoint that answers with raw bytes instead of JSON.
#[derive(Debug, Clone)]
pub struct RawBody {
    pub bytes: Bytes,
    pub content_type: Option<String>,
    /// Filename suggested by the server via `Content-Disposition`
    pub filename: Option<String>,
}

impl ApiClient {
    pub fn new(remote: &Url) -> Result<Self, ApiError> {
        let client = Client::builder().build()?;

        Ok(Self {
            remote: remote.clone(),
            client,
        })
    }

    /// Send a request and decode its JSON success body.
    pub async fn call<T: ApiRequest>(&mut self, request: T) -> Result<T::Response, ApiError>
    where
        T::Response: DeserializeOwned,
    {
        let response = self.dispatch(request).await?;
        response
            .json::<T::Response>()
            .await
            .map_err(ApiError::Decode)
    }

    /// Send a request whose success body is raw bytes. Rejections still
    /// carry the usual JSON error shape and classify like everything else.
    pub async fn fetch<T>(&mut self, request: T) -> Result<RawBody, ApiError>
    where
        T: ApiRequest<Response = RawBody>,
    {
        let response = self.dispatch(request).await?;

        let content_type = header_str(&response, header::CONTENT_TYPE);
        let filename = header_str(&response, header::CONTENT_DISPOSITION)
            .as_deref()
            .and_then(disposition_filename);
        let bytes = response.bytes().await?;

        Ok(RawBody {
            bytes,
            content_type,
            filename,
        })
    }

    /// Shared transport + status handling for every operation.
    async fn dispatch<T: ApiRequest>(&mut self, request: T) -> Result<Response, ApiError> {
        let fallback = request.rejection_default();
        let request_builder = request.build_request(&self.remote, &self.client);
        let response = request_builder
            .send()
            .await
            .map_err(ApiError::from_transport)?;

        if response.status().is_success() {
            Ok(response)
        } else {
            tracing::debug!(status = %response.status(), "request rejected by server");
            Err(error::rejection(response, fallback).await)
        }
    }

    /// Get the base URL for API requests
    pub fn base_url(&self) -> &Url {
        &self.remote
    }

    /// Get the underlying HTTP client for custom requests
    pub fn http_client(&self) -> &Client {
        &self.client
    }
}

fn header_str(response: &Response, name: header::HeaderName) -> Option<String> {
    response
        .headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

/// Pull the filename out of `attachment; filename="..."`.
fn disposition_filename(header: &str) -> Option<String> {
    let (_, value) = header.split_once("filename=")?;
    let name = value.trim().trim_end_matches(';').trim_matches('"');
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}
