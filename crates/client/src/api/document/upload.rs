use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::api::client::ApiRequest;

/// Multipart upload of a single passcode-gated document.
///
/// Carries the file as owned bytes; the CLI layer is responsible for
/// reading it off disk.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    /// Filename the backend records for the document
    pub file_name: String,

    /// Raw file contents
    pub contents: Vec<u8>,

    /// Passcode future viewers must present, forwarded untouched
    pub passcode: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Share path for the document, e.g. `/view/<doc_id>`
    pub link: String,
    pub doc_id: String,
}

impl ApiRequest for UploadRequest {
    type Response = UploadResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url.join("/api/upload").unwrap();

        let mime = mime_guess::from_path(&self.file_name).first_or_octet_stream();
        let part = Part::bytes(self.contents)
            .file_name(self.file_name)
            .mime_str(mime.as_ref())
            .unwrap();
        let form = Form::new()
            .part("file", part)
            .text("passcode", self.passcode);

        client.post(full_url).multipart(form)
    }
}
