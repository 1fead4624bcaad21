use std::path::PathBuf;

use clap::Args;

use client::api::client::ApiError;
use client::api::document::upload::{UploadRequest, UploadResponse};

#[derive(Args, Debug, Clone)]
pub struct Upload {
    /// File to upload
    #[arg(long)]
    pub file: PathBuf,

    /// Passcode future viewers must present
    #[arg(long, default_value = "")]
    pub passcode: String,
}

#[derive(Debug, thiserror::Error)]
pub enum DocUploadError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Upload {
    type Error = DocUploadError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let mut client = ctx.client.clone();

        let contents = tokio::fs::read(&self.file).await?;
        let file_name = self
            .file
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| client::save::DEFAULT_FILENAME.to_string());

        let request = UploadRequest {
            file_name: file_name.clone(),
            contents,
            passcode: self.passcode.clone(),
        };
        let response: UploadResponse = client.call(request).await?;

        Ok(format!(
            "Uploaded {} (doc id: {})\nShare link: {}",
            file_name, response.doc_id, response.link
        ))
    }
}
