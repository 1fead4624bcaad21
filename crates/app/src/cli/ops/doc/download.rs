use std::path::PathBuf;

use clap::Args;

use client::api::client::ApiError;
use client::api::document::download::DownloadRequest;
use client::save::{save_binary_as, SaveError};

use crate::state::AppState;

#[derive(Args, Debug, Clone)]
pub struct Download {
    /// Document ID from the share link
    #[arg(long)]
    pub doc_id: String,

    /// Passcode protecting the document
    #[arg(long, default_value = "")]
    pub passcode: String,

    /// Save under this name instead of the server-suggested one
    #[arg(long)]
    pub filename: Option<String>,

    /// Directory to save into (defaults to the configured download_dir, then the current directory)
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
pub enum DocDownloadError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),
    #[error("Save error: {0}")]
    Save(#[from] SaveError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Download {
    type Error = DocDownloadError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let mut client = ctx.client.clone();

        let request = DownloadRequest {
            doc_id: self.doc_id.clone(),
            passcode: self.passcode.clone(),
        };
        let body = client.fetch(request).await?;

        let dir = self
            .out_dir
            .clone()
            .or_else(|| {
                AppState::load(ctx.config_path.clone())
                    .ok()
                    .and_then(|state| state.config.download_dir)
            })
            .unwrap_or_else(|| PathBuf::from("."));

        let suggested = self.filename.as_deref().or(body.filename.as_deref());
        let saved = save_binary_as(&dir, suggested, &body.bytes)?;

        Ok(format!(
            "Saved {} ({} bytes)",
            saved.path.display(),
            saved.size
        ))
    }
}
