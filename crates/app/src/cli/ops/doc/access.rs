use client::api::client::ApiError;
use client::api::document::access::{AccessRequest, AccessResponse};

#[derive(Debug, thiserror::Error)]
pub enum DocAccessError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for AccessRequest {
    type Error = DocAccessError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let mut client = ctx.client.clone();
        let response: AccessResponse = client.call(self.clone()).await?;

        Ok(format!(
            "{}\nFile: {} ({} bytes, {})",
            response.message,
            response.filename,
            response.file_size,
            response
                .mime_type
                .as_deref()
                .unwrap_or("application/octet-stream"),
        ))
    }
}
