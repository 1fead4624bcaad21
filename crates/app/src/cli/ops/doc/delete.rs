use client::api::client::ApiError;
use client::api::document::delete::{DeleteRequest, DeleteResponse};

#[derive(Debug, thiserror::Error)]
pub enum DocDeleteError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for DeleteRequest {
    type Error = DocDeleteError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let mut client = ctx.client.clone();
        let response: DeleteResponse = client.call(self.clone()).await?;

        Ok(response.message)
    }
}
