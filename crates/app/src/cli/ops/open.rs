use clap::Args;
use url::Url;

use client::api::client::ApiError;
use client::api::document::access::AccessRequest;
use client::routes::{Navigator, RouteError, RouteTable, View};

/// Resolve a share link through the route table and run the view it
/// lands on.
#[derive(Args, Debug, Clone)]
pub struct Open {
    /// Share link: a path like /view/<doc_id>, or a full URL
    #[arg(long)]
    pub link: String,

    /// Passcode for the document behind the link
    #[arg(long, default_value = "")]
    pub passcode: String,
}

#[derive(Debug, thiserror::Error)]
pub enum OpenError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),
    #[error(transparent)]
    Route(#[from] RouteError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Open {
    type Error = OpenError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let path = link_path(&self.link);

        let mut nav = Navigator::new(RouteTable::default());
        let matched = nav.navigate(&path)?;

        match matched.view {
            View::Upload => Ok(
                "Upload view: post a document with `docdrop doc upload --file <path>`".to_string(),
            ),
            View::Access => {
                let doc_id = matched.param("id").unwrap_or_default().to_string();

                let mut client = ctx.client.clone();
                let response = client
                    .call(AccessRequest {
                        doc_id: doc_id.clone(),
                        passcode: self.passcode.clone(),
                    })
                    .await?;

                Ok(format!(
                    "Access view for document {}\n{}\nFile: {} ({} bytes)",
                    doc_id, response.message, response.filename, response.file_size
                ))
            }
        }
    }
}

/// Full URLs contribute only their path; bare paths pass through.
fn link_path(link: &str) -> String {
    match Url::parse(link) {
        Ok(url) => url.path().to_string(),
        Err(_) => link.to_string(),
    }
}
