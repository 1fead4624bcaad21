use clap::{Args, Subcommand};

pub mod access;
pub mod delete;
pub mod download;
pub mod upload;

use crate::cli::op::Op;
use client::api::document::access::AccessRequest;
use client::api::document::delete::DeleteRequest;

crate::command_enum! {
    (Upload, upload::Upload),
    (Access, AccessRequest),
    (Download, download::Download),
    (Delete, DeleteRequest),
}

// Rename the generated Command to DocCommand for clarity
pub type DocCommand = Command;

#[derive(Args, Debug, Clone)]
pub struct Doc {
    #[command(subcommand)]
    pub command: DocCommand,
}

#[async_trait::async_trait]
impl Op for Doc {
    type Error = OpError;
    type Output = OpOutput;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        self.command.execute(ctx).await
    }
}
