use std::path::PathBuf;

use clap::Args;

use crate::state::{AppConfig, AppState};

#[derive(Args, Debug, Clone)]
pub struct Init {
    /// Backend URL to record in config.toml
    #[arg(long, default_value = "http://localhost:8000")]
    pub api_url: String,

    /// Default directory downloads are saved into
    #[arg(long)]
    pub download_dir: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("init failed: {0}")]
    StateFailed(#[from] crate::state::StateError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Init {
    type Error = InitError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let config = AppConfig {
            api_url: self.api_url.clone(),
            download_dir: self.download_dir.clone(),
        };

        let state = AppState::init(ctx.config_path.clone(), Some(config))?;

        let download_dir_str = match &state.config.download_dir {
            Some(dir) => dir.display().to_string(),
            None => "current directory".to_string(),
        };

        let output = format!(
            "Initialized docdrop directory at: {}\n\
             - Config: {}\n\
             - API URL: {}\n\
             - Downloads: {}",
            state.app_dir.display(),
            state.config_path.display(),
            state.config.api_url,
            download_dir_str,
        );

        Ok(output)
    }
}
