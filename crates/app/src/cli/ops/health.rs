use clap::Args;

use client::api::health::HealthRequest;

use crate::state::AppState;

#[derive(Args, Debug, Clone)]
pub struct Health;

#[derive(Debug, thiserror::Error)]
pub enum HealthError {
    #[error("Health check failed: {0}")]
    Failed(String),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Health {
    type Error = HealthError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let mut lines = Vec::new();

        // 1. Check config directory
        lines.push("Config:".to_string());
        match AppState::load(ctx.config_path.clone()) {
            Ok(state) => {
                lines.push(format!("  directory:   {}", state.app_dir.display()));
                lines.push("  config.toml: OK".to_string());
                lines.push(format!("  api_url:     {}", state.config.api_url));
                match &state.config.download_dir {
                    Some(dir) => lines.push(format!("  downloads:   {}", dir.display())),
                    None => lines.push("  downloads:   current directory".to_string()),
                }
            }
            Err(e) => {
                lines.push(format!("  error: {}", e));
            }
        }

        // 2. Check backend reachability
        let base = ctx.client.base_url().clone();

        lines.push(String::new());
        lines.push(format!("Backend ({}):", base));

        let mut client = ctx.client.clone();
        match client.call(HealthRequest).await {
            Ok(health) => {
                lines.push(format!("  status:  {}", health.status));
                lines.push(format!("  storage: {}", health.storage));
            }
            Err(err) if err.is_connectivity() => {
                lines.push("  status:  NOT REACHABLE".to_string());
            }
            Err(err) => {
                lines.push(format!("  status:  UNHEALTHY ({})", err));
            }
        }

        Ok(lines.join("\n"))
    }
}
