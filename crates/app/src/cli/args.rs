pub use clap::Parser;

use std::path::PathBuf;
use url::Url;

#[derive(Parser, Debug)]
#[command(name = "docdrop")]
#[command(about = "Share passcode-protected documents from the command line")]
pub struct Args {
    /// Backend URL (defaults to the configured api_url, then http://localhost:8000)
    #[arg(long, global = true)]
    pub remote: Option<Url>,

    /// Path to the docdrop config directory (defaults to ~/.docdrop)
    #[arg(long, global = true)]
    pub config_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: crate::Command,
}
