use crate::commands::Commands;

use clap::Parser;
use ospo_config::ApiTransport;

#[derive(Parser)]
#[command(name = "ospo")]
#[command(about = "Open Source Program Office request portal")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Request service URL (overrides OSPO_API_URL and config.toml)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Corporate ID to act as (defaults to the configured user)
    #[arg(long, global = true)]
    pub user_id: Option<String>,

    /// Wire protocol: http or grpc-web
    #[arg(long, global = true)]
    pub transport: Option<ApiTransport>,

    /// Use the built-in demo backend instead of a server
    #[arg(long, global = true)]
    pub demo: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
