use clap::Parser;
use mcp_servers_common::logging::init_tracing;
use workflowy_mcp_server::Cli;
use workflowy_mcp_server::WorkflowyMcp;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; the flags and real environment still apply.
    let _ = dotenvy::dotenv();
    init_tracing();
    let cli = Cli::parse();
    WorkflowyMcp::from_config(&cli)?.serve_stdio().await
}
