use clap::Parser;
use manifold_mcp_server::Cli;
use manifold_mcp_server::ManifoldMcp;
use mcp_servers_common::logging::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    init_tracing();
    let cli = Cli::parse();
    ManifoldMcp::from_config(&cli)?.serve_stdio().await
}
