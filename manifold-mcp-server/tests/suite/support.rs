use clap::Parser;
use manifold_mcp_server::Cli;
use manifold_mcp_server::ManifoldMcp;
use wiremock::MockServer;

pub(crate) fn mcp(server: &MockServer) -> ManifoldMcp {
    let cli = Cli::try_parse_from([
        "manifold-mcp",
        "--api-key",
        "test-key",
        "--api-url",
        &server.uri(),
    ])
    .expect("flags parse");
    ManifoldMcp::from_config(&cli).expect("server builds")
}
