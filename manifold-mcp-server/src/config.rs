use clap::Parser;
use manifold_client::ClientOptions;
use manifold_client::DEFAULT_BASE_URL;
use std::time::Duration;
use url::Url;

/// MCP server exposing Manifold Markets over stdio.
#[derive(Debug, Parser)]
#[command(name = "manifold-mcp", version)]
pub struct Cli {
    /// Manifold API key
    #[arg(long, env = "MANIFOLD_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Base URL of the Manifold API
    #[arg(long, env = "MANIFOLD_API_URL", default_value = DEFAULT_BASE_URL)]
    pub api_url: Url,

    /// Per-request HTTP timeout
    #[arg(long, env = "MANIFOLD_HTTP_TIMEOUT_SECS", default_value_t = 30)]
    pub http_timeout_secs: u64,
}

impl Cli {
    pub fn client_options(&self) -> ClientOptions {
        ClientOptions::new(self.api_key.clone())
            .with_base_url(self.api_url.as_str())
            .with_timeout(Duration::from_secs(self.http_timeout_secs))
    }
}
