use clap::Parser;
use std::time::Duration;
use url::Url;
use workflowy_client::ClientOptions;
use workflowy_client::DEFAULT_BASE_URL;
use workflowy_export::CompletionScope;
use workflowy_export::SearchPolicy;
use workflowy_export::UnfilteredCompletion;

/// MCP server exposing a Workflowy outline over stdio.
#[derive(Debug, Parser)]
#[command(name = "workflowy-mcp", version)]
pub struct Cli {
    /// Workflowy API token
    #[arg(long, env = "WORKFLOWY_API_TOKEN", hide_env_values = true)]
    pub api_token: String,

    /// Base URL of the Workflowy API
    #[arg(long, env = "WORKFLOWY_API_URL", default_value = DEFAULT_BASE_URL)]
    pub api_url: Url,

    /// How long a full export is reused before refetching (at least 60)
    #[arg(long, env = "WORKFLOWY_EXPORT_TTL_SECS", default_value_t = 60)]
    pub export_ttl_secs: u64,

    /// Per-request HTTP timeout
    #[arg(long, env = "WORKFLOWY_HTTP_TIMEOUT_SECS", default_value_t = 30)]
    pub http_timeout_secs: u64,

    /// Completion used by the search filter: `inherited` or `node`
    #[arg(long, env = "WORKFLOWY_COMPLETION_SCOPE", default_value_t = CompletionScope::Inherited)]
    pub completion_scope: CompletionScope,

    /// Search results when no completion filter is given: `any` or `uncompleted`
    #[arg(long, env = "WORKFLOWY_UNFILTERED_COMPLETION", default_value_t = UnfilteredCompletion::Any)]
    pub unfiltered_completion: UnfilteredCompletion,
}

impl Cli {
    pub fn client_options(&self) -> ClientOptions {
        ClientOptions::new(self.api_token.clone())
            .with_base_url(self.api_url.as_str())
            .with_timeout(Duration::from_secs(self.http_timeout_secs))
    }

    pub fn export_ttl(&self) -> Duration {
        Duration::from_secs(self.export_ttl_secs)
    }

    pub fn search_policy(&self) -> SearchPolicy {
        SearchPolicy {
            completion_scope: self.completion_scope,
            unfiltered: self.unfiltered_completion,
        }
    }
}
