use crate::config::Cli;
use crate::params::CreateNodeParams;
use crate::params::ListChildrenParams;
use crate::params::MoveNodeParams;
use crate::params::NodeIdParams;
use crate::params::SearchNodesParams;
use crate::params::UpdateNodeParams;
use crate::source::ExportSource;
use anyhow::Context;
use mcp_servers_common::format::error_result;
use mcp_servers_common::format::json_result;
use mcp_servers_common::format::list_result;
use mcp_servers_common::format::text_result;
use rmcp::ErrorData as McpError;
use rmcp::RoleServer;
use rmcp::ServerHandler;
use rmcp::ServiceExt;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;
use rmcp::model::Implementation;
use rmcp::model::ServerCapabilities;
use rmcp::model::ServerInfo;
use rmcp::service::RequestContext;
use rmcp::tool;
use rmcp::tool_handler;
use rmcp::tool_router;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use tracing::info;
use workflowy_client::WorkflowyClient;
use workflowy_export::ExportCache;
use workflowy_export::ExportError;
use workflowy_export::ExportSearch;
use workflowy_export::SearchQuery;
use workflowy_protocol::CreateNodeRequest;
use workflowy_protocol::MoveNodeRequest;
use workflowy_protocol::UpdateNodeRequest;

const INSTRUCTIONS: &str = "Workflowy outline access. Use search_nodes to find bullets anywhere \
in the outline (results carry their breadcrumb path), get_node and list_children to browse, \
list_targets for 'home'/'inbox' and shortcuts, and the create/update/move/complete/delete \
tools to edit. Search reads a cached export that refreshes at most once a minute; edits made \
through this server are visible to the next search.";

#[derive(Clone)]
pub struct WorkflowyMcp {
    client: WorkflowyClient,
    search: Arc<ExportSearch>,
    tool_router: ToolRouter<Self>,
}

impl WorkflowyMcp {
    pub fn new(client: WorkflowyClient, search: Arc<ExportSearch>) -> Self {
        Self {
            client,
            search,
            tool_router: Self::tool_router(),
        }
    }

    /// Builds the client, the shared export cache and the search engine
    /// from parsed flags.
    pub fn from_config(cli: &Cli) -> anyhow::Result<Self> {
        let client = WorkflowyClient::new(cli.client_options())?;
        let source = Arc::new(ExportSource::new(client.clone()));
        let cache = Arc::new(ExportCache::new(source, cli.export_ttl()));
        info!(
            api_url = %cli.api_url,
            export_ttl_secs = cache.ttl().as_secs(),
            completion_scope = %cli.completion_scope,
            unfiltered_completion = %cli.unfiltered_completion,
            "configured workflowy server"
        );
        let search = Arc::new(ExportSearch::new(cache, cli.search_policy()));
        Ok(Self::new(client, search))
    }

    pub async fn serve_stdio(self) -> anyhow::Result<()> {
        let service = self
            .serve((tokio::io::stdin(), tokio::io::stdout()))
            .await
            .context("starting MCP session")?;
        let reason = service.waiting().await?;
        info!(?reason, "MCP session ended");
        Ok(())
    }

    /// Validates and runs a search against the cached export.
    pub async fn run_search(
        &self,
        params: SearchNodesParams,
        cancel: &CancellationToken,
    ) -> CallToolResult {
        let limit = params.whole_limit();
        let query = match SearchQuery::new(&params.query, params.completed, limit) {
            Ok(query) => query,
            Err(err) => return error_result(err.to_string()),
        };
        match self.search.search(&query, cancel).await {
            Ok(results) => list_result(&results, "result", "No matching nodes found."),
            Err(ExportError::Cancelled) => error_result("search was cancelled"),
            Err(err) => error_result(format!("failed to fetch nodes: {err}")),
        }
    }

    fn invalidate_export(&self) {
        self.search.cache().invalidate();
    }
}

#[tool_router]
impl WorkflowyMcp {
    #[tool(
        description = "Search all Workflowy nodes by keyword. Matches against node name and note fields. Returns matching nodes with their breadcrumb path for context."
    )]
    pub async fn search_nodes(
        &self,
        Parameters(params): Parameters<SearchNodesParams>,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        debug!(query = %params.query, completed = ?params.completed, limit = ?params.limit, "search_nodes");
        Ok(self.run_search(params, &context.ct).await)
    }

    #[tool(description = "Get full details of a specific Workflowy node by its ID.")]
    pub async fn get_node(
        &self,
        Parameters(params): Parameters<NodeIdParams>,
    ) -> Result<CallToolResult, McpError> {
        if params.node_id.is_empty() {
            return Ok(error_result("node_id is required"));
        }
        Ok(match self.client.get_node(&params.node_id).await {
            Ok(node) => json_result(&node, "node"),
            Err(err) => error_result(format!("failed to get node: {err:#}")),
        })
    }

    #[tool(
        description = "List child nodes of a given parent. Nodes are returned sorted by priority. Use a target key like 'home' or 'inbox' as parent_id, or omit for top-level nodes."
    )]
    pub async fn list_children(
        &self,
        Parameters(params): Parameters<ListChildrenParams>,
    ) -> Result<CallToolResult, McpError> {
        let parent_id = params.parent_id.unwrap_or_default();
        Ok(match self.client.list_children(&parent_id).await {
            Ok(mut nodes) => {
                nodes.sort_by_key(|node| node.priority);
                list_result(&nodes, "node", "No nodes found.")
            }
            Err(err) => error_result(format!("failed to list children: {err:#}")),
        })
    }

    #[tool(description = "Create a new Workflowy node/bullet.")]
    pub async fn create_node(
        &self,
        Parameters(params): Parameters<CreateNodeParams>,
    ) -> Result<CallToolResult, McpError> {
        if params.name.is_empty() {
            return Ok(error_result("name is required"));
        }
        let body = CreateNodeRequest {
            parent_id: params.parent_id.unwrap_or_default(),
            name: params.name,
            note: params.note.unwrap_or_default(),
            layout_mode: params.layout_mode.unwrap_or_default(),
            position: params.position.unwrap_or_default(),
        };
        Ok(match self.client.create_node(&body).await {
            Ok(created) => {
                self.invalidate_export();
                text_result(format!("Created node with ID: {}", created.item_id))
            }
            Err(err) => error_result(format!("failed to create node: {err:#}")),
        })
    }

    #[tool(description = "Update properties of an existing Workflowy node.")]
    pub async fn update_node(
        &self,
        Parameters(params): Parameters<UpdateNodeParams>,
    ) -> Result<CallToolResult, McpError> {
        if params.node_id.is_empty() {
            return Ok(error_result("node_id is required"));
        }
        let body = UpdateNodeRequest {
            name: params.name,
            note: params.note,
            layout_mode: params.layout_mode,
        };
        if body.is_empty() {
            return Ok(error_result(
                "at least one of name, note or layout_mode is required",
            ));
        }
        Ok(match self.client.update_node(&params.node_id, &body).await {
            Ok(()) => {
                self.invalidate_export();
                text_result(format!("Updated node {}", params.node_id))
            }
            Err(err) => error_result(format!("failed to update node: {err:#}")),
        })
    }

    #[tool(description = "Delete a Workflowy node by its ID.")]
    pub async fn delete_node(
        &self,
        Parameters(params): Parameters<NodeIdParams>,
    ) -> Result<CallToolResult, McpError> {
        if params.node_id.is_empty() {
            return Ok(error_result("node_id is required"));
        }
        Ok(match self.client.delete_node(&params.node_id).await {
            Ok(()) => {
                self.invalidate_export();
                text_result(format!("Deleted node {}", params.node_id))
            }
            Err(err) => error_result(format!("failed to delete node: {err:#}")),
        })
    }

    #[tool(description = "Move a Workflowy node to a different parent.")]
    pub async fn move_node(
        &self,
        Parameters(params): Parameters<MoveNodeParams>,
    ) -> Result<CallToolResult, McpError> {
        if params.node_id.is_empty() {
            return Ok(error_result("node_id is required"));
        }
        let body = MoveNodeRequest {
            parent_id: params.parent_id.unwrap_or_default(),
            position: params.position.unwrap_or_default(),
        };
        Ok(match self.client.move_node(&params.node_id, &body).await {
            Ok(()) => {
                self.invalidate_export();
                text_result(format!("Moved node {}", params.node_id))
            }
            Err(err) => error_result(format!("failed to move node: {err:#}")),
        })
    }

    #[tool(description = "Mark a Workflowy node as completed.")]
    pub async fn complete_node(
        &self,
        Parameters(params): Parameters<NodeIdParams>,
    ) -> Result<CallToolResult, McpError> {
        if params.node_id.is_empty() {
            return Ok(error_result("node_id is required"));
        }
        Ok(match self.client.complete_node(&params.node_id).await {
            Ok(()) => {
                self.invalidate_export();
                text_result(format!("Completed node {}", params.node_id))
            }
            Err(err) => error_result(format!("failed to complete node: {err:#}")),
        })
    }

    #[tool(description = "Mark a Workflowy node as not completed (uncomplete it).")]
    pub async fn uncomplete_node(
        &self,
        Parameters(params): Parameters<NodeIdParams>,
    ) -> Result<CallToolResult, McpError> {
        if params.node_id.is_empty() {
            return Ok(error_result("node_id is required"));
        }
        Ok(match self.client.uncomplete_node(&params.node_id).await {
            Ok(()) => {
                self.invalidate_export();
                text_result(format!("Uncompleted node {}", params.node_id))
            }
            Err(err) => error_result(format!("failed to uncomplete node: {err:#}")),
        })
    }

    #[tool(
        description = "List all Workflowy targets (system locations like 'home'/'inbox' and user shortcuts)."
    )]
    pub async fn list_targets(&self) -> Result<CallToolResult, McpError> {
        Ok(match self.client.list_targets().await {
            Ok(targets) => list_result(&targets, "target", "No targets found."),
            Err(err) => error_result(format!("failed to list targets: {err:#}")),
        })
    }
}

#[tool_handler]
impl ServerHandler for WorkflowyMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            ..Default::default()
        }
    }
}
