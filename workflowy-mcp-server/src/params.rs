use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct SearchNodesParams {
    #[serde(default)]
    #[schemars(
        description = "Search query to match in node names and notes (case-insensitive substring match)"
    )]
    pub query: String,

    #[serde(default)]
    #[schemars(
        description = "Filter by completion status: true for completed only, false for uncompleted only. A node under a completed ancestor counts as completed."
    )]
    pub completed: Option<bool>,

    #[serde(default)]
    #[schemars(description = "Maximum number of results to return (default: 50, max: 200)")]
    pub limit: Option<f64>,
}

impl SearchNodesParams {
    /// The limit as a whole number; fractions truncate and anything at or
    /// below zero is left to the default.
    pub fn whole_limit(&self) -> Option<i64> {
        self.limit
            .map(|limit| limit as i64)
            .filter(|limit| *limit > 0)
    }
}

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct NodeIdParams {
    #[serde(default)]
    #[schemars(description = "The UUID of the node")]
    pub node_id: String,
}

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct ListChildrenParams {
    #[serde(default)]
    #[schemars(
        description = "Parent node UUID, target key ('home', 'inbox'), or omit for top-level nodes"
    )]
    pub parent_id: Option<String>,
}

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct CreateNodeParams {
    #[serde(default)]
    #[schemars(description = "Text content of the node (supports markdown formatting)")]
    pub name: String,

    #[serde(default)]
    #[schemars(description = "Parent node UUID or target key ('home', 'inbox'). Omit for top-level.")]
    pub parent_id: Option<String>,

    #[serde(default)]
    #[schemars(description = "Additional note content below the main text")]
    pub note: Option<String>,

    #[serde(default)]
    #[schemars(
        description = "Display mode: 'bullets' (default), 'todo', 'h1', 'h2', 'h3', 'code-block', 'quote-block'"
    )]
    pub layout_mode: Option<String>,

    #[serde(default)]
    #[schemars(description = "Position among siblings: 'top' (default) or 'bottom'")]
    pub position: Option<String>,
}

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct UpdateNodeParams {
    #[serde(default)]
    #[schemars(description = "The UUID of the node to update")]
    pub node_id: String,

    #[serde(default)]
    #[schemars(description = "New text content for the node")]
    pub name: Option<String>,

    #[serde(default)]
    #[schemars(description = "New note content")]
    pub note: Option<String>,

    #[serde(default)]
    #[schemars(
        description = "New display mode: 'bullets', 'todo', 'h1', 'h2', 'h3', 'code-block', 'quote-block'"
    )]
    pub layout_mode: Option<String>,
}

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct MoveNodeParams {
    #[serde(default)]
    #[schemars(description = "The UUID of the node to move")]
    pub node_id: String,

    #[serde(default)]
    #[schemars(description = "Destination parent UUID or target key")]
    pub parent_id: Option<String>,

    #[serde(default)]
    #[schemars(description = "Position at destination: 'top' or 'bottom'")]
    pub position: Option<String>,
}
