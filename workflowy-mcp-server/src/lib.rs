//! MCP tools over the Workflowy API: cached full-outline search plus node
//! reads and edits.

mod config;
mod params;
mod server;
mod source;

pub use config::Cli;
pub use params::CreateNodeParams;
pub use params::ListChildrenParams;
pub use params::MoveNodeParams;
pub use params::NodeIdParams;
pub use params::SearchNodesParams;
pub use params::UpdateNodeParams;
pub use server::WorkflowyMcp;
pub use source::ExportSource;
