//! Plumbing shared by the MCP server binaries: tracing setup, HTTP response
//! handling for the remote APIs, and rendering of tool results.

pub mod format;
pub mod http;
pub mod logging;

pub use http::ApiError;
