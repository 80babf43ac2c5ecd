use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ExportError {
    /// The fetcher failed. Its error is shared so that every caller
    /// coalesced onto the same refresh receives it unchanged.
    #[error("{0:#}")]
    Fetch(Arc<anyhow::Error>),

    #[error("node export was cancelled")]
    Cancelled,

    #[error("query is required")]
    EmptyQuery,
}

impl ExportError {
    pub fn fetch(err: anyhow::Error) -> Self {
        ExportError::Fetch(Arc::new(err))
    }
}

pub type Result<T> = std::result::Result<T, ExportError>;
