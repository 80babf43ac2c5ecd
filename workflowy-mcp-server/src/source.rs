use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use workflowy_client::WorkflowyClient;
use workflowy_export::ExportFetcher;
use workflowy_protocol::Node;

/// Feeds the export cache from the live API.
pub struct ExportSource {
    client: WorkflowyClient,
}

impl ExportSource {
    pub fn new(client: WorkflowyClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ExportFetcher for ExportSource {
    // The cache races this future against the token, so dropping it is
    // enough to abandon the request.
    async fn fetch_all(&self, _cancel: &CancellationToken) -> anyhow::Result<Vec<Node>> {
        self.client.export_nodes().await
    }
}
