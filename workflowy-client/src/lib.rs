use anyhow::Context;
use anyhow::Result;
use mcp_servers_common::http::decode_json;
use reqwest::Method;
use reqwest::RequestBuilder;
use reqwest::header::AUTHORIZATION;
use reqwest::header::HeaderMap;
use reqwest::header::HeaderValue;
use std::time::Duration;
use tracing::debug;
use workflowy_protocol::CreateNodeRequest;
use workflowy_protocol::CreateNodeResponse;
use workflowy_protocol::MoveNodeRequest;
use workflowy_protocol::Node;
use workflowy_protocol::NodeEnvelope;
use workflowy_protocol::NodesEnvelope;
use workflowy_protocol::StatusResponse;
use workflowy_protocol::Target;
use workflowy_protocol::TargetsEnvelope;
use workflowy_protocol::UpdateNodeRequest;

pub const DEFAULT_BASE_URL: &str = "https://workflowy.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone, Debug)]
pub struct ClientOptions {
    pub base_url: String,
    pub api_token: String,
    pub timeout: Duration,
}

impl ClientOptions {
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_token: api_token.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// HTTP client for the Workflowy API.
#[derive(Clone, Debug)]
pub struct WorkflowyClient {
    http: reqwest::Client,
    base_url: String,
}

impl WorkflowyClient {
    pub fn new(opts: ClientOptions) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", opts.api_token))
            .context("Workflowy API token is not a valid header value")?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        let http = reqwest::Client::builder()
            .timeout(opts.timeout)
            .default_headers(headers)
            .build()
            .context("building Workflowy HTTP client")?;
        Ok(Self {
            http,
            base_url: opts.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn get_node(&self, node_id: &str) -> Result<Node> {
        let resp = self
            .request(Method::GET, &format!("/api/v1/nodes/{node_id}"))
            .send()
            .await
            .with_context(|| format!("getting node {node_id}"))?;
        let envelope: NodeEnvelope = decode_json(resp)
            .await
            .with_context(|| format!("getting node {node_id}"))?;
        Ok(envelope.node)
    }

    /// Lists the children of `parent_id`, which may be a node id, a target
    /// key (`home`, `inbox`) or empty for the top level.
    pub async fn list_children(&self, parent_id: &str) -> Result<Vec<Node>> {
        let mut req = self.request(Method::GET, "/api/v1/nodes");
        if !parent_id.is_empty() {
            req = req.query(&[("parent_id", parent_id)]);
        }
        let resp = req.send().await.context("listing children")?;
        let envelope: NodesEnvelope = decode_json(resp).await.context("listing children")?;
        Ok(envelope.nodes)
    }

    pub async fn create_node(&self, body: &CreateNodeRequest) -> Result<CreateNodeResponse> {
        let resp = self
            .request(Method::POST, "/api/v1/nodes")
            .json(body)
            .send()
            .await
            .context("creating node")?;
        decode_json(resp).await.context("creating node")
    }

    pub async fn update_node(&self, node_id: &str, body: &UpdateNodeRequest) -> Result<()> {
        let resp = self
            .request(Method::POST, &format!("/api/v1/nodes/{node_id}"))
            .json(body)
            .send()
            .await
            .with_context(|| format!("updating node {node_id}"))?;
        let _: StatusResponse = decode_json(resp)
            .await
            .with_context(|| format!("updating node {node_id}"))?;
        Ok(())
    }

    pub async fn delete_node(&self, node_id: &str) -> Result<()> {
        let resp = self
            .request(Method::DELETE, &format!("/api/v1/nodes/{node_id}"))
            .send()
            .await
            .with_context(|| format!("deleting node {node_id}"))?;
        let _: StatusResponse = decode_json(resp)
            .await
            .with_context(|| format!("deleting node {node_id}"))?;
        Ok(())
    }

    pub async fn move_node(&self, node_id: &str, body: &MoveNodeRequest) -> Result<()> {
        let resp = self
            .request(Method::POST, &format!("/api/v1/nodes/{node_id}/move"))
            .json(body)
            .send()
            .await
            .with_context(|| format!("moving node {node_id}"))?;
        let _: StatusResponse = decode_json(resp)
            .await
            .with_context(|| format!("moving node {node_id}"))?;
        Ok(())
    }

    pub async fn complete_node(&self, node_id: &str) -> Result<()> {
        self.post_status(&format!("/api/v1/nodes/{node_id}/complete"))
            .await
            .with_context(|| format!("completing node {node_id}"))
    }

    pub async fn uncomplete_node(&self, node_id: &str) -> Result<()> {
        self.post_status(&format!("/api/v1/nodes/{node_id}/uncomplete"))
            .await
            .with_context(|| format!("uncompleting node {node_id}"))
    }

    /// Exports every node as one flat list.
    ///
    /// The server allows one export per minute; callers are expected to go
    /// through a cache rather than call this directly.
    pub async fn export_nodes(&self) -> Result<Vec<Node>> {
        let resp = self
            .request(Method::GET, "/api/v1/nodes-export")
            .send()
            .await
            .context("exporting nodes")?;
        let envelope: NodesEnvelope = decode_json(resp).await.context("exporting nodes")?;
        debug!(count = envelope.nodes.len(), "exported workflowy nodes");
        Ok(envelope.nodes)
    }

    pub async fn list_targets(&self) -> Result<Vec<Target>> {
        let resp = self
            .request(Method::GET, "/api/v1/targets")
            .send()
            .await
            .context("listing targets")?;
        let envelope: TargetsEnvelope = decode_json(resp).await.context("listing targets")?;
        Ok(envelope.targets)
    }

    async fn post_status(&self, path: &str) -> Result<()> {
        let resp = self.request(Method::POST, path).send().await?;
        let _: StatusResponse = decode_json(resp).await?;
        Ok(())
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, format!("{}{path}", self.base_url))
    }
}
