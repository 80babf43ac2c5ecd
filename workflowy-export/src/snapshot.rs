use std::sync::Arc;
use tokio::time::Instant;
use workflowy_protocol::Node;

/// One export generation: the full node list together with the moment its
/// fetch completed.
///
/// The two travel as a single value so nodes are never paired with another
/// generation's timestamp. Cloning is cheap and the nodes are never mutated
/// after construction.
#[derive(Clone, Debug)]
pub struct ExportSnapshot {
    nodes: Arc<[Node]>,
    fetched_at: Instant,
}

impl ExportSnapshot {
    pub fn new(nodes: Vec<Node>, fetched_at: Instant) -> Self {
        Self {
            nodes: nodes.into(),
            fetched_at,
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn fetched_at(&self) -> Instant {
        self.fetched_at
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// True when both handles point at the same fetched generation.
    pub fn same_generation(&self, other: &ExportSnapshot) -> bool {
        Arc::ptr_eq(&self.nodes, &other.nodes)
    }

    pub(crate) fn is_fresh(&self, ttl: std::time::Duration, now: Instant) -> bool {
        now.saturating_duration_since(self.fetched_at) < ttl
    }
}
