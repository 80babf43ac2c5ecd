use std::collections::HashMap;
use workflowy_protocol::Node;

/// Identifier lookup over one snapshot, used to resolve parent references.
///
/// Built per search call and borrowed from the snapshot it indexes, so it
/// can never outlive or mix generations. When an id occurs more than once,
/// the last occurrence in snapshot order wins.
#[derive(Debug)]
pub struct NodeIndex<'a> {
    by_id: HashMap<&'a str, &'a Node>,
}

impl<'a> NodeIndex<'a> {
    pub fn build(nodes: &'a [Node]) -> Self {
        let mut by_id = HashMap::with_capacity(nodes.len());
        for node in nodes {
            by_id.insert(node.id.as_str(), node);
        }
        Self { by_id }
    }

    pub fn get(&self, id: &str) -> Option<&'a Node> {
        self.by_id.get(id).copied()
    }

    /// The node's parent, if it has one and it is present in the snapshot.
    pub fn parent_of(&self, node: &Node) -> Option<&'a Node> {
        node.parent().and_then(|id| self.get(id))
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
