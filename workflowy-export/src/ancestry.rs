use crate::index::NodeIndex;
use std::collections::HashMap;
use std::collections::HashSet;
use workflowy_protocol::Node;

/// Walks a node's parent chain from the immediate parent upward.
///
/// The walk ends at a root, at a parent id missing from the index, or at the
/// first parent id already reached in this walk, so it terminates on cyclic
/// data. Only parents are recorded: in `a -> b -> a` the walk from `a` yields
/// `b` and then `a` itself.
pub struct Ancestors<'i, 'a> {
    index: &'i NodeIndex<'a>,
    current: Option<&'a Node>,
    visited: HashSet<&'a str>,
}

impl<'i, 'a> Ancestors<'i, 'a> {
    pub fn new(node: &'a Node, index: &'i NodeIndex<'a>) -> Self {
        Self {
            index,
            current: Some(node),
            visited: HashSet::new(),
        }
    }
}

impl<'a> Iterator for Ancestors<'_, 'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.take()?;
        let parent = self.index.parent_of(current)?;
        if !self.visited.insert(parent.id.as_str()) {
            return None;
        }
        self.current = Some(parent);
        Some(parent)
    }
}

/// Ancestor names from the root down to the node's immediate parent.
pub fn resolve_path<'a>(node: &'a Node, index: &NodeIndex<'a>) -> Vec<String> {
    let mut path: Vec<String> = Ancestors::new(node, index)
        .map(|ancestor| ancestor.name.clone())
        .collect();
    path.reverse();
    path
}

/// Answers "is this node, or any ancestor of it, completed?" over one index.
///
/// Every node on a walked chain is memoised with the chain's answer, so
/// siblings and descendants that share ancestors do not re-walk them.
pub struct CompletionResolver<'i, 'a> {
    index: &'i NodeIndex<'a>,
    memo: HashMap<&'a str, bool>,
}

impl<'i, 'a> CompletionResolver<'i, 'a> {
    pub fn new(index: &'i NodeIndex<'a>) -> Self {
        Self {
            index,
            memo: HashMap::new(),
        }
    }

    pub fn is_completed(&mut self, node: &'a Node) -> bool {
        // A node shadowed by a later duplicate id is not the one the index
        // (and so the memo) speaks for.
        let indexed = self
            .index
            .get(&node.id)
            .is_some_and(|entry| std::ptr::eq(entry, node));
        if indexed && let Some(&done) = self.memo.get(node.id.as_str()) {
            return done;
        }

        let mut chain: Vec<&'a str> = Vec::new();
        if indexed {
            chain.push(node.id.as_str());
        }
        let mut done = node.is_completed();
        if !done {
            for ancestor in Ancestors::new(node, self.index) {
                if let Some(&known) = self.memo.get(ancestor.id.as_str()) {
                    done = known;
                    break;
                }
                chain.push(ancestor.id.as_str());
                if ancestor.is_completed() {
                    done = true;
                    break;
                }
            }
        }

        for id in chain {
            self.memo.insert(id, done);
        }
        done
    }
}
