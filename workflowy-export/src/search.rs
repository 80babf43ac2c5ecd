use crate::ancestry::CompletionResolver;
use crate::ancestry::resolve_path;
use crate::cache::ExportCache;
use crate::error::ExportError;
use crate::error::Result;
use crate::index::NodeIndex;
use serde::Deserialize;
use serde::Serialize;
use std::sync::Arc;
use strum_macros::Display;
use strum_macros::EnumString;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use workflowy_protocol::Node;

pub const DEFAULT_SEARCH_LIMIT: usize = 50;
pub const MAX_SEARCH_LIMIT: usize = 200;

/// Absent and non-positive limits fall back to the default; anything above
/// the cap is cut down to it.
pub fn clamp_limit(limit: Option<i64>) -> usize {
    match limit {
        Some(n) if n > 0 => usize::try_from(n)
            .unwrap_or(MAX_SEARCH_LIMIT)
            .min(MAX_SEARCH_LIMIT),
        _ => DEFAULT_SEARCH_LIMIT,
    }
}

/// Which completion state a search filter compares against.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CompletionScope {
    /// A node counts as completed when it or any ancestor is.
    #[default]
    Inherited,
    /// Only the node's own flags count.
    #[strum(serialize = "node")]
    #[serde(rename = "node")]
    NodeOnly,
}

/// What a search without a `completed` filter returns.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UnfilteredCompletion {
    #[default]
    Any,
    Uncompleted,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchPolicy {
    pub completion_scope: CompletionScope,
    pub unfiltered: UnfilteredCompletion,
}

impl SearchPolicy {
    fn wanted_completion(&self, requested: Option<bool>) -> Option<bool> {
        match (requested, self.unfiltered) {
            (Some(wanted), _) => Some(wanted),
            (None, UnfilteredCompletion::Any) => None,
            (None, UnfilteredCompletion::Uncompleted) => Some(false),
        }
    }
}

/// A validated search request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
    completed: Option<bool>,
    limit: usize,
}

impl SearchQuery {
    /// Rejects blank text. The text is matched as given, case-insensitively.
    pub fn new(text: &str, completed: Option<bool>, limit: Option<i64>) -> Result<Self> {
        if text.trim().is_empty() {
            return Err(ExportError::EmptyQuery);
        }
        Ok(Self {
            needle: text.to_lowercase(),
            completed,
            limit: clamp_limit(limit),
        })
    }

    pub fn completed(&self) -> Option<bool> {
        self.completed
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    fn matches_text(&self, node: &Node) -> bool {
        node.name.to_lowercase().contains(&self.needle)
            || node
                .note
                .as_deref()
                .is_some_and(|note| note.to_lowercase().contains(&self.needle))
    }
}

/// A matching node together with its root-first ancestor names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(flatten)]
    pub node: Node,
    pub path: Vec<String>,
}

/// Scans `nodes` in order and returns at most `query.limit()` matches.
pub fn search_nodes(nodes: &[Node], query: &SearchQuery, policy: SearchPolicy) -> Vec<SearchResult> {
    let index = NodeIndex::build(nodes);
    let wanted = policy.wanted_completion(query.completed());
    let mut resolver = match (wanted, policy.completion_scope) {
        (Some(_), CompletionScope::Inherited) => Some(CompletionResolver::new(&index)),
        _ => None,
    };

    let mut results = Vec::new();
    for node in nodes {
        if results.len() >= query.limit() {
            break;
        }
        if !query.matches_text(node) {
            continue;
        }
        if let Some(wanted) = wanted {
            let done = match resolver.as_mut() {
                Some(resolver) => resolver.is_completed(node),
                None => node.is_completed(),
            };
            if done != wanted {
                continue;
            }
        }
        results.push(SearchResult {
            node: node.clone(),
            path: resolve_path(node, &index),
        });
    }
    results
}

/// Search over the cached export.
pub struct ExportSearch {
    cache: Arc<ExportCache>,
    policy: SearchPolicy,
}

impl ExportSearch {
    pub fn new(cache: Arc<ExportCache>, policy: SearchPolicy) -> Self {
        Self { cache, policy }
    }

    pub fn cache(&self) -> &Arc<ExportCache> {
        &self.cache
    }

    pub fn policy(&self) -> SearchPolicy {
        self.policy
    }

    pub async fn search(
        &self,
        query: &SearchQuery,
        cancel: &CancellationToken,
    ) -> Result<Vec<SearchResult>> {
        let snapshot = self.cache.snapshot(cancel).await?;
        let results = search_nodes(snapshot.nodes(), query, self.policy);
        debug!(
            scanned = snapshot.len(),
            matched = results.len(),
            limit = query.limit(),
            "searched node export"
        );
        Ok(results)
    }
}
