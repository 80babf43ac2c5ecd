//! Wire types for the Workflowy REST API.
//!
//! Field names follow the API's JSON exactly (a mix of `snake_case` and
//! `camelCase`), so every rename is spelled out.

use serde::Deserialize;
use serde::Serialize;

/// A single bullet in the outline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default, rename = "parent_id", skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub priority: i64,
    #[serde(default)]
    pub data: NodeData,
    #[serde(default, rename = "createdAt")]
    pub created_at: i64,
    #[serde(default, rename = "modifiedAt")]
    pub modified_at: i64,
    #[serde(default, rename = "completedAt")]
    pub completed_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl Node {
    /// The parent reference, with an empty string treated as "no parent".
    pub fn parent(&self) -> Option<&str> {
        self.parent_id.as_deref().filter(|id| !id.is_empty())
    }

    /// Completion of this node alone, ignoring ancestors.
    ///
    /// An explicit `completed` flag wins; otherwise a non-zero `completedAt`
    /// marks the node completed.
    pub fn is_completed(&self) -> bool {
        match self.completed {
            Some(flag) => flag,
            None => self.completed_at.is_some_and(|at| at != 0),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeData {
    #[serde(default, rename = "layoutMode", skip_serializing_if = "Option::is_none")]
    pub layout_mode: Option<String>,
}

/// A system location (`home`, `inbox`) or a user shortcut.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    pub key: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateNodeRequest {
    #[serde(rename = "parent_id")]
    pub parent_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub note: String,
    #[serde(default, rename = "layoutMode", skip_serializing_if = "String::is_empty")]
    pub layout_mode: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub position: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateNodeRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, rename = "layoutMode", skip_serializing_if = "Option::is_none")]
    pub layout_mode: Option<String>,
}

impl UpdateNodeRequest {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.note.is_none() && self.layout_mode.is_none()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveNodeRequest {
    #[serde(default, rename = "parent_id", skip_serializing_if = "String::is_empty")]
    pub parent_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub position: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateNodeResponse {
    #[serde(rename = "item_id")]
    pub item_id: String,
}

/// Body returned by update/delete/move/complete calls.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub status: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NodeEnvelope {
    pub node: Node,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NodesEnvelope {
    #[serde(default)]
    pub nodes: Vec<Node>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TargetsEnvelope {
    #[serde(default)]
    pub targets: Vec<Target>,
}
