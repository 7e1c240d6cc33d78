use std::fmt;

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::group::GroupId;

/// Identifier of a task type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeId(pub u64);

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The partition a task type lives in. `None` is the ungrouped partition.
pub type Container = Option<GroupId>;

/// A task type: the sortable item inside a group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskType {
    pub id: TypeId,
    pub name: String,
    pub color: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Owning group, or `None` when ungrouped
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Container,
    /// Zero-based position within its container
    pub order: usize,
}

/// Human-readable label for a container (`group 3` / `ungrouped`)
pub fn container_label(container: Container) -> String {
    match container {
        Some(id) => format!("group {}", id),
        None => "ungrouped".to_string(),
    }
}
