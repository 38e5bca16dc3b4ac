use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::traversal;

/// FolderNode - a named, ordered vertex of a folder forest
///
/// A node owns its children outright; there are no parent back-references.
/// Parent context is computed during traversal when an operation needs it.
///
/// Decoding accepts the legacy storage keys `fold_id` / `fold_name` and
/// ignores any other field (such as UI expansion state).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderNode {
    /// Opaque identifier, assigned by the caller and never changed
    #[serde(alias = "fold_id")]
    pub id: String,

    /// Display label, unique among siblings after trimming
    #[serde(alias = "fold_name")]
    pub name: String,

    /// Ordered children; order is display order
    #[serde(default)]
    pub children: Vec<FolderNode>,
}

impl FolderNode {
    /// Create a childless node with the given id and name
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Create a childless node with a random UUID v4 id and a trimmed name
    ///
    /// The name itself is validated by the insert operation, not here.
    pub fn with_generated_id(name: &str) -> Self {
        Self::new(Uuid::new_v4().to_string(), name.trim())
    }

    /// Builder-style helper for assembling fixtures and literal trees
    pub fn with_children(mut self, children: Vec<FolderNode>) -> Self {
        self.children = children;
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Height of the subtree rooted here (a leaf has height 1)
    pub fn subtree_height(&self) -> usize {
        traversal::subtree_height(self)
    }

    /// Ids of this node and all descendants, in pre-order
    pub fn subtree_ids(&self) -> Vec<String> {
        traversal::collect_ids(self)
    }
}
