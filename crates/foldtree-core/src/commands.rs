//! Command types for the folder-tree operations
//!
//! Commands are the input to [`crate::apply::apply`]. They decode from the
//! request body shape the request layer receives, tagged by `action`.

use serde::{Deserialize, Serialize};

use crate::model::{FolderNode, Forest};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Command {
    /// Insert a new node under `parent_id` (root level when absent)
    Insert {
        node: FolderNode,
        #[serde(default)]
        parent_id: Option<String>,
        #[serde(default)]
        position: i64,
    },

    /// Rename a node in place
    Rename { node_id: String, name: String },

    /// Relocate a node and its subtree
    Move {
        node_id: String,
        #[serde(default)]
        new_parent_id: Option<String>,
        #[serde(default)]
        position: i64,
    },

    /// Remove a node and its subtree
    Delete { node_id: String },

    /// Overwrite the whole forest
    ReplaceStructure { forest: Forest },
}

impl Command {
    /// Operation name used in log events and structured errors
    pub fn op_name(&self) -> &'static str {
        match self {
            Command::Insert { .. } => "folder_insert",
            Command::Rename { .. } => "folder_rename",
            Command::Move { .. } => "folder_move",
            Command::Delete { .. } => "folder_delete",
            Command::ReplaceStructure { .. } => "folder_replace_structure",
        }
    }

    /// Id of the node the command targets, if it targets one
    pub fn node_id(&self) -> Option<&str> {
        match self {
            Command::Insert { node, .. } => Some(&node.id),
            Command::Rename { node_id, .. }
            | Command::Move { node_id, .. }
            | Command::Delete { node_id } => Some(node_id),
            Command::ReplaceStructure { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_move_with_defaults() {
        let cmd: Command =
            serde_json::from_str(r#"{"action":"move","node_id":"a"}"#).unwrap();
        assert_eq!(
            cmd,
            Command::Move {
                node_id: "a".to_string(),
                new_parent_id: None,
                position: 0,
            }
        );
    }

    #[test]
    fn test_decode_insert() {
        let json = r#"{"action":"insert","node":{"id":"n1","name":"Work"},
            "parent_id":"p","position":-2}"#;
        let cmd: Command = serde_json::from_str(json).unwrap();
        match cmd {
            Command::Insert {
                node,
                parent_id,
                position,
            } => {
                assert_eq!(node, FolderNode::new("n1", "Work"));
                assert_eq!(parent_id.as_deref(), Some("p"));
                assert_eq!(position, -2);
            }
            other => panic!("Wrong command variant: {other:?}"),
        }
    }

    #[test]
    fn test_decode_replace_structure() {
        let json = r#"{"action":"replace_structure","forest":[{"fold_id":"a","fold_name":"A"}]}"#;
        let cmd: Command = serde_json::from_str(json).unwrap();
        assert_eq!(cmd.op_name(), "folder_replace_structure");
        assert_eq!(cmd.node_id(), None);
    }

    #[test]
    fn test_unknown_action_rejected() {
        assert!(serde_json::from_str::<Command>(r#"{"action":"copy","node_id":"a"}"#).is_err());
    }

    #[test]
    fn test_node_id() {
        let cmd = Command::Delete {
            node_id: "x".to_string(),
        };
        assert_eq!(cmd.node_id(), Some("x"));
        assert_eq!(cmd.op_name(), "folder_delete");
    }
}
