use serde::{Deserialize, Serialize};

use super::folder::FolderNode;
use crate::traversal::{self, Located};

/// Forest - the ordered root list of one (owner, category) scope
///
/// This is the unit every operation receives and returns, and the unit the
/// storage collaborator persists. It serializes as the bare JSON array of
/// root nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Forest {
    roots: Vec<FolderNode>,
}

impl Forest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_roots(roots: Vec<FolderNode>) -> Self {
        Self { roots }
    }

    pub fn roots(&self) -> &[FolderNode] {
        &self.roots
    }

    pub(crate) fn roots_mut(&mut self) -> &mut Vec<FolderNode> {
        &mut self.roots
    }

    pub fn into_roots(self) -> Vec<FolderNode> {
        self.roots
    }

    /// Number of root nodes
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Pre-order lookup; returns the first match and its parent
    pub fn find(&self, id: &str) -> Option<Located<'_>> {
        traversal::find(&self.roots, id)
    }

    pub fn contains(&self, id: &str) -> bool {
        traversal::find_path(&self.roots, id).is_some()
    }

    /// Maximum depth, counting roots as depth 1 (0 for an empty forest)
    pub fn depth(&self) -> usize {
        traversal::forest_depth(&self.roots)
    }

    /// All ids in pre-order
    pub fn ids(&self) -> Vec<String> {
        self.roots.iter().flat_map(traversal::collect_ids).collect()
    }

    /// Total number of nodes across all roots
    pub fn node_count(&self) -> usize {
        self.ids().len()
    }
}

impl From<Vec<FolderNode>> for Forest {
    fn from(roots: Vec<FolderNode>) -> Self {
        Self::from_roots(roots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Forest {
        Forest::from_roots(vec![
            FolderNode::new("a", "A").with_children(vec![
                FolderNode::new("b", "B").with_children(vec![FolderNode::new("c", "C")])
            ]),
            FolderNode::new("d", "D"),
        ])
    }

    #[test]
    fn test_empty_forest() {
        let forest = Forest::new();
        assert!(forest.is_empty());
        assert_eq!(forest.depth(), 0);
        assert_eq!(forest.node_count(), 0);
    }

    #[test]
    fn test_queries() {
        let forest = sample();
        assert_eq!(forest.len(), 2);
        assert_eq!(forest.depth(), 3);
        assert_eq!(forest.ids(), vec!["a", "b", "c", "d"]);
        assert!(forest.contains("c"));
        assert!(!forest.contains("z"));

        let located = forest.find("c").unwrap();
        assert_eq!(located.node.name, "C");
        assert_eq!(located.parent.map(|p| p.id.as_str()), Some("b"));
    }

    #[test]
    fn test_serializes_as_bare_array() {
        let forest = Forest::from_roots(vec![FolderNode::new("n1", "Work")]);
        let json = serde_json::to_string(&forest).unwrap();
        assert_eq!(json, r#"[{"id":"n1","name":"Work","children":[]}]"#);
    }
}
