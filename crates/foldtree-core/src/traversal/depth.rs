use crate::model::FolderNode;

/// Height of the subtree rooted at `node`; a leaf has height 1
pub fn subtree_height(node: &FolderNode) -> usize {
    1 + node.children.iter().map(subtree_height).max().unwrap_or(0)
}

/// Maximum depth of the forest with roots at depth 1; 0 when empty
///
/// Recomputed from scratch on every call. Forests hold folder counts, not
/// filesystem-scale trees.
pub fn forest_depth(nodes: &[FolderNode]) -> usize {
    nodes.iter().map(subtree_height).max().unwrap_or(0)
}
