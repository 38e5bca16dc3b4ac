use crate::model::FolderNode;

/// A node found by [`find`], together with its parent (`None` for roots)
#[derive(Debug, Clone, Copy)]
pub struct Located<'a> {
    pub node: &'a FolderNode,
    pub parent: Option<&'a FolderNode>,
}

/// Pre-order search returning the index path to the first node with `id`
///
/// The first element indexes the root list, each following element indexes
/// the children of the previous node.
pub fn find_path(nodes: &[FolderNode], id: &str) -> Option<Vec<usize>> {
    for (index, node) in nodes.iter().enumerate() {
        if node.id == id {
            return Some(vec![index]);
        }
        if let Some(mut path) = find_path(&node.children, id) {
            path.insert(0, index);
            return Some(path);
        }
    }
    None
}

/// Resolve an index path produced by [`find_path`]
pub fn node_at<'a>(nodes: &'a [FolderNode], path: &[usize]) -> Option<&'a FolderNode> {
    let (first, rest) = path.split_first()?;
    let mut current = nodes.get(*first)?;
    for &index in rest {
        current = current.children.get(index)?;
    }
    Some(current)
}

/// Mutable sibling list addressed by a parent path (empty path = root list)
pub(crate) fn children_at_mut<'a>(
    roots: &'a mut Vec<FolderNode>,
    parent_path: &[usize],
) -> Option<&'a mut Vec<FolderNode>> {
    let mut current = roots;
    for &index in parent_path {
        current = &mut current.get_mut(index)?.children;
    }
    Some(current)
}

/// Pre-order lookup of `id`, returning the node and its parent
pub fn find<'a>(nodes: &'a [FolderNode], id: &str) -> Option<Located<'a>> {
    let path = find_path(nodes, id)?;
    let (_, parent_path) = path.split_last()?;
    let node = node_at(nodes, &path)?;
    let parent = if parent_path.is_empty() {
        None
    } else {
        Some(node_at(nodes, parent_path)?)
    };
    Some(Located { node, parent })
}

/// True if `descendant_id` appears strictly below `ancestor_id`
///
/// Returns false when `ancestor_id` does not exist. A node is not its own
/// ancestor.
pub fn is_ancestor(nodes: &[FolderNode], ancestor_id: &str, descendant_id: &str) -> bool {
    match find(nodes, ancestor_id) {
        Some(located) => find_path(&located.node.children, descendant_id).is_some(),
        None => false,
    }
}

/// Ids of `node` and every descendant, in pre-order
pub fn collect_ids(node: &FolderNode) -> Vec<String> {
    let mut ids = Vec::new();
    push_ids(node, &mut ids);
    ids
}

fn push_ids(node: &FolderNode, ids: &mut Vec<String>) {
    ids.push(node.id.clone());
    for child in &node.children {
        push_ids(child, ids);
    }
}
