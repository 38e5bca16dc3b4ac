use crate::errors::{FolderTreeError, Result};
use crate::model::{FolderNode, Forest};
use crate::rules::{clamp_position, has_duplicate_name, validate_forest, validate_name};
use crate::traversal::{self, search::children_at_mut};

/// Insert a new folder into the forest
///
/// The node's name is trimmed and validated. Any children it already carries
/// are validated the same way `replace_structure` validates a level. The node
/// is spliced into the root list (`parent_id == None`) or into the children
/// of `parent_id` at `position`, clamped into `0..=sibling_count`.
///
/// The input forest is never modified; on success a new forest is returned.
///
/// # Arguments
/// * `forest` - Current forest
/// * `node` - Node to insert, carrying a caller-generated id
/// * `parent_id` - Parent id, or `None` for a root-level insert
/// * `position` - Zero-based index among the new siblings (clamped)
/// * `max_depth` - Depth bound for the resulting forest
///
/// # Errors
/// * `InvalidName` - If the node's (or a supplied child's) name fails the length rule
/// * `ParentNotFound` - If `parent_id` does not exist
/// * `DuplicateName` - If a sibling already uses the trimmed name
/// * `DepthExceeded` - If the resulting forest is deeper than `max_depth`
pub fn insert_folder(
    forest: &Forest,
    node: FolderNode,
    parent_id: Option<&str>,
    position: i64,
    max_depth: usize,
) -> Result<Forest> {
    let name = validate_name(&node.name)?;
    validate_forest(&node.children, usize::MAX)?;

    let node = FolderNode { name, ..node };
    insert_subtree(forest, node, parent_id, position, max_depth)
}

/// Rename a folder in place
///
/// # Errors
/// * `InvalidName` - If `new_name` fails the length rule
/// * `NodeNotFound` - If `node_id` does not exist
/// * `DuplicateName` - If another sibling already uses the trimmed name
pub fn rename_folder(forest: &Forest, node_id: &str, new_name: &str) -> Result<Forest> {
    let name = validate_name(new_name)?;
    let path = traversal::find_path(forest.roots(), node_id).ok_or_else(|| {
        FolderTreeError::NodeNotFound {
            node_id: node_id.to_string(),
        }
    })?;
    let (index, parent_path) = split_path(&path, node_id)?;

    let mut next = forest.clone();
    let siblings = sibling_list(&mut next, parent_path, node_id)?;
    if has_duplicate_name(siblings, &name, Some(node_id)) {
        return Err(FolderTreeError::DuplicateName {
            name,
            parent_id: parent_id_of(forest, parent_path),
        });
    }
    siblings[index].name = name;

    Ok(next)
}

/// Move a folder, with its whole subtree, to a new parent and position
///
/// Checks run in this order: self-move, cycle, existence, then the insert
/// checks at the destination. The node keeps its id, name and children.
///
/// # Errors
/// * `SelfMove` - If `new_parent_id == node_id`
/// * `CyclicMove` - If `new_parent_id` lies inside the moved subtree
/// * `NodeNotFound` - If `node_id` does not exist
/// * `ParentNotFound` - If `new_parent_id` does not exist
/// * `DuplicateName` - If the destination already has a sibling with the name
/// * `DepthExceeded` - If the relocated subtree would be too deep
pub fn move_folder(
    forest: &Forest,
    node_id: &str,
    new_parent_id: Option<&str>,
    position: i64,
    max_depth: usize,
) -> Result<Forest> {
    if let Some(target) = new_parent_id {
        if target == node_id {
            return Err(FolderTreeError::SelfMove {
                node_id: node_id.to_string(),
            });
        }
        if traversal::is_ancestor(forest.roots(), node_id, target) {
            return Err(FolderTreeError::CyclicMove {
                node_id: node_id.to_string(),
                new_parent_id: target.to_string(),
            });
        }
    }

    let (detached, subtree) =
        detach(forest, node_id).ok_or_else(|| FolderTreeError::NodeNotFound {
            node_id: node_id.to_string(),
        })?;

    insert_subtree(&detached, subtree, new_parent_id, position, max_depth)
}

/// Delete a folder and its whole subtree
///
/// Returns the new forest and the removed ids in pre-order. When `node_id`
/// does not exist the forest comes back unchanged with an empty id list;
/// callers use the empty list to detect the no-op.
pub fn delete_folder(forest: &Forest, node_id: &str) -> (Forest, Vec<String>) {
    match detach(forest, node_id) {
        Some((next, removed)) => (next, traversal::collect_ids(&removed)),
        None => (forest.clone(), Vec::new()),
    }
}

/// Replace the whole forest with a caller-supplied structure
///
/// Validates every level against the name, sibling and depth rules and
/// returns a deep copy with trimmed names.
///
/// # Errors
/// * `DepthExceeded` - If a non-empty level lies below `max_depth`
/// * `InvalidName` - If any name fails the length rule
/// * `DuplicateName` - If any sibling list repeats a trimmed name
pub fn replace_structure(forest: &Forest, max_depth: usize) -> Result<Forest> {
    validate_forest(forest.roots(), max_depth)?;
    Ok(Forest::from_roots(
        forest.roots().iter().map(normalized).collect(),
    ))
}

fn normalized(node: &FolderNode) -> FolderNode {
    FolderNode {
        id: node.id.clone(),
        name: node.name.trim().to_string(),
        children: node.children.iter().map(normalized).collect(),
    }
}

/// Splice an existing subtree into a copy of `forest`
///
/// Shared by insert and move. Does not validate names.
fn insert_subtree(
    forest: &Forest,
    node: FolderNode,
    parent_id: Option<&str>,
    position: i64,
    max_depth: usize,
) -> Result<Forest> {
    let parent_path = match parent_id {
        Some(pid) => traversal::find_path(forest.roots(), pid).ok_or_else(|| {
            FolderTreeError::ParentNotFound {
                parent_id: pid.to_string(),
            }
        })?,
        None => Vec::new(),
    };

    let mut next = forest.clone();
    let siblings = children_at_mut(next.roots_mut(), &parent_path).ok_or_else(|| {
        FolderTreeError::ParentNotFound {
            parent_id: parent_id.unwrap_or_default().to_string(),
        }
    })?;

    if has_duplicate_name(siblings, &node.name, None) {
        return Err(FolderTreeError::DuplicateName {
            name: node.name.trim().to_string(),
            parent_id: parent_id.map(str::to_string),
        });
    }

    let index = clamp_position(position, siblings.len());
    siblings.insert(index, node);

    let depth = next.depth();
    if depth > max_depth {
        return Err(FolderTreeError::DepthExceeded { max_depth, depth });
    }

    Ok(next)
}

/// Remove the first pre-order match of `node_id` from a copy of `forest`
///
/// Returns the remaining forest and the detached subtree, or `None` if the
/// id does not exist.
fn detach(forest: &Forest, node_id: &str) -> Option<(Forest, FolderNode)> {
    let path = traversal::find_path(forest.roots(), node_id)?;
    let (index, parent_path) = path.split_last()?;

    let mut next = forest.clone();
    let siblings = children_at_mut(next.roots_mut(), parent_path)?;
    let removed = siblings.remove(*index);
    Some((next, removed))
}

fn split_path<'a>(path: &'a [usize], node_id: &str) -> Result<(usize, &'a [usize])> {
    path.split_last()
        .map(|(index, parent)| (*index, parent))
        .ok_or_else(|| FolderTreeError::NodeNotFound {
            node_id: node_id.to_string(),
        })
}

fn sibling_list<'a>(
    forest: &'a mut Forest,
    parent_path: &[usize],
    node_id: &str,
) -> Result<&'a mut Vec<FolderNode>> {
    children_at_mut(forest.roots_mut(), parent_path).ok_or_else(|| {
        FolderTreeError::NodeNotFound {
            node_id: node_id.to_string(),
        }
    })
}

fn parent_id_of(forest: &Forest, parent_path: &[usize]) -> Option<String> {
    traversal::node_at(forest.roots(), parent_path).map(|p| p.id.clone())
}
