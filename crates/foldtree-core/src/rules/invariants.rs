use std::collections::{HashMap, HashSet};

use crate::errors::{FolderTreeError, Result};
use crate::model::{FolderNode, Forest};
use crate::traversal;

use super::validation::{is_valid_name, validate_name};

/// Ids of nodes whose trimmed name fails the length rule, in pre-order
pub fn find_invalid_names(forest: &Forest) -> Vec<String> {
    let mut invalid = Vec::new();
    walk(forest.roots(), &mut |node| {
        if !is_valid_name(&node.name) {
            invalid.push(node.id.clone());
        }
    });
    invalid
}

/// Sibling lists that reuse a trimmed name
///
/// Returns list of (parent_id, name) tuples; `parent_id` is `None` for the
/// root list.
pub fn find_duplicate_siblings(forest: &Forest) -> Vec<(Option<String>, String)> {
    let mut duplicates = Vec::new();
    collect_duplicate_siblings(forest.roots(), None, &mut duplicates);
    duplicates
}

fn collect_duplicate_siblings(
    nodes: &[FolderNode],
    parent_id: Option<&str>,
    duplicates: &mut Vec<(Option<String>, String)>,
) {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for node in nodes {
        *counts.entry(node.name.trim()).or_insert(0) += 1;
    }
    let mut reported = HashSet::new();
    for node in nodes {
        let name = node.name.trim();
        if counts.get(name).copied().unwrap_or(0) > 1 && reported.insert(name) {
            duplicates.push((parent_id.map(str::to_string), name.to_string()));
        }
    }
    for node in nodes {
        collect_duplicate_siblings(&node.children, Some(&node.id), duplicates);
    }
}

/// Ids that occur more than once anywhere in the forest
///
/// Id uniqueness is the caller's responsibility; this exists so callers and
/// tests can audit it.
pub fn find_duplicate_ids(forest: &Forest) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for id in forest.ids() {
        if !seen.insert(id.clone()) && !duplicates.contains(&id) {
            duplicates.push(id);
        }
    }
    duplicates
}

pub fn exceeds_depth(forest: &Forest, max_depth: usize) -> bool {
    traversal::forest_depth(forest.roots()) > max_depth
}

/// Check invariants 1-3 over a whole forest
///
/// Returns the first violation, in the order: depth, names, sibling names.
/// For exhaustive reporting, call the individual finders directly.
///
/// # Errors
/// * `DepthExceeded` - If the forest is deeper than `max_depth`
/// * `InvalidName` - If any name fails the length rule
/// * `DuplicateName` - If any sibling list repeats a trimmed name
pub fn check_invariants(forest: &Forest, max_depth: usize) -> Result<()> {
    let depth = traversal::forest_depth(forest.roots());
    if depth > max_depth {
        return Err(FolderTreeError::DepthExceeded { max_depth, depth });
    }

    for id in find_invalid_names(forest) {
        if let Some(located) = forest.find(&id) {
            validate_name(&located.node.name)?;
        }
    }

    if let Some((parent_id, name)) = find_duplicate_siblings(forest).into_iter().next() {
        return Err(FolderTreeError::DuplicateName { name, parent_id });
    }

    Ok(())
}

fn walk<F: FnMut(&FolderNode)>(nodes: &[FolderNode], visit: &mut F) {
    for node in nodes {
        visit(node);
        walk(&node.children, visit);
    }
}
