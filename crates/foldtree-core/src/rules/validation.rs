use std::collections::HashSet;

use crate::errors::{FolderTreeError, Result};
use crate::model::FolderNode;

/// Shortest allowed folder name, after trimming
pub const MIN_NAME_LEN: usize = 1;

/// Longest allowed folder name, after trimming
pub const MAX_NAME_LEN: usize = 50;

/// Nesting limit used when the caller does not configure one
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// Validate a folder name and return its trimmed form
///
/// Length is counted in Unicode scalar values of the trimmed string.
///
/// # Errors
/// * `InvalidName` - If the trimmed name is empty or longer than `MAX_NAME_LEN`
pub fn validate_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    let len = trimmed.chars().count();
    if !(MIN_NAME_LEN..=MAX_NAME_LEN).contains(&len) {
        return Err(FolderTreeError::InvalidName {
            name: name.to_string(),
            len,
        });
    }
    Ok(trimmed.to_string())
}

pub fn is_valid_name(name: &str) -> bool {
    validate_name(name).is_ok()
}

/// Check whether any sibling other than `exclude_id` already uses `name`
///
/// Comparison is case-sensitive on trimmed names.
pub fn has_duplicate_name(siblings: &[FolderNode], name: &str, exclude_id: Option<&str>) -> bool {
    let target = name.trim();
    siblings
        .iter()
        .any(|s| s.name.trim() == target && Some(s.id.as_str()) != exclude_id)
}

/// Clamp a caller-supplied position into `0..=len`
///
/// Out-of-range values are moved to the nearest valid index rather than
/// rejected.
pub fn clamp_position(position: i64, len: usize) -> usize {
    if position <= 0 {
        0
    } else {
        usize::try_from(position).map_or(len, |p| p.min(len))
    }
}

/// Validate a whole forest level by level
///
/// Walks depth-first. A non-empty level deeper than `max_depth` fails before
/// any of its names are looked at. Within a level each node's name is checked,
/// then sibling uniqueness, then the node's children.
///
/// # Errors
/// Returns the first violation encountered:
/// * `DepthExceeded` - A non-empty level lies below `max_depth`
/// * `InvalidName` - A name fails the length rule
/// * `DuplicateName` - Two siblings share a trimmed name
pub fn validate_forest(nodes: &[FolderNode], max_depth: usize) -> Result<()> {
    validate_level(nodes, None, 1, max_depth)
}

fn validate_level(
    nodes: &[FolderNode],
    parent_id: Option<&str>,
    depth: usize,
    max_depth: usize,
) -> Result<()> {
    if nodes.is_empty() {
        return Ok(());
    }
    if depth > max_depth {
        return Err(FolderTreeError::DepthExceeded { max_depth, depth });
    }

    let mut seen = HashSet::new();
    for node in nodes {
        let name = validate_name(&node.name)?;
        if !seen.insert(name.clone()) {
            return Err(FolderTreeError::DuplicateName {
                name,
                parent_id: parent_id.map(str::to_string),
            });
        }
        validate_level(&node.children, Some(&node.id), depth + 1, max_depth)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name_trims() {
        assert_eq!(validate_name("  Work  ").unwrap(), "Work");
    }

    #[test]
    fn test_validate_name_bounds() {
        assert!(matches!(
            validate_name("   "),
            Err(FolderTreeError::InvalidName { len: 0, .. })
        ));
        assert!(validate_name(&"x".repeat(50)).is_ok());
        assert!(matches!(
            validate_name(&"x".repeat(51)),
            Err(FolderTreeError::InvalidName { len: 51, .. })
        ));
    }

    #[test]
    fn test_validate_name_counts_characters_not_bytes() {
        let name = "文".repeat(50);
        assert!(name.len() > 50);
        assert!(is_valid_name(&name));
    }

    #[test]
    fn test_has_duplicate_name_is_trimmed_and_case_sensitive() {
        let siblings = vec![FolderNode::new("a", " Work "), FolderNode::new("b", "Home")];
        assert!(has_duplicate_name(&siblings, "Work", None));
        assert!(!has_duplicate_name(&siblings, "work", None));
        assert!(!has_duplicate_name(&siblings, "Work", Some("a")));
        assert!(has_duplicate_name(&siblings, "Home", Some("a")));
    }

    #[test]
    fn test_clamp_position() {
        assert_eq!(clamp_position(-3, 4), 0);
        assert_eq!(clamp_position(0, 4), 0);
        assert_eq!(clamp_position(2, 4), 2);
        assert_eq!(clamp_position(99, 4), 4);
        assert_eq!(clamp_position(i64::MAX, 0), 0);
    }

    #[test]
    fn test_validate_forest_accepts_depth_equal_to_limit() {
        let nodes = vec![FolderNode::new("a", "A")
            .with_children(vec![FolderNode::new("b", "B")])];
        assert!(validate_forest(&nodes, 2).is_ok());
        assert!(matches!(
            validate_forest(&nodes, 1),
            Err(FolderTreeError::DepthExceeded {
                max_depth: 1,
                depth: 2
            })
        ));
    }

    #[test]
    fn test_validate_forest_depth_checked_before_names() {
        let nodes = vec![FolderNode::new("a", "A")
            .with_children(vec![FolderNode::new("b", "")])];
        assert!(matches!(
            validate_forest(&nodes, 1),
            Err(FolderTreeError::DepthExceeded { .. })
        ));
        assert!(matches!(
            validate_forest(&nodes, 2),
            Err(FolderTreeError::InvalidName { .. })
        ));
    }

    #[test]
    fn test_validate_forest_duplicate_reports_parent() {
        let nodes = vec![FolderNode::new("p", "P").with_children(vec![
            FolderNode::new("x", "Same"),
            FolderNode::new("y", " Same"),
        ])];
        match validate_forest(&nodes, 10) {
            Err(FolderTreeError::DuplicateName { name, parent_id }) => {
                assert_eq!(name, "Same");
                assert_eq!(parent_id.as_deref(), Some("p"));
            }
            other => panic!("expected DuplicateName, got {other:?}"),
        }
    }

    #[test]
    fn test_same_name_allowed_at_different_levels() {
        let nodes = vec![
            FolderNode::new("a", "Notes").with_children(vec![FolderNode::new("b", "Notes")]),
        ];
        assert!(validate_forest(&nodes, 10).is_ok());
    }
}
