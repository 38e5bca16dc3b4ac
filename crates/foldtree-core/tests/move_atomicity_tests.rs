//! Move Atomicity Tests
//!
//! A move detaches a subtree and reinserts it. When the reinsert fails the
//! caller must still hold the original forest, with the node attached where
//! it was.

mod common;

use common::{abcd_forest, child_ids, node};
use foldtree_core::ops::{insert_folder, move_folder};
use foldtree_core::{apply, Command, FolderTreeError, Forest, TreeLimits};

#[test]
fn test_move_duplicate_at_destination_leaves_forest_intact() {
    // GIVEN D has a child named C and C lives under B
    let forest = insert_folder(&abcd_forest(), node("c2", "C"), Some("d"), 0, 10).unwrap();
    let before = forest.clone();

    // WHEN C is moved under D
    let result = move_folder(&forest, "c", Some("d"), 0, 10);

    // THEN the move fails and the forest is exactly what it was
    assert!(matches!(
        result,
        Err(FolderTreeError::DuplicateName { ref parent_id, .. }) if parent_id.as_deref() == Some("d")
    ));
    assert_eq!(forest, before);
    assert_eq!(child_ids(&forest, "b"), vec!["c"]);
}

#[test]
fn test_move_depth_failure_leaves_forest_intact() {
    let forest = abcd_forest();
    let before = forest.clone();

    let result = move_folder(&forest, "a", Some("d"), 0, 3);

    assert!(matches!(result, Err(FolderTreeError::DepthExceeded { .. })));
    assert_eq!(forest, before);
}

#[test]
fn test_move_to_missing_parent_leaves_forest_intact() {
    let forest = abcd_forest();
    let before = forest.clone();

    let result = move_folder(&forest, "b", Some("ghost"), 0, 10);

    assert_eq!(
        result,
        Err(FolderTreeError::ParentNotFound {
            parent_id: "ghost".to_string()
        })
    );
    assert_eq!(forest, before);
}

#[test]
fn test_move_check_order() {
    let forest = abcd_forest();

    // Self-move wins even for an id that does not exist
    assert!(matches!(
        move_folder(&forest, "ghost", Some("ghost"), 0, 10),
        Err(FolderTreeError::SelfMove { .. })
    ));

    // Missing node is reported when the target is fine
    assert!(matches!(
        move_folder(&forest, "ghost", Some("a"), 0, 10),
        Err(FolderTreeError::NodeNotFound { .. })
    ));
}

#[test]
fn test_move_keeps_identity_and_subtree() {
    let forest = abcd_forest();

    let next = move_folder(&forest, "b", None, 0, 10).unwrap();

    let b = next.find("b").unwrap();
    assert!(b.parent.is_none());
    assert_eq!(b.node.name, "B");
    assert_eq!(child_ids(&next, "b"), vec!["c"]);
    assert_eq!(next.node_count(), forest.node_count());
}

#[test]
fn test_apply_move_failure_returns_error_only() {
    let state: Forest = abcd_forest();
    let cmd = Command::Move {
        node_id: "b".to_string(),
        new_parent_id: Some("c".to_string()),
        position: 0,
    };

    let result = apply(&state, cmd, &TreeLimits::default());

    assert!(matches!(result, Err(FolderTreeError::CyclicMove { .. })));
    assert_eq!(state, abcd_forest());
}
