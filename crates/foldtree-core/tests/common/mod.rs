use foldtree_core::rules::invariants;
use foldtree_core::{FolderNode, Forest};

#[allow(dead_code)]
pub fn node(id: &str, name: &str) -> FolderNode {
    FolderNode::new(id, name)
}

/// Forest `[A[B[C]], D]` with ids `a`..`d`
#[allow(dead_code)]
pub fn abcd_forest() -> Forest {
    Forest::from_roots(vec![
        node("a", "A").with_children(vec![node("b", "B").with_children(vec![node("c", "C")])]),
        node("d", "D"),
    ])
}

/// Forest `[A[B[C]]]` with ids `a`..`c`
#[allow(dead_code)]
pub fn abc_chain() -> Forest {
    Forest::from_roots(vec![
        node("a", "A").with_children(vec![node("b", "B").with_children(vec![node("c", "C")])])
    ])
}

/// Ids of the direct children of `id`, in order
#[allow(dead_code)]
pub fn child_ids(forest: &Forest, id: &str) -> Vec<String> {
    forest
        .find(id)
        .map(|l| l.node.children.iter().map(|c| c.id.clone()).collect())
        .unwrap_or_default()
}

#[allow(dead_code)]
pub fn root_ids(forest: &Forest) -> Vec<String> {
    forest.roots().iter().map(|n| n.id.clone()).collect()
}

/// Assert invariants 1-3 plus id uniqueness
#[allow(dead_code)]
pub fn assert_invariants(forest: &Forest, max_depth: usize) {
    invariants::check_invariants(forest, max_depth)
        .unwrap_or_else(|e| panic!("invariant violated: {e}"));
    assert!(
        invariants::find_duplicate_ids(forest).is_empty(),
        "duplicate ids in {forest:?}"
    );
}
