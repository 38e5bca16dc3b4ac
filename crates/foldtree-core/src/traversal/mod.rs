//! Read-only walks over a folder forest
//!
//! All searches are depth-first, left to right (pre-order). Parent context is
//! expressed as a path of child indices and never stored on the nodes.

pub mod depth;
pub mod search;

pub use depth::{forest_depth, subtree_height};
pub use search::{collect_ids, find, find_path, is_ancestor, node_at, Located};
