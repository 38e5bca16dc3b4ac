//! Folder-tree core - invariant-preserving mutations over a forest of named folders
//!
//! A forest is the ordered list of root folders belonging to one
//! (owner, category) scope. This crate provides:
//! - The `FolderNode` / `Forest` model and its JSON storage shape
//! - Pre-order search, depth and ancestor traversal
//! - Name, sibling-uniqueness and depth rules
//! - The five structural operations: insert, rename, move, delete, replace
//! - A command boundary (`apply`) with structured errors and lifecycle logging
//!
//! Everything here is synchronous and pure: operations borrow a forest and
//! return a new one or an error. Loading, storing and scoping forests belong
//! to the caller.

pub mod apply;
pub mod codec;
pub mod commands;
pub mod config;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod rules;
pub mod traversal;

pub use foldtree_core_types::schema;

// Re-export commonly used types
pub use apply::{apply, apply_in_context, Applied};
pub use commands::Command;
pub use config::TreeLimits;
pub use errors::{ExError, ExErrorKind, FolderTreeError, Result};
pub use model::{FolderNode, Forest};
