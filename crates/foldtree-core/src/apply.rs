//! Command boundary for folder-tree mutations
//!
//! `apply()` is the single entry point the request layer calls after loading
//! a forest. It dispatches to the pure operations in [`crate::ops`] and owns
//! lifecycle logging for each command:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! The operations below it emit nothing.
//!
//! ## Atomicity Contract
//!
//! The input forest is borrowed and never modified. `Ok` carries a new forest
//! that satisfies every structural invariant; `Err` means the caller keeps
//! the forest it already has.
//!
//! ## Example
//!
//! ```
//! use foldtree_core::{apply, Command, FolderNode, Forest, TreeLimits};
//!
//! let forest = Forest::new();
//! let cmd = Command::Insert {
//!     node: FolderNode::new("n1", "Work"),
//!     parent_id: None,
//!     position: 0,
//! };
//!
//! let applied = apply(&forest, cmd, &TreeLimits::default()).unwrap();
//! assert_eq!(applied.forest.len(), 1);
//! ```

use std::time::Instant;

use foldtree_core_types::RequestContext;

use crate::commands::Command;
use crate::config::TreeLimits;
use crate::errors::{ExError, Result};
use crate::model::Forest;
use crate::ops::folder_ops;
use crate::{log_op_end, log_op_error, log_op_start};

/// Outcome of a successful command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    /// The forest to persist
    pub forest: Forest,
    /// Ids removed by a delete, in pre-order; empty for every other command
    /// and for a delete that matched nothing
    pub deleted_ids: Vec<String>,
}

impl Applied {
    fn from_forest(forest: Forest) -> Self {
        Self {
            forest,
            deleted_ids: Vec::new(),
        }
    }
}

/// Apply a command to a forest, returning the new forest
///
/// # Errors
///
/// Returns the operation's validation error unchanged. See
/// [`crate::errors::FolderTreeError`] for the taxonomy.
pub fn apply(state: &Forest, cmd: Command, limits: &TreeLimits) -> Result<Applied> {
    let op = cmd.op_name();
    let node_id = cmd.node_id().unwrap_or_default().to_string();
    log_op_start!(op, node_id = node_id.as_str());
    let start = Instant::now();

    let result = dispatch(state, cmd, limits);

    let duration_ms = start.elapsed().as_millis() as u64;
    match &result {
        Ok(applied) => {
            log_op_end!(
                op,
                duration_ms = duration_ms,
                node_id = node_id.as_str(),
                node_count = applied.forest.node_count() as u64,
                deleted_count = applied.deleted_ids.len() as u64
            );
        }
        Err(e) => {
            log_op_error!(
                op,
                e.clone(),
                duration_ms = duration_ms,
                node_id = node_id.as_str()
            );
        }
    }

    result
}

/// Apply a command and report failures as structured errors
///
/// Same semantics as [`apply`], but errors come back as [`ExError`] tagged
/// with the operation name and the correlation ids from `ctx`, ready for the
/// request layer to translate.
///
/// # Errors
///
/// Returns the operation's validation error converted into an `ExError`.
pub fn apply_in_context(
    state: &Forest,
    cmd: Command,
    limits: &TreeLimits,
    ctx: &RequestContext,
) -> std::result::Result<Applied, ExError> {
    let op = cmd.op_name();
    let span = tracing::info_span!("folder_command", request_id = %ctx.request_id, op);
    let _guard = span.enter();

    apply(state, cmd, limits).map_err(|e| {
        let ex = ExError::from(e)
            .with_op(op)
            .with_request_id(ctx.request_id.clone());
        match &ctx.trace_id {
            Some(trace_id) => ex.with_trace_id(trace_id.clone()),
            None => ex,
        }
    })
}

fn dispatch(state: &Forest, cmd: Command, limits: &TreeLimits) -> Result<Applied> {
    let max_depth = limits.max_depth;
    match cmd {
        Command::Insert {
            node,
            parent_id,
            position,
        } => folder_ops::insert_folder(state, node, parent_id.as_deref(), position, max_depth)
            .map(Applied::from_forest),

        Command::Rename { node_id, name } => {
            folder_ops::rename_folder(state, &node_id, &name).map(Applied::from_forest)
        }

        Command::Move {
            node_id,
            new_parent_id,
            position,
        } => folder_ops::move_folder(
            state,
            &node_id,
            new_parent_id.as_deref(),
            position,
            max_depth,
        )
        .map(Applied::from_forest),

        Command::Delete { node_id } => {
            let (forest, deleted_ids) = folder_ops::delete_folder(state, &node_id);
            Ok(Applied {
                forest,
                deleted_ids,
            })
        }

        Command::ReplaceStructure { forest } => {
            folder_ops::replace_structure(&forest, max_depth).map(Applied::from_forest)
        }
    }
}
