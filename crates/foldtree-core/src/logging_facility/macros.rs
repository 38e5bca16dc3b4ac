//! Lifecycle logging macros for the command boundary
//!
//! All three expand through `__log_op_event!`, so every lifecycle event
//! carries `component`, `op` and `event` in the same order.

#[doc(hidden)]
#[macro_export]
macro_rules! __log_op_event {
    ($level:ident, $op:expr, $event:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            component = module_path!(),
            op = $op,
            event = $event,
            $($($field)*)?
        )
    };
}

/// Log the start of an operation
///
/// ```
/// # use foldtree_core::log_op_start;
/// log_op_start!("folder_insert");
/// log_op_start!("folder_insert", node_id = "n1");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)*)?) => {
        $crate::__log_op_event!(info, $op, $crate::schema::EVENT_START $(, $($field)*)?)
    };
}

/// Log the successful end of an operation
///
/// `duration_ms` is mandatory.
///
/// ```
/// # use foldtree_core::log_op_end;
/// log_op_end!("folder_insert", duration_ms = 3);
/// log_op_end!("folder_delete", duration_ms = 1, deleted_count = 4);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {
        $crate::__log_op_event!(
            info,
            $op,
            $crate::schema::EVENT_END,
            duration_ms = $duration
            $(, $($field)*)?
        )
    };
}

/// Log an operation failure at `warn` with its canonical kind and code
///
/// Anything convertible into [`ExError`](crate::errors::ExError) is accepted.
///
/// ```
/// # use foldtree_core::{log_op_error, errors::FolderTreeError};
/// let err = FolderTreeError::NodeNotFound { node_id: "n1".to_string() };
/// log_op_error!("folder_rename", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        $crate::__log_op_event!(
            warn,
            $op,
            $crate::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code()
            $(, $($field)*)?
        );
    }};
}
