//! Canonical schema constants for structured logging
//!
//! Every lifecycle event emitted at the command boundary uses these keys, so
//! log consumers can filter on them without knowing the call site.

pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";
pub const FIELD_TRACE_ID: &str = "trace_id";

// Tree identifiers
pub const FIELD_NODE_ID: &str = "node_id";
pub const FIELD_PARENT_ID: &str = "parent_id";

// Collection sizes
pub const FIELD_NODE_COUNT: &str = "node_count";
pub const FIELD_DELETED_COUNT: &str = "deleted_count";

pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
