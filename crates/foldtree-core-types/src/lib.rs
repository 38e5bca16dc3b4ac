//! Types shared between the folder-tree engine and its callers
//!
//! - **Correlation types**: `RequestId`, `TraceId`, `RequestContext`
//! - **Schema constants**: canonical field keys and event names used by the
//!   logging facility

pub mod correlation;
pub mod schema;

pub use correlation::{RequestContext, RequestId, TraceId};
