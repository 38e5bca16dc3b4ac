//! Structured logging facility
//!
//! - One initialization point, `init(profile)`
//! - Lifecycle macros used at the command boundary (`log_op_start!`,
//!   `log_op_end!`, `log_op_error!`)
//! - An in-memory capture layer for asserting on events in tests
//!
//! ```rust
//! use foldtree_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
