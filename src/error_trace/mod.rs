//! Suppress-and-log wrapper for fallible functions.
//!
//! A failure inside a traced function (an `Err` or a panic) is written to the
//! trace log at error severity and the caller receives `None`. Callers can no
//! longer tell "failed" from "produced nothing" without reading the log, so
//! only trace functions whose failures nobody needs to react to.
//!
//! The default panic hook still runs for caught panics and prints to stderr.

mod error_trace;
pub use error_trace::*;

mod stack;
pub use stack::*;

mod traced;
pub use traced::*;
