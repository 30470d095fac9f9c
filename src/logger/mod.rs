//! File logging with caller-tagged messages.
//!
//! [`ModuleLogger`] writes to a named logger from the process-wide
//! [`LoggerRegistry`](crate::registry::LoggerRegistry); the `log_*!` macros
//! fill in the calling function's name. [`ConsoleLogger`] is the ambient
//! stderr subscriber for everything else.

mod caller;
pub use caller::*;

mod console;
pub use console::*;

mod error;
pub use error::*;

mod format;
pub use format::*;

mod handler;
pub use handler::*;

mod module_logger;
pub use module_logger::*;

mod severity;
pub use severity::*;

pub use tracing::{debug, error, info, trace, warn};
