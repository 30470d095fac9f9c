//! Process-wide table of named loggers.
//!
//! Every name maps to exactly one [`NamedLogger`]; handlers attached to it are
//! shared by all module loggers created under that name.

mod registry;
pub use registry::*;
