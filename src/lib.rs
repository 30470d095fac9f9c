pub mod error_trace;
pub mod logger;
pub mod registry;
pub mod settings;
