//! Settings for the file logger, loaded from TOML with the `config` crate.
//! See `bin/logger_demo.rs` for a binary that loads them from `--settings`.

mod cli;
pub use clap::Parser;
pub use cli::*;

mod settings;
pub use settings::*;
