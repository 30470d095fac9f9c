use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error("cannot open log file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid log filter: {0}")]
    InvalidFilter(String),
    #[error("settings error: {0}")]
    Settings(String),
    #[error("Internal error: {0}")]
    InternalError(#[from] anyhow::Error),
}
