use std::fmt;
use tracing::Level;

/// Severity of a record emitted through a [`ModuleLogger`](super::ModuleLogger).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Debug,
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name written between the brackets of a log line.
pub fn level_name(level: &Level) -> &'static str {
    match *level {
        Level::TRACE => "TRACE",
        Level::DEBUG => Severity::Debug.as_str(),
        Level::INFO => Severity::Info.as_str(),
        Level::WARN => Severity::Warning.as_str(),
        Level::ERROR => Severity::Error.as_str(),
    }
}
