use super::{FileHandler, LoggerError, Severity, strip_angle_brackets};
use crate::registry::{LoggerRegistry, NamedLogger};
use crate::settings::LogConfig;
use std::path::MAIN_SEPARATOR;
use std::sync::Arc;

/// Leveled logging into a shared file, each record tagged with its caller.
///
/// ```no_run
/// use tracelog::{log_error, logger::ModuleLogger};
///
/// fn save_state(logger: &ModuleLogger) {
///     // "<timestamp> [ERROR] main.rs save_state - disk full"
///     log_error!(logger, "disk full");
/// }
///
/// let logger = ModuleLogger::new(file!())?;
/// save_state(&logger);
/// # Ok::<(), tracelog::logger::LoggerError>(())
/// ```
#[derive(Clone)]
pub struct ModuleLogger {
    logger: Arc<NamedLogger>,
}

impl ModuleLogger {
    pub fn new(module: &str) -> Result<Self, LoggerError> {
        Self::with_config(module, &LogConfig::default())
    }

    pub fn with_config(module: &str, config: &LogConfig) -> Result<Self, LoggerError> {
        Self::in_registry(LoggerRegistry::global(), module, config)
    }

    /// Opens the configured file and attaches it to the logger named after
    /// the last path segment of `module`.
    ///
    /// Unless `dedupe_handlers` is set, each construction attaches one more
    /// handler, so two loggers sharing a name write every record twice.
    pub fn in_registry(
        registry: &LoggerRegistry,
        module: &str,
        config: &LogConfig,
    ) -> Result<Self, LoggerError> {
        let name = base_name(module);
        let threshold = config.threshold()?;
        let handler = FileHandler::open(&config.file, threshold)?;

        let logger = registry.get_or_create(name);
        if logger.add_handler(handler, config.dedupe_handlers) {
            tracing::debug!(
                logger = name,
                file = %config.file.display(),
                handlers = logger.handler_count(),
                registered = registry.len(),
                "attached file handler"
            );
        }

        Ok(Self { logger })
    }

    pub fn name(&self) -> &str {
        self.logger.name()
    }

    pub fn handler_count(&self) -> usize {
        self.logger.handler_count()
    }

    pub fn debug(&self, caller: &str, msg: &str) {
        self.log(Severity::Debug, caller, msg);
    }

    pub fn info(&self, caller: &str, msg: &str) {
        self.log(Severity::Info, caller, msg);
    }

    pub fn warn(&self, caller: &str, msg: &str) {
        self.log(Severity::Warning, caller, msg);
    }

    pub fn error(&self, caller: &str, msg: &str) {
        self.log(Severity::Error, caller, msg);
    }

    pub fn log(&self, severity: Severity, caller: &str, msg: &str) {
        let caller = strip_angle_brackets(caller);
        self.logger.emit(severity, &format!("{caller} - {msg}"));
    }
}

/// Final path segment of a module identifier. A trailing separator yields "".
pub fn base_name(module: &str) -> &str {
    module
        .rsplit(['/', MAIN_SEPARATOR])
        .next()
        .unwrap_or(module)
}
