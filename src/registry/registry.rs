use crate::logger::{BoxedLayer, FileHandler, Severity};
use dashmap::DashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};
use tracing::Dispatch;
use tracing_subscriber::layer::SubscriberExt;

static GLOBAL: OnceLock<LoggerRegistry> = OnceLock::new();

#[derive(Default)]
pub struct LoggerRegistry {
    loggers: DashMap<String, Arc<NamedLogger>>,
}

impl LoggerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry shared by the whole process, created on first use.
    pub fn global() -> &'static LoggerRegistry {
        GLOBAL.get_or_init(LoggerRegistry::new)
    }

    pub fn get_or_create(&self, name: &str) -> Arc<NamedLogger> {
        self.loggers
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(NamedLogger::new(name)))
            .value()
            .clone()
    }

    pub fn get(&self, name: &str) -> Option<Arc<NamedLogger>> {
        self.loggers.get(name).map(|entry| entry.value().clone())
    }

    /// Number of named loggers created so far.
    pub fn len(&self) -> usize {
        self.loggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.is_empty()
    }
}

pub struct NamedLogger {
    name: String,
    sinks: RwLock<Sinks>,
}

struct Sinks {
    handlers: Vec<FileHandler>,
    dispatch: Dispatch,
}

impl Sinks {
    fn build(handlers: Vec<FileHandler>) -> Self {
        let layers: Vec<BoxedLayer> = handlers.iter().map(FileHandler::layer).collect();
        let dispatch = Dispatch::new(tracing_subscriber::registry().with(layers));
        Sinks { handlers, dispatch }
    }
}

impl NamedLogger {
    fn new(name: &str) -> Self {
        NamedLogger {
            name: name.to_string(),
            sinks: RwLock::new(Sinks::build(Vec::new())),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn handler_count(&self) -> usize {
        self.sinks
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .handlers
            .len()
    }

    /// Attaches `handler` and returns whether it was added.
    ///
    /// Without `dedupe` every call adds another sink, so a file attached twice
    /// receives every record twice.
    pub fn add_handler(&self, handler: FileHandler, dedupe: bool) -> bool {
        let mut sinks = self.sinks.write().unwrap_or_else(PoisonError::into_inner);

        if dedupe && sinks.handlers.iter().any(|h| h.path() == handler.path()) {
            tracing::debug!(
                logger = %self.name,
                file = %handler.path().display(),
                "file handler already attached"
            );
            return false;
        }

        let mut handlers = std::mem::take(&mut sinks.handlers);
        handlers.push(handler);
        *sinks = Sinks::build(handlers);
        true
    }

    /// Writes one record to every attached handler.
    pub fn emit(&self, severity: Severity, message: &str) {
        let dispatch = self
            .sinks
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .dispatch
            .clone();
        let name = self.name.as_str();

        tracing::dispatcher::with_default(&dispatch, || match severity {
            Severity::Debug => tracing::debug!(logger = name, "{}", message),
            Severity::Info => tracing::info!(logger = name, "{}", message),
            Severity::Warning => tracing::warn!(logger = name, "{}", message),
            Severity::Error => tracing::error!(logger = name, "{}", message),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn same_name_returns_same_entry() {
        let registry = LoggerRegistry::new();
        let a = registry.get_or_create("x.py");
        let b = registry.get_or_create("x.py");
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(registry.len(), 1);
        assert!(registry.get("y.py").is_none());
    }

    #[test]
    fn emit_without_handlers_is_silent() {
        let registry = LoggerRegistry::new();
        let logger = registry.get_or_create("quiet");
        logger.emit(Severity::Error, "nobody listens");
        assert_eq!(logger.handler_count(), 0);
    }

    #[test]
    fn every_handler_receives_the_record() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("trace.log");
        let registry = LoggerRegistry::new();
        let logger = registry.get_or_create("dup");

        assert!(logger.add_handler(FileHandler::open(&path, LevelFilter::TRACE).unwrap(), false));
        assert!(logger.add_handler(FileHandler::open(&path, LevelFilter::TRACE).unwrap(), false));
        logger.emit(Severity::Info, "twice");

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(content.lines().all(|line| line.ends_with("[INFO] dup twice")));
    }

    #[test]
    fn dedupe_skips_an_attached_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("trace.log");
        let registry = LoggerRegistry::new();
        let logger = registry.get_or_create("once");

        assert!(logger.add_handler(FileHandler::open(&path, LevelFilter::TRACE).unwrap(), true));
        assert!(!logger.add_handler(FileHandler::open(&path, LevelFilter::TRACE).unwrap(), true));
        assert_eq!(logger.handler_count(), 1);
    }

    #[test]
    fn threshold_drops_lower_severities() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("trace.log");
        let registry = LoggerRegistry::new();
        let logger = registry.get_or_create("strict");
        logger.add_handler(FileHandler::open(&path, LevelFilter::WARN).unwrap(), false);

        logger.emit(Severity::Debug, "hidden");
        logger.emit(Severity::Info, "hidden");
        logger.emit(Severity::Warning, "shown");

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1);
        assert!(content.contains("[WARNING] strict shown"));
    }
}
