use super::LoggerError;
use crate::settings::LogConfig;
use anyhow::anyhow;
use tracing_subscriber::{
    EnvFilter, Registry, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt,
};

/// Process-wide stderr subscriber for diagnostics that are not written to a
/// module logger's file.
pub struct ConsoleLogger {
    reload_handle: reload::Handle<EnvFilter, Registry>,
}

impl ConsoleLogger {
    pub fn new_bootstrap() -> Result<Self, LoggerError> {
        let filter = EnvFilter::new("info");
        let (filter, reload_handle) = reload::Layer::new(filter);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()
            .map_err(|e| anyhow!(e))?;

        Ok(Self { reload_handle })
    }

    pub fn reload_from_config(&self, config: &LogConfig) -> Result<(), LoggerError> {
        let filter = EnvFilter::try_new(&config.console_filter)
            .map_err(|e| LoggerError::InvalidFilter(e.to_string()))?;
        self.reload_handle.reload(filter).map_err(|e| anyhow!(e))?;
        Ok(())
    }
}
