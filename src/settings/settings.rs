use crate::logger::LoggerError;
use config::{Config, File};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

pub const LOG_FILE_NAME: &str = "trace.log";

#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub file: PathBuf,
    pub filter: String, // threshold for the file handler
    pub console_filter: String, // EnvFilter directives for the console logger
    pub dedupe_handlers: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            file: default_log_path(),
            filter: "trace".to_string(),
            console_filter: "info".to_string(),
            dedupe_handlers: false,
        }
    }
}

impl LogConfig {
    pub fn with_file(file: impl Into<PathBuf>) -> Self {
        LogConfig {
            file: file.into(),
            ..Default::default()
        }
    }

    pub fn threshold(&self) -> Result<LevelFilter, LoggerError> {
        self.filter
            .parse()
            .map_err(|e| LoggerError::InvalidFilter(format!("{:?}: {}", self.filter, e)))
    }
}

/// `trace.log` beside the running executable, or in the working directory
/// when the executable cannot be located.
pub fn default_log_path() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(LOG_FILE_NAME)))
        .unwrap_or_else(|| PathBuf::from(LOG_FILE_NAME))
}

#[cfg(debug_assertions)]
const SETTINGS_PATH: &str = "settings/dev.toml";
#[cfg(not(debug_assertions))]
const SETTINGS_PATH: &str = "settings/release.toml";

pub fn parse_settings(path: Option<&str>) -> Result<Settings, LoggerError> {
    let path = path.unwrap_or(SETTINGS_PATH);

    let settings: Settings = Config::builder()
        .add_source(File::with_name(path))
        .build()
        .map_err(|e| LoggerError::Settings(e.to_string()))?
        .try_deserialize()
        .map_err(|e| LoggerError::Settings(e.to_string()))?;

    Ok(settings)
}
