use super::{LineFormat, LoggerError};
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{Layer, Registry, fmt};

pub type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Append-mode file sink attached to a named logger.
#[derive(Debug, Clone)]
pub struct FileHandler {
    path: PathBuf,
    file: Arc<File>,
    threshold: LevelFilter,
}

impl FileHandler {
    pub fn open(path: impl Into<PathBuf>, threshold: LevelFilter) -> Result<Self, LoggerError> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| LoggerError::Open {
                path: path.clone(),
                source,
            })?;
        let path = path.canonicalize().unwrap_or(path);

        Ok(Self {
            path,
            file: Arc::new(file),
            threshold,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Builds a fresh formatting layer writing to this handler's file.
    pub fn layer(&self) -> BoxedLayer {
        fmt::layer()
            .with_ansi(false)
            .event_format(LineFormat)
            .with_writer(self.file.clone())
            .with_filter(self.threshold)
            .boxed()
    }
}
