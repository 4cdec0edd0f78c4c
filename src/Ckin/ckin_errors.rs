use std::path::PathBuf;
use thiserror::Error;

/// error types for formatting and writing CHEMKIN files
#[derive(Debug, Error)]
pub enum CkinError {
    #[error("I/O error at '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Model '{0}' not found in the species model dictionary")]
    MissingModel(String),
    #[error("Reaction dictionary has no header entry")]
    MissingHeader,
    #[error("Invalid JSON input: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("Logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
}

impl CkinError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CkinError::Io {
            path: path.into(),
            source,
        }
    }
}
