use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum ProjdocError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Walk error: {0}")]
    Walk(String),
    #[error("Invalid path: {0}")]
    InvalidPath(String),
    #[error("Invalid ignore pattern: {0}")]
    InvalidPattern(String),
    #[error("Serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
impl ProjdocError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ProjdocError::Io {
            path: path.into(),
            source,
        }
    }
}
