//! Error types for the export run.
use std::path::PathBuf;

use drupal_export_repository::ContentRepositoryError;
use thiserror::Error;

/// Errors raised while assembling the run configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read author map {path}: {source}")]
    ReadAuthorMap {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid author map {path}: {source}")]
    ParseAuthorMap {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Represents errors that abort an export run.
///
/// Every variant is fatal; files written before the failure are left in place.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Repository error: {0}")]
    Repository(#[from] ContentRepositoryError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Front matter serialization error: {0}")]
    FrontMatter(#[from] serde_yaml::Error),
    #[error("Node {nid} has an out of range creation timestamp: {created}")]
    InvalidTimestamp { nid: i64, created: i64 },
}

impl ExportError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
