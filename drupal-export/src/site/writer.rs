//! Writes the generated tree below a single output root.
use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::debug;

use crate::errors::ExportError;
use crate::site::layout;

/// Filesystem sink for exported documents.
///
/// Paths handed to the writer are relative to the site root. Existing files
/// are overwritten without warning.
#[derive(Debug, Clone)]
pub struct SiteWriter {
    root: PathBuf,
}

impl SiteWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Creates the Jekyll skeleton and (re)writes the refresh layout.
    pub async fn bootstrap(&self) -> Result<(), ExportError> {
        for dir in layout::bootstrap_dirs() {
            let path = self.root.join(dir);
            fs::create_dir_all(&path)
                .await
                .map_err(|e| ExportError::io(&path, e))?;
        }

        self.write(&layout::refresh_layout_path(), layout::REFRESH_TEMPLATE)
            .await?;
        Ok(())
    }

    /// Writes `contents` to `relative`, creating parent directories first.
    pub async fn write(&self, relative: &Path, contents: &str) -> Result<PathBuf, ExportError> {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ExportError::io(parent, e))?;
        }

        fs::write(&path, contents)
            .await
            .map_err(|e| ExportError::io(&path, e))?;
        debug!(path = %path.display(), bytes = contents.len(), "Wrote file");

        Ok(path)
    }
}
