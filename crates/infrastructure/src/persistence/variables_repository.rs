//! File-based variables repository implementation.
//!
//! Project variables are stored as a single YAML file somewhere under
//! the deployment root, e.g.:
//!
//! ```text
//! project/
//!   vars/
//!     project-variables.yaml
//! ```

use std::path::Path;

use async_trait::async_trait;
use strata_application::ports::{FileSystem, FileSystemError, VariablesError, VariablesRepository};
use strata_domain::VariablesDocument;

use crate::serialization::from_yaml;

/// Converts a port-level file system error into a variables error.
fn to_variables_error(e: FileSystemError) -> VariablesError {
    match e {
        FileSystemError::NotFound(path) => VariablesError::NotFound(path),
        FileSystemError::PermissionDenied(path) => VariablesError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            path.display().to_string(),
        )),
        FileSystemError::Io(io_err) => VariablesError::Io(io_err),
    }
}

/// File-based variables repository.
#[derive(Debug, Clone)]
pub struct FileVariablesRepository<F> {
    fs: F,
}

impl<F: FileSystem> FileVariablesRepository<F> {
    /// Creates a new file-based variables repository.
    pub const fn new(fs: F) -> Self {
        Self { fs }
    }
}

#[async_trait]
impl<F: FileSystem + Sync> VariablesRepository for FileVariablesRepository<F> {
    async fn load(&self, path: &Path) -> Result<VariablesDocument, VariablesError> {
        if !self.fs.exists(path).await {
            return Err(VariablesError::NotFound(path.to_path_buf()));
        }

        let content = self
            .fs
            .read_file_string(path)
            .await
            .map_err(to_variables_error)?;

        let document: VariablesDocument =
            from_yaml(&content).map_err(|e| VariablesError::Parse(e.to_string()))?;

        tracing::debug!(file = %path.display(), "loaded project variables");
        Ok(document)
    }
}
