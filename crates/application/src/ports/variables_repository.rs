//! Variables repository port
//!
//! Defines the interface for loading project variables files.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use strata_domain::VariablesDocument;

/// Errors that can occur while loading a variables file.
#[derive(Debug, thiserror::Error)]
pub enum VariablesError {
    /// Variables file not found.
    #[error("Variables file not found: {0}")]
    NotFound(PathBuf),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file contents are not well-formed YAML.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Repository trait for loading variables documents.
#[async_trait]
pub trait VariablesRepository: Send + Sync {
    /// Loads and parses the variables file at `path`.
    ///
    /// # Errors
    /// Returns `VariablesError::NotFound` if the file doesn't exist,
    /// `VariablesError::Io` if it cannot be read, and
    /// `VariablesError::Parse` if its contents are not valid YAML.
    async fn load(&self, path: &Path) -> Result<VariablesDocument, VariablesError>;
}
