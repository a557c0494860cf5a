//! Environment context for a deployment.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// The deployment environment a stack belongs to.
///
/// Built by the surrounding configuration loader, not by this crate.
/// Only the two fields the resolver reads are modeled here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentContext {
    /// Root directory of the deployment project.
    pub root_dir: PathBuf,

    /// Slash-separated environment hierarchy, e.g. `"prod/eu"`.
    pub environment_path: String,
}

impl EnvironmentContext {
    /// Creates a new environment context.
    pub fn new(root_dir: impl Into<PathBuf>, environment_path: impl Into<String>) -> Self {
        Self {
            root_dir: root_dir.into(),
            environment_path: environment_path.into(),
        }
    }

    /// Joins a project-relative path onto the root directory.
    ///
    /// No containment check is performed; per `PathBuf::join`, an
    /// absolute `relative` replaces the root entirely.
    #[must_use]
    pub fn file_path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root_dir.join(relative)
    }

    /// The environment path split on `/`, in order.
    ///
    /// Empty segments are preserved: `"a//b"` yields `["a", "", "b"]`.
    pub fn path_segments(&self) -> impl Iterator<Item = &str> {
        self.environment_path.split('/')
    }
}
