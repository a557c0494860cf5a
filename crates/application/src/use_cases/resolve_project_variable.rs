//! Resolve project variable use case

use strata_domain::{EnvironmentContext, KeyPath, KeyPathError, StackContext, VariableValue};

use crate::ports::{VariablesError, VariablesRepository};

/// Errors that can occur when resolving a project variable.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// The variables file is missing or unreadable.
    #[error("Failed to access variables file: {0}")]
    FileAccess(String),

    /// The variables file is not well-formed YAML.
    #[error("Failed to parse variables file: {0}")]
    Parse(String),

    /// The composed key path is absent from the document.
    #[error(transparent)]
    KeyPath(#[from] KeyPathError),
}

impl From<VariablesError> for ResolveError {
    fn from(error: VariablesError) -> Self {
        match error {
            VariablesError::NotFound(path) => Self::FileAccess(path.display().to_string()),
            VariablesError::Io(e) => Self::FileAccess(e.to_string()),
            VariablesError::Parse(e) => Self::Parse(e),
        }
    }
}

/// Output containing the resolved value.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolveProjectVariableOutput {
    /// The value stored at the composed key path, unchanged.
    pub value: VariableValue,
}

/// Resolves a per-stack configuration value from a project variables file.
///
/// The value is located by descending through the parsed document along
/// the environment-path segments followed by the stack name. One file
/// read per call; nothing is cached and no inputs are mutated.
pub struct ResolveProjectVariable<R> {
    repository: R,
}

impl<R: VariablesRepository> ResolveProjectVariable<R> {
    /// Creates a new `ResolveProjectVariable` use case.
    pub const fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Executes the use case.
    ///
    /// # Arguments
    /// * `argument` - Non-empty path to the variables file, relative to the project root
    /// * `environment` - Environment the requesting stack belongs to
    /// * `stack` - The requesting stack
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed, or if the
    /// composed key path is absent from the document. Failures are not
    /// retried; the caller owns any recovery.
    pub async fn execute(
        &self,
        argument: &str,
        environment: &EnvironmentContext,
        stack: &StackContext,
    ) -> Result<ResolveProjectVariableOutput, ResolveError> {
        let file_path = environment.file_path(argument);
        let document = self.repository.load(&file_path).await?;

        let key_path = KeyPath::for_stack(environment, stack);
        let value = document.value_at(&key_path)?.clone();
        tracing::debug!(%key_path, file = %file_path.display(), "resolved project variable");

        Ok(ResolveProjectVariableOutput { value })
    }
}
