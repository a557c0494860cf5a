//! Stack context for a deployment.

use serde::{Deserialize, Serialize};

/// A named unit of deployable configuration within an environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackContext {
    /// Stack name, unique within its environment.
    pub name: String,
}

impl StackContext {
    /// Creates a new stack context.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
