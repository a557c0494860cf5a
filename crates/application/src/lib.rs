//! Strata Application - Use cases and ports
//!
//! Orchestrates project-variable resolution against the ports
//! implemented by the infrastructure layer.

pub mod ports;
pub mod use_cases;

pub use ports::{FileSystem, FileSystemError, VariablesError, VariablesRepository};
pub use use_cases::{ResolveError, ResolveProjectVariable, ResolveProjectVariableOutput};
