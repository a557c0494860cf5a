//! Strata Domain - Core deployment types
//!
//! This crate defines the domain model for the Strata project-variables
//! resolver. All types here are pure Rust with no I/O dependencies.

pub mod deployment;
pub mod variables;

pub use deployment::{EnvironmentContext, StackContext};
pub use variables::{KeyPath, KeyPathError, VariableValue, VariablesDocument};
