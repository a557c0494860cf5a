//! Strata Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer.

pub mod persistence;
pub mod serialization;

pub use persistence::{FileVariablesRepository, TokioFileSystem};
pub use serialization::{SerializationError, from_yaml};
