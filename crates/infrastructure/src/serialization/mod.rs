//! Serialization helpers.

mod yaml;

pub use yaml::{SerializationError, from_yaml};
