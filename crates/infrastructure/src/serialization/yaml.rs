//! YAML deserialization helpers.

use serde::de::DeserializeOwned;

/// Error type for serialization operations.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// YAML deserialization failed.
    #[error("YAML deserialization failed: {0}")]
    Deserialize(serde_yaml::Error),
}

/// Deserializes YAML from a string.
///
/// `serde_yaml` resolves tags to plain values and never executes code
/// from the document. An empty input deserializes as null.
///
/// # Errors
///
/// Returns an error if the YAML is invalid or doesn't match the
/// expected type.
pub fn from_yaml<T: DeserializeOwned>(yaml: &str) -> Result<T, SerializationError> {
    serde_yaml::from_str(yaml).map_err(SerializationError::Deserialize)
}
