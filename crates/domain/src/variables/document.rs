//! Parsed variables document and key-path descent.

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use super::key_path::KeyPath;

/// The YAML value type returned by resolution.
pub type VariableValue = Value;

/// Errors raised while descending a key path.
///
/// The carried string is the slash-joined path up to and including the
/// segment that failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyPathError {
    /// A key along the path does not exist in its mapping.
    #[error("Key not found: {0}")]
    MissingKey(String),

    /// Descent required a mapping but found a different value kind.
    #[error("Not a mapping at: {0}")]
    NotAMapping(String),
}

/// A parsed variables file.
///
/// For a resolution to succeed, every level of descent except the
/// final leaf must be a mapping; the leaf may be any YAML kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariablesDocument {
    root: Value,
}

impl VariablesDocument {
    /// Creates a document from a parsed YAML value.
    #[must_use]
    pub const fn new(root: Value) -> Self {
        Self { root }
    }

    /// The document root.
    #[must_use]
    pub const fn root(&self) -> &Value {
        &self.root
    }

    /// Returns the value stored at `path`, unchanged.
    ///
    /// Keys are looked up as YAML strings; mappings keyed by other
    /// scalar kinds do not match.
    ///
    /// # Errors
    ///
    /// Returns [`KeyPathError::NotAMapping`] if an intermediate value
    /// is not a mapping, or [`KeyPathError::MissingKey`] if a mapping
    /// lacks the requested key.
    pub fn value_at(&self, path: &KeyPath) -> Result<&Value, KeyPathError> {
        let mut current = &self.root;

        for (depth, segment) in path.segments().iter().enumerate() {
            let mapping = current
                .as_mapping()
                .ok_or_else(|| KeyPathError::NotAMapping(path.prefix(depth + 1)))?;

            current = mapping
                .get(Value::String(segment.clone()))
                .ok_or_else(|| KeyPathError::MissingKey(path.prefix(depth + 1)))?;
        }

        Ok(current)
    }
}

impl From<Value> for VariablesDocument {
    fn from(root: Value) -> Self {
        Self::new(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn document(yaml: &str) -> VariablesDocument {
        serde_yaml::from_str(yaml).expect("valid test YAML")
    }

    fn path(segments: &[&str]) -> KeyPath {
        KeyPath::new(segments.iter().map(|s| (*s).to_owned()).collect())
    }

    #[test]
    fn test_value_at_returns_scalar_leaf() {
        let doc = document("a:\n  b:\n    c: 42\n");

        let value = doc.value_at(&path(&["a", "b", "c"])).expect("present");
        assert_eq!(value, &Value::from(42));
    }

    #[test]
    fn test_value_at_returns_leaf_unchanged() {
        let doc = document("prod:\n  api:\n    subnets:\n      - 10.0.0.0/24\n      - 10.0.1.0/24\n");

        let value = doc.value_at(&path(&["prod", "api", "subnets"])).expect("present");
        let expected: Value =
            serde_yaml::from_str("- 10.0.0.0/24\n- 10.0.1.0/24\n").expect("valid test YAML");
        assert_eq!(value, &expected);
    }

    #[test]
    fn test_value_at_can_stop_at_mapping() {
        let doc = document("a:\n  b:\n    c: 1\n");

        let value = doc.value_at(&path(&["a", "b"])).expect("present");
        assert!(value.is_mapping());
    }

    #[test]
    fn test_missing_key_reports_failed_path() {
        let doc = document("a:\n  b:\n    c: 42\n");

        let err = doc.value_at(&path(&["a", "b", "z"])).expect_err("absent");
        assert_eq!(err, KeyPathError::MissingKey("a/b/z".into()));
    }

    #[test]
    fn test_missing_intermediate_key() {
        let doc = document("a:\n  b: 1\n");

        let err = doc.value_at(&path(&["a", "x", "c"])).expect_err("absent");
        assert_eq!(err, KeyPathError::MissingKey("a/x".into()));
    }

    #[test]
    fn test_scalar_intermediate_is_not_a_mapping() {
        let doc = document("a:\n  b: 1\n");

        let err = doc.value_at(&path(&["a", "b", "c"])).expect_err("scalar");
        assert_eq!(err, KeyPathError::NotAMapping("a/b/c".into()));
    }

    #[test]
    fn test_null_document_fails_first_descent() {
        let doc = VariablesDocument::new(Value::Null);

        let err = doc.value_at(&path(&["a"])).expect_err("null root");
        assert_eq!(err, KeyPathError::NotAMapping("a".into()));
    }

    #[test]
    fn test_non_string_keys_do_not_match() {
        // The mapping key is the integer 1, not the string "1".
        let doc = document("a:\n  1: one\n");

        let err = doc.value_at(&path(&["a", "1"])).expect_err("typed key");
        assert_eq!(err, KeyPathError::MissingKey("a/1".into()));
    }

    #[test]
    fn test_empty_path_returns_root() {
        let doc = document("a: 1\n");

        let value = doc.value_at(&KeyPath::new(Vec::new())).expect("root");
        assert_eq!(value, doc.root());
    }
}
