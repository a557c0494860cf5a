//! Key paths into a variables document.

use std::fmt;

use crate::deployment::{EnvironmentContext, StackContext};

/// The ordered list of mapping keys used to descend into a parsed
/// document to reach a target value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// Creates a key path from explicit segments.
    #[must_use]
    pub const fn new(segments: Vec<String>) -> Self {
        Self { segments }
    }

    /// Composes the key path for a stack: the environment-path
    /// segments, in order, followed by the stack name.
    #[must_use]
    pub fn for_stack(environment: &EnvironmentContext, stack: &StackContext) -> Self {
        let mut segments: Vec<String> =
            environment.path_segments().map(str::to_owned).collect();
        segments.push(stack.name.clone());
        Self { segments }
    }

    /// The segments, in descent order.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Slash-joined prefix of the first `len` segments.
    pub(crate) fn prefix(&self, len: usize) -> String {
        self.segments[..len].join("/")
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composition_preserves_order() {
        let env = EnvironmentContext::new("/project", "a/b");
        let stack = StackContext::new("c");

        let path = KeyPath::for_stack(&env, &stack);
        assert_eq!(path.segments(), ["a", "b", "c"]);
    }

    #[test]
    fn test_stack_name_is_final_segment() {
        let env = EnvironmentContext::new("/project", "prod/eu");
        let stack = StackContext::new("api");

        let path = KeyPath::for_stack(&env, &stack);
        assert_eq!(path.segments().last().map(String::as_str), Some("api"));
    }

    #[test]
    fn test_empty_environment_path_keeps_empty_segment() {
        let env = EnvironmentContext::new("/project", "");
        let stack = StackContext::new("api");

        let path = KeyPath::for_stack(&env, &stack);
        assert_eq!(path.segments(), ["", "api"]);
    }

    #[test]
    fn test_display_joins_with_slashes() {
        let path = KeyPath::new(vec!["prod".into(), "eu".into(), "api".into()]);
        assert_eq!(path.to_string(), "prod/eu/api");
    }

    #[test]
    fn test_prefix() {
        let path = KeyPath::new(vec!["a".into(), "b".into(), "c".into()]);
        assert_eq!(path.prefix(1), "a");
        assert_eq!(path.prefix(3), "a/b/c");
    }
}
