//! The `Stack`: package name to version specifier.
//!
//! A specifier is either a bare version (`2.1.0`) or a full requirement
//! string carrying a comparison operator (`ultralytics>=8.3.40`). The
//! token rule in [`requirement_token`] is shared by the install command and
//! every manifest writer.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Characters that mark a specifier as a constraint expression.
pub const COMPARISON_OPERATORS: [char; 5] = ['>', '<', '=', '~', '!'];

/// Prefix of every generated install command.
pub const PIP_INSTALL_PREFIX: &str = "pip install ";

/// Returns true when `spec` already carries a comparison operator.
pub fn has_comparison_operator(spec: &str) -> bool {
    spec.contains(COMPARISON_OPERATORS)
}

/// Store a constraint as a full requirement string.
///
/// A value that starts with an operator (`>=1.26`) gets the package name
/// prepended; anything else is returned trimmed.
pub fn qualify_specifier(name: &str, spec: &str) -> String {
    let spec = spec.trim();
    if spec.starts_with(COMPARISON_OPERATORS) {
        format!("{name}{spec}")
    } else {
        spec.to_string()
    }
}

/// Build the installable token for one stack entry.
///
/// Specifiers with an operator are passed through (named if they were
/// operator-only), bare versions become `name==version`.
pub fn requirement_token(name: &str, spec: &str) -> String {
    let spec = qualify_specifier(name, spec);
    if has_comparison_operator(&spec) {
        spec
    } else {
        format!("{name}=={spec}")
    }
}

/// Insertion-ordered mapping of package name to version specifier.
///
/// At most one entry exists per name. Inserting an existing name overwrites
/// its value and keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stack {
    entries: IndexMap<String, String>,
}

impl Stack {
    /// Create an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite one entry, returning the previous specifier.
    pub fn insert(&mut self, name: impl Into<String>, spec: impl Into<String>) -> Option<String> {
        self.entries.insert(name.into(), spec.into())
    }

    /// Merge `other` into `self`; entries of `other` win on conflicts.
    pub fn merge(&mut self, other: &Self) {
        for (name, spec) in &other.entries {
            self.entries.insert(name.clone(), spec.clone());
        }
    }

    /// Look up the specifier for a package.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Package names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Installable tokens in stack order.
    pub fn install_tokens(&self) -> Vec<String> {
        self.iter()
            .map(|(name, spec)| requirement_token(name, spec))
            .collect()
    }

    /// The `pip install ...` command line for this stack.
    pub fn install_command(&self) -> String {
        format!("{PIP_INSTALL_PREFIX}{}", self.install_tokens().join(" "))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Stack {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Stack {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, spec) in iter {
            self.insert(name, spec);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requirement_token_pins_bare_versions() {
        assert_eq!(requirement_token("torch", "2.1.0"), "torch==2.1.0");
        assert_eq!(requirement_token("nltk", " 3.8.1 "), "nltk==3.8.1");
    }

    #[test]
    fn test_operator_only_specifier_gets_package_name() {
        assert_eq!(qualify_specifier("numpy", ">=1.26"), "numpy>=1.26");
        assert_eq!(qualify_specifier("numpy", " ~=1.26 "), "numpy~=1.26");
        assert_eq!(qualify_specifier("numpy", "numpy>=1.26"), "numpy>=1.26");
        assert_eq!(qualify_specifier("numpy", "1.26.4"), "1.26.4");
        assert_eq!(requirement_token("numpy", ">=1.26"), "numpy>=1.26");
    }

    #[test]
    fn test_requirement_token_passes_constraints_through() {
        assert_eq!(
            requirement_token("ultralytics", "ultralytics>=10.0.0,<11.0.0"),
            "ultralytics>=10.0.0,<11.0.0"
        );
        assert_eq!(requirement_token("numpy", "numpy~=1.26"), "numpy~=1.26");
    }

    #[test]
    fn test_merge_is_last_writer_wins_and_keeps_position() {
        let mut base: Stack = [("torch", "1.0"), ("nltk", "3.8.1")].into_iter().collect();
        let update: Stack = [("torch", "2.0"), ("spacy", "3.7.5")].into_iter().collect();

        base.merge(&update);

        assert_eq!(base.get("torch"), Some("2.0"));
        let names: Vec<&str> = base.names().collect();
        assert_eq!(names, vec!["torch", "nltk", "spacy"]);
    }

    #[test]
    fn test_install_command_follows_stack_order() {
        let stack: Stack = [
            ("ultralytics", "ultralytics>=8.0.0,<9.0.0"),
            ("torch", "2.1.0"),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            stack.install_command(),
            "pip install ultralytics>=8.0.0,<9.0.0 torch==2.1.0"
        );
    }

    #[test]
    fn test_empty_stack_command() {
        assert_eq!(Stack::new().install_command(), "pip install ");
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let stack: Stack = [("torch", "2.1.0")].into_iter().collect();
        let json = serde_json::to_string(&stack).unwrap();
        assert_eq!(json, r#"{"torch":"2.1.0"}"#);
    }
}
