use crate::reflection::ClassIndex;
use crate::Result;
use regex::Regex;
use serde::Deserialize;
use tracing::debug;

/// Rule set determining which classes are in scope for a reference.
///
/// Exactly one of three modes applies: subclasses of `parent_class_name`
/// when it is set, otherwise implementers of `interface` when it is set,
/// otherwise every known class. Abstract classes are always excluded, and
/// an optional name pattern removes classes whose name it does not match.
///
/// # Examples
///
/// ```
/// use refdoc::{ClassGraph, ClassSelector};
///
/// let graph = ClassGraph::from_manifest_str(
///     r#"{"classes": [
///         {"name": "AbstractValidator", "abstract": true,
///          "interfaces": ["ValidatorInterface"]},
///         {"name": "NotEmptyValidator", "parent": "AbstractValidator"},
///         {"name": "EmailAddressValidator", "parent": "AbstractValidator"}
///     ]}"#,
/// )?;
///
/// let selector = ClassSelector {
///     interface: Some("ValidatorInterface".to_string()),
///     ..Default::default()
/// };
///
/// // The abstract base is excluded even though it matches the interface.
/// assert_eq!(
///     selector.resolve(&graph)?,
///     vec!["NotEmptyValidator", "EmailAddressValidator"]
/// );
/// # Ok::<(), refdoc::Error>(())
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClassSelector {
    /// Select all subclasses of this class
    #[serde(default)]
    pub parent_class_name: Option<String>,

    /// Select all implementers of this interface; ignored when
    /// `parent_class_name` is set
    #[serde(default)]
    pub interface: Option<String>,

    /// Keep only classes whose name matches this regular expression
    #[serde(default)]
    pub class_name_pattern: Option<String>,
}

impl ClassSelector {
    /// Resolves the affected class names against the given index.
    ///
    /// The surviving names keep their discovery order; no further ordering
    /// is applied.
    pub fn resolve(&self, index: &dyn ClassIndex) -> Result<Vec<String>> {
        let candidates = if let Some(parent) = &self.parent_class_name {
            index.subclasses_of(parent)
        } else if let Some(interface) = &self.interface {
            index.implementors_of(interface)
        } else {
            index.all_class_names()
        };

        let pattern = self
            .class_name_pattern
            .as_deref()
            .map(Regex::new)
            .transpose()?;

        let affected: Vec<String> = candidates
            .into_iter()
            .filter(|name| !index.is_abstract(name))
            .filter(|name| pattern.as_ref().is_none_or(|re| re.is_match(name)))
            .collect();

        debug!(count = affected.len(), "resolved affected classes");
        Ok(affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflection::ClassGraph;
    use crate::Error;

    fn sample_graph() -> ClassGraph {
        ClassGraph::from_manifest_str(
            r#"{"classes": [
                {"name": "AbstractValidator", "abstract": true,
                 "interfaces": ["ValidatorInterface"]},
                {"name": "NotEmptyValidator", "parent": "AbstractValidator"},
                {"name": "EmailAddressValidator", "parent": "AbstractValidator"},
                {"name": "AbstractViewHelper", "abstract": true},
                {"name": "TextViewHelper", "parent": "AbstractViewHelper"}
            ]}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_parent_mode_excludes_abstract_and_foreign_classes() {
        let graph = sample_graph();
        let selector = ClassSelector {
            parent_class_name: Some("AbstractValidator".to_string()),
            ..Default::default()
        };
        let affected = selector.resolve(&graph).unwrap();
        assert_eq!(affected, vec!["NotEmptyValidator", "EmailAddressValidator"]);
    }

    #[test]
    fn test_parent_wins_over_interface() {
        let graph = sample_graph();
        let selector = ClassSelector {
            parent_class_name: Some("AbstractViewHelper".to_string()),
            interface: Some("ValidatorInterface".to_string()),
            ..Default::default()
        };
        assert_eq!(selector.resolve(&graph).unwrap(), vec!["TextViewHelper"]);
    }

    #[test]
    fn test_all_classes_mode() {
        let graph = sample_graph();
        let selector = ClassSelector::default();
        let affected = selector.resolve(&graph).unwrap();
        assert_eq!(
            affected,
            vec!["NotEmptyValidator", "EmailAddressValidator", "TextViewHelper"]
        );
    }

    #[test]
    fn test_pattern_removes_non_matching_names() {
        let graph = sample_graph();
        let selector = ClassSelector {
            class_name_pattern: Some("Validator$".to_string()),
            ..Default::default()
        };
        let affected = selector.resolve(&graph).unwrap();
        assert_eq!(affected, vec!["NotEmptyValidator", "EmailAddressValidator"]);
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        let graph = sample_graph();
        let selector = ClassSelector {
            class_name_pattern: Some("(".to_string()),
            ..Default::default()
        };
        assert!(matches!(selector.resolve(&graph), Err(Error::Pattern(_))));
    }
}
