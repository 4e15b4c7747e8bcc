use crate::{ArgumentDefinition, CodeExample, Error, Result};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

/// Introspection facility over a set of known classes.
///
/// This is the collaborator the renderer consults to discover classes and
/// read their metadata. It is injected explicitly wherever it is needed;
/// there is no ambient global index.
///
/// All listing operations return class names in *discovery order*, i.e. the
/// order in which the backing store enumerates them. Callers rely on that
/// order being stable within one render pass.
pub trait ClassIndex {
    /// List every known class name.
    fn all_class_names(&self) -> Vec<String>;

    /// List the names of all classes below `parent` in the inheritance
    /// tree, transitively.
    fn subclasses_of(&self, parent: &str) -> Vec<String>;

    /// List the names of all classes implementing `interface`, directly or
    /// through an ancestor.
    fn implementors_of(&self, interface: &str) -> Vec<String>;

    /// Whether the named class is abstract.
    fn is_abstract(&self, class_name: &str) -> bool;

    /// Whether the named class carries the given tag.
    fn is_tagged_with(&self, class_name: &str, tag: &str) -> bool;

    /// The values recorded for the given tag on the named class.
    fn tag_values(&self, class_name: &str, tag: &str) -> Vec<String>;

    /// The prose description of the named class.
    fn class_description(&self, class_name: &str) -> Option<String>;

    /// The declared arguments of the named class.
    fn argument_definitions(&self, class_name: &str) -> Vec<ArgumentDefinition>;

    /// The code examples attached to the named class.
    fn code_examples(&self, class_name: &str) -> Vec<CodeExample>;
}

/// Metadata for a single class, as recorded in the manifest.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassMetadata {
    /// The fully qualified class name
    pub name: String,

    /// The direct parent class, if any
    #[serde(default)]
    pub parent: Option<String>,

    /// Interfaces implemented directly by this class
    #[serde(default)]
    pub interfaces: Vec<String>,

    /// Whether the class is abstract
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,

    /// The prose description of the class
    #[serde(default)]
    pub description: String,

    /// Tags attached to the class, each with zero or more values
    #[serde(default)]
    pub tags: BTreeMap<String, Vec<String>>,

    /// Declared arguments, in declaration order
    #[serde(default)]
    pub arguments: Vec<ArgumentDefinition>,

    /// Code examples, in declaration order
    #[serde(default)]
    pub examples: Vec<CodeExample>,
}

#[derive(Debug, Deserialize)]
struct ClassManifest {
    classes: Vec<ClassMetadata>,
}

/// In-memory [`ClassIndex`] backed by a JSON class manifest.
///
/// Classes are kept in manifest order; all listing operations preserve it.
///
/// # Examples
///
/// ```
/// use refdoc::{ClassGraph, ClassIndex};
///
/// let graph = ClassGraph::from_manifest_str(
///     r#"{"classes": [
///         {"name": "AbstractValidator", "abstract": true},
///         {"name": "NotEmptyValidator", "parent": "AbstractValidator",
///          "interfaces": ["ValidatorInterface"]}
///     ]}"#,
/// )?;
///
/// assert_eq!(graph.subclasses_of("AbstractValidator"), vec!["NotEmptyValidator"]);
/// assert!(graph.is_abstract("AbstractValidator"));
/// # Ok::<(), refdoc::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct ClassGraph {
    classes: Vec<ClassMetadata>,
    by_name: HashMap<String, usize>,
}

impl ClassGraph {
    /// Builds a graph from already-deserialized metadata records.
    ///
    /// Duplicate class names are rejected: the renderer's per-pass mapping
    /// is keyed by class name and must have unique keys.
    pub fn new(classes: Vec<ClassMetadata>) -> Result<Self> {
        let mut by_name = HashMap::with_capacity(classes.len());
        for (index, class) in classes.iter().enumerate() {
            if by_name.insert(class.name.clone(), index).is_some() {
                return Err(Error::InvalidConfig(format!(
                    "duplicate class \"{}\" in manifest",
                    class.name
                )));
            }
        }
        Ok(Self { classes, by_name })
    }

    /// Loads a graph from a JSON manifest string.
    pub fn from_manifest_str(manifest: &str) -> Result<Self> {
        let manifest: ClassManifest = serde_json::from_str(manifest)?;
        Self::new(manifest.classes)
    }

    /// Loads a graph from a JSON manifest file.
    pub fn from_manifest_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_manifest_str(&content)
    }

    fn get(&self, class_name: &str) -> Option<&ClassMetadata> {
        self.by_name.get(class_name).map(|&i| &self.classes[i])
    }

    /// Whether `class_name` has `ancestor` somewhere in its parent chain.
    fn descends_from(&self, class_name: &str, ancestor: &str) -> bool {
        let mut current = self.get(class_name).and_then(|c| c.parent.as_deref());
        while let Some(parent) = current {
            if parent == ancestor {
                return true;
            }
            current = self.get(parent).and_then(|c| c.parent.as_deref());
        }
        false
    }

    /// Whether `class_name` or any of its ancestors declares `interface`.
    fn implements(&self, class_name: &str, interface: &str) -> bool {
        let mut current = Some(class_name);
        while let Some(name) = current {
            match self.get(name) {
                Some(class) => {
                    if class.interfaces.iter().any(|i| i == interface) {
                        return true;
                    }
                    current = class.parent.as_deref();
                }
                None => return false,
            }
        }
        false
    }
}

impl ClassIndex for ClassGraph {
    fn all_class_names(&self) -> Vec<String> {
        self.classes.iter().map(|c| c.name.clone()).collect()
    }

    fn subclasses_of(&self, parent: &str) -> Vec<String> {
        self.classes
            .iter()
            .filter(|c| self.descends_from(&c.name, parent))
            .map(|c| c.name.clone())
            .collect()
    }

    fn implementors_of(&self, interface: &str) -> Vec<String> {
        self.classes
            .iter()
            .filter(|c| self.implements(&c.name, interface))
            .map(|c| c.name.clone())
            .collect()
    }

    fn is_abstract(&self, class_name: &str) -> bool {
        self.get(class_name).is_some_and(|c| c.is_abstract)
    }

    fn is_tagged_with(&self, class_name: &str, tag: &str) -> bool {
        self.get(class_name)
            .is_some_and(|c| c.tags.contains_key(tag))
    }

    fn tag_values(&self, class_name: &str, tag: &str) -> Vec<String> {
        self.get(class_name)
            .and_then(|c| c.tags.get(tag))
            .cloned()
            .unwrap_or_default()
    }

    fn class_description(&self, class_name: &str) -> Option<String> {
        self.get(class_name)
            .filter(|c| !c.description.is_empty())
            .map(|c| c.description.clone())
    }

    fn argument_definitions(&self, class_name: &str) -> Vec<ArgumentDefinition> {
        self.get(class_name)
            .map(|c| c.arguments.clone())
            .unwrap_or_default()
    }

    fn code_examples(&self, class_name: &str) -> Vec<CodeExample> {
        self.get(class_name)
            .map(|c| c.examples.clone())
            .unwrap_or_default()
    }
}

/// Handle binding one class name to the index it was discovered in.
///
/// Parsers receive this instead of a bare name so every extraction hook can
/// read the class's metadata without carrying the index around separately.
#[derive(Clone, Copy)]
pub struct ReflectedClass<'a> {
    name: &'a str,
    index: &'a dyn ClassIndex,
}

impl<'a> ReflectedClass<'a> {
    /// Binds `name` to `index`.
    pub fn new(name: &'a str, index: &'a dyn ClassIndex) -> Self {
        Self { name, index }
    }

    /// The class name this handle is bound to.
    pub fn name(&self) -> &str {
        self.name
    }

    /// Whether the class carries the given tag.
    pub fn is_tagged_with(&self, tag: &str) -> bool {
        self.index.is_tagged_with(self.name, tag)
    }

    /// The values recorded for the given tag.
    pub fn tag_values(&self, tag: &str) -> Vec<String> {
        self.index.tag_values(self.name, tag)
    }

    /// The prose description of the class.
    pub fn description(&self) -> Option<String> {
        self.index.class_description(self.name)
    }

    /// The declared arguments of the class.
    pub fn argument_definitions(&self) -> Vec<ArgumentDefinition> {
        self.index.argument_definitions(self.name)
    }

    /// The code examples attached to the class.
    pub fn code_examples(&self) -> Vec<CodeExample> {
        self.index.code_examples(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_graph() -> ClassGraph {
        ClassGraph::from_manifest_str(
            r#"{"classes": [
                {"name": "AbstractValidator", "abstract": true,
                 "interfaces": ["ValidatorInterface"]},
                {"name": "NotEmptyValidator", "parent": "AbstractValidator",
                 "description": "Checks that a value is not empty"},
                {"name": "EmailAddressValidator", "parent": "NotEmptyValidator",
                 "tags": {"deprecated": ["v1.2", "use X instead"]}},
                {"name": "TextViewHelper", "interfaces": ["ViewHelperInterface"]}
            ]}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_all_class_names_preserves_manifest_order() {
        let graph = sample_graph();
        assert_eq!(
            graph.all_class_names(),
            vec![
                "AbstractValidator",
                "NotEmptyValidator",
                "EmailAddressValidator",
                "TextViewHelper"
            ]
        );
    }

    #[test]
    fn test_subclasses_are_transitive() {
        let graph = sample_graph();
        assert_eq!(
            graph.subclasses_of("AbstractValidator"),
            vec!["NotEmptyValidator", "EmailAddressValidator"]
        );
        assert_eq!(
            graph.subclasses_of("NotEmptyValidator"),
            vec!["EmailAddressValidator"]
        );
        assert!(graph.subclasses_of("TextViewHelper").is_empty());
    }

    #[test]
    fn test_implementors_include_inherited_interfaces() {
        let graph = sample_graph();
        assert_eq!(
            graph.implementors_of("ValidatorInterface"),
            vec![
                "AbstractValidator",
                "NotEmptyValidator",
                "EmailAddressValidator"
            ]
        );
        assert_eq!(
            graph.implementors_of("ViewHelperInterface"),
            vec!["TextViewHelper"]
        );
    }

    #[test]
    fn test_tags() {
        let graph = sample_graph();
        assert!(graph.is_tagged_with("EmailAddressValidator", "deprecated"));
        assert!(!graph.is_tagged_with("NotEmptyValidator", "deprecated"));
        assert_eq!(
            graph.tag_values("EmailAddressValidator", "deprecated"),
            vec!["v1.2", "use X instead"]
        );
        assert!(graph.tag_values("NotEmptyValidator", "deprecated").is_empty());
    }

    #[test]
    fn test_description_is_absent_when_empty() {
        let graph = sample_graph();
        assert_eq!(
            graph.class_description("NotEmptyValidator").as_deref(),
            Some("Checks that a value is not empty")
        );
        assert!(graph.class_description("TextViewHelper").is_none());
    }

    #[test]
    fn test_duplicate_class_names_are_rejected() {
        let result = ClassGraph::from_manifest_str(
            r#"{"classes": [{"name": "A"}, {"name": "A"}]}"#,
        );
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }
}
