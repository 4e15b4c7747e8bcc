use super::{ClassParser, DocBlockParser};
use crate::{Error, Result};
use std::collections::BTreeMap;

/// Factory function turning configured options into a parser variant.
pub type ParserFactory = fn(&BTreeMap<String, String>) -> Box<dyn ClassParser>;

/// Registry mapping configured parser keys to factory functions.
///
/// Parser variants are selected by a string key in the reference
/// configuration. Looking up an unregistered key is a configuration error,
/// not a crash.
///
/// # Examples
///
/// ```
/// use refdoc::ParserRegistry;
/// use std::collections::BTreeMap;
///
/// let registry = ParserRegistry::with_builtins();
/// assert!(registry.create("docblock", &BTreeMap::new()).is_ok());
/// assert!(registry.create("view-helper", &BTreeMap::new()).is_err());
/// ```
#[derive(Default)]
pub struct ParserRegistry {
    factories: BTreeMap<String, ParserFactory>,
}

impl ParserRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with the built-in parser variants registered.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("docblock", |options| Box::new(DocBlockParser::new(options)));
        registry
    }

    /// Registers a factory under the given key, replacing any previous one.
    pub fn register(&mut self, key: impl Into<String>, factory: ParserFactory) {
        self.factories.insert(key.into(), factory);
    }

    /// Instantiates the parser registered under `key` with the given
    /// options.
    pub fn create(
        &self,
        key: &str,
        options: &BTreeMap<String, String>,
    ) -> Result<Box<dyn ClassParser>> {
        match self.factories.get(key) {
            Some(factory) => Ok(factory(options)),
            None => Err(Error::UnknownParser(key.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ArgumentDefinition, CodeExample};
    use crate::reflection::{ClassGraph, ReflectedClass};

    struct NullParser;

    impl ClassParser for NullParser {
        fn title(&self, class: &ReflectedClass<'_>) -> Result<String> {
            Ok(class.name().to_string())
        }

        fn description(&self, _class: &ReflectedClass<'_>) -> Result<String> {
            Ok(String::new())
        }

        fn argument_definitions(
            &self,
            _class: &ReflectedClass<'_>,
        ) -> Result<Vec<ArgumentDefinition>> {
            Ok(vec![])
        }

        fn code_examples(&self, _class: &ReflectedClass<'_>) -> Result<Vec<CodeExample>> {
            Ok(vec![])
        }
    }

    #[test]
    fn test_builtins_contain_docblock() {
        let registry = ParserRegistry::with_builtins();
        assert!(registry.create("docblock", &BTreeMap::new()).is_ok());
    }

    #[test]
    fn test_unknown_key_is_a_configuration_error() {
        let registry = ParserRegistry::with_builtins();
        let result = registry.create("view-helper", &BTreeMap::new());
        assert!(matches!(result, Err(Error::UnknownParser(key)) if key == "view-helper"));
    }

    #[test]
    fn test_registered_factory_is_used() {
        let mut registry = ParserRegistry::new();
        registry.register("null", |_| Box::new(NullParser));
        let parser = registry.create("null", &BTreeMap::new()).unwrap();

        let graph = ClassGraph::from_manifest_str(r#"{"classes": [{"name": "A"}]}"#).unwrap();
        let class = ReflectedClass::new("A", &graph);
        assert_eq!(parser.title(&class).unwrap(), "A");
    }
}
