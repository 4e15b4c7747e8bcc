use super::ClassParser;
use crate::model::{ArgumentDefinition, CodeExample};
use crate::reflection::ReflectedClass;
use crate::Result;
use std::collections::BTreeMap;

/// Generic parser variant reading metadata straight from the class index.
///
/// The title comes from a tag (by default `title`) when present, falling
/// back to the bare class name. Description, arguments, and code examples
/// are taken from the index as-is.
///
/// Options:
/// - `title_tag`: name of the tag to read the title from.
pub struct DocBlockParser {
    title_tag: String,
}

impl DocBlockParser {
    /// Creates the parser from its configured options.
    pub fn new(options: &BTreeMap<String, String>) -> Self {
        let title_tag = options
            .get("title_tag")
            .cloned()
            .unwrap_or_else(|| "title".to_string());
        Self { title_tag }
    }
}

impl ClassParser for DocBlockParser {
    fn title(&self, class: &ReflectedClass<'_>) -> Result<String> {
        if class.is_tagged_with(&self.title_tag) {
            Ok(class.tag_values(&self.title_tag).join(" "))
        } else {
            Ok(class.name().to_string())
        }
    }

    fn description(&self, class: &ReflectedClass<'_>) -> Result<String> {
        Ok(class.description().unwrap_or_default())
    }

    fn argument_definitions(&self, class: &ReflectedClass<'_>) -> Result<Vec<ArgumentDefinition>> {
        Ok(class.argument_definitions())
    }

    fn code_examples(&self, class: &ReflectedClass<'_>) -> Result<Vec<CodeExample>> {
        Ok(class.code_examples())
    }
}
