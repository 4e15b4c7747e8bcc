mod docblock;
mod registry;

pub use docblock::DocBlockParser;
pub use registry::{ParserFactory, ParserRegistry};

use crate::model::{ArgumentDefinition, ClassReference, CodeExample};
use crate::reflection::ReflectedClass;
use crate::Result;

/// Pluggable extractor turning one class's metadata into a
/// [`ClassReference`].
///
/// Every variant must supply the four mandatory extractions; the
/// deprecation note has a default implementation that variants may
/// override. The surrounding pipeline, [`parse`], is fixed and not part of
/// the trait, so variants can vary only the content of each extraction,
/// never the sequence.
pub trait ClassParser {
    /// Derive the documentation title for the class.
    fn title(&self, class: &ReflectedClass<'_>) -> Result<String>;

    /// Derive the long description for the class.
    fn description(&self, class: &ReflectedClass<'_>) -> Result<String>;

    /// Derive the ordered argument list for the class.
    fn argument_definitions(&self, class: &ReflectedClass<'_>) -> Result<Vec<ArgumentDefinition>>;

    /// Derive the ordered code examples for the class.
    fn code_examples(&self, class: &ReflectedClass<'_>) -> Result<Vec<CodeExample>>;

    /// Derive the deprecation note for the class.
    ///
    /// The default joins the values of the class's `deprecated` tag with
    /// `", "`, and returns `None` when the tag is absent.
    fn deprecation_note(&self, class: &ReflectedClass<'_>) -> Result<Option<String>> {
        if class.is_tagged_with("deprecated") {
            Ok(Some(class.tag_values("deprecated").join(", ")))
        } else {
            Ok(None)
        }
    }
}

/// Runs the fixed extraction pipeline for one class.
///
/// Order: title, description, arguments, code examples, deprecation note,
/// then assembly of the immutable [`ClassReference`].
///
/// # Examples
///
/// ```
/// use refdoc::{parse, ClassGraph, DocBlockParser, ReflectedClass};
/// use std::collections::BTreeMap;
///
/// let graph = ClassGraph::from_manifest_str(
///     r#"{"classes": [
///         {"name": "NotEmptyValidator",
///          "description": "Checks that a value is not empty",
///          "tags": {"deprecated": ["v1.2", "use X instead"]}}
///     ]}"#,
/// )?;
///
/// let parser = DocBlockParser::new(&BTreeMap::new());
/// let class = ReflectedClass::new("NotEmptyValidator", &graph);
/// let reference = parse(&parser, &class)?;
///
/// assert_eq!(reference.title, "NotEmptyValidator");
/// assert_eq!(reference.deprecation_note.as_deref(), Some("v1.2, use X instead"));
/// # Ok::<(), refdoc::Error>(())
/// ```
pub fn parse(parser: &dyn ClassParser, class: &ReflectedClass<'_>) -> Result<ClassReference> {
    let title = parser.title(class)?;
    let description = parser.description(class)?;
    let arguments = parser.argument_definitions(class)?;
    let code_examples = parser.code_examples(class)?;
    let deprecation_note = parser.deprecation_note(class)?;
    Ok(ClassReference::new(
        title,
        description,
        arguments,
        code_examples,
        deprecation_note,
    ))
}
