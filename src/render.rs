use crate::config::{ReferenceConfig, Settings};
use crate::model::ClassReference;
use crate::parser::{self, ParserRegistry};
use crate::reflection::{ClassIndex, ReflectedClass};
use crate::selector::ClassSelector;
use crate::{Error, Result};
use minijinja::{context, Environment};
use serde::Serialize;
use std::fs;
use tracing::{debug, info};

const DEFAULT_TEMPLATE: &str = include_str!("class_reference.txt.jinja");

/// One rendered class as handed to the template.
///
/// The class name travels alongside the flattened reference record so
/// templates can address both.
#[derive(Debug, Serialize)]
struct RenderedClass {
    class_name: String,
    #[serde(flatten)]
    reference: ClassReference,
}

/// Renders reference documentation from configuration.
///
/// Holds the loaded settings plus the two collaborators, the class index
/// and the parser registry, both injected at construction.
pub struct ReferenceRenderer<'a> {
    settings: &'a Settings,
    index: &'a dyn ClassIndex,
    registry: &'a ParserRegistry,
}

impl<'a> ReferenceRenderer<'a> {
    /// Creates a renderer over the given settings and collaborators.
    pub fn new(
        settings: &'a Settings,
        index: &'a dyn ClassIndex,
        registry: &'a ParserRegistry,
    ) -> Self {
        Self {
            settings,
            index,
            registry,
        }
    }

    /// Renders one named reference, or every configured reference in file
    /// order when no name is given.
    ///
    /// A failure on one reference stops the run; later references are not
    /// attempted.
    pub fn render(&self, reference: Option<&str>) -> Result<()> {
        let names = match reference {
            Some(name) => vec![name],
            None => self.settings.reference_names(),
        };
        for name in names {
            // The progress line is emitted before the name is looked up, so
            // an unconfigured name still announces itself first.
            println!("Rendering reference \"{name}\"");
            self.render_one(name)?;
        }
        Ok(())
    }

    /// Renders a single reference and writes its output file.
    pub fn render_one(&self, name: &str) -> Result<()> {
        let reference = self
            .settings
            .reference(name)
            .ok_or_else(|| Error::UnknownReference(name.to_string()))?;

        let class_names = resolve_affected_classes(&reference.affected_classes, self.index)?;
        let class_parser = self
            .registry
            .create(&reference.parser.implementation, &reference.parser.options)?;

        let mut class_references = Vec::with_capacity(class_names.len());
        for class_name in class_names {
            debug!(class = %class_name, "parsing class");
            let class = ReflectedClass::new(&class_name, self.index);
            let parsed = parser::parse(class_parser.as_ref(), &class)?;
            class_references.push(RenderedClass {
                class_name,
                reference: parsed,
            });
        }

        let title = reference.title.as_deref().unwrap_or(name);
        let output = self.render_template(reference, title, &class_references)?;

        // Plain overwrite, no temp-file-and-rename; a crash mid-write can
        // leave a partial file.
        fs::write(&reference.save_path, output)?;
        info!(
            reference = name,
            classes = class_references.len(),
            path = %reference.save_path.display(),
            "reference rendered"
        );
        println!("DONE.");
        Ok(())
    }

    fn render_template(
        &self,
        reference: &ReferenceConfig,
        title: &str,
        class_references: &[RenderedClass],
    ) -> Result<String> {
        let mut env = Environment::new();
        match &reference.template_path {
            Some(path) => {
                let source = fs::read_to_string(path)?;
                env.add_template_owned("reference".to_string(), source)?;
            }
            None => env.add_template("reference", DEFAULT_TEMPLATE)?,
        }
        let template = env.get_template("reference")?;
        let output = template.render(context! { title, class_references })?;
        Ok(output)
    }
}

/// Resolves the affected class names for a selector against an index.
///
/// Thin convenience wrapper around [`ClassSelector::resolve`] for callers
/// that hold a renderer's collaborators but no renderer.
pub fn resolve_affected_classes(
    selector: &ClassSelector,
    index: &dyn ClassIndex,
) -> Result<Vec<String>> {
    selector.resolve(index)
}
