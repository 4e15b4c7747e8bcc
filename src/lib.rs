//! # refdoc
//!
//! `refdoc` is a configuration-driven reference documentation generator.
//! A configuration file names one or more *references*; each reference
//! selects a set of classes from a class-metadata index, runs a pluggable
//! parser over every selected class, and renders the collected metadata
//! through a text template into an output file.
//!
//! ## Features
//!
//! - **Class selection**: document all known classes, the subclasses of a
//!   parent class, or the implementers of an interface, optionally
//!   filtered by a name pattern. Abstract classes are always excluded.
//! - **Pluggable parsers**: parser variants are registered under string
//!   keys and chosen per reference in configuration; every variant fills
//!   the same fixed extraction pipeline (title, description, arguments,
//!   code examples, deprecation note).
//! - **Templated output**: rendering goes through `minijinja`, with an
//!   embedded default template and per-reference overrides.
//! - **Explicit collaborators**: the class index and the parser registry
//!   are injected into the renderer, never read from ambient state.
//!
//! ## Quick Start
//!
//! ```rust
//! use refdoc::{ClassGraph, ClassSelector, Result};
//!
//! fn main() -> Result<()> {
//!     // The class index is usually loaded from a JSON manifest file.
//!     let graph = ClassGraph::from_manifest_str(
//!         r#"{"classes": [
//!             {"name": "AbstractValidator", "abstract": true,
//!              "interfaces": ["ValidatorInterface"]},
//!             {"name": "NotEmptyValidator", "parent": "AbstractValidator"}
//!         ]}"#,
//!     )?;
//!
//!     // Select every concrete implementer of an interface.
//!     let selector = ClassSelector {
//!         interface: Some("ValidatorInterface".to_string()),
//!         ..Default::default()
//!     };
//!     let affected = selector.resolve(&graph)?;
//!     assert_eq!(affected, vec!["NotEmptyValidator"]);
//!     Ok(())
//! }
//! ```
//!
//! ## Rendering references
//!
//! ```rust,no_run
//! use refdoc::{ClassGraph, ParserRegistry, ReferenceRenderer, Result, Settings};
//! use std::path::Path;
//!
//! fn main() -> Result<()> {
//!     let settings = Settings::from_file(Path::new("refdoc.toml"))?;
//!     let graph = ClassGraph::from_manifest_file(Path::new("classes.json"))?;
//!     let registry = ParserRegistry::with_builtins();
//!
//!     let renderer = ReferenceRenderer::new(&settings, &graph, &registry);
//!
//!     // Render one named reference, or pass None for all of them.
//!     renderer.render(Some("validators"))?;
//!     Ok(())
//! }
//! ```
//!
//! ## Custom parser variants
//!
//! Implement [`ClassParser`] and register it under a key; references pick
//! it up via `parser.implementation` in configuration:
//!
//! ```rust
//! use refdoc::{
//!     ArgumentDefinition, ClassParser, CodeExample, ParserRegistry, ReflectedClass, Result,
//! };
//!
//! struct ShoutingParser;
//!
//! impl ClassParser for ShoutingParser {
//!     fn title(&self, class: &ReflectedClass<'_>) -> Result<String> {
//!         Ok(class.name().to_uppercase())
//!     }
//!
//!     fn description(&self, class: &ReflectedClass<'_>) -> Result<String> {
//!         Ok(class.description().unwrap_or_default())
//!     }
//!
//!     fn argument_definitions(
//!         &self,
//!         class: &ReflectedClass<'_>,
//!     ) -> Result<Vec<ArgumentDefinition>> {
//!         Ok(class.argument_definitions())
//!     }
//!
//!     fn code_examples(&self, class: &ReflectedClass<'_>) -> Result<Vec<CodeExample>> {
//!         Ok(class.code_examples())
//!     }
//! }
//!
//! let mut registry = ParserRegistry::with_builtins();
//! registry.register("shouting", |_options| Box::new(ShoutingParser));
//! ```
//!
//! ## Error Handling
//!
//! The crate uses a custom [`Result`] type wrapping all failure cases.
//! Configuration errors (an unconfigured reference name, an unregistered
//! parser key, a bad name pattern) and collaborator failures (IO,
//! template rendering) are not retried; rendering multiple references
//! stops at the first failure.

mod config;
mod error;
mod model;
mod parser;
mod reflection;
mod render;
mod selector;

pub use config::{ParserConfig, ReferenceConfig, Settings};
pub use error::{Error, Result};
pub use model::{ArgumentDefinition, ClassReference, CodeExample};
pub use parser::{parse, ClassParser, DocBlockParser, ParserFactory, ParserRegistry};
pub use reflection::{ClassGraph, ClassIndex, ClassMetadata, ReflectedClass};
pub use render::{resolve_affected_classes, ReferenceRenderer};
pub use selector::ClassSelector;
