use crate::selector::ClassSelector;
use crate::{Error, Result};
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// The root of the reference configuration file.
///
/// References are kept as an ordered list so "render everything" processes
/// them in file order. Lookup by name scans the list; configurations are
/// small enough that this is never a concern.
///
/// # Examples
///
/// ```
/// use refdoc::Settings;
///
/// let settings = Settings::from_str(
///     r#"
///     [[references]]
///     name = "validators"
///     save_path = "docs/validators.txt"
///
///     [references.affected_classes]
///     interface = "ValidatorInterface"
///
///     [references.parser]
///     implementation = "docblock"
///     "#,
/// )?;
///
/// assert_eq!(settings.reference_names(), vec!["validators"]);
/// assert!(settings.reference("validators").is_some());
/// # Ok::<(), refdoc::Error>(())
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// All configured references, in file order
    #[serde(default)]
    pub references: Vec<ReferenceConfig>,
}

/// One named documentation-generation task.
#[derive(Debug, Clone, Deserialize)]
pub struct ReferenceConfig {
    /// The reference name, unique within the configuration
    pub name: String,

    /// Which classes are in scope for this reference
    #[serde(default)]
    pub affected_classes: ClassSelector,

    /// Which parser variant extracts the class metadata
    pub parser: ParserConfig,

    /// Template to render with; the embedded default is used when absent
    #[serde(default)]
    pub template_path: Option<PathBuf>,

    /// Document title; the reference name is used when absent
    #[serde(default)]
    pub title: Option<String>,

    /// Where the rendered output is written
    pub save_path: PathBuf,
}

/// Parser selection for one reference.
#[derive(Debug, Clone, Deserialize)]
pub struct ParserConfig {
    /// Registry key of the parser variant
    pub implementation: String,

    /// Free-form options handed to the parser factory
    #[serde(default)]
    pub options: BTreeMap<String, String>,
}

impl Settings {
    /// Parses settings from a TOML string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Loads settings from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Looks up one reference by name.
    pub fn reference(&self, name: &str) -> Option<&ReferenceConfig> {
        self.references.iter().find(|r| r.name == name)
    }

    /// All configured reference names, in file order.
    pub fn reference_names(&self) -> Vec<&str> {
        self.references.iter().map(|r| r.name.as_str()).collect()
    }

    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for reference in &self.references {
            if !seen.insert(reference.name.as_str()) {
                return Err(Error::InvalidConfig(format!(
                    "duplicate reference \"{}\"",
                    reference.name
                )));
            }
        }
        Ok(())
    }
}
