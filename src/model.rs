use serde::{Deserialize, Serialize};

/// The parsed-metadata record for one documented class.
///
/// Created once per class per render pass, immutable after construction,
/// and handed to the template renderer together with the class name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassReference {
    /// The title shown in the rendered documentation
    pub title: String,

    /// The long description of the class
    pub description: String,

    /// The arguments accepted by the class, in declaration order
    pub arguments: Vec<ArgumentDefinition>,

    /// Code examples demonstrating the class, in declaration order
    pub code_examples: Vec<CodeExample>,

    /// Deprecation note, absent when the class is not deprecated
    pub deprecation_note: Option<String>,
}

impl ClassReference {
    /// Creates a new class reference from the five extracted values.
    ///
    /// # Examples
    ///
    /// ```
    /// use refdoc::ClassReference;
    ///
    /// let reference = ClassReference::new(
    ///     "NotEmpty".to_string(),
    ///     "Validator for not-empty values".to_string(),
    ///     vec![],
    ///     vec![],
    ///     None,
    /// );
    ///
    /// assert_eq!(reference.title, "NotEmpty");
    /// assert!(reference.deprecation_note.is_none());
    /// ```
    pub fn new(
        title: String,
        description: String,
        arguments: Vec<ArgumentDefinition>,
        code_examples: Vec<CodeExample>,
        deprecation_note: Option<String>,
    ) -> Self {
        Self {
            title,
            description,
            arguments,
            code_examples,
            deprecation_note,
        }
    }
}

/// One argument accepted by a documented class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentDefinition {
    /// The name of the argument
    pub name: String,

    /// The declared type of the argument
    #[serde(rename = "type")]
    pub type_name: String,

    /// The documentation for the argument
    #[serde(default)]
    pub description: String,

    /// Whether the argument must be supplied
    #[serde(default)]
    pub required: bool,

    /// Default value used when the argument is omitted
    #[serde(default)]
    pub default_value: Option<String>,
}

/// A code example attached to a documented class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeExample {
    /// The title of the example
    pub title: String,

    /// The example code itself
    pub snippet: String,

    /// The output the example produces, if any
    #[serde(default)]
    pub output: Option<String>,
}
