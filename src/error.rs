use std::io;
use thiserror::Error;

/// Error types for the refdoc library.
///
/// This enum represents all possible errors that can occur while loading
/// configuration, resolving class selectors, parsing classes, or rendering
/// references.
///
/// # Examples
///
/// ```
/// use refdoc::Error;
///
/// // Create an IO error
/// let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
/// let error = Error::Io(io_err);
/// assert!(matches!(error, Error::Io(_)));
///
/// // Create an unknown-reference error
/// let error = Error::UnknownReference("view-helpers".to_string());
/// assert!(matches!(error, Error::UnknownReference(_)));
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Template rendering error
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    /// Invalid class name pattern
    #[error("Invalid class name pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Configuration file could not be decoded
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// Class manifest could not be decoded
    #[error("Class manifest error: {0}")]
    Manifest(#[from] serde_json::Error),

    /// Invalid configuration error
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A reference name that is not present in the configuration
    #[error("Reference \"{0}\" is not configured")]
    UnknownReference(String),

    /// A parser key with no registered factory
    #[error("Parser \"{0}\" is not registered")]
    UnknownParser(String),
}

/// Result type alias for refdoc operations.
///
/// This type is used throughout the library to handle operations that can
/// fail with a [`Error`].
///
/// # Examples
///
/// ```
/// use refdoc::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Err(Error::UnknownParser("docblock2".to_string()))
/// }
///
/// match example_operation() {
///     Ok(content) => println!("Success: {}", content),
///     Err(e) => println!("Operation failed: {}", e),
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;
