//! Error types for metayaml.

use std::path::Path;

/// Errors that can occur while extracting and normalizing front matter.
///
/// YAML problems inside a front-matter block are never swallowed: a document
/// with broken metadata fails loudly so the author sees the mistake.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The YAML engine rejected the front-matter block.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The block parsed, but not into a mapping.
    #[error("Front matter must be a mapping, found {found}")]
    NotAMapping {
        /// Kind of YAML value the block produced
        found: &'static str,
    },

    /// A mapping key was not a string and cannot be lower-cased.
    #[error("Front matter key must be a string, found {key}")]
    InvalidKey {
        /// Debug rendering of the offending key
        key: String,
    },

    /// Two keys lower-case to the same name under the reject policy.
    #[error("Duplicate front matter key after lower-casing: {key}")]
    KeyCollision {
        /// The lower-cased key that appeared twice
        key: String,
    },

    /// Normalized metadata could not be deserialized into a caller type.
    #[error("Failed to deserialize metadata: {message}")]
    Deserialize {
        /// What went wrong
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// I/O error, with the path involved when known
    #[error("I/O error{}: {source}", at_path(.path))]
    Io {
        /// Path being read or written
        path: Option<String>,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

fn at_path(path: &Option<String>) -> String {
    path.as_ref().map(|p| format!(" at {p}")).unwrap_or_default()
}

/// Convenience `Result` type alias for metayaml operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns whether this error comes from the document's own content.
    ///
    /// Parse errors point at an authoring mistake in the front matter; the
    /// remaining variants come from the environment or the caller.
    pub fn is_parse_error(&self) -> bool {
        match self {
            Error::Yaml(_) => true,
            Error::NotAMapping { .. } => true,
            Error::InvalidKey { .. } => true,
            Error::KeyCollision { .. } => true,
            Error::Deserialize { .. } => false,
            Error::Config { .. } => false,
            Error::Io { .. } => false,
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates a new deserialization error.
    pub fn deserialize<S: Into<String>>(message: S) -> Self {
        Error::Deserialize {
            message: message.into(),
        }
    }

    /// Wraps an I/O error with the path it occurred on.
    pub fn io_with_path(source: std::io::Error, path: &Path) -> Self {
        Error::Io {
            path: Some(path.display().to_string()),
            source,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { path: None, source }
    }
}
