//! Extractor configuration.
//!
//! Configuration is a flat TOML table; every field is optional:
//!
//! ```toml
//! on_key_collision = "reject"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// What to do when two front-matter keys lower-case to the same name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyCollisionPolicy {
    /// The later key in parse order replaces the earlier one.
    #[default]
    Overwrite,
    /// Fail the document with [`Error::KeyCollision`].
    Reject,
}

/// Configuration for front-matter extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Policy for keys that collide after lower-casing.
    pub on_key_collision: KeyCollisionPolicy,
}

impl ExtractorConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the key collision policy.
    pub fn with_key_collision(mut self, policy: KeyCollisionPolicy) -> Self {
        self.on_key_collision = policy;
        self
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(format!("Invalid extractor config: {e}")))
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        toml::from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))
    }

    /// Serialize configuration to TOML text.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }
}
