//! YAML front-matter extraction from document lines.
//!
//! Front matter is a metadata block at the very start of a document. It opens
//! with a `---` line and closes with a `...` or `---` line:
//!
//! ```markdown
//! ---
//! Title: Test Doc.
//! Author: Waylan Limberg
//! Blank_Data:
//! ...
//!
//! The body. This is paragraph one.
//! ```
//!
//! Markers are matched on their first three characters only, so `----` and
//! `--- foo` both open a block. A block with no closing marker runs to the end
//! of the input.
//!
//! # Usage
//!
//! ```rust
//! use metayaml_content::markdown::FrontmatterExtractor;
//!
//! let extractor = FrontmatterExtractor::new();
//! let result = extractor
//!     .extract_str("---\nTitle: Test\n...\n\nBody")
//!     .unwrap();
//!
//! assert!(result.has_metadata());
//! assert_eq!(result.body(), ["", "Body"]);
//!
//! let meta = result.metadata().unwrap();
//! assert_eq!(meta.get_str("title"), Some("Test"));
//! ```

use metayaml_core::{Error, ExtractorConfig, KeyCollisionPolicy, Metadata, Result};
use serde_yaml::{Mapping, Value};

/// Prefix of the line that opens a front-matter block.
pub const OPEN_MARKER: &str = "---";

/// Prefixes of the lines that close a front-matter block.
pub const CLOSE_MARKERS: [&str; 2] = ["...", "---"];

/// Check whether a line opens a front-matter block.
pub fn is_open_marker(line: &str) -> bool {
    line.starts_with(OPEN_MARKER)
}

/// Check whether a line closes a front-matter block.
pub fn is_close_marker(line: &str) -> bool {
    CLOSE_MARKERS.iter().any(|marker| line.starts_with(marker))
}

/// Result of front-matter extraction.
///
/// Contains the document body (every line after the block) and the
/// normalized metadata, if a non-empty block was found.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    /// Lines after the front-matter block, untouched and in order.
    body: Vec<String>,
    /// Normalized metadata from a non-empty block.
    metadata: Option<Metadata>,
    /// Whether an opening marker was consumed (even if the block was empty).
    had_block: bool,
}

impl Extraction {
    /// Create a result for input without a front-matter block.
    fn without_block(body: Vec<String>) -> Self {
        Self {
            body,
            metadata: None,
            had_block: false,
        }
    }

    /// Create a result for input that opened a block.
    fn with_block(body: Vec<String>, metadata: Option<Metadata>) -> Self {
        Self {
            body,
            metadata,
            had_block: true,
        }
    }

    /// Check if metadata was extracted.
    pub fn has_metadata(&self) -> bool {
        self.metadata.is_some()
    }

    /// Check if an opening marker was present (even if the block was empty).
    pub fn had_block(&self) -> bool {
        self.had_block
    }

    /// Get the normalized metadata, if present.
    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    /// Get the body lines.
    pub fn body(&self) -> &[String] {
        &self.body
    }

    /// Get the body joined with newlines.
    pub fn body_text(&self) -> String {
        self.body.join("\n")
    }

    /// Take ownership of the body lines.
    pub fn into_body(self) -> Vec<String> {
        self.body
    }

    /// Take ownership of the metadata, if present.
    pub fn into_metadata(self) -> Option<Metadata> {
        self.metadata
    }

    /// Split into body lines and metadata.
    pub fn into_parts(self) -> (Vec<String>, Option<Metadata>) {
        (self.body, self.metadata)
    }
}

/// Extracts and normalizes a leading YAML front-matter block.
#[derive(Debug, Clone, Default)]
pub struct FrontmatterExtractor {
    config: ExtractorConfig,
}

impl FrontmatterExtractor {
    /// Create an extractor with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor with an explicit configuration.
    pub fn with_config(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Get the extractor configuration.
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract front matter from the start of a document's lines.
    ///
    /// # Behavior
    ///
    /// - First line is not an opening marker: the input comes back unchanged
    ///   and no metadata is produced.
    /// - Block found: lines up to the closing marker (or the end of input)
    ///   are parsed as YAML; the closing marker is dropped; the rest is the
    ///   body.
    /// - Empty block: no metadata.
    ///
    /// # Errors
    ///
    /// Invalid YAML, a block that is not a mapping, non-string keys, and (under
    /// [`KeyCollisionPolicy::Reject`]) keys that collide after lower-casing.
    pub fn extract(&self, lines: Vec<String>) -> Result<Extraction> {
        if !lines.first().is_some_and(|line| is_open_marker(line)) {
            log::trace!("No front matter block at start of input");
            return Ok(Extraction::without_block(lines));
        }

        let mut rest = lines.into_iter().skip(1);
        let mut block = Vec::new();
        let mut terminated = false;
        for line in rest.by_ref() {
            if is_close_marker(&line) {
                terminated = true;
                break;
            }
            block.push(line);
        }
        let body: Vec<String> = rest.collect();

        log::debug!(
            "Found front matter block: {} lines, terminated: {}",
            block.len(),
            terminated
        );

        if block.is_empty() {
            return Ok(Extraction::with_block(body, None));
        }

        let metadata = parse_block(&block.join("\n"), self.config.on_key_collision)?;
        Ok(Extraction::with_block(body, Some(metadata)))
    }

    /// Extract front matter from document text.
    ///
    /// The text is split into lines the way a host pipeline would before
    /// running preprocessors.
    pub fn extract_str(&self, content: &str) -> Result<Extraction> {
        self.extract(content.lines().map(str::to_owned).collect())
    }
}

/// Parse a raw front-matter block and normalize it.
///
/// The block must parse to a YAML mapping with string keys. Merge keys
/// (`<<: *anchor`) are resolved before normalization.
pub fn parse_block(block: &str, policy: KeyCollisionPolicy) -> Result<Metadata> {
    let mut value: Value = serde_yaml::from_str(block)?;
    value.apply_merge()?;
    match value {
        Value::Mapping(mapping) => normalize_mapping(mapping, policy),
        other => Err(Error::NotAMapping {
            found: value_kind(&other),
        }),
    }
}

/// Lower-case keys and wrap non-sequence values, in parse order.
pub fn normalize_mapping(mapping: Mapping, policy: KeyCollisionPolicy) -> Result<Metadata> {
    let mut metadata = Metadata::new();
    for (key, value) in mapping {
        let key = match key {
            Value::String(key) => key,
            other => {
                return Err(Error::InvalidKey {
                    key: format!("{other:?}"),
                });
            }
        };

        if metadata.contains_key(&key) {
            match policy {
                KeyCollisionPolicy::Reject => {
                    return Err(Error::KeyCollision {
                        key: metayaml_core::normalize_key(&key),
                    });
                }
                KeyCollisionPolicy::Overwrite => {
                    log::warn!(
                        "Front matter key '{key}' overwrites an earlier key differing only in case"
                    );
                }
            }
        }
        metadata.insert(&key, value);
    }
    Ok(metadata)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

// ============================================================================
// Tests
// ============================================================================
