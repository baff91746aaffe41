//! The line-preprocessing seam between a host pipeline and the extractor.
//!
//! A host splits a document into lines, creates a [`DocumentContext`] for it,
//! and runs its preprocessors in order. [`MetaYamlPreprocessor`] must run
//! first so that no later step sees the front-matter lines.
//!
//! ```rust
//! use metayaml_content::markdown::{DocumentContext, MetaYamlPreprocessor, Preprocessor};
//!
//! let lines: Vec<String> = "---\nTitle: Test Doc.\n...\n\nBody"
//!     .lines()
//!     .map(String::from)
//!     .collect();
//!
//! let mut ctx = DocumentContext::new();
//! let body = MetaYamlPreprocessor::new().run(lines, &mut ctx).unwrap();
//!
//! assert_eq!(body, ["", "Body"]);
//! assert_eq!(ctx.meta().unwrap().get_str("title"), Some("Test Doc."));
//! ```

use metayaml_core::{ExtractorConfig, Metadata, Result};

use super::frontmatter::FrontmatterExtractor;

/// Per-document processing state owned by the host.
///
/// Holds the metadata slot. The slot is absent, not empty, until a
/// preprocessor fills it.
#[derive(Debug, Clone, Default)]
pub struct DocumentContext {
    meta: Option<Metadata>,
}

impl DocumentContext {
    /// Create a context with an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the metadata, if any was stored.
    pub fn meta(&self) -> Option<&Metadata> {
        self.meta.as_ref()
    }

    /// Store metadata, replacing whatever was there.
    pub fn set_meta(&mut self, meta: Metadata) {
        self.meta = Some(meta);
    }

    /// Remove and return the metadata.
    pub fn take_meta(&mut self) -> Option<Metadata> {
        self.meta.take()
    }

    /// Whether metadata has been stored.
    pub fn has_meta(&self) -> bool {
        self.meta.is_some()
    }
}

/// A step that rewrites a document's lines before rendering.
pub trait Preprocessor: Send + Sync {
    /// Name the host registers this step under.
    fn name(&self) -> &str;

    /// Process the lines, returning the lines for the next step.
    fn run(&self, lines: Vec<String>, ctx: &mut DocumentContext) -> Result<Vec<String>>;
}

/// Preprocessor that strips YAML front matter into the context's slot.
#[derive(Debug, Clone, Default)]
pub struct MetaYamlPreprocessor {
    extractor: FrontmatterExtractor,
}

impl MetaYamlPreprocessor {
    /// Name of the metadata preprocessor.
    pub const NAME: &'static str = "meta";

    /// Create a preprocessor with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a preprocessor with an explicit configuration.
    pub fn with_config(config: ExtractorConfig) -> Self {
        Self {
            extractor: FrontmatterExtractor::with_config(config),
        }
    }

    /// Get the underlying extractor.
    pub fn extractor(&self) -> &FrontmatterExtractor {
        &self.extractor
    }
}

impl Preprocessor for MetaYamlPreprocessor {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn run(&self, lines: Vec<String>, ctx: &mut DocumentContext) -> Result<Vec<String>> {
        let (body, meta) = self.extractor.extract(lines)?.into_parts();
        // An empty or missing block leaves the slot as it was.
        if let Some(meta) = meta {
            ctx.set_meta(meta);
        }
        Ok(body)
    }
}
