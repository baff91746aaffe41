//! Front-matter extraction for document pipelines.
//!
//! This crate strips a leading YAML metadata block from a document's lines and
//! hands back the body plus a normalized [`Metadata`] mapping: keys
//! lower-cased, every value a list.
//!
//! # Modules
//!
//! - [`markdown`]: Front-matter extraction and document preprocessing
//!   - [`markdown::frontmatter`]: Block detection, parsing, normalization
//!   - [`markdown::preprocess`]: Host pipeline seam and metadata slot
//!
//! # Example
//!
//! ```rust
//! use metayaml_content::{FrontmatterExtractor, Metadata};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct DocMeta {
//!     title: Vec<String>,
//! }
//!
//! let content = "---\nTitle: Hello\n...\n\nBody";
//! let result = FrontmatterExtractor::new().extract_str(content).unwrap();
//! let meta: &Metadata = result.metadata().unwrap();
//! let doc: DocMeta = meta.deserialize().unwrap();
//! assert_eq!(doc.title, vec!["Hello"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod markdown;

// Re-export commonly used types
pub use markdown::{
    DocumentContext, Extraction, FrontmatterExtractor, MetaYamlPreprocessor, Preprocessor,
};
pub use metayaml_core::{Error, ExtractorConfig, KeyCollisionPolicy, Metadata, Result};
