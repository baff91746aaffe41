//! Front-matter extraction and document preprocessing.
//!
//! - [`frontmatter`]: Delimiter matching, YAML parsing and normalization
//! - [`preprocess`]: The [`Preprocessor`] seam and per-document context
//!
//! # Example
//!
//! ```rust
//! use metayaml_content::markdown::FrontmatterExtractor;
//!
//! let result = FrontmatterExtractor::new()
//!     .extract_str("---\nAuthor: Waylan Limberg\n---\nBody")
//!     .unwrap();
//!
//! let meta = result.metadata().unwrap();
//! assert_eq!(meta.get_str("author"), Some("Waylan Limberg"));
//! assert_eq!(result.body(), ["Body"]);
//! ```

pub mod frontmatter;
pub mod preprocess;


// Re-export key types and functions
pub use frontmatter::{
    CLOSE_MARKERS, Extraction, FrontmatterExtractor, OPEN_MARKER, is_close_marker,
    is_open_marker, normalize_mapping, parse_block,
};
pub use preprocess::{DocumentContext, MetaYamlPreprocessor, Preprocessor};
