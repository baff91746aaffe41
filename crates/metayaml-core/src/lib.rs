#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! metayaml Core: shared types, errors, and configuration.
//!
//! This crate provides the foundational types used by the metayaml crates.
//! It has no internal metayaml dependencies.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`metadata`]: The normalized front-matter mapping
//! - [`config`]: Extractor configuration and key collision policy

pub mod config;
pub mod error;
pub mod metadata;

// Re-export key types at crate root for convenience
pub use config::{ExtractorConfig, KeyCollisionPolicy};
pub use error::{Error, Result};
pub use metadata::{Metadata, normalize_key, wrap_value};
