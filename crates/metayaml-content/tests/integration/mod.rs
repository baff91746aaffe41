//! Integration tests for metayaml.

mod config;
mod pipeline;
