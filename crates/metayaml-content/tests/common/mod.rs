//! Common test utilities for metayaml integration tests.

#![allow(dead_code)]

use metayaml_content::{DocumentContext, MetaYamlPreprocessor, Preprocessor, Result};

/// Reference document: metadata block closed by `...`, then a blank line and
/// one paragraph.
pub const REFERENCE_DOC: &[&str] = &[
    "---",
    "Title: Test Doc.",
    "Author: Waylan Limberg",
    "Blank_Data:",
    "...",
    "",
    "The body. This is paragraph one.",
];

/// Document with no metadata block.
pub const PLAIN_DOC: &[&str] = &["    Some Code - not extra lines of meta data."];

/// Convert string slices to owned lines.
pub fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Minimal host: runs a chain of preprocessors over one document.
pub struct TestHost {
    steps: Vec<Box<dyn Preprocessor>>,
}

impl TestHost {
    /// Host with only the metadata preprocessor.
    pub fn new() -> Self {
        Self::with_steps(vec![Box::new(MetaYamlPreprocessor::new())])
    }

    /// Host with an explicit chain of steps.
    pub fn with_steps(steps: Vec<Box<dyn Preprocessor>>) -> Self {
        Self { steps }
    }

    /// Process one document in a fresh context.
    pub fn process(&self, input: &[&str]) -> Result<(Vec<String>, DocumentContext)> {
        let mut ctx = DocumentContext::new();
        let mut current = lines(input);
        for step in &self.steps {
            current = step.run(current, &mut ctx)?;
        }
        Ok((current, ctx))
    }
}

impl Default for TestHost {
    fn default() -> Self {
        Self::new()
    }
}

/// Preprocessor that upper-cases every line, standing in for a later step.
pub struct UppercaseStep;

impl Preprocessor for UppercaseStep {
    fn name(&self) -> &str {
        "uppercase"
    }

    fn run(&self, lines: Vec<String>, _ctx: &mut DocumentContext) -> Result<Vec<String>> {
        Ok(lines.into_iter().map(|l| l.to_uppercase()).collect())
    }
}
