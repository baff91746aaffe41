//! Tests for the preprocessor seam and the per-document metadata slot.

use metayaml_content::{
    DocumentContext, Error, ExtractorConfig, KeyCollisionPolicy, MetaYamlPreprocessor,
    Preprocessor,
};

use crate::common::{PLAIN_DOC, REFERENCE_DOC, TestHost, UppercaseStep};

#[test]
fn test_host_exposes_metadata_after_processing() {
    let (body, ctx) = TestHost::new().process(REFERENCE_DOC).unwrap();
    assert_eq!(body, ["", "The body. This is paragraph one."]);
    assert_eq!(ctx.meta().unwrap().get_str("title"), Some("Test Doc."));
}

#[test]
fn test_slot_absent_without_front_matter() {
    let (body, ctx) = TestHost::new().process(PLAIN_DOC).unwrap();
    assert_eq!(body, PLAIN_DOC);
    assert!(ctx.meta().is_none());
}

#[test]
fn test_metadata_runs_before_later_steps() {
    let host = TestHost::with_steps(vec![
        Box::new(MetaYamlPreprocessor::new()),
        Box::new(UppercaseStep),
    ]);
    let (body, ctx) = host.process(REFERENCE_DOC).unwrap();

    assert_eq!(body, ["", "THE BODY. THIS IS PARAGRAPH ONE."]);
    // Later steps never see the block, so values keep their case.
    assert_eq!(ctx.meta().unwrap().get_str("author"), Some("Waylan Limberg"));
}

#[test]
fn test_contexts_are_per_document() {
    let host = TestHost::new();
    let (_, first) = host.process(REFERENCE_DOC).unwrap();
    let (_, second) = host.process(PLAIN_DOC).unwrap();
    assert!(first.meta().is_some());
    assert!(second.meta().is_none());
}

#[test]
fn test_last_call_wins_on_shared_context() {
    let pre = MetaYamlPreprocessor::new();
    let mut ctx = DocumentContext::new();

    pre.run(crate::common::lines(&["---", "a: 1", "..."]), &mut ctx)
        .unwrap();
    pre.run(crate::common::lines(&["---", "b: 2", "..."]), &mut ctx)
        .unwrap();

    let meta = ctx.meta().unwrap();
    assert!(!meta.contains_key("a"));
    assert!(meta.contains_key("b"));
}

#[test]
fn test_reject_policy_through_host() {
    let pre = MetaYamlPreprocessor::with_config(
        ExtractorConfig::new().with_key_collision(KeyCollisionPolicy::Reject),
    );
    let host = TestHost::with_steps(vec![Box::new(pre)]);
    let err = host
        .process(&["---", "Title: a", "title: b", "..."])
        .unwrap_err();
    assert!(matches!(err, Error::KeyCollision { .. }));
}
