//! Configuration loading wired into the extractor.

use metayaml_content::{Error, ExtractorConfig, FrontmatterExtractor, KeyCollisionPolicy};

use crate::common::lines;

const COLLIDING: &[&str] = &["---", "Title: first", "title: second", "..."];

#[test]
fn test_config_from_toml_controls_collisions() {
    let config = ExtractorConfig::from_toml_str("on_key_collision = \"reject\"").unwrap();
    let err = FrontmatterExtractor::with_config(config)
        .extract(lines(COLLIDING))
        .unwrap_err();
    let Error::KeyCollision { key } = err else {
        unreachable!("Expected KeyCollision error");
    };
    assert_eq!(key, "title");
}

#[test]
fn test_default_config_overwrites() {
    let config = ExtractorConfig::from_toml_str("").unwrap();
    assert_eq!(config.on_key_collision, KeyCollisionPolicy::Overwrite);

    let result = FrontmatterExtractor::with_config(config)
        .extract(lines(COLLIDING))
        .unwrap();
    assert_eq!(result.metadata().unwrap().get_str("title"), Some("second"));
}
