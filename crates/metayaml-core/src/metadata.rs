//! The normalized front-matter mapping.
//!
//! Every field is keyed by its lower-cased name and holds one or more values:
//!
//! ```yaml
//! Title: Test Doc.
//! Tags: [rust, yaml]
//! ```
//!
//! normalizes to `{"title": ["Test Doc."], "tags": ["rust", "yaml"]}`. Values
//! keep the YAML engine's own variant type, so nested mappings, numbers,
//! booleans and nulls survive untouched inside their sequence.
//!
//! # Usage
//!
//! ```rust
//! use metayaml_core::Metadata;
//! use serde_yaml::Value;
//!
//! let mut meta = Metadata::new();
//! meta.insert("Author", Value::String("Waylan Limberg".into()));
//!
//! assert_eq!(meta.get_str("author"), Some("Waylan Limberg"));
//! assert_eq!(meta.get_str("AUTHOR"), Some("Waylan Limberg"));
//! ```

use indexmap::IndexMap;
use indexmap::map;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_yaml::{Mapping, Value};

use crate::error::{Error, Result};

/// Normalize a front-matter key.
///
/// Keys are compared case-insensitively by lower-casing them.
///
/// # Examples
///
/// ```
/// use metayaml_core::normalize_key;
///
/// assert_eq!(normalize_key("Title"), "title");
/// assert_eq!(normalize_key("Blank_Data"), "blank_data");
/// ```
pub fn normalize_key(key: &str) -> String {
    key.to_lowercase()
}

/// Wrap a value so that it is always a sequence.
///
/// Sequences pass through unchanged; anything else becomes a one-element
/// sequence.
pub fn wrap_value(value: Value) -> Vec<Value> {
    match value {
        Value::Sequence(seq) => seq,
        other => vec![other],
    }
}

/// Normalized front-matter metadata.
///
/// Keys are lower-cased field names and every value is a list of one or more
/// YAML values. Fields keep the order they were written in; a later key that
/// collides after lower-casing replaces the value but keeps the first key's
/// position.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Metadata {
    fields: IndexMap<String, Vec<Value>>,
}

impl Metadata {
    /// Create an empty metadata mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, normalizing its key and wrapping its value.
    ///
    /// Returns the previous values stored under the normalized key, if any.
    pub fn insert(&mut self, key: &str, value: Value) -> Option<Vec<Value>> {
        self.fields.insert(normalize_key(key), wrap_value(value))
    }

    /// Get all values of a field. The lookup key is normalized first.
    pub fn get(&self, key: &str) -> Option<&[Value]> {
        self.fields.get(&normalize_key(key)).map(Vec::as_slice)
    }

    /// Get the first value of a field.
    pub fn first(&self, key: &str) -> Option<&Value> {
        self.get(key)?.first()
    }

    /// Get the first value of a field as a string.
    ///
    /// Returns `None` if the field is missing or its first value is not a
    /// string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.first(key)?.as_str()
    }

    /// Get every string value of a field.
    ///
    /// Non-string values are skipped. Returns an empty vec if the field is
    /// missing.
    pub fn get_strings(&self, key: &str) -> Vec<&str> {
        self.get(key)
            .map(|values| values.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// Check whether a field is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(&normalize_key(key))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether there are no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over fields in the order they were first inserted.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Value])> {
        self.fields
            .iter()
            .map(|(key, values)| (key.as_str(), values.as_slice()))
    }

    /// Iterate over field names in the order they were first inserted.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Take ownership of the underlying map.
    pub fn into_inner(self) -> IndexMap<String, Vec<Value>> {
        self.fields
    }

    /// Convert to a YAML mapping of sequences.
    pub fn to_value(&self) -> Value {
        let mapping: Mapping = self
            .fields
            .iter()
            .map(|(key, values)| {
                (
                    Value::String(key.clone()),
                    Value::Sequence(values.clone()),
                )
            })
            .collect();
        Value::Mapping(mapping)
    }

    /// Deserialize the metadata into a caller-defined type.
    ///
    /// Every field is a sequence, so the target type's fields should be
    /// `Vec<_>` (or a type that deserializes from a sequence).
    ///
    /// # Example
    ///
    /// ```rust
    /// use metayaml_core::Metadata;
    /// use serde::Deserialize;
    /// use serde_yaml::Value;
    ///
    /// #[derive(Deserialize)]
    /// struct Doc {
    ///     title: Vec<String>,
    /// }
    ///
    /// let mut meta = Metadata::new();
    /// meta.insert("Title", Value::String("Hello".into()));
    /// let doc: Doc = meta.deserialize().unwrap();
    /// assert_eq!(doc.title, vec!["Hello"]);
    /// ```
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T> {
        serde_yaml::from_value(self.to_value()).map_err(|e| Error::deserialize(e.to_string()))
    }
}

impl FromIterator<(String, Vec<Value>)> for Metadata {
    fn from_iter<I: IntoIterator<Item = (String, Vec<Value>)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(key, values)| (normalize_key(&key), values))
                .collect(),
        }
    }
}

impl IntoIterator for Metadata {
    type Item = (String, Vec<Value>);
    type IntoIter = map::IntoIter<String, Vec<Value>>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

// ============================================================================
// Tests
// ============================================================================
