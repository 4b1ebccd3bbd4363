//! Settings Module
//!
//! Sectioned key/value files in the style of `.ini`.
//!
//! ## File Format
//! ```text
//! // comment
//! top = value          <- unnamed section ("")
//!
//! [Section]
//! name = value
//! ```
//!
//! - Surrounding whitespace is trimmed from every line, key and value
//! - Lines starting with `//` are comments; blank lines are ignored
//! - Pairs before the first header belong to the unnamed section `""`
//! - No escaping, no multi-line values, no trailing comments
//!
//! On save the unnamed section is written before any header. Written after
//! a header, its pairs would be read back as part of that section.

mod ini;
mod parser;

pub use ini::SettingsIni;

use std::collections::BTreeMap;

/// The pairs stored under one section name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    values: BTreeMap<String, String>,
}

impl Section {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Insert or overwrite a pair, returning the previous value
    pub(crate) fn insert(&mut self, key: String, value: String) -> Option<String> {
        self.values.insert(key, value)
    }

    pub(crate) fn get_mut(&mut self, key: &str) -> Option<&mut String> {
        self.values.get_mut(key)
    }
}
