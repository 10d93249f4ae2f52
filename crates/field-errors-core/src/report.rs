//! Error reports and field-path construction.
//!
//! Paths join public field names with `.` and address collection elements
//! with a zero-based `[i]` right after the collection's name:
//! `contacts[0].email`. A top-level collection has no name, so its keys
//! start with the index: `[0].email`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Joins a parent field name and a nested key: `user` + `name` → `user.name`.
pub fn join_field(parent: &str, key: &str) -> String {
    let mut path = String::with_capacity(parent.len() + key.len() + 1);
    path.push_str(parent);
    path.push('.');
    path.push_str(key);
    path
}

/// Joins a collection name, an element index and a nested key:
/// `items` + `1` + `sku` → `items[1].sku`.
pub fn join_index(parent: &str, index: usize, key: &str) -> String {
    format!("{}[{}].{}", parent, index, key)
}

/// Flat map from field path to rendered message.
///
/// Serializes as a plain JSON object. Keys are sorted so output is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorReport {
    entries: BTreeMap<String, String>,
}

impl ErrorReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report with a single entry.
    pub fn single(path: impl Into<String>, message: impl Into<String>) -> Self {
        let mut report = Self::new();
        report.insert(path, message);
        report
    }

    /// Inserts an entry. A later write to the same path wins.
    pub fn insert(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.entries.insert(path.into(), message.into());
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.entries.get(path).map(String::as_str)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Merges a nested report under `parent.`.
    pub fn merge_nested(&mut self, parent: &str, nested: ErrorReport) {
        for (key, message) in nested.entries {
            self.entries.insert(join_field(parent, &key), message);
        }
    }

    /// Merges the report of element `index` under `parent[index].`.
    pub fn merge_indexed(&mut self, parent: &str, index: usize, nested: ErrorReport) {
        for (key, message) in nested.entries {
            self.entries.insert(join_index(parent, index, &key), message);
        }
    }

    /// `None` for an empty report, so callers can treat "no errors" as absent.
    pub fn into_option(self) -> Option<Self> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }

    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.entries
    }
}

impl IntoIterator for ErrorReport {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ErrorReport {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
