use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use serde::Serialize;

/// A single `KEY=value` definition in an env file.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvEntry {
    pub key: String,
    pub value: String,
    pub line_number: usize,
}

/// A parsed env file, in definition order.
///
/// Comments and blank lines are dropped by the parser; only
/// definitions remain. Keys may repeat, in which case the last
/// definition wins once the file is collapsed into [`EnvVars`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EnvFile {
    pub entries: Vec<EnvEntry>,
    pub source_path: Option<PathBuf>,
}

impl EnvFile {
    /// The definition of `key` that wins: the last one in the file.
    pub fn last_entry(&self, key: &str) -> Option<&EnvEntry> {
        self.entries.iter().rev().find(|e| e.key == key)
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.last_entry(key).map(|e| e.value.as_str())
    }

    /// Keys defined more than once, sorted alphabetically, each with the
    /// line number of the definition that wins.
    pub fn duplicate_keys(&self) -> Vec<(String, usize)> {
        let mut seen = BTreeSet::new();
        let mut dupes = BTreeSet::new();
        for entry in &self.entries {
            if !seen.insert(entry.key.as_str()) {
                dupes.insert(entry.key.as_str());
            }
        }
        dupes
            .into_iter()
            .filter_map(|key| {
                self.last_entry(key)
                    .map(|e| (key.to_string(), e.line_number))
            })
            .collect()
    }
}

/// The variables loaded from an env file, sorted by key.
///
/// Produced once by the loader and read-only afterwards. Serializes
/// as a plain mapping so templates can iterate it directly.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct EnvVars(BTreeMap<String, String>);

impl EnvVars {
    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl From<&EnvFile> for EnvVars {
    fn from(file: &EnvFile) -> Self {
        EnvVars(
            file.entries
                .iter()
                .map(|e| (e.key.clone(), e.value.clone()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvVars {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        EnvVars(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
