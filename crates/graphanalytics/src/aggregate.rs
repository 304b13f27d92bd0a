//! Keyed collection of distinct names.

use std::collections::HashMap;

/// Maps a key to the distinct names recorded against it.
///
/// Values keep insertion order and never repeat under one key; the same
/// value may appear under any number of keys. Keys only exist once they have
/// received a value.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Aggregation {
    entries: HashMap<String, Vec<String>>,
}

impl Aggregation {
    /// Create an empty aggregation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `value` under `key` unless it is already recorded there.
    ///
    /// Returns `true` if the value was inserted.
    pub fn insert_if_absent(&mut self, key: &str, value: &str) -> bool {
        match self.entries.get_mut(key) {
            Some(values) if values.iter().any(|v| v == value) => false,
            Some(values) => {
                values.push(value.to_string());
                true
            }
            None => {
                self.entries
                    .insert(key.to_string(), vec![value.to_string()]);
                true
            }
        }
    }

    /// Values recorded under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// Number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for Aggregation {
    type Item = (String, Vec<String>);
    type IntoIter = std::collections::hash_map::IntoIter<String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
