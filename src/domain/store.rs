// SPDX-License-Identifier: MIT OR Apache-2.0

//! Insertion-ordered configuration store.
//!
//! This module provides `ConfigStore`, a mapping from key to inferred value that
//! keeps entries in the order they were written and refuses to overwrite a key.

use crate::domain::config_value::ConfigValue;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;
use std::iter::FusedIterator;
use std::slice;

/// A single resolved key/value pair.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfigEntry {
    /// The trimmed key
    pub key: String,
    /// The inferred value
    pub value: ConfigValue,
}

impl ConfigEntry {
    /// Creates a new entry.
    pub fn new(key: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// An insertion-ordered, duplicate-free mapping from key to value.
///
/// Keys are case-sensitive. Entries are never replaced: [`ConfigStore::insert`]
/// hands the rejected entry back when the key is already present.
///
/// # Examples
///
/// ```
/// use kvcfg::domain::{ConfigEntry, ConfigStore, ConfigValue};
///
/// let mut store = ConfigStore::new();
/// store.insert(ConfigEntry::new("name", "MyApp")).unwrap();
/// store.insert(ConfigEntry::new("retries", 3)).unwrap();
///
/// let rejected = store.insert(ConfigEntry::new("name", "Other")).unwrap_err();
/// assert_eq!(rejected.key, "name");
/// assert_eq!(store.get("name"), Some(&ConfigValue::from("MyApp")));
///
/// let keys: Vec<&str> = store.iter().map(|(k, _)| k).collect();
/// assert_eq!(keys, ["name", "retries"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfigStore {
    entries: Vec<ConfigEntry>,
    index: HashMap<String, usize>,
}

impl ConfigStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `key` has been set.
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Returns the value stored for `key`, or `None` if it was never set.
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.index.get(key).map(|&i| &self.entries[i].value)
    }

    /// Appends an entry unless its key is already present.
    ///
    /// On a duplicate the store is left unchanged and the entry is returned as
    /// the error.
    pub fn insert(&mut self, entry: ConfigEntry) -> std::result::Result<(), ConfigEntry> {
        if self.index.contains_key(&entry.key) {
            return Err(entry);
        }
        self.index.insert(entry.key.clone(), self.entries.len());
        self.entries.push(entry);
        Ok(())
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns a lazy iterator over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> Entries<'_> {
        Entries {
            inner: self.entries.iter(),
        }
    }

    /// Returns the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|e| e.key.as_str())
    }

    /// Copies the store into an unordered key/value map.
    pub fn to_map(&self) -> HashMap<String, ConfigValue> {
        self.entries
            .iter()
            .map(|e| (e.key.clone(), e.value.clone()))
            .collect()
    }
}

/// Iterator over the entries of a [`ConfigStore`], in insertion order.
///
/// [`ConfigStore::iter`] always starts at the first entry, and a clone taken
/// before advancing replays the same sequence.
#[derive(Clone, Debug)]
pub struct Entries<'a> {
    inner: slice::Iter<'a, ConfigEntry>,
}

impl<'a> Iterator for Entries<'a> {
    type Item = (&'a str, &'a ConfigValue);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|e| (e.key.as_str(), &e.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Entries<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|e| (e.key.as_str(), &e.value))
    }
}

impl ExactSizeIterator for Entries<'_> {}

impl FusedIterator for Entries<'_> {}

impl<'a> IntoIterator for &'a ConfigStore {
    type Item = (&'a str, &'a ConfigValue);
    type IntoIter = Entries<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for ConfigStore {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
