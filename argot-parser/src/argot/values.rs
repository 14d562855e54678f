//! The ordered value store
//!
//! A [ValueOrder] is what a function's run callback receives: the values the collector pass
//! pulled out of the token stream, keyed by the alias of the grammar node that accepted them,
//! in the order they were collected.
//!
//! Keys are unique. Because keys compare by alias overlap, adding `"-i"` to a store that already
//! holds `"init/-i"` is a duplicate. A duplicate insertion means the grammar itself is wrong
//! (two nodes writing the same name), so it is a hard error rather than a validation message.
//! Lookups and updates never create entries: a key must be added before it can be set.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::error::ValueOrderError;
use super::key::CliKey;

/// Insertion-ordered, unique-key mapping from [CliKey] to string values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueOrder {
    entries: Vec<(CliKey, String)>,
}

impl ValueOrder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a new entry. Fails if the key overlaps one already stored.
    pub fn add(&mut self, key: CliKey, value: impl Into<String>) -> Result<(), ValueOrderError> {
        if self.entries.iter().any(|(stored, _)| stored.overlaps(&key)) {
            return Err(ValueOrderError::DuplicateKey(key.to_string()));
        }
        self.entries.push((key, value.into()));
        Ok(())
    }

    /// Build the key from a compound alias string, then [add](Self::add) it.
    pub fn add_alias(&mut self, alias: &str, value: impl Into<String>) -> Result<(), ValueOrderError> {
        let key = CliKey::new(alias)?;
        self.add(key, value)
    }

    /// Position of the entry whose key has `alias` as one of its aliases.
    pub fn key_index(&self, alias: &str) -> Option<usize> {
        self.entries.iter().position(|(key, _)| key.matches(alias))
    }

    pub fn contains_key(&self, alias: &str) -> bool {
        self.key_index(alias).is_some()
    }

    pub fn get(&self, alias: &str) -> Option<&str> {
        self.key_index(alias)
            .map(|index| self.entries[index].1.as_str())
    }

    /// Like [get](Self::get), but an absent key is an error.
    pub fn value(&self, alias: &str) -> Result<&str, ValueOrderError> {
        self.get(alias)
            .ok_or_else(|| ValueOrderError::MissingKey(alias.to_string()))
    }

    /// Replace the value of an existing entry.
    pub fn set(&mut self, alias: &str, value: impl Into<String>) -> Result<(), ValueOrderError> {
        let index = self
            .key_index(alias)
            .ok_or_else(|| ValueOrderError::MissingKey(alias.to_string()))?;
        self.entries[index].1 = value.into();
        Ok(())
    }

    /// Remove an entry, keeping the order of the rest. Returns whether anything was removed.
    pub fn remove(&mut self, alias: &str) -> bool {
        match self.key_index(alias) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CliKey, &str)> {
        self.entries.iter().map(|(key, value)| (key, value.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &CliKey> {
        self.entries.iter().map(|(key, _)| key)
    }
}

impl<'a> IntoIterator for &'a ValueOrder {
    type Item = &'a (CliKey, String);
    type IntoIter = std::slice::Iter<'a, (CliKey, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Serialize for ValueOrder {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
