//! Compound alias keys
//!
//! A grammar node is named by one or more interchangeable aliases written as a single string
//! joined by [SEPARATOR]: `"remove/-r"` names the same node as `"remove"` or `"-r"`.
//!
//! Equality between keys is alias overlap, not set equality. That relation is not transitive
//! (`a/b == b/c` and `b/c == c/d`, but `a/b != c/d`), so [CliKey] implements `PartialEq` only
//! and is never used as a hash key.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::error::KeyError;

/// Character separating aliases inside a compound alias string.
pub const SEPARATOR: char = '/';

/// A non-empty ordered set of alternative names.
#[derive(Debug, Clone)]
pub struct CliKey {
    aliases: Vec<String>,
}

impl CliKey {
    /// Split `alias` on [SEPARATOR], dropping empty segments.
    pub fn new(alias: &str) -> Result<Self, KeyError> {
        let aliases: Vec<String> = split_aliases(alias).map(str::to_string).collect();
        if aliases.is_empty() {
            return Err(KeyError::Empty(alias.to_string()));
        }
        Ok(Self { aliases })
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// The first declared alias.
    pub fn primary(&self) -> &str {
        &self.aliases[0]
    }

    /// Exact, case-sensitive membership of a single alias.
    pub fn matches(&self, alias: &str) -> bool {
        self.aliases.iter().any(|item| item == alias)
    }

    /// Split `text` on [SEPARATOR] and check whether any piece is one of these aliases.
    pub fn matches_any(&self, text: &str) -> bool {
        split_aliases(text).any(|item| self.matches(item))
    }

    /// Whether any alias of `other` is also an alias of `self`.
    pub fn overlaps(&self, other: &CliKey) -> bool {
        other.aliases.iter().any(|item| self.matches(item))
    }
}

fn split_aliases(text: &str) -> impl Iterator<Item = &str> {
    text.split(SEPARATOR).filter(|item| !item.is_empty())
}

impl PartialEq for CliKey {
    fn eq(&self, other: &Self) -> bool {
        self.overlaps(other)
    }
}

impl PartialEq<str> for CliKey {
    fn eq(&self, other: &str) -> bool {
        self.matches(other)
    }
}

impl PartialEq<&str> for CliKey {
    fn eq(&self, other: &&str) -> bool {
        self.matches(other)
    }
}

impl PartialEq<CliKey> for &str {
    fn eq(&self, other: &CliKey) -> bool {
        other.matches(self)
    }
}

impl FromStr for CliKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for CliKey {
    type Error = KeyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for CliKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut separator = String::new();
        for alias in &self.aliases {
            write!(f, "{separator}{alias}")?;
            separator = SEPARATOR.to_string();
        }
        Ok(())
    }
}

impl Serialize for CliKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
