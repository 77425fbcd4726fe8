//! Values stored in resource bundles.

use super::{KeyPath, KeySegment};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A value held at some key path of a locale's data tree.
///
/// Tables keep their insertion order, which for generated bundles is the key
/// order of the upstream data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceEntry {
    /// Text value.
    String(String),
    /// Integer value such as a numeric code or a digit count.
    Integer(i64),
    /// Ordered sequence.
    Sequence(Vec<ResourceEntry>),
    /// Ordered key/value table.
    Table(IndexMap<String, ResourceEntry>),
}

impl ResourceEntry {
    /// Child value addressed by one segment.
    #[must_use]
    pub fn get(&self, segment: &KeySegment) -> Option<&Self> {
        match (self, segment) {
            (Self::Table(table), KeySegment::Key(key)) => table.get(key),
            (Self::Sequence(items), KeySegment::Index(index)) => items.get(*index),
            _ => None,
        }
    }

    /// Descendant value addressed by a whole path.
    #[must_use]
    pub fn lookup(&self, path: &KeyPath) -> Option<&Self> {
        path.segments()
            .iter()
            .try_fold(self, |entry, segment| entry.get(segment))
    }

    /// Text content, if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Integer content, accepting digit-only strings as well.
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            Self::String(value) => value.parse().ok(),
            _ => None,
        }
    }

    /// Table content, if this is a table.
    #[must_use]
    pub const fn as_table(&self) -> Option<&IndexMap<String, Self>> {
        match self {
            Self::Table(table) => Some(table),
            _ => None,
        }
    }

    /// Sequence content, if this is a sequence.
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[Self]> {
        match self {
            Self::Sequence(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Short description of the variant for error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Integer(_) => "integer",
            Self::Sequence(_) => "sequence",
            Self::Table(_) => "table",
        }
    }
}

impl From<&str> for ResourceEntry {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<i64> for ResourceEntry {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}
