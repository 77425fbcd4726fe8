//! In-memory bundle store.

use super::{BundleError, BundleStore, KeyPath, ResourceEntry};
use crate::locale::LocaleTag;
use std::collections::HashMap;

/// Bundle store holding whole documents in memory.
///
/// # Examples
///
/// ```
/// use glossa::bundle::{BundleStore, KeyPath, MemoryBundleStore};
/// use glossa::locale::LocaleTag;
/// use serde_json::json;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut store = MemoryBundleStore::new();
/// store.insert_json("curr", "en", json!({ "Currencies": { "USD": ["$", "US Dollar"] } }))?;
/// let path = KeyPath::new().key("Currencies").key("USD").index(1);
/// let name = store.read("curr", &LocaleTag::parse("en"), &path)?;
/// assert_eq!(name.as_str(), Some("US Dollar"));
/// # Ok(()) }
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryBundleStore {
    documents: HashMap<(String, LocaleTag), ResourceEntry>,
}

impl MemoryBundleStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `document` as the data tree of `bundle` at `locale`.
    ///
    /// An existing document for the same pair is replaced.
    pub fn insert(
        &mut self,
        bundle: impl Into<String>,
        locale: impl Into<LocaleTag>,
        document: ResourceEntry,
    ) {
        self.documents
            .insert((bundle.into(), locale.into()), document);
    }

    /// Convert a JSON value and store it as a document.
    ///
    /// # Errors
    ///
    /// Returns an error when the value contains booleans, nulls or floats,
    /// which bundles cannot represent.
    pub fn insert_json(
        &mut self,
        bundle: impl Into<String>,
        locale: impl Into<LocaleTag>,
        document: serde_json::Value,
    ) -> serde_json::Result<()> {
        let entry = serde_json::from_value(document)?;
        self.insert(bundle, locale, entry);
        Ok(())
    }

    /// Number of stored documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Return `true` when no documents are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl BundleStore for MemoryBundleStore {
    fn read(
        &self,
        bundle: &str,
        locale: &LocaleTag,
        key_path: &KeyPath,
    ) -> Result<ResourceEntry, BundleError> {
        self.documents
            .get(&(bundle.to_owned(), locale.clone()))
            .and_then(|document| document.lookup(key_path))
            .cloned()
            .ok_or_else(|| BundleError::not_found(bundle, locale, key_path))
    }
}
