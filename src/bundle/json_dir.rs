//! JSON bundle directory with an LRU document cache.
//!
//! The directory holds one sub-directory per bundle and one file per locale,
//! for example `curr/en.json` or `lang/root.json`. Parsed documents, and the
//! fact that a locale has no file, are cached so repeated lookups against the
//! same locale do not reparse JSON.

use super::{BundleError, BundleStore, KeyPath, ResourceEntry};
use crate::locale::LocaleTag;
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8::Dir};
use lru::LruCache;
use std::{
    io::ErrorKind,
    num::NonZeroUsize,
    sync::{Arc, Mutex, MutexGuard},
};

/// Number of parsed documents kept in memory.
pub const DOCUMENT_CACHE_CAPACITY: usize = 256;

type Document = Option<Arc<ResourceEntry>>;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct DocumentKey {
    bundle: String,
    locale: LocaleTag,
}

/// Bundle store reading `<root>/<bundle>/<locale>.json` files.
pub struct JsonBundleStore {
    dir: Dir,
    root: Utf8PathBuf,
    cache: Mutex<LruCache<DocumentKey, Document>>,
}

impl std::fmt::Debug for JsonBundleStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonBundleStore")
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

impl JsonBundleStore {
    /// Open the bundle directory at `root`.
    ///
    /// # Errors
    ///
    /// Returns [`BundleError::Io`] when the directory cannot be opened.
    pub fn open(root: impl AsRef<Utf8Path>) -> Result<Self, BundleError> {
        let root_path = root.as_ref().to_path_buf();
        let dir = Dir::open_ambient_dir(&root_path, ambient_authority()).map_err(|source| {
            BundleError::Io {
                path: root_path.clone(),
                source,
            }
        })?;
        Ok(Self {
            dir,
            root: root_path,
            cache: Mutex::new(LruCache::new(cache_capacity())),
        })
    }

    /// Directory the store reads from.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    fn document(&self, bundle: &str, locale: &LocaleTag) -> Result<Document, BundleError> {
        let key = DocumentKey {
            bundle: bundle.to_owned(),
            locale: locale.clone(),
        };
        if let Some(cached) = self.lock_cache().get(&key) {
            return Ok(cached.clone());
        }
        let loaded = self.load(bundle, locale)?;
        self.lock_cache().put(key, loaded.clone());
        Ok(loaded)
    }

    fn load(&self, bundle: &str, locale: &LocaleTag) -> Result<Document, BundleError> {
        let relative = Utf8PathBuf::from(bundle).join(format!("{locale}.json"));
        let text = match self.dir.read_to_string(&relative) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(%bundle, %locale, "no bundle file");
                return Ok(None);
            }
            Err(source) => {
                return Err(BundleError::Io {
                    path: self.root.join(&relative),
                    source,
                });
            }
        };
        let entry = serde_json::from_str(&text).map_err(|source| BundleError::Parse {
            path: self.root.join(&relative),
            source,
        })?;
        Ok(Some(Arc::new(entry)))
    }

    fn lock_cache(&self) -> MutexGuard<'_, LruCache<DocumentKey, Document>> {
        match self.cache.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                tracing::warn!("bundle cache lock poisoned; continuing with inner state");
                poisoned.into_inner()
            }
        }
    }
}

const fn cache_capacity() -> NonZeroUsize {
    match NonZeroUsize::new(DOCUMENT_CACHE_CAPACITY) {
        Some(capacity) => capacity,
        None => NonZeroUsize::MIN,
    }
}

impl BundleStore for JsonBundleStore {
    fn read(
        &self,
        bundle: &str,
        locale: &LocaleTag,
        key_path: &KeyPath,
    ) -> Result<ResourceEntry, BundleError> {
        self.document(bundle, locale)?
            .as_deref()
            .and_then(|document| document.lookup(key_path))
            .cloned()
            .ok_or_else(|| BundleError::not_found(bundle, locale, key_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Context, Result, ensure};
    use std::fs;

    fn data_dir() -> Result<(tempfile::TempDir, Utf8PathBuf)> {
        let temp = tempfile::tempdir().context("create temp dir")?;
        let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf())
            .map_err(|path| anyhow::anyhow!("non UTF-8 temp dir {}", path.display()))?;
        fs::create_dir_all(root.join("curr")).context("create bundle dir")?;
        Ok((temp, root))
    }

    #[test]
    fn reads_entries_from_locale_files() -> Result<()> {
        let (_temp, root) = data_dir()?;
        fs::write(
            root.join("curr/en.json"),
            r#"{"Currencies": {"EUR": ["€", "Euro"]}}"#,
        )
        .context("write en.json")?;
        let store = JsonBundleStore::open(&root)?;
        let path = KeyPath::new().key("Currencies").key("EUR").index(1);
        let entry = store.read("curr", &LocaleTag::parse("en"), &path)?;
        ensure!(entry.as_str() == Some("Euro"), "unexpected entry {entry:?}");
        Ok(())
    }

    #[test]
    fn missing_file_is_not_found() -> Result<()> {
        let (_temp, root) = data_dir()?;
        let store = JsonBundleStore::open(&root)?;
        let err = store
            .read("curr", &LocaleTag::parse("fr"), &KeyPath::new().key("Currencies"))
            .err()
            .context("expected a miss")?;
        ensure!(err.is_not_found(), "expected NotFound, got {err}");
        Ok(())
    }

    #[test]
    fn malformed_file_is_a_parse_error() -> Result<()> {
        let (_temp, root) = data_dir()?;
        fs::write(root.join("curr/de.json"), "{ not json").context("write de.json")?;
        let store = JsonBundleStore::open(&root)?;
        let err = store
            .read("curr", &LocaleTag::parse("de"), &KeyPath::new())
            .err()
            .context("expected a parse failure")?;
        ensure!(
            matches!(err, BundleError::Parse { .. }),
            "expected Parse, got {err}"
        );
        Ok(())
    }
}
