//! Access to per-locale resource bundles.
//!
//! A bundle store answers one question: what value sits at a key path of a
//! given bundle for exactly one locale. It never falls back to parent locales;
//! that is the job of [`crate::resolver::EntryResolver`]. Two stores ship with
//! the crate: [`MemoryBundleStore`] for embedders and tests, and
//! [`JsonBundleStore`] reading a `<bundle>/<locale>.json` directory layout.

mod entry;
mod json_dir;
mod key_path;
mod memory;

pub use entry::ResourceEntry;
pub use json_dir::JsonBundleStore;
pub use key_path::{KeyPath, KeySegment};
pub use memory::MemoryBundleStore;

use crate::locale::LocaleTag;
use camino::Utf8PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Failures reported by a [`BundleStore`].
#[derive(Debug, Error)]
pub enum BundleError {
    /// The locale's data does not define the key path.
    #[error("bundle `{bundle}` has no entry `{key_path}` for locale `{locale}`")]
    NotFound {
        /// Bundle that was queried.
        bundle: String,
        /// Locale that was queried.
        locale: Box<LocaleTag>,
        /// Path that was requested.
        key_path: KeyPath,
    },
    /// The backing file could not be read.
    #[error("failed to read bundle file {path}")]
    Io {
        /// File or directory that failed.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The backing file is not valid bundle JSON.
    #[error("failed to parse bundle file {path}")]
    Parse {
        /// File that failed to parse.
        path: Utf8PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

impl BundleError {
    /// Build a [`BundleError::NotFound`].
    #[must_use]
    pub fn not_found(bundle: &str, locale: &LocaleTag, key_path: &KeyPath) -> Self {
        Self::NotFound {
            bundle: bundle.to_owned(),
            locale: Box::new(locale.clone()),
            key_path: key_path.clone(),
        }
    }

    /// Return `true` when the error only reports absence.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Key-path addressable storage of per-locale data trees.
///
/// Implementations must be side-effect free from the caller's point of view
/// and safe to call from several threads at once.
pub trait BundleStore: Send + Sync {
    /// Read the value at `key_path` in `bundle` for exactly `locale`.
    ///
    /// # Errors
    ///
    /// Returns [`BundleError::NotFound`] when the locale has no such entry
    /// and other variants when the backing storage fails.
    fn read(
        &self,
        bundle: &str,
        locale: &LocaleTag,
        key_path: &KeyPath,
    ) -> Result<ResourceEntry, BundleError>;
}

impl<T: BundleStore + ?Sized> BundleStore for Arc<T> {
    fn read(
        &self,
        bundle: &str,
        locale: &LocaleTag,
        key_path: &KeyPath,
    ) -> Result<ResourceEntry, BundleError> {
        (**self).read(bundle, locale, key_path)
    }
}

impl<T: BundleStore + ?Sized> BundleStore for &T {
    fn read(
        &self,
        bundle: &str,
        locale: &LocaleTag,
        key_path: &KeyPath,
    ) -> Result<ResourceEntry, BundleError> {
        (**self).read(bundle, locale, key_path)
    }
}
