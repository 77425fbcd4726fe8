//! Resolution of key paths against bundle stores.
//!
//! Two independent fallback mechanisms live here and are never merged:
//!
//! - the *locale chain*, where the key stays fixed and the locale varies from
//!   most specific to root ([`EntryResolver::resolve`]);
//! - the *domain default*, where the locale is a fixed anchor and the entity
//!   segment of the key varies from the requested entity to a sentinel such
//!   as `DEFAULT` ([`EntryResolver::resolve_anchored`]).
//!
//! A third, fallback-free mode ([`EntryResolver::resolve_direct`]) reads a
//! single locale and backs the consistency checks.

mod error;

pub use error::ResolveError;

use crate::bundle::{BundleError, BundleStore, KeyPath, ResourceEntry};
use crate::locale::{FallbackChain, LocaleTag};
use tracing::debug;

/// Sentinel entity key used for domain defaults.
pub const DEFAULT_KEY: &str = "DEFAULT";

/// Fixed-anchor resolution policy for locale-independent metadata.
///
/// # Examples
///
/// ```
/// use glossa::locale::LocaleTag;
/// use glossa::resolver::AnchorPolicy;
///
/// let policy = AnchorPolicy::with_default(LocaleTag::parse("en"), 1);
/// assert_eq!(policy.default_key(), Some("DEFAULT"));
/// assert!(AnchorPolicy::root().default_key().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorPolicy {
    anchor: LocaleTag,
    default: Option<DefaultKey>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct DefaultKey {
    key: &'static str,
    entity_segment: usize,
}

impl AnchorPolicy {
    /// Anchor at root with no default retry.
    #[must_use]
    pub const fn root() -> Self {
        Self {
            anchor: LocaleTag::root(),
            default: None,
        }
    }

    /// Anchor at `anchor` and retry with [`DEFAULT_KEY`] in place of the key
    /// path segment at `entity_segment`.
    #[must_use]
    pub const fn with_default(anchor: LocaleTag, entity_segment: usize) -> Self {
        Self {
            anchor,
            default: Some(DefaultKey {
                key: DEFAULT_KEY,
                entity_segment,
            }),
        }
    }

    /// Locale the policy resolves against.
    #[must_use]
    pub const fn anchor(&self) -> &LocaleTag {
        &self.anchor
    }

    /// Sentinel key consulted after a miss, if any.
    #[must_use]
    pub fn default_key(&self) -> Option<&'static str> {
        self.default.as_ref().map(|default| default.key)
    }

    fn default_path(&self, key_path: &KeyPath) -> Option<KeyPath> {
        self.default
            .as_ref()
            .map(|default| key_path.replace(default.entity_segment, default.key))
    }
}

/// Walks locales against a [`BundleStore`].
#[derive(Debug, Clone, Copy)]
pub struct EntryResolver<'s, S: ?Sized> {
    store: &'s S,
}

impl<'s, S: BundleStore + ?Sized> EntryResolver<'s, S> {
    /// Create a resolver reading from `store`.
    #[must_use]
    pub const fn new(store: &'s S) -> Self {
        Self { store }
    }

    /// First value defined for `key_path` along `chain`.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::MissingResource`] when every locale of the
    /// chain lacks the key, and [`ResolveError::Bundle`] when the store fails
    /// for another reason.
    pub fn resolve(
        &self,
        bundle: &str,
        chain: &FallbackChain,
        key_path: &KeyPath,
    ) -> Result<ResourceEntry, ResolveError> {
        match self.walk(bundle, chain, key_path)? {
            Some(entry) => Ok(entry),
            None => Err(missing(bundle, chain.head(), key_path)),
        }
    }

    /// Resolve locale-independent metadata through `policy`.
    ///
    /// The anchor's own chain is walked for `key_path`; on a miss and when
    /// the policy has a default key, the entity segment is replaced by that
    /// key and the anchor chain is walked once more.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::MissingResource`] naming the original key path
    /// when both lookups miss.
    pub fn resolve_anchored(
        &self,
        bundle: &str,
        policy: &AnchorPolicy,
        key_path: &KeyPath,
    ) -> Result<ResourceEntry, ResolveError> {
        let chain = FallbackChain::from_canonical(policy.anchor().clone());
        if let Some(entry) = self.walk(bundle, &chain, key_path)? {
            return Ok(entry);
        }
        if let Some(default_path) = policy.default_path(key_path) {
            debug!(%bundle, %key_path, %default_path, "retrying with domain default");
            if let Some(entry) = self.walk(bundle, &chain, &default_path)? {
                return Ok(entry);
            }
        }
        Err(missing(bundle, policy.anchor(), key_path))
    }

    /// Value at `key_path` for exactly `locale`, without any fallback.
    ///
    /// # Errors
    ///
    /// Same as [`Self::resolve`].
    pub fn resolve_direct(
        &self,
        bundle: &str,
        locale: &LocaleTag,
        key_path: &KeyPath,
    ) -> Result<ResourceEntry, ResolveError> {
        match self.read(bundle, locale, key_path)? {
            Some(entry) => Ok(entry),
            None => Err(missing(bundle, locale, key_path)),
        }
    }

    fn walk(
        &self,
        bundle: &str,
        chain: &FallbackChain,
        key_path: &KeyPath,
    ) -> Result<Option<ResourceEntry>, BundleError> {
        for locale in chain {
            if let Some(entry) = self.read(bundle, locale, key_path)? {
                if locale != chain.head() {
                    debug!(%bundle, %key_path, requested = %chain.head(), %locale, "resolved via fallback");
                }
                return Ok(Some(entry));
            }
        }
        Ok(None)
    }

    fn read(
        &self,
        bundle: &str,
        locale: &LocaleTag,
        key_path: &KeyPath,
    ) -> Result<Option<ResourceEntry>, BundleError> {
        match self.store.read(bundle, locale, key_path) {
            Ok(entry) => Ok(Some(entry)),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }
}

fn missing(bundle: &str, locale: &LocaleTag, key_path: &KeyPath) -> ResolveError {
    ResolveError::MissingResource {
        bundle: bundle.to_owned(),
        locale: Box::new(locale.clone()),
        key_path: key_path.clone(),
    }
}

/// Read a string entry, failing on other shapes.
pub(crate) fn expect_string(
    bundle: &str,
    key_path: &KeyPath,
    entry: ResourceEntry,
) -> Result<String, ResolveError> {
    match entry {
        ResourceEntry::String(value) => Ok(value),
        other => Err(unexpected(bundle, key_path, "string", &other)),
    }
}

/// Read an integer entry, failing on other shapes.
pub(crate) fn expect_integer(
    bundle: &str,
    key_path: &KeyPath,
    entry: &ResourceEntry,
) -> Result<i64, ResolveError> {
    entry
        .as_integer()
        .ok_or_else(|| unexpected(bundle, key_path, "integer", entry))
}

pub(crate) fn unexpected(
    bundle: &str,
    key_path: &KeyPath,
    expected: &'static str,
    found: &ResourceEntry,
) -> ResolveError {
    ResolveError::UnexpectedType {
        bundle: bundle.to_owned(),
        key_path: key_path.clone(),
        expected,
        found: found.kind(),
    }
}
