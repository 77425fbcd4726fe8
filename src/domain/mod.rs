//! Per-domain query surfaces over a shared data context.
//!
//! [`IntlData`] bundles the store, the locale universe and the collator. The
//! provider views it hands out ([`CurrencyData`], [`LanguageData`],
//! [`LocaleData`], [`RegionData`], [`ScriptData`]) borrow the context and
//! translate domain questions into key paths.

mod currency;
mod kind;
mod language;
mod locales;
mod region;
mod script;
mod universe;

pub use currency::CurrencyData;
pub use kind::DomainKind;
pub use language::LanguageData;
pub use locales::LocaleData;
pub use region::RegionData;
pub use script::ScriptData;
pub use universe::LocaleUniverse;

use crate::bundle::{BundleStore, KeyPath, ResourceEntry};
use crate::collation::{self, Collator};
use crate::locale::{FallbackChain, LocaleTag};
use crate::resolver::{EntryResolver, ResolveError, expect_string, unexpected};
use indexmap::IndexMap;
use std::sync::Arc;
use tracing::debug;

/// Shared, immutable context behind every domain provider.
#[derive(Clone)]
pub struct IntlData {
    store: Arc<dyn BundleStore>,
    universe: LocaleUniverse,
    collator: Arc<dyn Collator>,
}

impl std::fmt::Debug for IntlData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntlData")
            .field("universe", &self.universe)
            .finish_non_exhaustive()
    }
}

impl IntlData {
    /// Assemble a context from its parts.
    #[must_use]
    pub fn new(
        store: Arc<dyn BundleStore>,
        universe: LocaleUniverse,
        collator: Arc<dyn Collator>,
    ) -> Self {
        Self {
            store,
            universe,
            collator,
        }
    }

    /// Build a context whose universe is read from the store itself.
    ///
    /// # Errors
    ///
    /// Fails when the `locales` bundle cannot be read or its alias table is
    /// malformed.
    pub fn load(
        store: Arc<dyn BundleStore>,
        collator: Arc<dyn Collator>,
    ) -> Result<Self, ResolveError> {
        let universe = LocaleUniverse::load(store.as_ref())?;
        Ok(Self::new(store, universe, collator))
    }

    /// The underlying bundle store.
    #[must_use]
    pub fn store(&self) -> &dyn BundleStore {
        self.store.as_ref()
    }

    /// Known locales and their aliases.
    #[must_use]
    pub const fn universe(&self) -> &LocaleUniverse {
        &self.universe
    }

    /// Collator used for name projections.
    #[must_use]
    pub fn collator(&self) -> &dyn Collator {
        self.collator.as_ref()
    }

    /// Resolver reading from this context's store.
    #[must_use]
    pub fn resolver(&self) -> EntryResolver<'_, dyn BundleStore> {
        EntryResolver::new(self.store.as_ref())
    }

    /// Fallback chain for a display locale after the universe check.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::UnknownLocale`] for locales outside the
    /// universe.
    pub fn chain_for(&self, display: &LocaleTag) -> Result<FallbackChain, ResolveError> {
        self.universe.ensure_known(display)?;
        Ok(self.universe.chains().chain(display))
    }

    /// Currency queries.
    #[must_use]
    pub const fn currencies(&self) -> CurrencyData<'_> {
        CurrencyData::new(self)
    }

    /// Language queries.
    #[must_use]
    pub const fn languages(&self) -> LanguageData<'_> {
        LanguageData::new(self)
    }

    /// Locale display-name queries.
    #[must_use]
    pub const fn locales(&self) -> LocaleData<'_> {
        LocaleData::new(self)
    }

    /// Region queries.
    #[must_use]
    pub const fn regions(&self) -> RegionData<'_> {
        RegionData::new(self)
    }

    /// Script queries.
    #[must_use]
    pub const fn scripts(&self) -> ScriptData<'_> {
        ScriptData::new(self)
    }

    /// Display name of `entity` in `kind`, rendered for `display`.
    ///
    /// # Errors
    ///
    /// See the individual providers.
    pub fn name(
        &self,
        kind: DomainKind,
        entity: &str,
        display: &LocaleTag,
    ) -> Result<String, ResolveError> {
        self.display_name(kind, entity, display)
    }

    /// Collated names of every entity in `kind`, rendered for `display`.
    ///
    /// # Errors
    ///
    /// See the individual providers.
    pub fn names(
        &self,
        kind: DomainKind,
        display: &LocaleTag,
    ) -> Result<IndexMap<String, String>, ResolveError> {
        self.collated_names(kind, display)
    }

    /// Keys of every entity in `kind`, in data order.
    ///
    /// # Errors
    ///
    /// Fails when the root listing is missing or is not a table.
    pub fn entities(&self, kind: DomainKind) -> Result<Vec<String>, ResolveError> {
        self.root_keys(kind.bundle(), kind.names_key())
    }

    pub(crate) fn root_table(
        &self,
        bundle: &str,
        key: &str,
    ) -> Result<IndexMap<String, ResourceEntry>, ResolveError> {
        let path = KeyPath::new().key(key);
        match self.resolver().resolve_direct(bundle, &LocaleTag::root(), &path)? {
            ResourceEntry::Table(table) => Ok(table),
            other => Err(unexpected(bundle, &path, "table", &other)),
        }
    }

    pub(crate) fn root_keys(&self, bundle: &str, key: &str) -> Result<Vec<String>, ResolveError> {
        Ok(self.root_table(bundle, key)?.into_keys().collect())
    }

    pub(crate) fn root_string_table(
        &self,
        bundle: &str,
        key: &str,
    ) -> Result<IndexMap<String, String>, ResolveError> {
        self.root_table(bundle, key)?
            .into_iter()
            .map(|(alias, target)| {
                let path = KeyPath::new().key(key).key(alias.as_str());
                expect_string(bundle, &path, target).map(|canonical| (alias, canonical))
            })
            .collect()
    }

    pub(crate) fn display_name(
        &self,
        kind: DomainKind,
        entity: &str,
        display: &LocaleTag,
    ) -> Result<String, ResolveError> {
        let chain = self.chain_for(display)?;
        let path = kind.name_path(entity);
        let entry = self.resolver().resolve(kind.bundle(), &chain, &path)?;
        expect_string(kind.bundle(), &path, entry)
    }

    pub(crate) fn collated_names(
        &self,
        kind: DomainKind,
        display: &LocaleTag,
    ) -> Result<IndexMap<String, String>, ResolveError> {
        let chain = self.chain_for(display)?;
        let resolver = self.resolver();
        let mut raw = IndexMap::new();
        for entity in self.entities(kind)? {
            let path = kind.name_path(&entity);
            match resolver.resolve(kind.bundle(), &chain, &path) {
                Ok(entry) => match expect_string(kind.bundle(), &path, entry) {
                    Ok(name) => {
                        raw.insert(entity, name);
                    }
                    Err(err) => {
                        debug!(%kind, %entity, error = %err, "display name is not a string; skipping");
                    }
                },
                Err(err) if err.is_missing() => {
                    debug!(%kind, %entity, display = %chain.head(), "no display name; skipping");
                }
                Err(err) => return Err(err),
            }
        }
        Ok(collation::project(raw, chain.head(), self.collator()))
    }
}
