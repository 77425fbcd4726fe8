//! The set of locales a data set knows about.

use crate::bundle::{BundleStore, KeyPath, ResourceEntry};
use crate::locale::{AliasMap, LocaleChainResolver, LocaleTag};
use crate::resolver::{EntryResolver, ResolveError, expect_string, unexpected};
use std::collections::BTreeSet;

const LOCALES_BUNDLE: &str = "locales";

/// Known locales together with the locale alias table.
///
/// An empty universe accepts every locale; this suits data sets that do not
/// ship a `locales` bundle.
#[derive(Debug, Clone, Default)]
pub struct LocaleUniverse {
    locales: BTreeSet<LocaleTag>,
    chains: LocaleChainResolver,
}

impl LocaleUniverse {
    /// Build a universe from explicit parts.
    #[must_use]
    pub fn new(locales: impl IntoIterator<Item = LocaleTag>, aliases: AliasMap) -> Self {
        Self {
            locales: locales.into_iter().collect(),
            chains: LocaleChainResolver::new(aliases),
        }
    }

    /// Read `Locales` and `Aliases` from the root of the `locales` bundle.
    ///
    /// Either table may be absent.
    ///
    /// # Errors
    ///
    /// Fails on store errors, on tables of the wrong shape and on alias
    /// chains.
    pub fn load<S: BundleStore + ?Sized>(store: &S) -> Result<Self, ResolveError> {
        let resolver = EntryResolver::new(store);
        let locales = optional_table(&resolver, "Locales")?
            .map(|table| table.into_keys().map(LocaleTag::from).collect::<Vec<_>>())
            .unwrap_or_default();
        let mut pairs = Vec::new();
        if let Some(table) = optional_table(&resolver, "Aliases")? {
            for (alias, target) in table {
                let path = KeyPath::new().key("Aliases").key(alias.as_str());
                let canonical = expect_string(LOCALES_BUNDLE, &path, target)?;
                pairs.push((alias, canonical));
            }
        }
        let aliases = AliasMap::new(pairs).map_err(|source| ResolveError::InvalidAliases {
            bundle: LOCALES_BUNDLE.to_owned(),
            source,
        })?;
        tracing::debug!(
            locales = locales.len(),
            aliases = aliases.len(),
            "loaded locale universe"
        );
        Ok(Self::new(locales, aliases))
    }

    /// Return `true` when `tag` is root, a known locale, or an alias of a
    /// known locale.
    #[must_use]
    pub fn contains(&self, tag: &LocaleTag) -> bool {
        tag.is_root()
            || self.locales.contains(tag)
            || self.locales.contains(&self.chains.canonicalize(tag))
    }

    /// Reject locales outside a non-empty universe.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::UnknownLocale`].
    pub fn ensure_known(&self, tag: &LocaleTag) -> Result<(), ResolveError> {
        if self.locales.is_empty() || self.contains(tag) {
            Ok(())
        } else {
            Err(ResolveError::UnknownLocale {
                locale: Box::new(tag.clone()),
            })
        }
    }

    /// Known locales in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &LocaleTag> {
        self.locales.iter()
    }

    /// Number of known locales, aliases excluded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locales.len()
    }

    /// Return `true` when no locales are known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    /// Locale alias table.
    #[must_use]
    pub const fn aliases(&self) -> &AliasMap {
        self.chains.aliases()
    }

    /// Chain resolver built on the alias table.
    #[must_use]
    pub const fn chains(&self) -> &LocaleChainResolver {
        &self.chains
    }
}

fn optional_table<S: BundleStore + ?Sized>(
    resolver: &EntryResolver<'_, S>,
    key: &str,
) -> Result<Option<indexmap::IndexMap<String, ResourceEntry>>, ResolveError> {
    let path = KeyPath::new().key(key);
    match resolver.resolve_direct(LOCALES_BUNDLE, &LocaleTag::root(), &path) {
        Ok(ResourceEntry::Table(table)) => Ok(Some(table)),
        Ok(other) => Err(unexpected(LOCALES_BUNDLE, &path, "table", &other)),
        Err(err) if err.is_missing() => Ok(None),
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::MemoryBundleStore;
    use anyhow::{Result, ensure};
    use rstest::rstest;
    use serde_json::json;

    fn universe() -> Result<LocaleUniverse> {
        let mut store = MemoryBundleStore::new();
        store.insert_json(
            "locales",
            "root",
            json!({
                "Locales": { "en": "English", "he": "Hebrew", "he_IL": "Hebrew (Israel)" },
                "Aliases": { "iw": "he", "iw_IL": "he_IL", "zh_TW": "zh_Hant_TW" }
            }),
        )?;
        Ok(LocaleUniverse::load(&store)?)
    }

    #[rstest]
    #[case("en", true)]
    #[case("iw_IL", true)]
    #[case("root", true)]
    #[case("xx", false)]
    #[case("zh_TW", false)]
    fn membership(#[case] raw: &str, #[case] known: bool) -> Result<()> {
        let universe = universe()?;
        ensure!(universe.contains(&LocaleTag::parse(raw)) == known, "{raw}");
        Ok(())
    }

    #[test]
    fn unknown_locale_is_rejected() -> Result<()> {
        let universe = universe()?;
        let err = universe.ensure_known(&LocaleTag::parse("xx_YY"));
        ensure!(
            matches!(err, Err(ResolveError::UnknownLocale { .. })),
            "expected UnknownLocale, got {err:?}"
        );
        Ok(())
    }

    #[test]
    fn empty_universe_accepts_anything() {
        let universe = LocaleUniverse::default();
        assert!(universe.ensure_known(&LocaleTag::parse("xx")).is_ok());
    }
}
