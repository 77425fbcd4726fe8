//! Documented data gaps for one domain.

use super::diagnostics::CatalogParseError;
use crate::domain::{DomainKind, LocaleUniverse};
use crate::locale::LocaleTag;
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8::Dir};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

/// Failures while loading or validating an [`ExceptionCatalog`].
#[derive(Debug, Error, Diagnostic)]
pub enum CatalogError {
    /// A locale named by the catalog is not in the universe.
    #[error("catalog for {domain} names unknown locale `{locale}`")]
    #[diagnostic(
        code(glossa::catalog::unknown_locale),
        help("remove the locale from the catalog or add it to the `locales` bundle")
    )]
    UnknownLocale {
        /// Domain of the catalog.
        domain: DomainKind,
        /// The unknown locale.
        locale: LocaleTag,
    },

    /// The catalog describes a different domain than the verifier checks.
    #[error("catalog is for {found}, expected {expected}")]
    #[diagnostic(code(glossa::catalog::domain_mismatch))]
    DomainMismatch {
        /// Domain the verifier was asked to check.
        expected: DomainKind,
        /// Domain declared by the catalog.
        found: DomainKind,
    },

    /// The catalog text is malformed.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(Box<CatalogParseError>),

    /// The catalog file could not be read.
    #[error("failed to read catalog {path}")]
    #[diagnostic(code(glossa::catalog::io))]
    Io {
        /// Path of the catalog file.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Locales known to lack data in one domain.
///
/// The YAML form mirrors the fields:
///
/// ```yaml
/// domain: currency
/// locales_without_any: [ti]
/// self_untranslated: [in, iw]
/// entities:
///   USD: [as, bem]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExceptionCatalog {
    domain: DomainKind,
    #[serde(default)]
    locales_without_any: BTreeSet<LocaleTag>,
    #[serde(default)]
    self_untranslated: BTreeSet<LocaleTag>,
    #[serde(default)]
    entities: BTreeMap<String, BTreeSet<LocaleTag>>,
}

impl ExceptionCatalog {
    /// An empty catalog for `domain`.
    #[must_use]
    pub const fn new(domain: DomainKind) -> Self {
        Self {
            domain,
            locales_without_any: BTreeSet::new(),
            self_untranslated: BTreeSet::new(),
            entities: BTreeMap::new(),
        }
    }

    /// Parse a catalog from YAML text; `name` labels diagnostics.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] with a source span on malformed input.
    pub fn from_yaml(src: &str, name: &str) -> Result<Self, CatalogError> {
        serde_saphyr::from_str(src)
            .map_err(|err| CatalogError::Parse(Box::new(CatalogParseError::new(err, src, name))))
    }

    /// Read and parse a catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] when the file cannot be read and
    /// [`CatalogError::Parse`] when it is malformed.
    pub fn from_path(path: &Utf8Path) -> Result<Self, CatalogError> {
        let io_error = |source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        };
        let parent = match path.parent() {
            Some(dir) if !dir.as_str().is_empty() => dir,
            _ => Utf8Path::new("."),
        };
        let file_name = path.file_name().unwrap_or_else(|| path.as_str());
        let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(io_error)?;
        let src = dir.read_to_string(file_name).map_err(io_error)?;
        Self::from_yaml(&src, path.as_str())
    }

    /// Document that `locales` have no data at all in this domain.
    #[must_use]
    pub fn with_locales_without_any<I, L>(mut self, locales: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<LocaleTag>,
    {
        self.locales_without_any
            .extend(locales.into_iter().map(Into::into));
        self
    }

    /// Document that `locales` do not name themselves.
    #[must_use]
    pub fn with_self_untranslated<I, L>(mut self, locales: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<LocaleTag>,
    {
        self.self_untranslated
            .extend(locales.into_iter().map(Into::into));
        self
    }

    /// Document that `locales` lack data for `entity`.
    #[must_use]
    pub fn with_entity<I, L>(mut self, entity: impl Into<String>, locales: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<LocaleTag>,
    {
        self.entities
            .entry(entity.into())
            .or_default()
            .extend(locales.into_iter().map(Into::into));
        self
    }

    /// Domain the catalog documents.
    #[must_use]
    pub const fn domain(&self) -> DomainKind {
        self.domain
    }

    /// Return `true` when `locale` is documented to have no data at all.
    #[must_use]
    pub fn lacks_all(&self, locale: &LocaleTag) -> bool {
        self.locales_without_any.contains(locale)
    }

    /// Return `true` when `locale` is documented not to name itself.
    #[must_use]
    pub fn lacks_self(&self, locale: &LocaleTag) -> bool {
        self.self_untranslated.contains(locale)
    }

    /// Return `true` when `locale` is documented to lack `entity`.
    #[must_use]
    pub fn lacks_entity(&self, entity: &str, locale: &LocaleTag) -> bool {
        self.entities
            .get(entity)
            .is_some_and(|locales| locales.contains(locale))
    }

    /// Every locale named anywhere in the catalog.
    pub fn locales(&self) -> impl Iterator<Item = &LocaleTag> {
        self.locales_without_any
            .iter()
            .chain(&self.self_untranslated)
            .chain(self.entities.values().flatten())
    }

    /// Check that every named locale exists in `universe`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownLocale`] for the first stray locale.
    pub fn validate(&self, universe: &LocaleUniverse) -> Result<(), CatalogError> {
        match self.locales().find(|locale| !universe.contains(locale)) {
            Some(locale) => Err(CatalogError::UnknownLocale {
                domain: self.domain,
                locale: locale.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::AliasMap;
    use anyhow::{Result, ensure};

    const CATALOG: &str = "\
domain: currency
locales_without_any: [ti]
entities:
  USD: [as, bem]
";

    #[test]
    fn parses_yaml() -> Result<()> {
        let catalog = ExceptionCatalog::from_yaml(CATALOG, "catalog.yaml")?;
        ensure!(catalog.domain() == DomainKind::Currency);
        ensure!(catalog.lacks_all(&LocaleTag::parse("ti")));
        ensure!(catalog.lacks_entity("USD", &LocaleTag::parse("bem")));
        ensure!(!catalog.lacks_entity("EUR", &LocaleTag::parse("bem")));
        Ok(())
    }

    #[test]
    fn rejects_unknown_fields() {
        let outcome = ExceptionCatalog::from_yaml("domain: currency\nextra: 1\n", "c.yaml");
        assert!(matches!(outcome, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn validation_names_the_stray_locale() -> Result<()> {
        let universe = LocaleUniverse::new(
            ["as", "ti"].map(LocaleTag::parse),
            AliasMap::default(),
        );
        let catalog = ExceptionCatalog::from_yaml(CATALOG, "catalog.yaml")?;
        let Err(CatalogError::UnknownLocale { locale, .. }) = catalog.validate(&universe) else {
            anyhow::bail!("expected an unknown locale");
        };
        ensure!(locale == LocaleTag::parse("bem"), "unexpected locale {locale}");
        Ok(())
    }
}
