//! Language names and codes.

use super::{DomainKind, IntlData};
use crate::bundle::KeyPath;
use crate::locale::{AliasMap, LocaleTag};
use crate::resolver::{AnchorPolicy, ResolveError, expect_string};
use indexmap::IndexMap;

const BUNDLE: &str = "lang";

/// Language queries against the `lang` bundle.
#[derive(Debug, Clone, Copy)]
pub struct LanguageData<'a> {
    data: &'a IntlData,
}

impl<'a> LanguageData<'a> {
    pub(crate) const fn new(data: &'a IntlData) -> Self {
        Self { data }
    }

    /// All language codes listed at root.
    ///
    /// # Errors
    ///
    /// Fails when the root listing is missing.
    pub fn languages(&self) -> Result<Vec<String>, ResolveError> {
        self.data.entities(DomainKind::Language)
    }

    /// Deprecated language codes mapped to their replacements.
    ///
    /// # Errors
    ///
    /// Fails when the alias table is missing or holds non-string values.
    pub fn aliases(&self) -> Result<IndexMap<String, String>, ResolveError> {
        self.data.root_string_table(BUNDLE, "Aliases")
    }

    /// Display name of `language` for `display`.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::MissingResource`] when no locale of the chain
    /// names the language.
    pub fn name(&self, language: &str, display: &LocaleTag) -> Result<String, ResolveError> {
        self.data.display_name(DomainKind::Language, language, display)
    }

    /// All language names for `display`, collated by name.
    ///
    /// # Errors
    ///
    /// Fails on unknown display locales and store errors.
    pub fn names(&self, display: &LocaleTag) -> Result<IndexMap<String, String>, ResolveError> {
        self.data.collated_names(DomainKind::Language, display)
    }

    /// ISO 639-2 code of `language`, such as `deu` for `de`.
    ///
    /// Deprecated codes are canonicalized first, so `iw` yields `heb`.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::MissingResource`] for languages without a
    /// three-letter code.
    pub fn alpha3_code(&self, language: &str) -> Result<String, ResolveError> {
        let canonical = self.canonical(language)?;
        read_alpha3(self.data, &canonical)
    }

    fn canonical(&self, language: &str) -> Result<String, ResolveError> {
        let aliases = match self.aliases() {
            Ok(table) => table,
            Err(err) if err.is_missing() => return Ok(language.to_owned()),
            Err(err) => return Err(err),
        };
        let map = AliasMap::new(aliases).map_err(|source| ResolveError::InvalidAliases {
            bundle: BUNDLE.to_owned(),
            source,
        })?;
        Ok(map.canonicalize(&LocaleTag::parse(language)).to_string())
    }
}

/// Read `Alpha2ToAlpha3/<code>` from the root of the `lang` bundle.
pub(super) fn read_alpha3(data: &IntlData, code: &str) -> Result<String, ResolveError> {
    let path = KeyPath::new().key("Alpha2ToAlpha3").key(code);
    let entry = data
        .resolver()
        .resolve_anchored(BUNDLE, &AnchorPolicy::root(), &path)?;
    expect_string(BUNDLE, &path, entry)
}
