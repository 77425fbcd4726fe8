//! Script names.

use super::language::read_alpha3;
use super::{DomainKind, IntlData};
use crate::locale::LocaleTag;
use crate::resolver::ResolveError;
use indexmap::IndexMap;

/// Script queries; scripts share the `lang` bundle with languages.
#[derive(Debug, Clone, Copy)]
pub struct ScriptData<'a> {
    data: &'a IntlData,
}

impl<'a> ScriptData<'a> {
    pub(crate) const fn new(data: &'a IntlData) -> Self {
        Self { data }
    }

    /// All script codes listed at root.
    ///
    /// # Errors
    ///
    /// Fails when the root listing is missing.
    pub fn scripts(&self) -> Result<Vec<String>, ResolveError> {
        self.data.entities(DomainKind::Script)
    }

    /// Display name of `script` for `display`, such as `Cyrillic`.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::MissingResource`] when no locale of the chain
    /// names the script.
    pub fn name(&self, script: &str, display: &LocaleTag) -> Result<String, ResolveError> {
        self.data.display_name(DomainKind::Script, script, display)
    }

    /// All script names for `display`, collated by name.
    ///
    /// # Errors
    ///
    /// Fails on unknown display locales and store errors.
    pub fn names(&self, display: &LocaleTag) -> Result<IndexMap<String, String>, ResolveError> {
        self.data.collated_names(DomainKind::Script, display)
    }

    /// Alias table shared with languages.
    ///
    /// # Errors
    ///
    /// See [`super::LanguageData::aliases`].
    pub fn aliases(&self) -> Result<IndexMap<String, String>, ResolveError> {
        self.data.languages().aliases()
    }

    /// Entry of `script` in the shared `Alpha2ToAlpha3` table.
    ///
    /// Script codes are matched verbatim against the alias table; their case
    /// is significant.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::MissingResource`] when the table has no entry
    /// for the script.
    pub fn alpha3_code(&self, script: &str) -> Result<String, ResolveError> {
        let canonical = match self.aliases() {
            Ok(table) => table
                .get(script)
                .cloned()
                .unwrap_or_else(|| script.to_owned()),
            Err(err) if err.is_missing() => script.to_owned(),
            Err(err) => return Err(err),
        };
        read_alpha3(self.data, &canonical)
    }
}
