//! Display names of locales.

use super::{DomainKind, IntlData};
use crate::locale::LocaleTag;
use crate::resolver::ResolveError;
use indexmap::IndexMap;

/// Locale queries against the `locales` bundle.
#[derive(Debug, Clone, Copy)]
pub struct LocaleData<'a> {
    data: &'a IntlData,
}

impl<'a> LocaleData<'a> {
    pub(crate) const fn new(data: &'a IntlData) -> Self {
        Self { data }
    }

    /// Known locales in sorted order.
    #[must_use]
    pub fn locales(&self) -> Vec<LocaleTag> {
        self.data.universe().iter().cloned().collect()
    }

    /// Locale aliases mapped to their canonical form, sorted by alias.
    #[must_use]
    pub fn aliases(&self) -> Vec<(LocaleTag, LocaleTag)> {
        let mut pairs: Vec<_> = self
            .data
            .universe()
            .aliases()
            .iter()
            .map(|(alias, target)| (alias.clone(), target.clone()))
            .collect();
        pairs.sort();
        pairs
    }

    /// Display name of `locale` for `display`, such as `German (Austria)`.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::MissingResource`] when no locale of the chain
    /// names `locale`.
    pub fn name(&self, locale: &LocaleTag, display: &LocaleTag) -> Result<String, ResolveError> {
        self.data
            .display_name(DomainKind::Locale, &locale.to_string(), display)
    }

    /// All locale names for `display`, collated by name.
    ///
    /// # Errors
    ///
    /// Fails on unknown display locales and store errors.
    pub fn names(&self, display: &LocaleTag) -> Result<IndexMap<String, String>, ResolveError> {
        self.data.collated_names(DomainKind::Locale, display)
    }
}
