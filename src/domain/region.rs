//! Region and country names.

use super::{DomainKind, IntlData};
use crate::locale::LocaleTag;
use crate::resolver::ResolveError;
use indexmap::IndexMap;

/// Region queries against the `region` bundle.
#[derive(Debug, Clone, Copy)]
pub struct RegionData<'a> {
    data: &'a IntlData,
}

impl<'a> RegionData<'a> {
    pub(crate) const fn new(data: &'a IntlData) -> Self {
        Self { data }
    }

    /// All region codes listed at root.
    ///
    /// # Errors
    ///
    /// Fails when the root listing is missing.
    pub fn regions(&self) -> Result<Vec<String>, ResolveError> {
        self.data.entities(DomainKind::Region)
    }

    /// Display name of `region` for `display`.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::MissingResource`] when no locale of the chain
    /// names the region.
    pub fn name(&self, region: &str, display: &LocaleTag) -> Result<String, ResolveError> {
        self.data.display_name(DomainKind::Region, region, display)
    }

    /// All region names for `display`, collated by name.
    ///
    /// # Errors
    ///
    /// Fails on unknown display locales and store errors.
    pub fn names(&self, display: &LocaleTag) -> Result<IndexMap<String, String>, ResolveError> {
        self.data.collated_names(DomainKind::Region, display)
    }
}
