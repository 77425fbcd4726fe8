//! Whole-catalog completeness checks.
//!
//! The [`ConsistencyVerifier`] reads every (entity, locale) pair of a domain
//! without fallback and compares what it finds with an [`ExceptionCatalog`].
//! Missing data that the catalog does not explain, and catalog entries that
//! the data contradicts, are reported as [`Violation`]s. Findings are data,
//! not errors: a run always produces a [`Report`].

mod catalog;
mod diagnostics;
mod report;

pub use catalog::{CatalogError, ExceptionCatalog};
pub use diagnostics::CatalogParseError;
pub use report::{ANY_ENTITY, Report, Violation, ViolationKind};

use crate::domain::{DomainKind, IntlData};
use crate::locale::LocaleTag;
use crate::resolver::ResolveError;
use tracing::{info, warn};

/// Checks one domain of a data set against its exception catalog.
#[derive(Debug)]
pub struct ConsistencyVerifier<'a> {
    data: &'a IntlData,
    catalog: ExceptionCatalog,
}

impl<'a> ConsistencyVerifier<'a> {
    /// Pair `data` with a validated `catalog`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownLocale`] when the catalog names a
    /// locale outside the data set's universe.
    pub fn new(data: &'a IntlData, catalog: ExceptionCatalog) -> Result<Self, CatalogError> {
        catalog.validate(data.universe())?;
        Ok(Self { data, catalog })
    }

    /// Like [`Self::new`], also checking the catalog's domain.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DomainMismatch`] when the catalog documents
    /// another domain.
    pub fn for_domain(
        data: &'a IntlData,
        domain: DomainKind,
        catalog: ExceptionCatalog,
    ) -> Result<Self, CatalogError> {
        if catalog.domain() != domain {
            return Err(CatalogError::DomainMismatch {
                expected: domain,
                found: catalog.domain(),
            });
        }
        Self::new(data, catalog)
    }

    /// Domain under verification.
    #[must_use]
    pub const fn domain(&self) -> DomainKind {
        self.catalog.domain()
    }

    /// Verify every pair of `entities` and `locales`.
    #[must_use]
    pub fn verify(&self, entities: &[String], locales: &[LocaleTag]) -> Report {
        let violations = self.collect(entities, locales);
        let report = Report::new(self.domain(), entities.len() * locales.len(), violations);
        info!(
            domain = %report.domain(),
            checked = report.checked(),
            gaps = report.count(ViolationKind::UndocumentedGap),
            stale = report.count(ViolationKind::StaleException),
            "verification finished"
        );
        report
    }

    /// Verify every entity listed at root against every known locale.
    ///
    /// # Errors
    ///
    /// Fails when the domain's root listing cannot be read.
    pub fn verify_all(&self) -> Result<Report, ResolveError> {
        let entities = self.data.entities(self.domain())?;
        let locales: Vec<LocaleTag> = self.data.universe().iter().cloned().collect();
        Ok(self.verify(&entities, &locales))
    }

    #[cfg(feature = "parallel")]
    fn collect(&self, entities: &[String], locales: &[LocaleTag]) -> Vec<Violation> {
        use rayon::prelude::*;
        locales
            .par_iter()
            .flat_map_iter(|locale| self.check_locale(entities, locale))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn collect(&self, entities: &[String], locales: &[LocaleTag]) -> Vec<Violation> {
        self.collect_sequential(entities, locales)
    }

    #[cfg(any(test, not(feature = "parallel")))]
    fn collect_sequential(&self, entities: &[String], locales: &[LocaleTag]) -> Vec<Violation> {
        locales
            .iter()
            .flat_map(|locale| self.check_locale(entities, locale))
            .collect()
    }

    fn check_locale(&self, entities: &[String], locale: &LocaleTag) -> Vec<Violation> {
        if self.catalog.lacks_all(locale) {
            let stale = entities.iter().any(|entity| self.is_present(entity, locale));
            return if stale {
                vec![self.violation(ANY_ENTITY, locale, ViolationKind::StaleException)]
            } else {
                Vec::new()
            };
        }
        entities
            .iter()
            .filter_map(|entity| self.check_pair(entity, locale))
            .collect()
    }

    fn check_pair(&self, entity: &str, locale: &LocaleTag) -> Option<Violation> {
        let documented = self.catalog.lacks_entity(entity, locale)
            || (self.catalog.lacks_self(locale) && *entity == locale.to_string());
        let present = self.is_present(entity, locale);
        let kind = match (documented, present) {
            (false, false) => ViolationKind::UndocumentedGap,
            (true, true) => ViolationKind::StaleException,
            _ => return None,
        };
        Some(self.violation(entity, locale, kind))
    }

    fn is_present(&self, entity: &str, locale: &LocaleTag) -> bool {
        let kind = self.domain();
        let path = kind.name_path(entity);
        let resolver = self.data.resolver();
        let mut candidates = vec![locale.clone()];
        if let Some(canonical) = self.data.universe().aliases().target(locale) {
            candidates.push(canonical.clone());
        }
        candidates.iter().any(|candidate| {
            match resolver.resolve_direct(kind.bundle(), candidate, &path) {
                Ok(_) => true,
                Err(err) if err.is_missing() => false,
                Err(err) => {
                    warn!(%entity, locale = %candidate, error = %err, "treating unreadable entry as absent");
                    false
                }
            }
        })
    }

    fn violation(&self, entity: &str, locale: &LocaleTag, kind: ViolationKind) -> Violation {
        Violation {
            domain: self.domain(),
            entity: entity.to_owned(),
            locale: locale.clone(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::MemoryBundleStore;
    use crate::collation::CodePointCollator;
    use crate::domain::LocaleUniverse;
    use crate::locale::AliasMap;
    use anyhow::{Result, ensure};
    use serde_json::json;
    use std::sync::Arc;

    fn data() -> Result<IntlData> {
        let mut store = MemoryBundleStore::new();
        store.insert_json("curr", "en", json!({ "Currencies": { "USD": ["$", "US Dollar"] } }))?;
        store.insert_json("curr", "as", json!({ "Currencies": {} }))?;
        store.insert_json("curr", "he", json!({ "Currencies": { "USD": ["$", "דולר"] } }))?;
        let universe = LocaleUniverse::new(
            ["en", "as", "he", "xx"].map(LocaleTag::parse),
            AliasMap::new([("iw", "he")])?,
        );
        Ok(IntlData::new(
            Arc::new(store),
            universe,
            Arc::new(CodePointCollator),
        ))
    }

    fn entities() -> Vec<String> {
        vec!["USD".to_owned()]
    }

    #[test]
    fn documented_gap_is_silent() -> Result<()> {
        let data = data()?;
        let catalog = ExceptionCatalog::new(DomainKind::Currency).with_entity("USD", ["as"]);
        let verifier = ConsistencyVerifier::new(&data, catalog)?;
        let report = verifier.verify(&entities(), &["en", "as"].map(LocaleTag::parse));
        ensure!(report.is_clean(), "unexpected findings:\n{report}");
        Ok(())
    }

    #[test]
    fn undocumented_gap_is_reported_once() -> Result<()> {
        let data = data()?;
        let verifier = ConsistencyVerifier::new(&data, ExceptionCatalog::new(DomainKind::Currency))?;
        let report = verifier.verify(&entities(), &["as"].map(LocaleTag::parse));
        ensure!(report.violations().len() == 1, "{report}");
        ensure!(report.count(ViolationKind::UndocumentedGap) == 1, "{report}");
        Ok(())
    }

    #[test]
    fn alias_locales_read_through_their_target() -> Result<()> {
        let data = data()?;
        let verifier = ConsistencyVerifier::new(&data, ExceptionCatalog::new(DomainKind::Currency))?;
        let report = verifier.verify(&entities(), &["iw"].map(LocaleTag::parse));
        ensure!(report.is_clean(), "{report}");
        Ok(())
    }

    #[test]
    fn domain_wide_exception_goes_stale_once() -> Result<()> {
        let data = data()?;
        let catalog = ExceptionCatalog::new(DomainKind::Currency).with_locales_without_any(["en", "xx"]);
        let verifier = ConsistencyVerifier::new(&data, catalog)?;
        let report = verifier.verify(&entities(), &["en", "xx"].map(LocaleTag::parse));
        let stale: Vec<_> = report.violations().iter().map(ToString::to_string).collect();
        ensure!(stale == ["currency * @ en: stale exception"], "{report}");
        Ok(())
    }

    #[test]
    fn sequential_collection_matches_verify() -> Result<()> {
        let data = data()?;
        let catalog = ExceptionCatalog::new(DomainKind::Currency)
            .with_entity("USD", ["as", "he"])
            .with_locales_without_any(["xx"]);
        let verifier = ConsistencyVerifier::new(&data, catalog)?;
        let locales = ["en", "as", "he", "iw", "xx"].map(LocaleTag::parse);
        let report = verifier.verify(&entities(), &locales);
        let sequential = Report::new(
            DomainKind::Currency,
            locales.len(),
            verifier.collect_sequential(&entities(), &locales),
        );
        let per_locale: Vec<Violation> = locales
            .iter()
            .flat_map(|locale| verifier.check_locale(&entities(), locale))
            .collect();
        ensure!(sequential == report, "sequential:\n{sequential}\nverify:\n{report}");
        ensure!(per_locale.as_slice() == report.violations(), "{per_locale:?}");
        ensure!(report.count(ViolationKind::StaleException) == 1, "{report}");
        Ok(())
    }

    #[test]
    fn mismatched_domain_is_rejected() -> Result<()> {
        let data = data()?;
        let outcome = ConsistencyVerifier::for_domain(
            &data,
            DomainKind::Region,
            ExceptionCatalog::new(DomainKind::Currency),
        );
        ensure!(matches!(outcome, Err(CatalogError::DomainMismatch { .. })));
        Ok(())
    }
}
