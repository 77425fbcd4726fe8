//! Locale-aware ordering of name projections.
//!
//! The engine never implements a collation algorithm; it asks a [`Collator`]
//! to compare two display strings under a locale and keeps the sort stable.
//! Two simple collators ship with the crate for embedders without an ICU
//! binding and for tests.

use crate::locale::LocaleTag;
use indexmap::IndexMap;
use std::cmp::Ordering;

/// Compares display strings under a locale.
pub trait Collator: Send + Sync {
    /// Order `a` relative to `b` for readers of `locale`.
    fn compare(&self, a: &str, b: &str, locale: &LocaleTag) -> Ordering;
}

impl<F> Collator for F
where
    F: Fn(&str, &str, &LocaleTag) -> Ordering + Send + Sync,
{
    fn compare(&self, a: &str, b: &str, locale: &LocaleTag) -> Ordering {
        self(a, b, locale)
    }
}

/// Orders strings by Unicode scalar value, ignoring the locale.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodePointCollator;

impl Collator for CodePointCollator {
    fn compare(&self, a: &str, b: &str, _locale: &LocaleTag) -> Ordering {
        a.cmp(b)
    }
}

/// Orders strings case-insensitively, breaking ties by code point.
///
/// ```
/// use glossa::collation::{CaseFoldingCollator, Collator};
/// use glossa::locale::LocaleTag;
/// use std::cmp::Ordering;
///
/// let en = LocaleTag::parse("en");
/// assert_eq!(CaseFoldingCollator.compare("apple", "Banana", &en), Ordering::Less);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CaseFoldingCollator;

impl Collator for CaseFoldingCollator {
    fn compare(&self, a: &str, b: &str, _locale: &LocaleTag) -> Ordering {
        let folded = a.chars().flat_map(char::to_lowercase);
        folded
            .cmp(b.chars().flat_map(char::to_lowercase))
            .then_with(|| a.cmp(b))
    }
}

/// Sort `raw` by name under `locale`.
///
/// The result is a permutation of the input ordered non-decreasingly by
/// `collator`. Entries whose names compare equal keep their input order.
#[must_use]
pub fn project<C>(
    raw: IndexMap<String, String>,
    locale: &LocaleTag,
    collator: &C,
) -> IndexMap<String, String>
where
    C: Collator + ?Sized,
{
    let mut entries: Vec<(String, String)> = raw.into_iter().collect();
    entries.sort_by(|(_, a), (_, b)| collator.compare(a, b, locale));
    entries.into_iter().collect()
}
