//! Canonicalization of deprecated and duplicate identifiers.
//!
//! ICU keeps legacy codes such as `iw` (Hebrew) or `zh_TW` alive as aliases of
//! their preferred form. [`AliasMap`] holds those pairs and refuses chains so
//! that a single lookup always yields the canonical identifier.

use super::LocaleTag;
use std::collections::HashMap;
use thiserror::Error;

/// Errors raised while building an [`AliasMap`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AliasError {
    /// An alias target is itself an alias of something else.
    #[error("alias `{alias}` maps to `{target}`, which is itself an alias of `{next}`")]
    Chain {
        /// The alias whose target is not canonical.
        alias: Box<LocaleTag>,
        /// The non-canonical target.
        target: Box<LocaleTag>,
        /// Where the target would lead on a second hop.
        next: Box<LocaleTag>,
    },
}

/// One-hop mapping from legacy identifiers to canonical ones.
///
/// # Examples
///
/// ```
/// use glossa::locale::{AliasMap, LocaleTag};
///
/// # fn main() -> Result<(), glossa::locale::AliasError> {
/// let aliases = AliasMap::new([("iw", "he"), ("iw_IL", "he_IL")])?;
/// assert_eq!(aliases.canonicalize(&LocaleTag::parse("iw_IL")).to_string(), "he_IL");
/// assert_eq!(aliases.canonicalize(&LocaleTag::parse("fr")).to_string(), "fr");
/// # Ok(()) }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasMap {
    entries: HashMap<LocaleTag, LocaleTag>,
}

impl AliasMap {
    /// Build an alias map from `(alias, canonical)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`AliasError::Chain`] when a canonical target also appears as
    /// an alias with a different target.
    pub fn new<I, A, C>(pairs: I) -> Result<Self, AliasError>
    where
        I: IntoIterator<Item = (A, C)>,
        A: Into<LocaleTag>,
        C: Into<LocaleTag>,
    {
        let entries: HashMap<LocaleTag, LocaleTag> = pairs
            .into_iter()
            .map(|(alias, target)| (alias.into(), target.into()))
            .collect();
        for (alias, target) in &entries {
            if let Some(next) = entries.get(target).filter(|next| *next != target) {
                return Err(AliasError::Chain {
                    alias: Box::new(alias.clone()),
                    target: Box::new(target.clone()),
                    next: Box::new(next.clone()),
                });
            }
        }
        Ok(Self { entries })
    }

    /// Map `tag` to its canonical form, or return it unchanged.
    #[must_use]
    pub fn canonicalize(&self, tag: &LocaleTag) -> LocaleTag {
        self.entries.get(tag).unwrap_or(tag).clone()
    }

    /// Canonical target for `tag` when it is a known alias.
    #[must_use]
    pub fn target(&self, tag: &LocaleTag) -> Option<&LocaleTag> {
        self.entries.get(tag)
    }

    /// Number of alias entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` when no aliases are defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(alias, canonical)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&LocaleTag, &LocaleTag)> {
        self.entries.iter()
    }
}
