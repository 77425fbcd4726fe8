//! Fallback chain computation.
//!
//! A chain starts at the canonical form of the requested locale and drops one
//! subtag at a time until it reaches root. Subtags are removed right to left
//! in the fixed order `variants, region, script`, so `zh_Hans_SG` degrades to
//! `zh_Hans` before `zh`.

use super::{AliasMap, LocaleTag};
use itertools::Itertools;
use std::fmt;

/// Ordered locales from most specific to root.
///
/// Every chain holds at least one element and always ends with root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackChain(Vec<LocaleTag>);

impl FallbackChain {
    /// Build the chain for an already canonical tag.
    #[must_use]
    pub fn from_canonical(tag: LocaleTag) -> Self {
        let mut chain = vec![tag];
        while let Some(parent) = chain.last().and_then(LocaleTag::parent) {
            chain.push(parent);
        }
        Self(chain)
    }

    /// The requested (most specific) locale.
    #[must_use]
    pub fn head(&self) -> &LocaleTag {
        // Construction always pushes at least one tag.
        self.0.first().unwrap_or(&ROOT)
    }

    /// Borrow the chain elements.
    #[must_use]
    pub fn as_slice(&self) -> &[LocaleTag] {
        &self.0
    }

    /// Number of elements in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return `true` for an empty chain, which construction never yields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate from most specific to root.
    pub fn iter(&self) -> std::slice::Iter<'_, LocaleTag> {
        self.0.iter()
    }
}

static ROOT: LocaleTag = LocaleTag::root();

impl<'a> IntoIterator for &'a FallbackChain {
    type Item = &'a LocaleTag;
    type IntoIter = std::slice::Iter<'a, LocaleTag>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for FallbackChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.iter().join(" -> "))
    }
}

/// Produces fallback chains after alias canonicalization.
///
/// # Examples
///
/// ```
/// use glossa::locale::{AliasMap, LocaleChainResolver, LocaleTag};
///
/// # fn main() -> Result<(), glossa::locale::AliasError> {
/// let resolver = LocaleChainResolver::new(AliasMap::new([("iw_IL", "he_IL")])?);
/// let chain = resolver.chain(&LocaleTag::parse("iw_IL"));
/// assert_eq!(chain.to_string(), "he_IL -> he -> root");
/// # Ok(()) }
/// ```
#[derive(Debug, Clone, Default)]
pub struct LocaleChainResolver {
    aliases: AliasMap,
}

impl LocaleChainResolver {
    /// Create a resolver that canonicalizes through `aliases`.
    #[must_use]
    pub const fn new(aliases: AliasMap) -> Self {
        Self { aliases }
    }

    /// Canonical form of `tag`.
    #[must_use]
    pub fn canonicalize(&self, tag: &LocaleTag) -> LocaleTag {
        self.aliases.canonicalize(tag)
    }

    /// Fallback chain for `tag`, starting at its canonical form.
    #[must_use]
    pub fn chain(&self, tag: &LocaleTag) -> FallbackChain {
        FallbackChain::from_canonical(self.canonicalize(tag))
    }

    /// Alias table used for canonicalization.
    #[must_use]
    pub const fn aliases(&self) -> &AliasMap {
        &self.aliases
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("zh_Hans_SG", &["zh_Hans_SG", "zh_Hans", "zh", "root"])]
    #[case("en_US_POSIX", &["en_US_POSIX", "en_US", "en", "root"])]
    #[case("es_419", &["es_419", "es", "root"])]
    #[case("fr", &["fr", "root"])]
    #[case("root", &["root"])]
    fn chain_drops_rightmost_subtag(#[case] raw: &str, #[case] expected: &[&str]) {
        let chain = FallbackChain::from_canonical(LocaleTag::parse(raw));
        let rendered: Vec<String> = chain.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, expected);
    }

    #[rstest]
    #[case("ja_JP_TRADITIONAL")]
    #[case("de_1996_X_Y")]
    #[case("sr_Latn_RS")]
    #[case("")]
    fn chain_strictly_shrinks_to_root(#[case] raw: &str) {
        let chain = FallbackChain::from_canonical(LocaleTag::parse(raw));
        assert!(!chain.is_empty());
        assert_eq!(chain.as_slice().last(), Some(&LocaleTag::root()));
        for pair in chain.as_slice().windows(2) {
            if let [child, parent] = pair {
                assert!(child.subtag_count() > parent.subtag_count());
            }
        }
    }

    #[test]
    fn chain_starts_from_canonical_form() -> Result<(), crate::locale::AliasError> {
        let resolver = LocaleChainResolver::new(AliasMap::new([("zh_SG", "zh_Hans_SG")])?);
        let chain = resolver.chain(&LocaleTag::parse("zh_SG"));
        assert_eq!(chain.head(), &LocaleTag::parse("zh_Hans_SG"));
        assert_eq!(chain.len(), 4);
        Ok(())
    }
}
